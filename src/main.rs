use anyhow::Result;
use tower_cookies::CookieManagerLayer;
use tracing::info;

use placement_prep::handlers::AppState;
use placement_prep::routes;
use placement_prep::utils::logging;
use placement_prep::{Config, GenerationFlow};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 加载配置
    let config = Config::from_env();
    logging::log_startup(&config);

    // 组装生成流程与应用状态
    let flow = GenerationFlow::new(&config)?;
    let state = AppState::new(config.clone(), flow);

    let app = routes::router()
        .with_state(state)
        .layer(CookieManagerLayer::new());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("🌐 服务监听: http://{}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
