//! 日志工具模块

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// 初始化日志
///
/// 默认 info 级别，可用 RUST_LOG 覆盖。
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    tracing::info!("{}", "=".repeat(60));
    tracing::info!("🚀 程序启动 - 面试备考题目生成服务");
    tracing::info!("📊 生成模型: {}", config.llm_model_name);
    tracing::info!(
        "🔑 生成密钥: {} | 搜索密钥: {}",
        if config.gemini_api_key.is_some() { "已配置" } else { "缺失" },
        if config.tavily_api_key.is_some() { "已配置" } else { "缺失" }
    );
    tracing::info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("abcdefghij", 5), "abcde...");
    }
}
