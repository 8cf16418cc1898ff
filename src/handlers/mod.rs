//! Web 处理器层
//!
//! 持有应用状态（生成流程 + 会话表）与模板注册表。
//! 会话状态只活在进程内，键是 cookie 里的会话 ID。

pub mod pages;

use std::collections::HashMap;
use std::sync::Arc;

use lazy_static::lazy_static;
use tera::Tera;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::Config;
use crate::models::category::Category;
use crate::models::company::Company;
use crate::models::experience::Experience;
use crate::quiz::QuizSession;
use crate::workflow::GenerationFlow;

lazy_static! {
    pub static ref TEMPLATES: Tera = {
        let mut tera = match Tera::new("templates/pages/*") {
            Ok(t) => t,
            Err(e) => {
                tracing::error!("模板解析失败: {}", e);
                std::process::exit(1);
            }
        };
        tera.autoescape_on(vec![".html"]);
        tera
    };
}

/// 单个用户会话：当前选择 + 测验状态机
#[derive(Debug)]
pub struct UserSession {
    pub company: Company,
    pub experience: Experience,
    pub quiz: QuizSession,
}

impl UserSession {
    pub fn new() -> Self {
        Self {
            company: Company::Amazon,
            experience: Experience::Fresher,
            quiz: QuizSession::new(Category::Vqar),
        }
    }
}

impl Default for UserSession {
    fn default() -> Self {
        Self::new()
    }
}

/// 应用共享状态
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub flow: Arc<GenerationFlow>,
    pub sessions: Arc<RwLock<HashMap<Uuid, UserSession>>>,
}

impl AppState {
    pub fn new(config: Config, flow: GenerationFlow) -> Self {
        Self {
            config,
            flow: Arc::new(flow),
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}
