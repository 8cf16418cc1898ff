//! # Placement Prep
//!
//! 一个面试备考题目生成的 Rust Web 应用
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 封装外部 API 调用，只暴露能力
//! - `LlmClient` - 生成 API 调用能力（OpenAI 兼容端点）
//! - `SearchClient` - 搜索 API 调用能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，不关心流程
//! - `AptitudeService` - VQAR 出题能力（适配器）
//! - `CodingService` - 编程题搜索抽取能力（适配器）
//! - `FormatterService` - 自由文本归一化能力
//! - `link_resolver` - 关键词表 → 题库链接
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一次生成请求"的完整处理流程
//! - `GenerationRequest` - 请求上下文封装（公司 + 经验 + 类别）
//! - `GenerationFlow` - 流程编排（校验 → 凭证检查 → 适配器 → 归一化 → 兜底）
//!
//! ### ④ 展示层（Presentation）
//! - `quiz/` - 每会话一台测验状态机（逐题作答 + 计分）
//! - `handlers/` + `routes/` - 单页式 Web 界面
//!
//! ## 错误策略
//!
//! 任何路径都终结于一份完整的、模式合法的信封；外部服务不可用时
//! 静默降级到内置兜底内容，交互层永远看不到未处理的故障。

pub mod clients;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod quiz;
pub mod routes;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::question::{
    AptitudeQuestion, CodingProblem, EnvelopeStatus, QuestionSet, QuestionSource, ResultEnvelope,
};
pub use quiz::{QuizSession, QuizState};
pub use workflow::{GenerationFlow, GenerationRequest};
