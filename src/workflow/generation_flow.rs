//! 题目生成流程 - 流程层
//!
//! 核心职责：定义"一次生成请求"的完整处理流程
//!
//! 流程顺序：
//! 1. 凭证存在性检查（缺失直接短路到兜底内容）
//! 2. 适配器调用（VQAR 走生成 API，Coding 走搜索 API）
//! 3. 在适配器边界解析联合类型 → 归一化 → 数量检查
//! 4. 任何一步失败都落到静态兜底内容，调用方永远拿到完整信封

use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::{AppError, AppResult, BusinessError};
use crate::models::category::Category;
use crate::models::loaders::load_fallback_aptitude;
use crate::models::question::{
    AptitudeQuestion, QuestionSet, QuestionSource, RawQuestions, ResultEnvelope,
};
use crate::services::{AptitudeService, CodingService, FormatterService};
use crate::workflow::request_ctx::GenerationRequest;

/// 生成 API 原始输出的最小长度，低于此值视为内容不足
const MIN_RAW_TEXT_LEN: usize = 100;

/// 题目生成流程
///
/// - 编排完整的生成流程
/// - 决定何时调适配器、何时归一化、何时兜底
/// - 只依赖业务能力（services）
pub struct GenerationFlow {
    aptitude: AptitudeService,
    formatter: FormatterService,
    coding: CodingService,
    fallback_aptitude: Vec<AptitudeQuestion>,
    config: Config,
}

impl GenerationFlow {
    /// 创建新的生成流程
    ///
    /// 启动时加载兜底内容表，表损坏属于启动期错误。
    pub fn new(config: &Config) -> AppResult<Self> {
        Ok(Self {
            aptitude: AptitudeService::new(config),
            formatter: FormatterService::new(config),
            coding: CodingService::new(config)?,
            fallback_aptitude: load_fallback_aptitude()?,
            config: config.clone(),
        })
    }

    /// 生成题目的统一入口
    ///
    /// 此方法不失败：任何路径都返回一份完整的、模式合法的信封。
    pub async fn generate_questions(&self, request: &GenerationRequest) -> ResultEnvelope {
        info!("{} 开始生成题目", request);

        match self.try_generate(request).await {
            Ok(envelope) => {
                info!(
                    "{} 生成完成: {} 道题 (来源: {})",
                    request,
                    envelope.questions.len(),
                    envelope.source.as_str()
                );
                envelope
            }
            Err(e) => {
                error!("{} 生成流程失败: {}", request, e);
                self.fallback_envelope(request, e.to_string())
            }
        }
    }

    async fn try_generate(&self, request: &GenerationRequest) -> AppResult<ResultEnvelope> {
        // 凭证缺失直接短路到兜底内容，不调用任何适配器
        if !self.config.has_credential(request.category) {
            warn!("{} 凭证缺失，使用兜底内容", request);
            return Ok(self.fallback_envelope(request, "Missing required API keys"));
        }

        match request.category {
            Category::Vqar => {
                let raw = self
                    .aptitude
                    .generate(request.company, request.experience)
                    .await?;
                let questions = self.resolve(raw, request).await?;
                Ok(ResultEnvelope::success(questions, QuestionSource::Api))
            }
            Category::Coding => {
                let outcome = self
                    .coding
                    .generate(request.company, request.experience)
                    .await?;
                let questions = self.resolve(outcome.raw, request).await?;
                Ok(ResultEnvelope::success(questions, outcome.source))
            }
        }
    }

    /// 在适配器边界解析一次联合类型，下游不再做形态判断
    async fn resolve(
        &self,
        raw: RawQuestions,
        request: &GenerationRequest,
    ) -> AppResult<QuestionSet> {
        match raw {
            RawQuestions::RawText(text) => {
                let length = text.trim().len();
                if length < MIN_RAW_TEXT_LEN {
                    return Err(AppError::Business(BusinessError::RawTextTooShort { length }));
                }

                let mut questions = self.formatter.format(&text).await;

                if questions.len() < self.config.min_vqar_questions {
                    return Err(AppError::Business(BusinessError::InsufficientQuestions {
                        count: questions.len(),
                        minimum: self.config.min_vqar_questions,
                    }));
                }

                questions.truncate(request.num_questions);
                Ok(QuestionSet::Aptitude(questions))
            }
            RawQuestions::Structured(problems) => {
                if problems.is_empty() {
                    return Err(AppError::Business(BusinessError::InsufficientQuestions {
                        count: 0,
                        minimum: 1,
                    }));
                }
                Ok(QuestionSet::Coding(problems))
            }
        }
    }

    /// 构造兜底信封
    ///
    /// VQAR 使用内置的 10 题默认集，Coding 使用该公司的静态列表。
    fn fallback_envelope(
        &self,
        request: &GenerationRequest,
        message: impl Into<String>,
    ) -> ResultEnvelope {
        let questions = match request.category {
            Category::Vqar => {
                QuestionSet::Aptitude(self.fallback_aptitude.clone())
            }
            Category::Coding => {
                match self.coding.fallback_for(request.company) {
                    Ok(problems) => QuestionSet::Coding(problems),
                    Err(e) => {
                        warn!("{} 无静态兜底列表: {}", request, e);
                        QuestionSet::Coding(Vec::new())
                    }
                }
            }
        };

        ResultEnvelope::error(message, questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category::Category;
    use crate::models::company::Company;
    use crate::models::experience::Experience;
    use crate::models::question::EnvelopeStatus;

    fn flow_without_credentials() -> GenerationFlow {
        GenerationFlow::new(&Config::default()).unwrap()
    }

    fn request(company: Company, category: Category) -> GenerationRequest {
        GenerationRequest::new(company, Experience::Fresher, category, 15)
    }

    #[tokio::test]
    async fn test_missing_vqar_credential_uses_fallback_set() {
        let flow = flow_without_credentials();
        let envelope = flow
            .generate_questions(&request(Company::Amazon, Category::Vqar))
            .await;

        assert_eq!(envelope.status, EnvelopeStatus::Error);
        assert_eq!(envelope.source, QuestionSource::Fallback);
        let questions = envelope.questions.as_aptitude().unwrap();
        assert_eq!(questions.len(), 10);
        for q in questions {
            assert!(q.is_valid());
        }
    }

    #[tokio::test]
    async fn test_missing_coding_credential_uses_company_list() {
        let flow = flow_without_credentials();
        let envelope = flow
            .generate_questions(&request(Company::Tcs, Category::Coding))
            .await;

        assert_eq!(envelope.status, EnvelopeStatus::Error);
        assert_eq!(envelope.source, QuestionSource::Fallback);
        let problems = envelope.questions.as_coding().unwrap();
        assert_eq!(problems.len(), 20);
    }

    #[tokio::test]
    async fn test_fallback_envelope_never_empty_for_valid_inputs() {
        let flow = flow_without_credentials();
        for company in crate::models::company::ALL_COMPANIES {
            for category in crate::models::category::ALL_CATEGORIES {
                let envelope = flow.generate_questions(&request(company, category)).await;
                assert!(
                    !envelope.questions.is_empty(),
                    "{} / {} 的信封不应为空",
                    company,
                    category
                );
            }
        }
    }

    #[tokio::test]
    async fn test_resolve_rejects_short_raw_text() {
        let flow = flow_without_credentials();
        let req = request(Company::Google, Category::Vqar);
        let result = flow
            .resolve(RawQuestions::RawText("too short".to_string()), &req)
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_resolve_rejects_empty_coding_list() {
        let flow = flow_without_credentials();
        let req = request(Company::Google, Category::Coding);
        let result = flow
            .resolve(RawQuestions::Structured(Vec::new()), &req)
            .await;
        assert!(result.is_err());
    }
}
