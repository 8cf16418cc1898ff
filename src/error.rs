use std::fmt;

use crate::models::category::Category;
use crate::models::company::Company;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 输入校验错误
    Validation(ValidationError),
    /// 搜索 API 调用错误
    Api(ApiError),
    /// LLM 服务错误
    Llm(LlmError),
    /// 响应解析错误
    Parse(ParseError),
    /// 业务逻辑错误
    Business(BusinessError),
    /// 其他错误（用于包装第三方库错误）
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(e) => write!(f, "校验错误: {}", e),
            AppError::Api(e) => write!(f, "API错误: {}", e),
            AppError::Llm(e) => write!(f, "LLM错误: {}", e),
            AppError::Parse(e) => write!(f, "解析错误: {}", e),
            AppError::Business(e) => write!(f, "业务错误: {}", e),
            AppError::Other(msg) => write!(f, "错误: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Validation(e) => Some(e),
            AppError::Api(e) => Some(e),
            AppError::Llm(e) => Some(e),
            AppError::Parse(e) => Some(e),
            AppError::Business(e) => Some(e),
            AppError::Other(_) => None,
        }
    }
}

/// 输入校验错误
///
/// 未知的公司/经验层级/类别是硬性失败，直接上报，不做重试。
#[derive(Debug)]
pub enum ValidationError {
    /// 未知公司
    UnknownCompany { value: String },
    /// 未知经验层级
    UnknownExperience { value: String },
    /// 未知类别
    UnknownCategory { value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::UnknownCompany { value } => {
                write!(f, "无效的公司: {}", value)
            }
            ValidationError::UnknownExperience { value } => {
                write!(f, "无效的经验层级: {}", value)
            }
            ValidationError::UnknownCategory { value } => {
                write!(f, "无效的题目类别: {}", value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// 搜索 API 调用错误
#[derive(Debug)]
pub enum ApiError {
    /// 网络请求失败
    RequestFailed {
        endpoint: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// API 返回错误响应
    BadResponse { endpoint: String, status: u16 },
    /// JSON 解析失败
    JsonParseFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::RequestFailed { endpoint, source } => {
                write!(f, "API请求失败 ({}): {}", endpoint, source)
            }
            ApiError::BadResponse { endpoint, status } => {
                write!(f, "API返回错误响应 ({}): status={}", endpoint, status)
            }
            ApiError::JsonParseFailed { source } => {
                write!(f, "JSON解析失败: {}", source)
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::RequestFailed { source, .. } | ApiError::JsonParseFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// LLM 服务错误
#[derive(Debug)]
pub enum LlmError {
    /// API 调用失败
    ApiCallFailed {
        model: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 返回结果为空
    EmptyResponse { model: String },
    /// 返回内容为空
    EmptyContent { model: String },
}

impl fmt::Display for LlmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LlmError::ApiCallFailed { model, source } => {
                write!(f, "LLM API调用失败 (模型: {}): {}", model, source)
            }
            LlmError::EmptyResponse { model } => {
                write!(f, "LLM返回结果为空 (模型: {})", model)
            }
            LlmError::EmptyContent { model } => {
                write!(f, "LLM返回内容为空 (模型: {})", model)
            }
        }
    }
}

impl std::error::Error for LlmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LlmError::ApiCallFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 响应解析错误
///
/// 抽取器的失败模式是显式的：找不到 JSON 数组就是 Unparseable，
/// 不做逐步放宽的模式匹配。
#[derive(Debug)]
pub enum ParseError {
    /// 文本中不存在可解析的 JSON 数组
    Unparseable,
    /// 解析结果不是数组
    NotAnArray,
    /// 数组中没有任何合法题目
    NoValidQuestions,
    /// JSON 语法错误
    InvalidJson {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Unparseable => write!(f, "响应文本中找不到JSON数组"),
            ParseError::NotAnArray => write!(f, "解析结果不是JSON数组"),
            ParseError::NoValidQuestions => write!(f, "没有解析出任何合法题目"),
            ParseError::InvalidJson { source } => write!(f, "JSON语法错误: {}", source),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::InvalidJson { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 业务逻辑错误
#[derive(Debug)]
pub enum BusinessError {
    /// 所需的外部凭证缺失
    MissingCredential { category: Category },
    /// 生成的合法题目数量不足
    InsufficientQuestions { count: usize, minimum: usize },
    /// 生成 API 的原始输出过短
    RawTextTooShort { length: usize },
    /// 公司没有对应的静态兜底列表
    NoFallbackList { company: Company },
    /// 兜底内容表加载失败
    FallbackTableInvalid { table: &'static str, detail: String },
}

impl fmt::Display for BusinessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusinessError::MissingCredential { category } => {
                write!(f, "类别 {} 所需的 API 密钥缺失", category)
            }
            BusinessError::InsufficientQuestions { count, minimum } => {
                write!(f, "合法题目数量不足: {} (最少需要 {})", count, minimum)
            }
            BusinessError::RawTextTooShort { length } => {
                write!(f, "生成的原始文本过短: {} 字符", length)
            }
            BusinessError::NoFallbackList { company } => {
                write!(f, "公司 {} 没有静态兜底题目列表", company)
            }
            BusinessError::FallbackTableInvalid { table, detail } => {
                write!(f, "兜底内容表 {} 无法解析: {}", table, detail)
            }
        }
    }
}

impl std::error::Error for BusinessError {}

// ========== 从常见错误类型转换 ==========

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        let endpoint = err
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        AppError::Api(ApiError::RequestFailed {
            endpoint,
            source: Box::new(err),
        })
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(ParseError::InvalidJson {
            source: Box::new(err),
        })
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::Other(format!("正则表达式编译失败: {}", err))
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Business(BusinessError::FallbackTableInvalid {
            table: "toml",
            detail: err.to_string(),
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建未知公司错误
    pub fn unknown_company(value: impl Into<String>) -> Self {
        AppError::Validation(ValidationError::UnknownCompany {
            value: value.into(),
        })
    }

    /// 创建未知经验层级错误
    pub fn unknown_experience(value: impl Into<String>) -> Self {
        AppError::Validation(ValidationError::UnknownExperience {
            value: value.into(),
        })
    }

    /// 创建未知类别错误
    pub fn unknown_category(value: impl Into<String>) -> Self {
        AppError::Validation(ValidationError::UnknownCategory {
            value: value.into(),
        })
    }

    /// 创建凭证缺失错误
    pub fn missing_credential(category: Category) -> Self {
        AppError::Business(BusinessError::MissingCredential { category })
    }

    /// 创建LLM API调用错误
    pub fn llm_api_failed(
        model: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Llm(LlmError::ApiCallFailed {
            model: model.into(),
            source: Box::new(source),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
