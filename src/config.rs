use crate::models::category::Category;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 生成 API 密钥（缺失时 VQAR 走兜底内容）
    pub gemini_api_key: Option<String>,
    /// 搜索 API 密钥（缺失时 Coding 走兜底内容）
    pub tavily_api_key: Option<String>,
    /// 生成 API 的 OpenAI 兼容端点
    pub llm_api_base_url: String,
    /// 生成模型名称
    pub llm_model_name: String,
    /// 搜索 API 端点
    pub search_api_base_url: String,
    /// Web 服务监听地址
    pub bind_addr: String,
    /// 默认生成题目数量（VQAR）
    pub default_num_questions: usize,
    /// 合法 VQAR 题目的最低数量，少于此值视为失败
    pub min_vqar_questions: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            tavily_api_key: None,
            llm_api_base_url: "https://generativelanguage.googleapis.com/v1beta/openai".to_string(),
            llm_model_name: "gemini-2.5-flash".to_string(),
            search_api_base_url: "https://api.tavily.com".to_string(),
            bind_addr: "127.0.0.1:3000".to_string(),
            default_num_questions: 15,
            min_vqar_questions: 5,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            // GEMINI_API_KEY 优先，兼容 GOOGLE_API_KEY
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .or_else(|_| std::env::var("GOOGLE_API_KEY"))
                .ok()
                .filter(|v| !v.trim().is_empty()),
            tavily_api_key: std::env::var("TAVILY_API_KEY")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            llm_api_base_url: std::env::var("LLM_API_BASE_URL").unwrap_or(default.llm_api_base_url),
            llm_model_name: std::env::var("LLM_MODEL_NAME").unwrap_or(default.llm_model_name),
            search_api_base_url: std::env::var("SEARCH_API_BASE_URL")
                .unwrap_or(default.search_api_base_url),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or(default.bind_addr),
            default_num_questions: std::env::var("DEFAULT_NUM_QUESTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.default_num_questions),
            min_vqar_questions: std::env::var("MIN_VQAR_QUESTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.min_vqar_questions),
            verbose_logging: std::env::var("VERBOSE_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.verbose_logging),
        }
    }

    /// 检查某类别所需的凭证是否存在（只检查存在性，不校验有效性）
    pub fn has_credential(&self, category: Category) -> bool {
        match category {
            Category::Vqar => self.gemini_api_key.is_some(),
            Category::Coding => self.tavily_api_key.is_some(),
        }
    }
}
