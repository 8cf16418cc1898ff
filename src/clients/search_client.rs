//! 搜索 API 客户端
//!
//! 封装所有与 Tavily 搜索 API 相关的调用逻辑

use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::config::Config;
use crate::error::{ApiError, AppError, AppResult};

/// 单条搜索结果
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchHit>,
}

/// 搜索客户端
///
/// 职责：
/// - 发送单次搜索请求并返回结果列表
/// - 不做重试，不做结果过滤
pub struct SearchClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SearchClient {
    /// 创建新的搜索客户端
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.search_api_base_url.clone(),
            api_key: config.tavily_api_key.clone().unwrap_or_default(),
        }
    }

    /// 执行搜索
    ///
    /// # 参数
    /// - `query`: 查询串
    /// - `max_results`: 请求的最大结果数
    ///
    /// # 返回
    /// 返回搜索结果列表（可能为空）
    pub async fn search(&self, query: &str, max_results: usize) -> AppResult<Vec<SearchHit>> {
        let endpoint = format!("{}/search", self.base_url);

        debug!("搜索查询: {} (最多 {} 条)", query, max_results);

        let payload = json!({
            "api_key": self.api_key,
            "query": query,
            "search_depth": "advanced",
            "include_answer": true,
            "include_raw_content": true,
            "max_results": max_results,
        });

        let response = self.client.post(&endpoint).json(&payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Api(ApiError::BadResponse {
                endpoint,
                status: status.as_u16(),
            }));
        }

        let body: SearchResponse = response.json().await?;

        debug!("搜索返回 {} 条结果", body.results.len());

        Ok(body.results)
    }
}
