//! 编程题适配器 - 业务能力层
//!
//! 流程：拼查询串 → 搜索 API（最多 30 条）→ 按题库页面 URL 模式抽取 →
//! 按 URL 去重 → 截取前 20 条。抽取为空时退回该公司的静态列表；
//! 传输层失败只记日志、按"无结果"处理，绝不把异常抛出适配器边界。

use std::collections::{HashMap, HashSet};

use regex::Regex;
use tracing::{debug, warn};

use crate::clients::{SearchClient, SearchHit};
use crate::config::Config;
use crate::error::{AppError, AppResult, BusinessError};
use crate::models::company::Company;
use crate::models::experience::Experience;
use crate::models::loaders::load_fallback_problems;
use crate::models::question::{CodingProblem, QuestionSource, RawQuestions};

/// 搜索 API 请求的最大结果数
const SEARCH_MAX_RESULTS: usize = 30;

/// 抽取后保留的最大题目数
const MAX_PROBLEMS: usize = 20;

/// 编程题适配器的输出
///
/// `source` 标记内容是来自实时抽取还是静态兜底列表。
#[derive(Debug)]
pub struct CodingOutcome {
    pub raw: RawQuestions,
    pub source: QuestionSource,
}

/// 编程题服务
pub struct CodingService {
    search: SearchClient,
    fallback: HashMap<Company, Vec<CodingProblem>>,
}

impl CodingService {
    /// 创建新的编程题服务
    ///
    /// 启动时加载静态兜底列表，表损坏属于启动期错误。
    pub fn new(config: &Config) -> AppResult<Self> {
        Ok(Self {
            search: SearchClient::new(config),
            fallback: load_fallback_problems()?,
        })
    }

    /// 生成编程题列表
    pub async fn generate(
        &self,
        company: Company,
        experience: Experience,
    ) -> AppResult<CodingOutcome> {
        let query = company.search_query(experience);

        // 传输层失败按"无结果"处理
        let hits = match self.search.search(&query, SEARCH_MAX_RESULTS).await {
            Ok(hits) => hits,
            Err(e) => {
                warn!("搜索请求失败: {}, 按无结果处理", e);
                Vec::new()
            }
        };

        let problems = extract_problems(&hits)?;

        if !problems.is_empty() {
            debug!("从 {} 条搜索结果中抽取到 {} 道题", hits.len(), problems.len());
            return Ok(CodingOutcome {
                raw: RawQuestions::Structured(problems),
                source: QuestionSource::Api,
            });
        }

        warn!("搜索抽取为空，使用 {} 的静态列表", company);
        Ok(CodingOutcome {
            raw: RawQuestions::Structured(self.fallback_for(company)?),
            source: QuestionSource::Fallback,
        })
    }

    /// 获取公司的静态兜底列表
    pub fn fallback_for(&self, company: Company) -> AppResult<Vec<CodingProblem>> {
        self.fallback
            .get(&company)
            .cloned()
            .ok_or(AppError::Business(BusinessError::NoFallbackList { company }))
    }
}

/// 从搜索结果中抽取题库页面链接
///
/// 只保留 URL 匹配固定题库页面模式的条目，按 URL 去重，最多保留 20 条。
fn extract_problems(hits: &[SearchHit]) -> AppResult<Vec<CodingProblem>> {
    let problem_url_re = Regex::new(
        r"^https?://(?:www\.)?(?:leetcode\.com/problems/|(?:practice\.)?geeksforgeeks\.org/problems/)[A-Za-z0-9_/-]+",
    )?;

    let mut seen_urls = HashSet::new();
    let mut problems = Vec::new();

    for hit in hits {
        if problems.len() >= MAX_PROBLEMS {
            break;
        }
        if !problem_url_re.is_match(&hit.url) {
            continue;
        }
        if !seen_urls.insert(hit.url.clone()) {
            continue;
        }

        let title = if hit.title.trim().is_empty() {
            "Coding Problem".to_string()
        } else {
            hit.title.trim().to_string()
        };

        let description = if hit.content.trim().is_empty() {
            None
        } else {
            Some(hit.content.trim().to_string())
        };

        problems.push(CodingProblem {
            title,
            url: hit.url.clone(),
            description,
        });
    }

    Ok(problems)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(title: &str, url: &str, content: &str) -> SearchHit {
        SearchHit {
            title: title.to_string(),
            url: url.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_extract_keeps_problem_pages_only() {
        let hits = vec![
            hit("Two Sum", "https://leetcode.com/problems/two-sum/", "desc"),
            hit("Blog post", "https://example.com/blog/interviews", ""),
            hit(
                "Reverse a String",
                "https://www.geeksforgeeks.org/problems/reverse-a-string/1",
                "",
            ),
            hit("Discuss", "https://leetcode.com/discuss/12345", ""),
        ];

        let problems = extract_problems(&hits).unwrap();
        assert_eq!(problems.len(), 2);
        assert_eq!(problems[0].title, "Two Sum");
        assert_eq!(problems[0].description.as_deref(), Some("desc"));
        assert_eq!(problems[1].description, None);
    }

    #[test]
    fn test_extract_dedupes_by_url() {
        let url = "https://leetcode.com/problems/two-sum/";
        let hits = vec![hit("Two Sum", url, ""), hit("Two Sum again", url, "")];

        let problems = extract_problems(&hits).unwrap();
        assert_eq!(problems.len(), 1);
    }

    #[test]
    fn test_extract_caps_at_twenty() {
        let hits: Vec<SearchHit> = (0..30)
            .map(|i| {
                hit(
                    &format!("Problem {}", i),
                    &format!("https://leetcode.com/problems/problem-{}/", i),
                    "",
                )
            })
            .collect();

        let problems = extract_problems(&hits).unwrap();
        assert_eq!(problems.len(), 20);
    }

    #[test]
    fn test_extract_empty_title_gets_placeholder() {
        let hits = vec![hit("", "https://leetcode.com/problems/two-sum/", "")];
        let problems = extract_problems(&hits).unwrap();
        assert_eq!(problems[0].title, "Coding Problem");
    }

    #[test]
    fn test_fallback_for_known_company() {
        let service = CodingService::new(&Config::default()).unwrap();
        let problems = service.fallback_for(Company::Tcs).unwrap();
        assert_eq!(problems.len(), 20);
    }
}
