//! 兜底内容表加载器
//!
//! 兜底内容随二进制一起发布：编译期通过 `include_str!` 嵌入 TOML 表，
//! 启动时解析一次。解析失败说明打包数据有问题，属于启动期错误。

use std::collections::HashMap;

use serde::Deserialize;
use tracing::warn;

use crate::error::{AppError, AppResult, BusinessError};
use crate::models::company::{Company, ALL_COMPANIES};
use crate::models::question::{AptitudeQuestion, CodingProblem};

/// 每家公司 20 道预选编程题
const FALLBACK_PROBLEMS_TOML: &str = include_str!("../../data/fallback_problems.toml");

/// 默认 VQAR 题目集（10 题）
const FALLBACK_APTITUDE_TOML: &str = include_str!("../../data/fallback_aptitude.toml");

#[derive(Debug, Deserialize)]
struct AptitudeTable {
    questions: Vec<AptitudeQuestion>,
}

/// 加载各公司的静态编程题列表
///
/// 表中的键是公司的小写键名，未知键只告警不报错。
pub fn load_fallback_problems() -> AppResult<HashMap<Company, Vec<CodingProblem>>> {
    let raw: HashMap<String, Vec<CodingProblem>> = toml::from_str(FALLBACK_PROBLEMS_TOML)?;

    let mut table = HashMap::new();
    for (key, problems) in raw {
        match ALL_COMPANIES.iter().find(|c| c.table_key() == key) {
            Some(company) => {
                table.insert(*company, problems);
            }
            None => warn!("兜底题目表包含未知公司键: {}", key),
        }
    }

    if table.is_empty() {
        return Err(AppError::Business(BusinessError::FallbackTableInvalid {
            table: "fallback_problems",
            detail: "表为空".to_string(),
        }));
    }

    Ok(table)
}

/// 加载默认 VQAR 题目集
///
/// 不满足结构不变量的记录在此处丢弃，保证兜底内容永远是合法的。
pub fn load_fallback_aptitude() -> AppResult<Vec<AptitudeQuestion>> {
    let table: AptitudeTable = toml::from_str(FALLBACK_APTITUDE_TOML)?;

    let questions: Vec<AptitudeQuestion> = table
        .questions
        .into_iter()
        .filter(|q| q.is_valid())
        .collect();

    if questions.is_empty() {
        return Err(AppError::Business(BusinessError::FallbackTableInvalid {
            table: "fallback_aptitude",
            detail: "没有合法题目".to_string(),
        }));
    }

    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fallback_problems_cover_all_companies() {
        let table = load_fallback_problems().unwrap();
        for company in ALL_COMPANIES {
            let problems = table
                .get(&company)
                .unwrap_or_else(|| panic!("缺少 {} 的兜底列表", company));
            assert_eq!(problems.len(), 20, "{} 的兜底列表应有 20 题", company);
        }
    }

    #[test]
    fn test_fallback_problem_urls_unique_per_company() {
        let table = load_fallback_problems().unwrap();
        for (company, problems) in &table {
            let urls: HashSet<&str> = problems.iter().map(|p| p.url.as_str()).collect();
            assert_eq!(urls.len(), problems.len(), "{} 的兜底列表存在重复URL", company);
        }
    }

    #[test]
    fn test_fallback_aptitude_has_ten_valid_questions() {
        let questions = load_fallback_aptitude().unwrap();
        assert_eq!(questions.len(), 10);
        for q in &questions {
            assert!(q.is_valid());
        }
    }
}
