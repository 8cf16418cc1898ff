//! 题目生成请求上下文
//!
//! 封装"为哪家公司、什么经验层级、生成哪类题目"这一信息。
//! 校验在构造时一次完成，未知取值是硬性失败，不做重试。

use std::fmt::Display;

use crate::error::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::company::Company;
use crate::models::experience::Experience;

/// 题目生成请求
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest {
    /// 目标公司
    pub company: Company,
    /// 经验层级
    pub experience: Experience,
    /// 题目类别
    pub category: Category,
    /// 生成题目数量（仅 VQAR 使用，Coding 原样透传）
    pub num_questions: usize,
}

impl GenerationRequest {
    /// 创建新的生成请求
    pub fn new(
        company: Company,
        experience: Experience,
        category: Category,
        num_questions: usize,
    ) -> Self {
        Self {
            company,
            experience,
            category,
            num_questions,
        }
    }

    /// 从字符串输入解析并校验生成请求
    ///
    /// # 参数
    /// - `company` / `experience` / `category`: 待校验的原始输入
    /// - `num_questions`: 题目数量，缺省时使用 `default_num`
    pub fn parse(
        company: &str,
        experience: &str,
        category: &str,
        num_questions: Option<usize>,
        default_num: usize,
    ) -> AppResult<Self> {
        let company = Company::from_str(company).ok_or_else(|| AppError::unknown_company(company))?;
        let experience =
            Experience::from_str(experience).ok_or_else(|| AppError::unknown_experience(experience))?;
        let category =
            Category::from_str(category).ok_or_else(|| AppError::unknown_category(category))?;

        Ok(Self::new(
            company,
            experience,
            category,
            num_questions.unwrap_or(default_num),
        ))
    }
}

impl Display for GenerationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[公司 {} 经验 {} 类别 {}]",
            self.company, self.experience, self.category
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_request() {
        let req = GenerationRequest::parse("TCS", "fresher", "Coding", None, 15).unwrap();
        assert_eq!(req.company, Company::Tcs);
        assert_eq!(req.experience, Experience::Fresher);
        assert_eq!(req.category, Category::Coding);
        assert_eq!(req.num_questions, 15);
    }

    #[test]
    fn test_parse_rejects_unknown_company() {
        let err = GenerationRequest::parse("Oracle", "fresher", "VQAR", None, 15).unwrap_err();
        assert!(err.to_string().contains("Oracle"));
    }

    #[test]
    fn test_parse_rejects_unknown_experience() {
        assert!(GenerationRequest::parse("Amazon", "expert", "VQAR", None, 15).is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_category() {
        assert!(GenerationRequest::parse("Amazon", "mid", "Puzzle", None, 15).is_err());
    }

    #[test]
    fn test_parse_explicit_num_questions() {
        let req = GenerationRequest::parse("Google", "senior", "VQAR", Some(10), 15).unwrap();
        assert_eq!(req.num_questions, 10);
    }
}
