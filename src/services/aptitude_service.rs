//! VQAR 出题适配器 - 业务能力层
//!
//! 只负责"生成原始题目文本"能力：按公司与经验层级拼 prompt，
//! 调用生成 API 一次（不重试），原样返回补全文本。

use tracing::debug;

use crate::clients::LlmClient;
use crate::config::Config;
use crate::error::AppResult;
use crate::models::company::Company;
use crate::models::experience::Experience;
use crate::models::question::RawQuestions;
use crate::utils::logging::truncate_text;

/// VQAR 出题服务
pub struct AptitudeService {
    llm: LlmClient,
}

impl AptitudeService {
    /// 创建新的出题服务
    pub fn new(config: &Config) -> Self {
        Self {
            llm: LlmClient::new(config),
        }
    }

    /// 生成原始题目文本
    ///
    /// # 返回
    /// 适配器边界的原始输出：`RawQuestions::RawText`
    pub async fn generate(
        &self,
        company: Company,
        experience: Experience,
    ) -> AppResult<RawQuestions> {
        let prompt = build_generation_prompt(company, experience);

        let raw = self.llm.chat(&prompt, None).await?;

        debug!("原始补全预览: {}", truncate_text(&raw, 120));

        Ok(RawQuestions::RawText(raw))
    }
}

/// 构造出题提示词
fn build_generation_prompt(company: Company, experience: Experience) -> String {
    format!(
        r#"Generate 25 high-quality aptitude questions specifically tailored for {company} placement interviews.

Candidate Profile:
- Experience Level: {experience}
- Target Company: {company}
- Focus Areas: {focus_area}
- Difficulty: {difficulty}

Question Distribution:
- 10 Quantitative Aptitude questions (arithmetic, algebra, geometry, data interpretation)
- 8 Logical Reasoning questions (patterns, sequences, analytical reasoning)
- 7 Verbal Ability questions (reading comprehension, grammar, vocabulary)

Requirements:
- Each question should be clear and unambiguous
- Include realistic scenarios relevant to {company}'s domain when possible
- Ensure questions are at {difficulty}
- Questions should be solvable within 1-2 minutes each
- Avoid overly complex calculations without calculators

Format each question as:
Question: [Clear question statement]
A) [Option 1]
B) [Option 2]
C) [Option 3]
D) [Option 4]
Answer: [Correct option letter]

Generate exactly 25 questions following this format."#,
        company = company.name(),
        experience = experience.name(),
        focus_area = company.focus_area(),
        difficulty = experience.difficulty_label(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_company_parameters() {
        let prompt = build_generation_prompt(Company::Amazon, Experience::Fresher);
        assert!(prompt.contains("Amazon"));
        assert!(prompt.contains("fresher"));
        assert!(prompt.contains("e-commerce scenarios"));
        assert!(prompt.contains("beginner to intermediate level"));
    }

    #[test]
    fn test_prompt_asks_for_lettered_options() {
        let prompt = build_generation_prompt(Company::Tcs, Experience::Senior);
        assert!(prompt.contains("A) [Option 1]"));
        assert!(prompt.contains("Answer: [Correct option letter]"));
    }
}
