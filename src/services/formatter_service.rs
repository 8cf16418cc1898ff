//! VQAR 响应归一化服务 - 业务能力层
//!
//! 把生成 API 的自由文本整形为严格的题目记录：
//! 1. 带严格格式指令把原始文本再送生成 API 一次，要求返回 JSON 数组
//! 2. 去掉代码围栏标记，显式抽取第一个 `[...]` 片段（找不到即 Unparseable，
//!    不做逐步放宽的模式匹配）
//! 3. 逐条校验字段与选项数量，清理 "A)" / "B." 式选项前缀
//! 4. 任何解析/校验失败都落到内置默认题目集

use regex::Regex;
use serde_json::Value;
use tracing::warn;

use crate::clients::LlmClient;
use crate::config::Config;
use crate::error::{AppError, AppResult, ParseError};
use crate::models::question::AptitudeQuestion;

/// 归一化服务
pub struct FormatterService {
    llm: LlmClient,
}

impl FormatterService {
    /// 创建新的归一化服务
    pub fn new(config: &Config) -> Self {
        Self {
            llm: LlmClient::new(config),
        }
    }

    /// 把原始题目文本整形为合法题目列表
    ///
    /// 此方法不失败：任何一步出错都返回内置默认题目集。
    pub async fn format(&self, raw_text: &str) -> Vec<AptitudeQuestion> {
        let prompt = build_format_prompt(raw_text);

        match self.llm.chat(&prompt, None).await {
            Ok(response) => self.normalize_or_default(&response),
            Err(e) => {
                warn!("整形调用失败: {}, 使用内置默认题目", e);
                default_questions()
            }
        }
    }

    /// 归一化响应文本，失败时返回内置默认题目集
    pub fn normalize_or_default(&self, response: &str) -> Vec<AptitudeQuestion> {
        match self.normalize(response) {
            Ok(questions) => questions,
            Err(e) => {
                warn!("响应归一化失败: {}, 使用内置默认题目", e);
                default_questions()
            }
        }
    }

    /// 归一化响应文本
    fn normalize(&self, response: &str) -> AppResult<Vec<AptitudeQuestion>> {
        let json_text = extract_json_array(response)?;

        let parsed: Value = serde_json::from_str(&json_text)?;

        let items = parsed
            .as_array()
            .ok_or(AppError::Parse(ParseError::NotAnArray))?;

        let prefix_re = Regex::new(r"^[A-D][\.)]\s*")?;

        let mut validated = Vec::new();
        for item in items {
            if let Some(question) = validate_item(item, &prefix_re) {
                validated.push(question);
            }
        }

        if validated.is_empty() {
            return Err(AppError::Parse(ParseError::NoValidQuestions));
        }

        Ok(validated)
    }
}

/// 从响应文本中抽取 JSON 数组片段
///
/// 失败模式是显式的：去围栏后找不到 `[...]` 片段就返回 Unparseable。
fn extract_json_array(response: &str) -> AppResult<String> {
    let fence_re = Regex::new(r"```(?:json)?")?;
    let cleaned = fence_re.replace_all(response.trim(), "");

    let start = cleaned.find('[');
    let end = cleaned.rfind(']');

    match (start, end) {
        (Some(start), Some(end)) if start < end => Ok(cleaned[start..=end].to_string()),
        _ => Err(AppError::Parse(ParseError::Unparseable)),
    }
}

/// 校验并清理单条题目记录
///
/// 要求三个字段齐全、恰好 4 个选项。清理后的答案不在选项中时，
/// 用第一个选项替换而不是丢弃记录（沿用既有行为，答案可能语义错误）。
fn validate_item(item: &Value, prefix_re: &Regex) -> Option<AptitudeQuestion> {
    let obj = item.as_object()?;

    let question = obj.get("question")?.as_str()?.trim().to_string();
    if question.is_empty() {
        return None;
    }

    let raw_options = obj.get("options")?.as_array()?;
    if raw_options.len() != 4 {
        return None;
    }

    let mut options = Vec::with_capacity(4);
    for opt in raw_options {
        let text = opt.as_str()?;
        options.push(clean_option_prefix(text, prefix_re));
    }

    let raw_answer = obj.get("answer")?.as_str()?;
    let mut answer = clean_option_prefix(raw_answer, prefix_re);

    if !options.contains(&answer) {
        answer = options[0].clone();
    }

    Some(AptitudeQuestion {
        question,
        options,
        answer,
    })
}

/// 去掉 "A)" / "B." 式的选项字母前缀
fn clean_option_prefix(text: &str, prefix_re: &Regex) -> String {
    prefix_re.replace(text.trim(), "").trim().to_string()
}

/// 内置默认题目集（3 题）
fn default_questions() -> Vec<AptitudeQuestion> {
    vec![
        AptitudeQuestion {
            question: "What is the result of 15 + 23?".to_string(),
            options: vec![
                "38".to_string(),
                "37".to_string(),
                "39".to_string(),
                "36".to_string(),
            ],
            answer: "38".to_string(),
        },
        AptitudeQuestion {
            question: "If a train travels 120 km in 2 hours, what is its speed?".to_string(),
            options: vec![
                "50 km/h".to_string(),
                "60 km/h".to_string(),
                "70 km/h".to_string(),
                "80 km/h".to_string(),
            ],
            answer: "60 km/h".to_string(),
        },
        AptitudeQuestion {
            question: "Choose the odd one out: Apple, Banana, Carrot, Mango".to_string(),
            options: vec![
                "Apple".to_string(),
                "Banana".to_string(),
                "Carrot".to_string(),
                "Mango".to_string(),
            ],
            answer: "Carrot".to_string(),
        },
    ]
}

/// 构造整形提示词
fn build_format_prompt(raw_questions: &str) -> String {
    format!(
        r#"Convert the following aptitude questions into a valid JSON array format.

Raw Questions:
{raw_questions}

CRITICAL REQUIREMENTS:
1. Return ONLY a valid JSON array, no other text
2. Each question must have exactly this structure:
{{
    "question": "Clear question text without numbering",
    "options": ["Option text 1", "Option text 2", "Option text 3", "Option text 4"],
    "answer": "Exact option text that matches one of the 4 options"
}}

FORMATTING RULES:
- Remove question numbers (1., 2., Q1, etc.)
- Remove option letters (A), B), C), D)) from options
- Clean up any extra formatting or spaces
- Ensure "answer" field contains the EXACT text from one of the options
- Make sure each question has exactly 4 options
- If a question has fewer than 4 options, add appropriate dummy options

EXAMPLE OUTPUT FORMAT:
[
    {{
        "question": "What is 2 + 2?",
        "options": ["3", "4", "5", "6"],
        "answer": "4"
    }}
]

Convert all questions following this exact format. Return only the JSON array."#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn test_service() -> FormatterService {
        FormatterService::new(&Config::default())
    }

    #[test]
    fn test_extract_json_array_plain() {
        let text = r#"[{"question": "q", "options": ["a","b","c","d"], "answer": "a"}]"#;
        assert_eq!(extract_json_array(text).unwrap(), text);
    }

    #[test]
    fn test_extract_json_array_fenced() {
        let text = "```json\n[1, 2, 3]\n```";
        assert_eq!(extract_json_array(text).unwrap(), "[1, 2, 3]");
    }

    #[test]
    fn test_extract_json_array_with_surrounding_prose() {
        let text = "Here are your questions:\n[1, 2]\nHope this helps!";
        assert_eq!(extract_json_array(text).unwrap(), "[1, 2]");
    }

    #[test]
    fn test_extract_json_array_unparseable() {
        let err = extract_json_array("no array here").unwrap_err();
        assert!(matches!(err, AppError::Parse(ParseError::Unparseable)));
    }

    #[test]
    fn test_clean_option_prefix() {
        let re = Regex::new(r"^[A-D][\.)]\s*").unwrap();
        assert_eq!(clean_option_prefix("A) 42", &re), "42");
        assert_eq!(clean_option_prefix("B. 60 km/h", &re), "60 km/h");
        assert_eq!(clean_option_prefix("D)answer", &re), "answer");
        assert_eq!(clean_option_prefix("Delhi", &re), "Delhi");
    }

    #[test]
    fn test_normalize_valid_response() {
        let response = r#"```json
[
    {"question": "1 + 1?", "options": ["A) 1", "B) 2", "C) 3", "D) 4"], "answer": "B) 2"}
]
```"#;
        let questions = test_service().normalize_or_default(response);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options, vec!["1", "2", "3", "4"]);
        assert_eq!(questions[0].answer, "2");
        assert!(questions[0].is_valid());
    }

    #[test]
    fn test_normalize_discards_wrong_option_count() {
        let response = r#"[
            {"question": "ok", "options": ["a", "b", "c", "d"], "answer": "a"},
            {"question": "bad", "options": ["a", "b"], "answer": "a"}
        ]"#;
        let questions = test_service().normalize_or_default(response);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "ok");
    }

    #[test]
    fn test_normalize_substitutes_first_option_for_unmatched_answer() {
        let response = r#"[
            {"question": "q", "options": ["x", "y", "z", "w"], "answer": "nope"}
        ]"#;
        let questions = test_service().normalize_or_default(response);
        assert_eq!(questions[0].answer, "x");
        assert!(questions[0].is_valid());
    }

    #[test]
    fn test_normalize_malformed_returns_three_defaults() {
        let questions = test_service().normalize_or_default("this is not JSON at all");
        assert_eq!(questions.len(), 3);
        for q in &questions {
            assert!(q.is_valid());
        }
        assert_eq!(questions[0].answer, "38");
    }

    #[test]
    fn test_normalize_non_array_returns_defaults() {
        let questions = test_service().normalize_or_default(r#"{"question": "not a list"}"#);
        assert_eq!(questions.len(), 3);
    }

    #[test]
    fn test_format_prompt_embeds_raw_text() {
        let prompt = build_format_prompt("Question: What is 2+2?");
        assert!(prompt.contains("Question: What is 2+2?"));
        assert!(prompt.contains("Return only the JSON array"));
    }
}
