use serde::{Deserialize, Serialize};

/// 选择题（VQAR 类别）
///
/// 不变量：`options` 恰好 4 项，且 `answer` 必须是其中之一。
/// 不满足不变量的记录在归一化阶段直接丢弃，绝不外泄。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AptitudeQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl AptitudeQuestion {
    /// 检查记录是否满足结构不变量
    pub fn is_valid(&self) -> bool {
        !self.question.trim().is_empty()
            && self.options.len() == 4
            && self.options.contains(&self.answer)
    }
}

/// 编程题（指向外部题库页面的链接）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodingProblem {
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
}

/// 适配器边界的原始输出
///
/// 两个适配器输出形态不同：生成 API 返回自由文本，搜索 API 返回结构化列表。
/// 在适配器边界解析一次为带标签的联合类型，下游不再做形态判断。
#[derive(Debug, Clone)]
pub enum RawQuestions {
    /// 生成 API 的原始补全文本（VQAR 路径）
    RawText(String),
    /// 搜索 API 抽取出的结构化题目列表（Coding 路径）
    Structured(Vec<CodingProblem>),
}

/// 归一化后的题目集合
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum QuestionSet {
    Aptitude(Vec<AptitudeQuestion>),
    Coding(Vec<CodingProblem>),
}

impl QuestionSet {
    pub fn len(&self) -> usize {
        match self {
            QuestionSet::Aptitude(v) => v.len(),
            QuestionSet::Coding(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_aptitude(&self) -> Option<&[AptitudeQuestion]> {
        match self {
            QuestionSet::Aptitude(v) => Some(v),
            QuestionSet::Coding(_) => None,
        }
    }

    pub fn as_coding(&self) -> Option<&[CodingProblem]> {
        match self {
            QuestionSet::Coding(v) => Some(v),
            QuestionSet::Aptitude(_) => None,
        }
    }
}

/// 结果信封的状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
    Error,
}

impl EnvelopeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            EnvelopeStatus::Success => "success",
            EnvelopeStatus::Error => "error",
        }
    }
}

/// 题目来源：实时 API 还是内置兜底内容
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionSource {
    Api,
    Fallback,
}

impl QuestionSource {
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionSource::Api => "api",
            QuestionSource::Fallback => "fallback",
        }
    }
}

/// 统一的结果信封
///
/// 每次请求新建一份，不做持久化。成功时 `message` 为空。
#[derive(Debug, Clone, Serialize)]
pub struct ResultEnvelope {
    pub status: EnvelopeStatus,
    pub message: String,
    pub questions: QuestionSet,
    pub source: QuestionSource,
}

impl ResultEnvelope {
    /// 构造成功信封
    pub fn success(questions: QuestionSet, source: QuestionSource) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            message: String::new(),
            questions,
            source,
        }
    }

    /// 构造错误信封（内容来自兜底表）
    pub fn error(message: impl Into<String>, questions: QuestionSet) -> Self {
        Self {
            status: EnvelopeStatus::Error,
            message: message.into(),
            questions,
            source: QuestionSource::Fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_question() -> AptitudeQuestion {
        AptitudeQuestion {
            question: "What is 2 + 2?".to_string(),
            options: vec![
                "3".to_string(),
                "4".to_string(),
                "5".to_string(),
                "6".to_string(),
            ],
            answer: "4".to_string(),
        }
    }

    #[test]
    fn test_aptitude_question_valid() {
        assert!(sample_question().is_valid());
    }

    #[test]
    fn test_aptitude_question_answer_not_in_options() {
        let mut q = sample_question();
        q.answer = "7".to_string();
        assert!(!q.is_valid());
    }

    #[test]
    fn test_aptitude_question_wrong_option_count() {
        let mut q = sample_question();
        q.options.pop();
        assert!(!q.is_valid());
    }

    #[test]
    fn test_envelope_success_has_empty_message() {
        let env = ResultEnvelope::success(
            QuestionSet::Aptitude(vec![sample_question()]),
            QuestionSource::Api,
        );
        assert_eq!(env.status, EnvelopeStatus::Success);
        assert!(env.message.is_empty());
        assert_eq!(env.source.as_str(), "api");
    }

    #[test]
    fn test_envelope_error_is_fallback() {
        let env = ResultEnvelope::error("boom", QuestionSet::Coding(Vec::new()));
        assert_eq!(env.status, EnvelopeStatus::Error);
        assert_eq!(env.source, QuestionSource::Fallback);
    }
}
