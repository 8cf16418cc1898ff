//! 测验会话状态机 - 展示层
//!
//! 每个会话一台状态机：`NotGenerated → InProgress → Done`。
//! 进度状态只活在进程内、只属于单个会话，重置或切换类别时整体丢弃，
//! 不跨会话共享任何可变状态。

use chrono::{DateTime, Local};

use crate::models::category::Category;
use crate::models::question::{AptitudeQuestion, ResultEnvelope};

/// 测验状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    /// 尚未生成题目
    NotGenerated,
    /// 答题中
    InProgress,
    /// 已完成（终态，直到显式重置）
    Done,
}

/// 单条答题记录
#[derive(Debug, Clone)]
pub struct AnswerRecord {
    pub question: String,
    pub selected: String,
    pub correct: String,
    pub result: bool,
}

/// 测验会话
///
/// 生命周期：生成成功时创建进度，每次提交答案时变更，重置时销毁。
#[derive(Debug)]
pub struct QuizSession {
    category: Category,
    envelope: Option<ResultEnvelope>,
    state: QuizState,
    current: usize,
    score: usize,
    answers: Vec<AnswerRecord>,
    started_at: Option<DateTime<Local>>,
}

impl QuizSession {
    /// 创建新的会话
    pub fn new(category: Category) -> Self {
        Self {
            category,
            envelope: None,
            state: QuizState::NotGenerated,
            current: 0,
            score: 0,
            answers: Vec::new(),
            started_at: None,
        }
    }

    /// 装入生成结果
    ///
    /// 信封带有至少 1 道选择题时进入 `InProgress` 并记录开始时间；
    /// Coding 信封只做展示，状态机保持 `NotGenerated`。
    pub fn load_envelope(&mut self, envelope: ResultEnvelope) {
        self.current = 0;
        self.score = 0;
        self.answers.clear();
        self.state = QuizState::NotGenerated;
        self.started_at = None;

        let has_quiz = envelope
            .questions
            .as_aptitude()
            .map(|qs| !qs.is_empty())
            .unwrap_or(false);

        if has_quiz {
            self.state = QuizState::InProgress;
            self.started_at = Some(Local::now());
        }

        self.envelope = Some(envelope);
    }

    /// 是否已有生成结果
    pub fn is_generated(&self) -> bool {
        self.envelope.is_some()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn envelope(&self) -> Option<&ResultEnvelope> {
        self.envelope.as_ref()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    /// 当前题目下标（从 0 开始）
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// 题目总数
    pub fn total_questions(&self) -> usize {
        self.questions().map(|qs| qs.len()).unwrap_or(0)
    }

    /// 当前题目
    pub fn current_question(&self) -> Option<&AptitudeQuestion> {
        if self.state != QuizState::InProgress {
            return None;
        }
        self.questions().and_then(|qs| qs.get(self.current))
    }

    /// 提交当前题目的答案
    ///
    /// 追加答题记录，答对加分，前进到下一题；
    /// 答完最后一题后转入 `Done`。非答题状态下提交无效。
    pub fn submit_answer(&mut self, selected: &str) -> Option<&AnswerRecord> {
        if self.state != QuizState::InProgress {
            return None;
        }

        let question = self.current_question()?.clone();
        let is_correct = selected == question.answer;

        self.answers.push(AnswerRecord {
            question: question.question,
            selected: selected.to_string(),
            correct: question.answer,
            result: is_correct,
        });

        if is_correct {
            self.score += 1;
        }

        if self.current + 1 < self.total_questions() {
            self.current += 1;
        } else {
            self.state = QuizState::Done;
        }

        self.answers.last()
    }

    /// 重置全部进度并丢弃已生成内容
    pub fn reset(&mut self) {
        self.envelope = None;
        self.state = QuizState::NotGenerated;
        self.current = 0;
        self.score = 0;
        self.answers.clear();
        self.started_at = None;
    }

    /// 切换类别
    ///
    /// 类别变化时强制重置到 `NotGenerated`。
    pub fn switch_category(&mut self, category: Category) {
        if self.category != category {
            self.reset();
            self.category = category;
        }
    }

    /// 从开始到现在经过的秒数
    pub fn elapsed_seconds(&self) -> i64 {
        self.started_at
            .map(|start| (Local::now() - start).num_seconds())
            .unwrap_or(0)
    }

    /// 得分百分比（四舍五入）
    pub fn score_percentage(&self) -> u32 {
        let total = self.total_questions();
        if total == 0 {
            return 0;
        }
        ((self.score as f64 / total as f64) * 100.0).round() as u32
    }

    /// 成绩评语
    pub fn performance_verdict(&self) -> &'static str {
        let pct = self.score_percentage();
        if pct >= 80 {
            "Excellent! You're well prepared."
        } else if pct >= 60 {
            "Good work! Some areas need improvement."
        } else {
            "Keep studying! Focus on weak areas."
        }
    }

    fn questions(&self) -> Option<&[AptitudeQuestion]> {
        self.envelope.as_ref().and_then(|e| e.questions.as_aptitude())
    }
}
