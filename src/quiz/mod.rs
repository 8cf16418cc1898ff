pub mod session;

pub use session::{AnswerRecord, QuizSession, QuizState};
