pub mod category;
pub mod company;
pub mod experience;
pub mod loaders;
pub mod question;

pub use category::{Category, ALL_CATEGORIES};
pub use company::{Company, ALL_COMPANIES};
pub use experience::{Experience, ALL_EXPERIENCE};
pub use loaders::{load_fallback_aptitude, load_fallback_problems};
pub use question::{
    AptitudeQuestion, CodingProblem, EnvelopeStatus, QuestionSet, QuestionSource, RawQuestions,
    ResultEnvelope,
};
