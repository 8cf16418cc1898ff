pub mod aptitude_service;
pub mod coding_service;
pub mod formatter_service;
pub mod link_resolver;

pub use aptitude_service::AptitudeService;
pub use coding_service::{CodingOutcome, CodingService};
pub use formatter_service::FormatterService;
pub use link_resolver::{difficulty_from_text, extract_concepts, resolve_problem_link, Difficulty};
