pub mod llm_client;
pub mod search_client;

pub use llm_client::LlmClient;
pub use search_client::{SearchClient, SearchHit};
