pub mod toml_loader;

pub use toml_loader::{load_fallback_aptitude, load_fallback_problems};
