//! Application configuration models.

mod app;
mod editor;
mod generation;

pub use app::AppConfig;
pub use editor::EditorConfig;
pub use generation::{GenerationConfig, RetryConfig};
