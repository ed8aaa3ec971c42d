//! HTTP handlers for the fallback service.

pub mod fallback;
pub mod health;

pub use fallback::{fallback, FallbackResponse, PromptRequest};
pub use health::{health_check, not_found, readiness_check};
