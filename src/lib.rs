pub mod app;
pub mod config;
pub mod error;
pub mod messages;
pub mod models;
pub mod page;
pub mod requester;
pub mod transport;

// Re-export key types for convenience
pub use app::{create_requester, init_tracing};
pub use error::{AskError, AskResult};
pub use requester::{AnswerRequester, AskOutcome};
