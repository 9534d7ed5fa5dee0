pub mod error;
pub mod config;
pub mod core;
pub mod cli;
pub mod logging;

// Re-exports for convenience
pub use error::{BloxError, Result};
pub use config::BloxConfig;
pub use core::{Answer, AnswerLog, ProjectIdentity, Prompter};
