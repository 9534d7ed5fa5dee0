pub mod banner;
pub mod commands;
pub mod gradient;
pub mod prompt;
pub mod session;
pub mod ui;

pub use commands::Cli;
pub use prompt::{default_prompter, LinePrompter, TerminalPrompter};
pub use session::{run_session, Session};
pub use ui::{print_error, print_success};
