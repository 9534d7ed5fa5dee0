pub mod answers;
pub mod project;
pub mod prompt;
pub mod questions;

pub use answers::{Answer, AnswerLog};
pub use project::{ProjectIdentity, resolve_template, setup_project_directory, template_search_dirs};
pub use prompt::Prompter;
pub use questions::{Question, QUESTIONS, run_questions};
