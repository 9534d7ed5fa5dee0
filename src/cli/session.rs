use std::path::{Path, PathBuf};

use tracing::info;

use crate::cli::banner::render_celebration;
use crate::cli::ui::{clear_screen, create_progress_bar, greet, print_success};
use crate::config::BloxConfig;
use crate::core::questions::PROJECT_NAME_MESSAGE;
use crate::core::{run_questions, setup_project_directory, AnswerLog, ProjectIdentity, Prompter};
use crate::error::Result;

/// State of one run, from the name prompt to the summary
#[derive(Debug)]
pub struct Session {
    pub identity: ProjectIdentity,
    pub answers: AnswerLog,
}

/// Ask for the project name and create its directory.
///
/// Any setup failure is returned as [`crate::BloxError::ProjectSetup`] and
/// ends the session before a single stack question is asked.
pub fn init_project(
    prompter: &mut dyn Prompter,
    config: &BloxConfig,
    cwd: &Path,
    search_dirs: &[PathBuf],
) -> Result<Session> {
    let name = prompter.input(PROJECT_NAME_MESSAGE, &config.project.default_name)?;
    let identity = ProjectIdentity::new(&name, cwd, &config.project.default_name);

    let pb = create_progress_bar("Creating project directory...");
    let outcome = setup_project_directory(&identity, &config.template, search_dirs);
    pb.finish_and_clear();
    outcome?;
    print_success(&format!("Created {}", identity.path().display()));

    Ok(Session {
        identity,
        answers: AnswerLog::new(),
    })
}

impl Session {
    pub fn ask_questions(&mut self, prompter: &mut dyn Prompter) -> Result<()> {
        run_questions(prompter, &mut self.answers)
    }

    /// Closing banner followed by the answer log
    pub fn summary(&self, colored: bool) -> String {
        format!(
            "{}\n\n{}",
            render_celebration(self.identity.name(), colored),
            self.answers.to_pretty_json()
        )
    }

    pub fn finish(&self, config: &BloxConfig) {
        clear_screen();
        println!("{}", self.summary(config.ui.colored));
        info!(project = self.identity.name(), answers = self.answers.len(), "session finished");
    }
}

/// Run a whole session: greeting, project setup, questions, summary
pub fn run_session(
    prompter: &mut dyn Prompter,
    config: &BloxConfig,
    cwd: &Path,
    search_dirs: &[PathBuf],
) -> Result<Session> {
    clear_screen();
    greet(&config.ui);

    let mut session = init_project(prompter, config, cwd, search_dirs)?;
    session.ask_questions(prompter)?;
    session.finish(config);

    Ok(session)
}
