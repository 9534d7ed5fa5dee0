use std::process;

use clap::Parser;
use create_blox_app::cli::ui::print_error;
use create_blox_app::cli::{default_prompter, run_session, Cli};
use create_blox_app::config::BloxConfig;
use create_blox_app::core::template_search_dirs;
use create_blox_app::error::{ErrorContext, Result};
use create_blox_app::logging::init_logging;

fn main() {
    let _cli = Cli::parse();
    let config = BloxConfig::default();

    if let Err(e) = init_logging(&config.ui.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    // Color detection is left to `colored` unless the user opted out
    if !config.ui.colored {
        colored::control::set_override(false);
    }

    if let Err(error) = run_app(&config) {
        tracing::error!(error = %error, "session aborted");
        print_error(&error);
        process::exit(error.exit_code());
    }
}

fn run_app(config: &BloxConfig) -> Result<()> {
    let cwd = std::env::current_dir()
        .with_io_context(|| "reading current working directory".to_string())?;
    let search_dirs = template_search_dirs();
    tracing::debug!(cwd = %cwd.display(), ?search_dirs, ?config, "starting session");

    let mut prompter = default_prompter();
    run_session(prompter.as_mut(), config, &cwd, &search_dirs)?;
    Ok(())
}
