use clap::Parser;

/// The tool is driven entirely by prompts; clap only supplies `--help` and
/// `--version`.
#[derive(Parser, Debug)]
#[command(
    name = "create-blox-app",
    version,
    about = "Interactively scaffold a new Blox SaaS project"
)]
pub struct Cli {}
