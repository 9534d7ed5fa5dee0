use std::io::{stdout, IsTerminal, Write};
use std::thread;
use std::time::{Duration, Instant};

use colored::Colorize;
use crossterm::{
    queue, execute,
    style::{Color as CtColor, SetForegroundColor, ResetColor, Print},
    terminal::{Clear, ClearType},
    cursor::{MoveTo, MoveToColumn},
};
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::gradient::hsv_to_rgb;
use crate::config::UiConfig;
use crate::error::BloxError;

pub const WELCOME_TITLE: &str = "Create Blox App";
pub const WELCOME_SUBTITLE: &str = "Start with a skeleton SaaS or an E2E project";

const RAINBOW_FRAME: Duration = Duration::from_millis(50);

fn is_interactive() -> bool {
    stdout().is_terminal()
}

/// Draw one frame of the rainbow title, shifted by `phase` degrees
fn draw_rainbow_frame(title: &str, phase: f32) {
    let mut out = stdout();
    let _ = queue!(out, MoveToColumn(0));
    let width = title.chars().count().max(1) as f32;

    for (i, ch) in title.chars().enumerate() {
        let (r, g, b) = hsv_to_rgb(phase + 360.0 * i as f32 / width, 1.0, 1.0);
        let _ = queue!(out, SetForegroundColor(CtColor::Rgb { r, g, b }), Print(ch));
    }

    let _ = queue!(out, ResetColor);
    let _ = out.flush();
}

/// Print the welcome title and subtitle.
///
/// On a terminal the title cycles through the rainbow for
/// `ui.greeting_delay_ms` before settling.
pub fn greet(ui: &UiConfig) {
    if ui.animations && ui.colored && is_interactive() {
        let started = Instant::now();
        let mut phase = 0.0;
        while started.elapsed() < ui.greeting_delay() {
            draw_rainbow_frame(WELCOME_TITLE, phase);
            phase = (phase + 24.0) % 360.0;
            thread::sleep(RAINBOW_FRAME);
        }
        draw_rainbow_frame(WELCOME_TITLE, phase);
        println!("\n");
    } else {
        println!("{}\n", WELCOME_TITLE);
        if ui.animations {
            thread::sleep(ui.greeting_delay());
        }
    }

    println!("    {}\n", WELCOME_SUBTITLE.on_blue());
}

/// Print success message
pub fn print_success(message: &str) {
    let _ = execute!(
        stdout(),
        SetForegroundColor(CtColor::Green),
        Print("✔ "),
        Print(message),
        Print("\n"),
        ResetColor
    );
}

/// Print error message
pub fn print_error(error: &BloxError) {
    let _ = execute!(
        stdout(),
        SetForegroundColor(CtColor::Red),
        Print(&format!("{}", error)),
        Print("\n"),
        ResetColor
    );
}

/// Spinner shown while a blocking step runs
pub fn create_progress_bar(message: &str) -> ProgressBar {
    if !is_interactive() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(80));
    let style = ProgressStyle::with_template("{spinner:.cyan} {wide_msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✔"]);
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}

/// Clear the screen and home the cursor; a no-op when output is piped
pub fn clear_screen() {
    if is_interactive() {
        let _ = execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0));
    }
}
