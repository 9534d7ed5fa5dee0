use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::cli::ui::clear_screen;
use crate::core::Prompter;
use crate::error::{BloxError, ErrorContext, Result};

/// Interactive prompts rendered with dialoguer
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn input(&mut self, message: &str, default: &str) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .default(default.to_string())
            .interact_text()
            .with_prompt_context(|| message.to_string())
    }

    fn select(&mut self, message: &str, choices: &[&str]) -> Result<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(choices)
            .default(0)
            .interact()
            .with_prompt_context(|| message.to_string())
    }

    fn clear(&mut self) {
        clear_screen();
    }
}

/// Line-oriented prompts for piped input.
///
/// Text prompts take the next line; list prompts accept a 1-based number or
/// a choice label, and an empty line picks the first choice.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn read_reply(&mut self, message: &str) -> Result<String> {
        self.writer.flush().with_prompt_context(|| message.to_string())?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .with_prompt_context(|| message.to_string())?;
        if read == 0 {
            return Err(BloxError::Prompt {
                question: message.to_string(),
                source: io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"),
            });
        }

        Ok(line.trim().to_string())
    }
}

/// Map a typed reply onto a choice index
pub fn parse_choice(reply: &str, choices: &[&str]) -> Option<usize> {
    let reply = reply.trim();
    if reply.is_empty() {
        return if choices.is_empty() { None } else { Some(0) };
    }

    if let Ok(number) = reply.parse::<usize>() {
        return (1..=choices.len()).contains(&number).then(|| number - 1);
    }

    choices.iter().position(|c| c.eq_ignore_ascii_case(reply))
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn input(&mut self, message: &str, default: &str) -> Result<String> {
        write!(self.writer, "? {} ({}) ", message, default)
            .with_prompt_context(|| message.to_string())?;
        let reply = self.read_reply(message)?;
        Ok(if reply.is_empty() { default.to_string() } else { reply })
    }

    fn select(&mut self, message: &str, choices: &[&str]) -> Result<usize> {
        writeln!(self.writer, "? {}", message).with_prompt_context(|| message.to_string())?;
        for (i, choice) in choices.iter().enumerate() {
            writeln!(self.writer, "  {}) {}", i + 1, choice)
                .with_prompt_context(|| message.to_string())?;
        }

        loop {
            write!(self.writer, "  Answer [1-{}]: ", choices.len())
                .with_prompt_context(|| message.to_string())?;
            let reply = self.read_reply(message)?;
            match parse_choice(&reply, choices) {
                Some(index) => return Ok(index),
                None => {
                    writeln!(self.writer, "  '{}' is not one of the choices", reply)
                        .with_prompt_context(|| message.to_string())?;
                }
            }
        }
    }

    fn clear(&mut self) {
        let _ = writeln!(self.writer);
    }
}

/// Pick the prompt backend for the current process
pub fn default_prompter() -> Box<dyn Prompter> {
    if io::stdin().is_terminal() && io::stdout().is_terminal() {
        Box::new(TerminalPrompter::new())
    } else {
        Box::new(LinePrompter::new(io::stdin().lock(), io::stdout()))
    }
}
