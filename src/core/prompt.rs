use crate::error::Result;

/// Source of user answers for a session.
///
/// The binary picks a backend depending on whether it runs on a terminal;
/// tests drive sessions with a scripted one.
pub trait Prompter {
    /// Ask for free text; an empty reply yields `default`
    fn input(&mut self, message: &str, default: &str) -> Result<String>;

    /// Ask for one of `choices`, returning its index
    fn select(&mut self, message: &str, choices: &[&str]) -> Result<usize>;

    /// Clear whatever the previous prompt left on screen
    fn clear(&mut self);
}
