use thiserror::Error;

/// Keywords that quit the menu, matched case-insensitively
const QUIT_KEYWORDS: &[&str] = &["q", "quit"];

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Invalid selection '{0}': enter a number from the menu or \"q\" to quit")]
    InvalidChoice(String),
}

/// Outcome of one line of menu input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Validated index into the candidate list
    Choice(usize),
    Quit,
}

/// Numbered menu over candidate git commands
///
/// Rendering and input parsing are separate from the blocking stdin
/// loop in main, so both are testable without a terminal.
#[derive(Debug)]
pub struct Menu<'a> {
    commands: &'a [String],
}

impl<'a> Menu<'a> {
    pub fn new(commands: &'a [String]) -> Self {
        Self { commands }
    }

    /// Render the prompt text
    ///
    /// An empty candidate list still renders the header and quit line.
    pub fn render(&self) -> String {
        let mut prompt = String::from("Options:\n");
        for (i, cmd) in self.commands.iter().enumerate() {
            prompt.push_str(&format!("( {} ) git {}\n", i, cmd));
        }
        prompt.push_str("or type \"q\" to quit.\n\n");
        prompt
    }

    /// Interpret one line of user input
    ///
    /// Quit keywords win over index parsing; anything else must be a
    /// number within the candidate range.
    pub fn select(&self, input: &str) -> Result<Selection, MenuError> {
        let input = input.trim();

        if QUIT_KEYWORDS.iter().any(|kw| input.eq_ignore_ascii_case(kw)) {
            return Ok(Selection::Quit);
        }

        let index: usize = input
            .parse()
            .map_err(|_| MenuError::InvalidChoice(input.to_string()))?;

        if index >= self.commands.len() {
            return Err(MenuError::InvalidChoice(input.to_string()));
        }

        Ok(Selection::Choice(index))
    }
}
