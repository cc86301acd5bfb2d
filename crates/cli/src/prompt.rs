//! Interactive terminal prompts.

use std::io::IsTerminal;

use dialoguer::{Confirm, Input, Select};
use thiserror::Error;

/// Errors raised while prompting the user.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The terminal interaction failed.
    #[error("Terminal error: {0}")]
    Terminal(#[from] dialoguer::Error),

    /// A prompt was needed but no interactive terminal is attached.
    #[error("Cannot prompt without an interactive terminal: {0}")]
    NotInteractive(String),
}

/// One option of a single-select prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Text shown to the user.
    pub label: String,
    /// Value returned when the option is picked.
    pub value: String,
}

impl Choice {
    /// Create a choice.
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Asks the user questions.
pub trait Prompter {
    /// Ask a yes/no question.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt cannot be shown or answered.
    fn confirm(&self, message: &str, default: bool) -> Result<bool, PromptError>;

    /// Ask the user to pick one of `choices`.
    ///
    /// Returns the picked choice's value, or `None` if the user cancelled.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt cannot be shown or answered.
    fn select(&self, message: &str, choices: &[Choice]) -> Result<Option<String>, PromptError>;

    /// Ask for free text. An empty `default` means no default is offered.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt cannot be shown or answered.
    fn text(&self, message: &str, default: &str) -> Result<String, PromptError>;
}

/// [`Prompter`] backed by `dialoguer` on the attached terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    fn ensure_interactive(message: &str) -> Result<(), PromptError> {
        if std::io::stdin().is_terminal() {
            Ok(())
        } else {
            Err(PromptError::NotInteractive(message.to_string()))
        }
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&self, message: &str, default: bool) -> Result<bool, PromptError> {
        Self::ensure_interactive(message)?;

        Ok(Confirm::new()
            .with_prompt(message)
            .default(default)
            .interact()?)
    }

    fn select(&self, message: &str, choices: &[Choice]) -> Result<Option<String>, PromptError> {
        Self::ensure_interactive(message)?;

        let labels: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();
        let selection = Select::new()
            .with_prompt(message)
            .items(&labels)
            .default(0)
            .interact_opt()?;

        Ok(selection
            .and_then(|index| choices.get(index))
            .map(|choice| choice.value.clone()))
    }

    fn text(&self, message: &str, default: &str) -> Result<String, PromptError> {
        Self::ensure_interactive(message)?;

        let mut input = Input::<String>::new().with_prompt(message);
        if !default.is_empty() {
            input = input.default(default.to_string());
        }

        Ok(input.interact_text()?.trim().to_string())
    }
}
