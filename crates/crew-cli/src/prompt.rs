//! Interactive yes/no prompting.
//!
//! Commands depend on [`Confirmer`] rather than a terminal so the decision
//! can be scripted in tests.

use dialoguer::Confirm;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfirmError {
    /// The prompt was dismissed without an answer.
    #[error("no answer given")]
    Abandoned,

    #[error("prompt failed: {0}")]
    Terminal(#[from] dialoguer::Error),
}

/// Something that can ask the operator a yes/no question and block for it.
pub trait Confirmer {
    fn ask(&self, prompt: &str, default: bool) -> Result<bool, ConfirmError>;
}

/// Prompts on the controlling terminal (stderr) via dialoguer.
pub struct TerminalConfirmer;

impl Confirmer for TerminalConfirmer {
    fn ask(&self, prompt: &str, default: bool) -> Result<bool, ConfirmError> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact_opt()?
            .ok_or(ConfirmError::Abandoned)
    }
}
