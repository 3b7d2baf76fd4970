//! Terminal confirmation prompt.

use dialoguer::Confirm;

use crate::domain::AppError;
use crate::ports::ConfirmPrompt;

/// Interactive yes/no prompt on the controlling terminal, defaulting
/// to "no".
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalConfirm;

impl ConfirmPrompt for TerminalConfirm {
    fn confirm(&self, message: &str) -> Result<bool, AppError> {
        Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()
            .map_err(|e| AppError::config_error(format!("Confirmation prompt failed: {}", e)))
    }
}
