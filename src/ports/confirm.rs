//! User confirmation port.

use crate::domain::AppError;

/// Port for a synchronous yes/no confirmation before destructive
/// actions.
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> Result<bool, AppError>;
}
