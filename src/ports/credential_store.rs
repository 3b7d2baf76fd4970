//! Session credential storage port.

use crate::domain::AppError;

/// Port for the locally held admin session token.
///
/// Injected rather than read from ambient global state, so the admin
/// gate is testable without a real terminal or filesystem.
pub trait CredentialStore {
    /// Currently stored token, if any.
    fn load(&self) -> Result<Option<String>, AppError>;

    /// Persist a freshly issued token.
    fn store(&self, token: &str) -> Result<(), AppError>;

    /// Forget the stored token. Succeeds when none is stored.
    fn clear(&self) -> Result<(), AppError>;
}
