//! Admin login port.

use crate::domain::MutationError;

/// Port for exchanging admin credentials for a session token.
///
/// Token lifecycle (expiry, refresh) is owned by the service; the
/// client only stores what this returns.
pub trait AuthClient {
    fn login(&self, username: &str, password: &str) -> Result<String, MutationError>;
}
