//! Admin logout: forget the stored session token.

use crate::domain::AppError;
use crate::ports::CredentialStore;

pub fn execute<S: CredentialStore>(credentials: &S) -> Result<(), AppError> {
    credentials.clear()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryCredentialStore;

    #[test]
    fn clears_the_stored_token() {
        let credentials = MemoryCredentialStore::with_token("jwt-123");
        execute(&credentials).unwrap();
        assert_eq!(credentials.load().unwrap(), None);
    }

    #[test]
    fn logout_without_a_session_succeeds() {
        let credentials = MemoryCredentialStore::new();
        execute(&credentials).unwrap();
    }
}
