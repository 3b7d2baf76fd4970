use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::CredentialStore;

/// In-memory credential store.
#[derive(Clone, Default)]
pub struct MemoryCredentialStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: Arc::new(Mutex::new(Some(token.into()))) }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Result<Option<String>, AppError> {
        Ok(self.token.lock().unwrap().clone())
    }

    fn store(&self, token: &str) -> Result<(), AppError> {
        *self.token.lock().unwrap() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        *self.token.lock().unwrap() = None;
        Ok(())
    }
}
