use crate::domain::MutationError;
use crate::ports::AuthClient;

/// Auth double issuing a fixed token, or rejecting every attempt.
#[derive(Clone)]
pub struct FakeAuthClient {
    token: Option<String>,
}

impl FakeAuthClient {
    pub fn issuing(token: impl Into<String>) -> Self {
        Self { token: Some(token.into()) }
    }

    pub fn rejecting() -> Self {
        Self { token: None }
    }
}

impl AuthClient for FakeAuthClient {
    fn login(&self, _username: &str, _password: &str) -> Result<String, MutationError> {
        match &self.token {
            Some(token) => Ok(token.clone()),
            None => Err(MutationError::ServerRejected {
                status: 401,
                reason: "Invalid credentials".to_string(),
            }),
        }
    }
}
