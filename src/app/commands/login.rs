//! Admin login: exchange credentials for a session token and persist
//! it.

use crate::domain::AppError;
use crate::ports::{AuthClient, CredentialStore};

pub fn execute<A, S>(
    auth: &A,
    credentials: &S,
    username: &str,
    password: &str,
) -> Result<(), AppError>
where
    A: AuthClient,
    S: CredentialStore,
{
    let token = auth.login(username, password)?;
    credentials.store(&token)?;
    Ok(())
}
