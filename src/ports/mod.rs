mod auth_client;
mod confirm;
mod credential_store;
mod inventory_client;

pub use auth_client::AuthClient;
pub use confirm::ConfirmPrompt;
pub use credential_store::CredentialStore;
pub use inventory_client::InventoryClient;
