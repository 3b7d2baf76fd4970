mod confirm_terminal;
mod credential_file;
mod inventory_client_http;

pub use confirm_terminal::TerminalConfirm;
pub use credential_file::FileCredentialStore;
pub use inventory_client_http::HttpStoreClient;
