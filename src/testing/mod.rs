//! Test doubles and fixtures shared across unit tests.

mod fake_auth_client;
mod fake_inventory_client;
mod memory_credential_store;
mod stub_confirm;

pub use fake_auth_client::FakeAuthClient;
pub use fake_inventory_client::FakeInventoryClient;
pub use memory_credential_store::MemoryCredentialStore;
pub use stub_confirm::StubConfirm;

use crate::domain::{Category, Item};

/// Catalog item fixture with a fixed price and no image.
pub fn sample_item(id: &str, title: &str, category: Category, sold: bool) -> Item {
    Item {
        id: id.to_string(),
        title: title.to_string(),
        price: 49.99,
        category,
        sold,
        image_filename: None,
        created_at: None,
    }
}
