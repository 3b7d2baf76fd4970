//! Inventory service port definition.

use crate::domain::{Item, ItemPatch, ItemSubmission, LoadError, MutationError};

/// Port for catalog reads and admin mutations against the inventory
/// service.
///
/// Implementations perform one request per call. Sequencing and the
/// reload-after-write policy belong to the mutation coordinator.
pub trait InventoryClient {
    /// Fetch the full item collection in server order.
    fn list_items(&self) -> Result<Vec<Item>, LoadError>;

    /// Create an item from a validated submission.
    ///
    /// Returns the stored item as the server recorded it.
    fn create_item(&self, submission: &ItemSubmission) -> Result<Item, MutationError>;

    /// Apply a partial update to an existing item.
    fn update_item(&self, id: &str, patch: &ItemPatch) -> Result<Item, MutationError>;

    /// Delete an item.
    fn delete_item(&self, id: &str) -> Result<(), MutationError>;
}
