//! Mutation coordinator: sequences admin writes against the inventory
//! service and reconciles local state by reloading.

use crate::domain::{
    AppError, Item, ItemDraft, ItemPatch, LoadError, MutationError, validate_draft,
};
use crate::ports::InventoryClient;

/// Sequences create/update/delete/toggle against the inventory service.
///
/// The item collection held here is a cached snapshot of server state.
/// Every successful mutation is followed by a full reload; the snapshot
/// is never patched locally, so concurrent admin sessions converge on
/// whatever the server holds. A failed mutation triggers no reload and
/// leaves the snapshot at its last known-good value.
///
/// Calls block until the service responds, so a coordinator has at most
/// one action in flight, and the reload always runs strictly after the
/// mutation's acknowledgment.
pub struct MutationCoordinator<C: InventoryClient> {
    client: C,
    items: Vec<Item>,
}

impl<C: InventoryClient> MutationCoordinator<C> {
    pub fn new(client: C) -> Self {
        Self { client, items: Vec::new() }
    }

    /// Last successfully loaded snapshot, in server order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Re-pull the full collection from the service.
    ///
    /// On failure the previous snapshot is kept.
    pub fn reload(&mut self) -> Result<(), LoadError> {
        self.items = self.client.list_items()?;
        Ok(())
    }

    /// Validate and submit a new item, then reload.
    pub fn create(&mut self, draft: &ItemDraft) -> Result<(), AppError> {
        let submission = validate_draft(draft)?;
        self.client.create_item(&submission)?;
        self.reload()?;
        Ok(())
    }

    /// Apply a partial update to `id`, then reload.
    pub fn update(&mut self, id: &str, patch: &ItemPatch) -> Result<(), AppError> {
        self.client.update_item(id, patch)?;
        self.reload()?;
        Ok(())
    }

    /// Delete `id`, then reload.
    ///
    /// Takes no confirmation argument: callers have already confirmed
    /// with the user by the time this runs.
    pub fn delete(&mut self, id: &str) -> Result<(), AppError> {
        self.client.delete_item(id)?;
        self.reload()?;
        Ok(())
    }

    /// Flip the sold flag of `id`, submitting only the `sold` field.
    pub fn toggle_sold(&mut self, id: &str) -> Result<(), AppError> {
        let item =
            self.items.iter().find(|item| item.id == id).ok_or(MutationError::NotFound)?;

        let patch = ItemPatch::sold(!item.sold);
        self.client.update_item(id, &patch)?;
        self.reload()?;
        Ok(())
    }
}
