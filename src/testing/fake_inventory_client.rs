use std::sync::{Arc, Mutex};

use crate::domain::{Item, ItemPatch, ItemSubmission, LoadError, MutationError};
use crate::ports::InventoryClient;

#[derive(Default)]
struct FakeState {
    items: Vec<Item>,
    next_id: u32,
    list_calls: u32,
    patches: Vec<(String, ItemPatch)>,
    fail_next_create: bool,
    fail_lists: bool,
}

/// Recording fake backed by an in-memory item collection.
///
/// Mutations apply to the in-memory collection the way the real
/// service would, so a reload observes their effect.
#[derive(Clone, Default)]
pub struct FakeInventoryClient {
    state: Arc<Mutex<FakeState>>,
}

impl FakeInventoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        let client = Self::default();
        client.state.lock().unwrap().items = items;
        client
    }

    /// Make the next create fail with a transport error.
    pub fn fail_next_create(&self) {
        self.state.lock().unwrap().fail_next_create = true;
    }

    /// Make every subsequent list fail with a transport error.
    pub fn fail_lists(&self) {
        self.state.lock().unwrap().fail_lists = true;
    }

    pub fn list_calls(&self) -> u32 {
        self.state.lock().unwrap().list_calls
    }

    pub fn recorded_patches(&self) -> Vec<(String, ItemPatch)> {
        self.state.lock().unwrap().patches.clone()
    }

    /// Server-side view of the collection.
    pub fn items(&self) -> Vec<Item> {
        self.state.lock().unwrap().items.clone()
    }
}

impl InventoryClient for FakeInventoryClient {
    fn list_items(&self) -> Result<Vec<Item>, LoadError> {
        let mut state = self.state.lock().unwrap();
        state.list_calls += 1;
        if state.fail_lists {
            return Err(LoadError::TransportFailure("connection refused".to_string()));
        }
        Ok(state.items.clone())
    }

    fn create_item(&self, submission: &ItemSubmission) -> Result<Item, MutationError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_next_create {
            state.fail_next_create = false;
            return Err(MutationError::TransportFailure("connection reset".to_string()));
        }

        state.next_id += 1;
        let item = Item {
            id: format!("item-{}", state.next_id),
            title: submission.title.clone(),
            price: submission.price,
            category: submission.category,
            sold: false,
            image_filename: submission
                .image
                .as_ref()
                .and_then(|path| path.file_name())
                .map(|name| name.to_string_lossy().into_owned()),
            created_at: None,
        };
        // The service lists newest first.
        state.items.insert(0, item.clone());
        Ok(item)
    }

    fn update_item(&self, id: &str, patch: &ItemPatch) -> Result<Item, MutationError> {
        let mut state = self.state.lock().unwrap();
        state.patches.push((id.to_string(), patch.clone()));

        let item = state
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(MutationError::NotFound)?;

        if let Some(title) = &patch.title {
            item.title = title.clone();
        }
        if let Some(price) = patch.price {
            item.price = price;
        }
        if let Some(category) = patch.category {
            item.category = category;
        }
        if let Some(sold) = patch.sold {
            item.sold = sold;
        }
        if let Some(path) = &patch.image {
            item.image_filename =
                path.file_name().map(|name| name.to_string_lossy().into_owned());
        }
        Ok(item.clone())
    }

    fn delete_item(&self, id: &str) -> Result<(), MutationError> {
        let mut state = self.state.lock().unwrap();
        let before = state.items.len();
        state.items.retain(|item| item.id != id);
        if state.items.len() == before {
            return Err(MutationError::NotFound);
        }
        Ok(())
    }
}
