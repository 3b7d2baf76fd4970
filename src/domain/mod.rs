pub mod config;
pub mod draft;
pub mod error;
pub mod filter;
pub mod item;

pub use config::{API_URL_ENV, StoreApiConfig};
pub use draft::{ItemDraft, ItemPatch, ItemSubmission, validate_draft};
pub use error::{AppError, LoadError, MutationError, ValidationError};
pub use filter::{FilterCriteria, StatusFilter, filter_items};
pub use item::{Category, Item};
