//! Pending submissions and their validation.
//!
//! The client never constructs a final [`crate::domain::Item`]: it
//! builds a draft, validates it into a normalized submission, and lets
//! the server assign identity and persisted fields.

use std::path::PathBuf;

use crate::domain::{Category, ValidationError};

/// Raw admin input for a create, before validation.
#[derive(Debug, Clone, Default)]
pub struct ItemDraft {
    pub title: String,
    /// User-entered price text, parsed during validation.
    pub price: String,
    /// User-entered category text, checked against the known set.
    pub category: String,
    /// Local image file to upload, passed through opaquely.
    pub image: Option<PathBuf>,
}

/// Validated, normalized payload ready for transport.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSubmission {
    pub title: String,
    /// Non-negative, rounded to cents.
    pub price: f64,
    pub category: Category,
    pub image: Option<PathBuf>,
}

/// Partial update for `PUT /items/{id}`; only present fields are sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub price: Option<f64>,
    pub category: Option<Category>,
    pub sold: Option<bool>,
    pub image: Option<PathBuf>,
}

impl ItemPatch {
    /// Patch carrying the `sold` flag and nothing else.
    pub fn sold(sold: bool) -> Self {
        Self { sold: Some(sold), ..Self::default() }
    }

    /// Build a patch from optional raw edit inputs, validating each
    /// provided field with the same rules as a full submission.
    pub fn from_edit(
        title: Option<String>,
        price: Option<String>,
        category: Option<String>,
        image: Option<PathBuf>,
    ) -> Result<Self, ValidationError> {
        let title = match title {
            Some(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(ValidationError::EmptyTitle);
                }
                Some(trimmed.to_string())
            }
            None => None,
        };
        let price = price.as_deref().map(parse_price).transpose()?;
        let category = category.as_deref().map(|raw| raw.parse::<Category>()).transpose()?;

        Ok(Self { title, price, category, sold: None, image })
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.sold.is_none()
            && self.image.is_none()
    }
}

/// Validate a draft and normalize it for submission.
pub fn validate_draft(draft: &ItemDraft) -> Result<ItemSubmission, ValidationError> {
    let title = draft.title.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }

    let price = parse_price(&draft.price)?;
    let category = draft.category.parse::<Category>()?;

    Ok(ItemSubmission { title: title.to_string(), price, category, image: draft.image.clone() })
}

fn parse_price(raw: &str) -> Result<f64, ValidationError> {
    let value = raw.trim().parse::<f64>().map_err(|_| ValidationError::InvalidPrice)?;
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidPrice);
    }
    Ok((value * 100.0).round() / 100.0)
}
