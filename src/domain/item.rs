//! Catalog item entity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::ValidationError;

/// Closed set of categories the store offers.
///
/// The server is free to accept others; the client only ever submits
/// values from this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mice,
    Mousepads,
}

impl Category {
    /// Every category the client offers for submission.
    pub const ALL: [Category; 2] = [Category::Mice, Category::Mousepads];

    /// Canonical wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Mice => "mice",
            Category::Mousepads => "mousepads",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mice" => Ok(Category::Mice),
            "mousepads" => Ok(Category::Mousepads),
            other => Err(ValidationError::UnknownCategory(other.to_string())),
        }
    }
}

/// A sellable product record as returned by the inventory service.
///
/// The locally held collection of these is a cached snapshot, never
/// authoritative: it is refreshed wholesale after every mutation
/// rather than patched in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Server-assigned identifier, opaque to the client.
    pub id: String,
    pub title: String,
    pub price: f64,
    pub category: Category,
    #[serde(default)]
    pub sold: bool,
    /// Filename under the service's upload store; absent means no image.
    #[serde(default)]
    pub image_filename: Option<String>,
    /// Server-assigned creation timestamp, carried verbatim.
    #[serde(default)]
    pub created_at: Option<String>,
}
