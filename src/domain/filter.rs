//! Catalog filtering shared by the storefront and admin views.

use crate::domain::{Category, Item};

/// Sold-status filter.
///
/// Three variants, not a boolean: "no filter" must stay distinguishable
/// from "available only".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    SoldOnly,
    AvailableOnly,
}

impl StatusFilter {
    fn matches(&self, sold: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::SoldOnly => sold,
            StatusFilter::AvailableOnly => !sold,
        }
    }
}

/// Active filter combination for a catalog view.
///
/// Ephemeral and client-only; never persisted or sent to the server.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// `None` matches every category.
    pub category: Option<Category>,
    pub status: StatusFilter,
    /// Case-insensitive substring matched against the title; empty
    /// matches everything.
    pub search: String,
}

impl FilterCriteria {
    fn matches(&self, item: &Item) -> bool {
        let match_category = self.category.map_or(true, |category| item.category == category);
        let match_status = self.status.matches(item.sold);
        let match_search = self.search.is_empty()
            || item.title.to_lowercase().contains(&self.search.to_lowercase());
        match_category && match_status && match_search
    }
}

/// Return the items matching `criteria`, preserving input order.
pub fn filter_items<'a>(items: &'a [Item], criteria: &FilterCriteria) -> Vec<&'a Item> {
    items.iter().filter(|item| criteria.matches(item)).collect()
}
