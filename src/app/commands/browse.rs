//! Public storefront listing.

use crate::domain::{AppError, FilterCriteria, Item, filter_items};
use crate::ports::InventoryClient;

/// Fetch the catalog and return the entries matching `criteria`, in
/// server order.
pub fn execute<C: InventoryClient>(
    client: &C,
    criteria: &FilterCriteria,
) -> Result<Vec<Item>, AppError> {
    let items = client.list_items()?;
    Ok(filter_items(&items, criteria).into_iter().cloned().collect())
}

/// Render one catalog entry as a storefront line.
pub fn render_line(item: &Item, api_url: &str) -> String {
    let status = if item.sold { "sold" } else { "available" };
    let mut line = format!(
        "{:<26} {:<32} ${:>8.2} {:<10} {:<9}",
        item.id, item.title, item.price, item.category, status
    );
    if let Some(filename) = &item.image_filename {
        line.push_str(&format!(" {}/uploads/{}", api_url.trim_end_matches('/'), filename));
    }
    line
}
