//! jimmystore: command-line client for the JimmyStore catalog service.
//!
//! The public storefront (`browse`) needs no credentials; the admin
//! surface (`login`, `add`, `edit`, `rm`, `sold`) talks to the same
//! inventory service with a stored session token and reconciles local
//! state by re-fetching the full catalog after every write.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use app::commands::remove::RemoveOutcome;
use app::{MutationCoordinator, commands};
use domain::StoreApiConfig;
use ports::CredentialStore;
use services::{FileCredentialStore, HttpStoreClient, TerminalConfirm};

pub use domain::{
    AppError, Category, FilterCriteria, Item, ItemDraft, ItemPatch, StatusFilter,
};

/// List catalog items matching `criteria` (public storefront).
pub fn browse(criteria: &FilterCriteria) -> Result<(), AppError> {
    let config = StoreApiConfig::load()?;
    let client = HttpStoreClient::new(&config, None)?;

    let items = commands::browse::execute(&client, criteria)?;
    if items.is_empty() {
        println!("No items found.");
        return Ok(());
    }

    for item in &items {
        println!("{}", commands::browse::render_line(item, &config.api_url));
    }
    Ok(())
}

/// Log in as the store admin and persist the session token.
pub fn login(username: &str, password: Option<String>) -> Result<(), AppError> {
    let config = StoreApiConfig::load()?;
    let client = HttpStoreClient::new(&config, None)?;
    let credentials = FileCredentialStore::new_default()?;

    let password = match password {
        Some(password) => password,
        None => prompt_password()?,
    };

    commands::login::execute(&client, &credentials, username, &password)?;
    println!("✅ Logged in as {}", username);
    Ok(())
}

/// Forget the stored admin session.
pub fn logout() -> Result<(), AppError> {
    let credentials = FileCredentialStore::new_default()?;
    commands::logout::execute(&credentials)?;
    println!("✅ Logged out");
    Ok(())
}

/// Create a new catalog item (admin).
pub fn add_item(draft: &ItemDraft) -> Result<(), AppError> {
    let mut coordinator = admin_coordinator()?;
    coordinator.create(draft)?;
    println!(
        "✅ Added \"{}\" ({} item(s) in catalog)",
        draft.title.trim(),
        coordinator.items().len()
    );
    Ok(())
}

/// Apply a partial update to an existing item (admin).
pub fn edit_item(id: &str, patch: &ItemPatch) -> Result<(), AppError> {
    if patch.is_empty() {
        return Err(AppError::config_error(
            "Nothing to update: pass at least one of --title, --price, --category, --image",
        ));
    }

    let mut coordinator = admin_coordinator()?;
    coordinator.update(id, patch)?;
    println!("✅ Updated {}", id);
    Ok(())
}

/// Delete an item after explicit confirmation (admin).
pub fn remove_item(id: &str, assume_yes: bool) -> Result<(), AppError> {
    let mut coordinator = admin_coordinator()?;
    coordinator.reload()?;

    match commands::remove::execute(&mut coordinator, &TerminalConfirm, id, assume_yes)? {
        RemoveOutcome::Deleted => println!("✅ Deleted {}", id),
        RemoveOutcome::Cancelled => println!("Cancelled."),
    }
    Ok(())
}

/// Flip an item's sold flag (admin).
pub fn toggle_sold(id: &str) -> Result<(), AppError> {
    let mut coordinator = admin_coordinator()?;
    coordinator.reload()?;
    coordinator.toggle_sold(id)?;

    match coordinator.items().iter().find(|item| item.id == id).map(|item| item.sold) {
        Some(true) => println!("✅ Marked {} as sold", id),
        Some(false) => println!("✅ Marked {} as available", id),
        None => println!("✅ Updated {}", id),
    }
    Ok(())
}

/// Build a coordinator for admin mutations, enforcing the auth gate.
fn admin_coordinator() -> Result<MutationCoordinator<HttpStoreClient>, AppError> {
    let config = StoreApiConfig::load()?;
    let credentials = FileCredentialStore::new_default()?;
    let token = credentials.load()?.ok_or(AppError::NotLoggedIn)?;
    let client = HttpStoreClient::new(&config, Some(token))?;
    Ok(MutationCoordinator::new(client))
}

fn prompt_password() -> Result<String, AppError> {
    dialoguer::Password::new()
        .with_prompt("Password")
        .interact()
        .map_err(|e| AppError::config_error(format!("Password prompt failed: {}", e)))
}
