//! Admin item deletion, gated on user confirmation.

use crate::app::MutationCoordinator;
use crate::domain::{AppError, MutationError};
use crate::ports::{ConfirmPrompt, InventoryClient};

/// Outcome of a delete request.
#[derive(Debug, PartialEq, Eq)]
pub enum RemoveOutcome {
    Deleted,
    Cancelled,
}

/// Confirm with the user, then delete `id` and reload.
///
/// The prompt is owned here, at the view layer; the coordinator's
/// `delete` is only reached once the user has said yes.
pub fn execute<C, P>(
    coordinator: &mut MutationCoordinator<C>,
    prompt: &P,
    id: &str,
    assume_yes: bool,
) -> Result<RemoveOutcome, AppError>
where
    C: InventoryClient,
    P: ConfirmPrompt,
{
    let title = coordinator
        .items()
        .iter()
        .find(|item| item.id == id)
        .map(|item| item.title.clone())
        .ok_or(MutationError::NotFound)?;

    if !assume_yes && !prompt.confirm(&format!("Delete \"{}\"?", title))? {
        return Ok(RemoveOutcome::Cancelled);
    }

    coordinator.delete(id)?;
    Ok(RemoveOutcome::Deleted)
}
