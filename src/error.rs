// Error kinds surfaced to the user by Recipe-Local commands

use thiserror::Error;

use crate::picker::selector::EmptySelection;
use crate::picker::validate::ValidationError;

/// Every way a command can fail.
///
/// All of these are terminal for the current invocation only; they never
/// corrupt stored state and never require more recovery than re-running the
/// command.
#[derive(Debug, Error)]
pub enum AppError {
    /// The recipe database could not be opened or queried. Recovered by
    /// the user retrying, never by an automatic retry.
    #[error("recipe store unavailable: {0:#}")]
    StoreUnavailable(anyhow::Error),

    /// The add-recipe form had missing or malformed fields.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No recipes matched the current filters, so nothing could be picked.
    #[error(transparent)]
    EmptySelection(#[from] EmptySelection),
}
