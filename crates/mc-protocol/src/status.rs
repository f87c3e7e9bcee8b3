//! Outcome of a role's most recent exchange.

/// Fed to the batch factory so it can adapt the next batch.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum CommStatus {
    /// Nothing has happened yet.
    #[default]
    None,
    Success,
    Failure,
}
