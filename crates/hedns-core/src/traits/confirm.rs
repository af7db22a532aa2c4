//! Deletion confirmation seam
//!
//! Deleting a record cannot be undone, so the console asks before it posts the
//! deletion. The question is asked through [`ConfirmDeletion`], which lets the
//! CLI prompt on a terminal while tests and non-interactive callers answer
//! programmatically.

/// Decides whether a resolved record may be deleted
pub trait ConfirmDeletion: Send + Sync {
    /// Return `true` to proceed with deleting `record_id`
    fn confirm(&self, record_id: &str) -> bool;
}

impl<F> ConfirmDeletion for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn confirm(&self, record_id: &str) -> bool {
        self(record_id)
    }
}

/// How a deletion is authorized
#[derive(Clone, Copy)]
pub enum Confirmation<'a> {
    /// Skip the question entirely
    Forced,
    /// Ask the given confirmer once the record id is known
    Ask(&'a dyn ConfirmDeletion),
}

impl Confirmation<'_> {
    /// Resolve the decision for `record_id`
    pub fn approve(&self, record_id: &str) -> bool {
        match self {
            Confirmation::Forced => true,
            Confirmation::Ask(confirmer) => confirmer.confirm(record_id),
        }
    }
}

impl std::fmt::Debug for Confirmation<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confirmation::Forced => f.write_str("Forced"),
            Confirmation::Ask(_) => f.write_str("Ask"),
        }
    }
}
