pub mod memory;

pub use memory::MemoryStore;

use crate::model::{Entry, EntryId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no entry with id {0}")]
    UnknownEntry(EntryId),
}

/// Capability handle for entry lookup and mutation.
///
/// The editable field reads and writes entries only through this trait; it
/// never owns entries itself and never touches persistence. Whoever owns the
/// store decides when mutations reach disk.
pub trait EntryStore {
    fn entry(&self, id: EntryId) -> Option<&Entry>;

    /// Replace the stored value of `id`. Exactly one call per successful
    /// field commit.
    fn update_entry(&mut self, id: EntryId, value: &str) -> Result<(), StoreError>;
}
