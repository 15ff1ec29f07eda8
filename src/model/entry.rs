use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder shown for an entry that has no value yet.
pub const EMPTY_LABEL: &str = "Empty";

/// Identifier of an entry within a loaded diary.
///
/// Ids are assigned when the diary file is parsed and are never written
/// back, so they are only stable for the lifetime of one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One meal slot on a day: `Lunch: tomato soup`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    /// Meal name, e.g. `Lunch`
    pub key: String,
    /// What was eaten. `None` until the user fills the slot in.
    pub value: Option<String>,
}

impl Entry {
    pub fn new(id: EntryId, key: impl Into<String>, value: Option<String>) -> Self {
        Entry {
            id,
            key: key.into(),
            value,
        }
    }

    /// The value as displayed: the text, or the `Empty` placeholder.
    pub fn display_value(&self) -> &str {
        self.value.as_deref().unwrap_or(EMPTY_LABEL)
    }

    /// Whether the slot is still unfilled.
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}
