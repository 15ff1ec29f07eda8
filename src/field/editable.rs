use crate::field::state::EditState;
use crate::model::{Entry, EntryId};
use crate::store::{EntryStore, StoreError};

/// An entry value being viewed or edited in place.
///
/// The field holds an entry id, not the entry: every read goes through the
/// store handle the caller passes in, so the field stays valid across
/// reloads and never caches a stale row. It owns no persistence; a commit
/// makes exactly one `update_entry` call and leaves everything else to the
/// store's owner.
#[derive(Debug, Clone)]
pub struct EditableField {
    id: EntryId,
    state: EditState,
}

impl EditableField {
    /// Bind to `id`, snapshotting its displayed value from the store.
    pub fn new<S: EntryStore + ?Sized>(id: EntryId, store: &S) -> Self {
        EditableField {
            id,
            state: EditState::from_entry(store.entry(id)),
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn is_editing(&self) -> bool {
        self.state.editing
    }

    /// The text shown (and edited): draft while editing, saved value after.
    pub fn draft(&self) -> &str {
        &self.state.current
    }

    /// Resolve the bound entry through the store. `None` once the entry has
    /// disappeared, in which case the field renders nothing.
    pub fn entry<'a, S: EntryStore + ?Sized>(&self, store: &'a S) -> Option<&'a Entry> {
        store.entry(self.id)
    }

    pub fn begin_edit(&mut self) {
        self.state = std::mem::take(&mut self.state).begin_edit();
    }

    pub fn set_draft(&mut self, value: impl Into<String>) {
        self.state = std::mem::take(&mut self.state).set_draft(value);
    }

    pub fn revert(&mut self) {
        self.state = std::mem::take(&mut self.state).revert();
    }

    /// Save the draft through the store and leave editing.
    ///
    /// With no bound entry there is nothing to save onto: the call is a
    /// no-op (the entry can vanish mid-edit when the diary file changes
    /// under us). On a store error the draft is rolled back before the
    /// error is returned, so `original` still names the last value the
    /// store accepted.
    pub fn commit<S: EntryStore + ?Sized>(&mut self, store: &mut S) -> Result<(), StoreError> {
        if store.entry(self.id).is_none() {
            return Ok(());
        }
        let value = self.state.current.clone();
        match store.update_entry(self.id, &value) {
            Ok(()) => {
                self.state = std::mem::take(&mut self.state).commit();
                Ok(())
            }
            Err(e) => {
                self.state = std::mem::take(&mut self.state).revert();
                Err(e)
            }
        }
    }

    /// Accept a chosen suggestion: replace the draft and commit in one
    /// step. Only meaningful while editing.
    pub fn select_suggestion<S: EntryStore + ?Sized>(
        &mut self,
        value: &str,
        store: &mut S,
    ) -> Result<(), StoreError> {
        if !self.state.editing {
            return Ok(());
        }
        self.set_draft(value);
        self.commit(store)
    }
}
