use crate::model::{Diary, Entry, EntryId};
use crate::store::{EntryStore, StoreError};
use chrono::{Days, NaiveDate};
use indexmap::IndexMap;
use std::collections::HashSet;

/// The loaded diary plus an id index over its entries.
///
/// Ids are handed out here (continuing from whatever the parser assigned)
/// and mapped to `(date, slot)` rather than positions in `days`, so a day
/// inserted in the middle never invalidates the index. Persistence lives
/// with the caller: mutations flip `dirty` and the owner decides when to
/// write the file.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    diary: Diary,
    index: IndexMap<EntryId, (NaiveDate, usize)>,
    next_id: u64,
    dirty: bool,
}

impl MemoryStore {
    pub fn new(diary: Diary) -> Self {
        let mut index = IndexMap::new();
        let mut max_id = 0;
        for day in &diary.days {
            for (slot, entry) in day.entries.iter().enumerate() {
                index.insert(entry.id, (day.date, slot));
                max_id = max_id.max(entry.id.0);
            }
        }
        MemoryStore {
            diary,
            index,
            next_id: max_id + 1,
            dirty: false,
        }
    }

    pub fn diary(&self) -> &Diary {
        &self.diary
    }

    /// Whether anything changed since the last load or `mark_clean`.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Materialize the display window: every day from `start` for `days`
    /// days, each with one slot per configured meal. Existing days and
    /// values are left alone; only missing slots are appended. Purely an
    /// in-memory fill, so just opening the diary never rewrites the file.
    pub fn ensure_window(&mut self, start: NaiveDate, days: usize, meals: &[String]) {
        for offset in 0..days {
            let Some(date) = start.checked_add_days(Days::new(offset as u64)) else {
                break;
            };
            let day_idx = self.diary.ensure_day(date);
            for meal in meals {
                if self.diary.days[day_idx].entry_by_key(meal).is_none() {
                    let id = EntryId(self.next_id);
                    self.next_id += 1;
                    let slot = self.diary.days[day_idx].entries.len();
                    self.diary.days[day_idx]
                        .entries
                        .push(Entry::new(id, meal.clone(), None));
                    self.index.insert(id, (date, slot));
                }
            }
        }
    }

    /// Resolve an entry by day and meal name. This is how callers re-find
    /// an entry across reloads, since ids do not survive them.
    pub fn entry_for(&self, date: NaiveDate, key: &str) -> Option<&Entry> {
        self.diary.day(date)?.entry_by_key(key)
    }

    /// Every distinct food in the diary, in file order, first spelling
    /// wins. Feeds the suggestion pool.
    pub fn known_foods(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut foods = Vec::new();
        for day in &self.diary.days {
            for entry in &day.entries {
                if let Some(v) = &entry.value {
                    if seen.insert(v.to_lowercase()) {
                        foods.push(v.clone());
                    }
                }
            }
        }
        foods
    }

    fn locate(&self, id: EntryId) -> Option<(usize, usize)> {
        let &(date, slot) = self.index.get(&id)?;
        let day_idx = self
            .diary
            .days
            .binary_search_by_key(&date, |d| d.date)
            .ok()?;
        Some((day_idx, slot))
    }
}

impl EntryStore for MemoryStore {
    fn entry(&self, id: EntryId) -> Option<&Entry> {
        let (day_idx, slot) = self.locate(id)?;
        self.diary.days[day_idx].entries.get(slot)
    }

    fn update_entry(&mut self, id: EntryId, value: &str) -> Result<(), StoreError> {
        let (day_idx, slot) = self.locate(id).ok_or(StoreError::UnknownEntry(id))?;
        let entry = self.diary.days[day_idx]
            .entries
            .get_mut(slot)
            .ok_or(StoreError::UnknownEntry(id))?;
        // The diary file cannot tell an empty value from an absent one,
        // so store "" as unfilled.
        entry.value = if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        };
        self.dirty = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Day;
    use pretty_assertions::assert_eq;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn meals() -> Vec<String> {
        vec!["Lunch".to_string(), "Dinner".to_string()]
    }

    fn store_with_one_day() -> MemoryStore {
        let mut diary = Diary::new("Food Diary");
        let mut day = Day::new(date("2026-08-24"));
        day.entries
            .push(Entry::new(EntryId(1), "Lunch", Some("soup".to_string())));
        diary.days.push(day);
        MemoryStore::new(diary)
    }

    #[test]
    fn window_creates_days_and_slots() {
        let mut store = MemoryStore::new(Diary::new("Food Diary"));
        store.ensure_window(date("2026-08-23"), 3, &meals());

        let diary = store.diary();
        assert_eq!(diary.days.len(), 3);
        assert_eq!(diary.days[0].date, date("2026-08-23"));
        assert_eq!(diary.days[2].date, date("2026-08-25"));
        for day in &diary.days {
            let keys: Vec<_> = day.entries.iter().map(|e| e.key.as_str()).collect();
            assert_eq!(keys, vec!["Lunch", "Dinner"]);
            assert!(day.entries.iter().all(|e| e.is_empty()));
        }
        assert!(!store.is_dirty());
    }

    #[test]
    fn window_preserves_existing_values() {
        let mut store = store_with_one_day();
        store.ensure_window(date("2026-08-24"), 2, &meals());

        let day = store.diary().day(date("2026-08-24")).unwrap();
        assert_eq!(day.entry_by_key("Lunch").unwrap().value.as_deref(), Some("soup"));
        assert!(day.entry_by_key("Dinner").unwrap().is_empty());
    }

    #[test]
    fn window_is_idempotent() {
        let mut store = MemoryStore::new(Diary::new("Food Diary"));
        store.ensure_window(date("2026-08-23"), 2, &meals());
        let first: Vec<_> = store.diary().days.clone();
        store.ensure_window(date("2026-08-23"), 2, &meals());
        assert_eq!(store.diary().days, first);
    }

    #[test]
    fn index_survives_day_inserted_before_existing() {
        let mut store = store_with_one_day();
        let id = store
            .entry_for(date("2026-08-24"), "Lunch")
            .map(|e| e.id)
            .unwrap();
        // Window starting a day earlier inserts 2026-08-23 at index 0.
        store.ensure_window(date("2026-08-23"), 2, &meals());
        assert_eq!(store.entry(id).unwrap().value.as_deref(), Some("soup"));
    }

    #[test]
    fn update_round_trip() {
        let mut store = store_with_one_day();
        let id = store
            .entry_for(date("2026-08-24"), "Lunch")
            .map(|e| e.id)
            .unwrap();

        store.update_entry(id, "salad").unwrap();
        assert_eq!(store.entry(id).unwrap().value.as_deref(), Some("salad"));
        assert!(store.is_dirty());
    }

    #[test]
    fn update_unknown_id_errors() {
        let mut store = store_with_one_day();
        let err = store.update_entry(EntryId(404), "salad").unwrap_err();
        assert_eq!(err, StoreError::UnknownEntry(EntryId(404)));
        assert!(!store.is_dirty());
    }

    #[test]
    fn update_with_empty_string_clears_value() {
        let mut store = store_with_one_day();
        let id = store
            .entry_for(date("2026-08-24"), "Lunch")
            .map(|e| e.id)
            .unwrap();

        store.update_entry(id, "").unwrap();
        assert!(store.entry(id).unwrap().is_empty());
    }

    #[test]
    fn known_foods_dedupes_case_insensitively_in_order() {
        let mut diary = Diary::new("Food Diary");
        let mut day1 = Day::new(date("2026-08-23"));
        day1.entries
            .push(Entry::new(EntryId(1), "Lunch", Some("Soup".to_string())));
        day1.entries
            .push(Entry::new(EntryId(2), "Dinner", Some("rice".to_string())));
        let mut day2 = Day::new(date("2026-08-24"));
        day2.entries
            .push(Entry::new(EntryId(3), "Lunch", Some("soup".to_string())));
        day2.entries.push(Entry::new(EntryId(4), "Dinner", None));
        diary.days.push(day1);
        diary.days.push(day2);

        let store = MemoryStore::new(diary);
        assert_eq!(store.known_foods(), vec!["Soup", "rice"]);
    }
}
