use crate::model::entry::Entry;
use chrono::NaiveDate;

/// Title used when a diary file has no `#` heading.
pub const DEFAULT_TITLE: &str = "Food Diary";

/// One day of the diary with its meal entries in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    pub date: NaiveDate,
    pub entries: Vec<Entry>,
}

impl Day {
    pub fn new(date: NaiveDate) -> Self {
        Day {
            date,
            entries: Vec::new(),
        }
    }

    /// Find an entry by meal name (case-sensitive, first match).
    pub fn entry_by_key(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.key == key)
    }
}

/// A parsed diary: title plus days in ascending date order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diary {
    pub title: String,
    pub days: Vec<Day>,
}

impl Diary {
    pub fn new(title: impl Into<String>) -> Self {
        Diary {
            title: title.into(),
            days: Vec::new(),
        }
    }

    pub fn day(&self, date: NaiveDate) -> Option<&Day> {
        self.days.iter().find(|d| d.date == date)
    }

    /// Insert a new empty day, keeping `days` sorted by date. Returns the
    /// index of the day (existing or created).
    pub fn ensure_day(&mut self, date: NaiveDate) -> usize {
        match self.days.binary_search_by_key(&date, |d| d.date) {
            Ok(i) => i,
            Err(i) => {
                self.days.insert(i, Day::new(date));
                i
            }
        }
    }
}
