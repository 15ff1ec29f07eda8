use chrono::NaiveDate;
use serde::Serialize;

use crate::model::{Day, Entry};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct EntryJson {
    pub key: String,
    /// `null` means the meal has no entry yet.
    pub value: Option<String>,
}

#[derive(Serialize)]
pub struct DayJson {
    pub date: NaiveDate,
    pub entries: Vec<EntryJson>,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn entry_to_json(entry: &Entry) -> EntryJson {
    EntryJson {
        key: entry.key.clone(),
        value: entry.value.clone(),
    }
}

pub fn day_to_json(day: &Day) -> DayJson {
    DayJson {
        date: day.date,
        entries: day.entries.iter().map(entry_to_json).collect(),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Format a single entry as a one-line summary
pub fn format_entry_line(entry: &Entry) -> String {
    format!("{}: {}", entry.key, entry.display_value())
}

/// Format a day with its entries, indented
pub fn format_day(day: &Day) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("== {} ==", day.date.format("%a %Y-%m-%d")));
    for entry in &day.entries {
        lines.push(format!("  {}", format_entry_line(entry)));
    }
    lines
}

/// Parse a date argument: YYYY-MM-DD or one of today/tomorrow/yesterday.
pub fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    let today = chrono::Local::now().date_naive();
    match s {
        "today" => Ok(today),
        "tomorrow" => today.succ_opt().ok_or_else(|| "date out of range".to_string()),
        "yesterday" => today.pred_opt().ok_or_else(|| "date out of range".to_string()),
        _ => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            format!(
                "invalid date '{}' (expected YYYY-MM-DD, today, tomorrow, or yesterday)",
                s
            )
        }),
    }
}
