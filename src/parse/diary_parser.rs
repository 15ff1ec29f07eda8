use crate::model::{DEFAULT_TITLE, Diary, Entry, EntryId};
use chrono::NaiveDate;

/// Parse a diary file from its source text.
///
/// Diary format: one `# Title` heading, then `## YYYY-MM-DD` day headings,
/// each followed by `- Meal: value` entry lines (`- Meal:` for an unfilled
/// slot). Lines the parser does not understand are returned in the second
/// element so callers can warn about them; they do not survive a save.
///
/// Entry ids are assigned in file order and are only meaningful for the
/// lifetime of this parse.
pub fn parse_diary(source: &str) -> (Diary, Vec<String>) {
    let mut diary = Diary::new(DEFAULT_TITLE);
    let mut dropped = Vec::new();
    let mut saw_title = false;
    // None both before the first day heading and after an invalid one, so
    // entries never attach to a day with the wrong date.
    let mut current_day: Option<usize> = None;
    let mut next_id: u64 = 1;

    for line in source.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix("## ") {
            match NaiveDate::parse_from_str(rest.trim(), "%Y-%m-%d") {
                Ok(date) => current_day = Some(diary.ensure_day(date)),
                Err(_) => {
                    current_day = None;
                    dropped.push(line.to_string());
                }
            }
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix("# ") {
            if !saw_title && current_day.is_none() {
                diary.title = rest.trim().to_string();
                saw_title = true;
            } else {
                dropped.push(line.to_string());
            }
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix("- ") {
            if let Some(day_idx) = current_day {
                if let Some((key, value)) = split_entry(rest) {
                    let entry = Entry::new(EntryId(next_id), key, value);
                    next_id += 1;
                    diary.days[day_idx].entries.push(entry);
                    continue;
                }
            }
            dropped.push(line.to_string());
            continue;
        }

        dropped.push(line.to_string());
    }

    (diary, dropped)
}

/// Split `Meal: value` into key and optional value. The key is everything
/// before the first colon; an empty key is a parse failure.
fn split_entry(rest: &str) -> Option<(String, Option<String>)> {
    let (key, value) = rest.split_once(':')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    let value = value.trim();
    let value = if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    };
    Some((key.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn parse_basic_diary() {
        let source = "\
# Food Diary

## 2026-08-23

- Lunch: tomato soup
- Dinner:

## 2026-08-24

- Lunch:
- Dinner: ramen
";
        let (diary, dropped) = parse_diary(source);
        assert!(dropped.is_empty());
        assert_eq!(diary.title, "Food Diary");
        assert_eq!(diary.days.len(), 2);

        let day = &diary.days[0];
        assert_eq!(day.date, date("2026-08-23"));
        assert_eq!(day.entries[0].key, "Lunch");
        assert_eq!(day.entries[0].value.as_deref(), Some("tomato soup"));
        assert_eq!(day.entries[1].key, "Dinner");
        assert_eq!(day.entries[1].value, None);

        assert_eq!(diary.days[1].entries[1].value.as_deref(), Some("ramen"));
    }

    #[test]
    fn ids_follow_file_order() {
        let source = "\
## 2026-08-23

- Lunch: soup
- Dinner: rice
";
        let (diary, _) = parse_diary(source);
        assert_eq!(diary.days[0].entries[0].id, EntryId(1));
        assert_eq!(diary.days[0].entries[1].id, EntryId(2));
    }

    #[test]
    fn missing_title_uses_default() {
        let (diary, dropped) = parse_diary("## 2026-08-23\n\n- Lunch:\n");
        assert!(dropped.is_empty());
        assert_eq!(diary.title, "Food Diary");
    }

    #[test]
    fn days_out_of_order_are_sorted() {
        let source = "\
## 2026-08-25

- Lunch: pho

## 2026-08-23

- Lunch: salad
";
        let (diary, _) = parse_diary(source);
        let dates: Vec<_> = diary.days.iter().map(|d| d.date).collect();
        assert_eq!(dates, vec![date("2026-08-23"), date("2026-08-25")]);
    }

    #[test]
    fn duplicate_day_headings_merge() {
        let source = "\
## 2026-08-23

- Lunch: salad

## 2026-08-23

- Dinner: rice
";
        let (diary, dropped) = parse_diary(source);
        assert!(dropped.is_empty());
        assert_eq!(diary.days.len(), 1);
        let keys: Vec<_> = diary.days[0].entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["Lunch", "Dinner"]);
    }

    #[test]
    fn value_may_contain_colons() {
        let (diary, _) = parse_diary("## 2026-08-23\n\n- Lunch: soup: extra salty\n");
        assert_eq!(
            diary.days[0].entries[0].value.as_deref(),
            Some("soup: extra salty")
        );
    }

    #[test]
    fn spacing_is_normalized() {
        let (diary, dropped) = parse_diary("## 2026-08-23\n\n- Lunch:salad\n-  Dinner :  rice \n");
        assert!(dropped.is_empty());
        assert_eq!(diary.days[0].entries[0].value.as_deref(), Some("salad"));
        assert_eq!(diary.days[0].entries[1].key, "Dinner");
        assert_eq!(diary.days[0].entries[1].value.as_deref(), Some("rice"));
    }

    #[test]
    fn entry_before_any_day_is_dropped() {
        let (diary, dropped) = parse_diary("- Lunch: salad\n\n## 2026-08-23\n");
        assert_eq!(dropped, vec!["- Lunch: salad"]);
        assert!(diary.days[0].entries.is_empty());
    }

    #[test]
    fn invalid_day_heading_drops_its_entries() {
        let source = "\
## 2026-08-23

- Lunch: salad

## not a date

- Lunch: ghost

## 2026-08-24

- Lunch: rice
";
        let (diary, dropped) = parse_diary(source);
        assert_eq!(dropped, vec!["## not a date", "- Lunch: ghost"]);
        assert_eq!(diary.days.len(), 2);
        assert_eq!(diary.days[1].entries[0].value.as_deref(), Some("rice"));
    }

    #[test]
    fn unknown_lines_are_reported() {
        let source = "\
# Food Diary

some stray prose

## 2026-08-23

- no colon here
- : no key
";
        let (_, dropped) = parse_diary(source);
        assert_eq!(
            dropped,
            vec!["some stray prose", "- no colon here", "- : no key"]
        );
    }

    #[test]
    fn second_title_is_dropped() {
        let (diary, dropped) = parse_diary("# One\n\n# Two\n");
        assert_eq!(diary.title, "One");
        assert_eq!(dropped, vec!["# Two"]);
    }

    #[test]
    fn empty_input() {
        let (diary, dropped) = parse_diary("");
        assert_eq!(diary.title, "Food Diary");
        assert!(diary.days.is_empty());
        assert!(dropped.is_empty());
    }
}
