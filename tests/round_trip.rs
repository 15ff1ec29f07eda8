use std::fs;
use std::path::Path;

use nosh::parse::{parse_diary, serialize_diary};
use pretty_assertions::assert_eq;

/// Helper: load a fixture file, parse it, serialize it, and assert
/// byte-for-byte equality.
fn assert_diary_round_trip(fixture_name: &str) {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(fixture_name);
    let source = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Could not read fixture {}: {}", fixture_name, e));

    let (diary, dropped) = parse_diary(&source);
    assert!(
        dropped.is_empty(),
        "fixture {} has dropped lines: {:?}",
        fixture_name,
        dropped
    );
    let output = serialize_diary(&diary);

    assert_eq!(
        output, source,
        "Round-trip failed for fixture: {}",
        fixture_name
    );
}

#[test]
fn round_trip_simple_diary() {
    assert_diary_round_trip("simple_diary.md");
}

#[test]
fn round_trip_busy_week() {
    assert_diary_round_trip("busy_week.md");
}

#[test]
fn round_trip_unicode_meals() {
    assert_diary_round_trip("unicode_meals.md");
}

// ---------------------------------------------------------------------------
// Normalization: non-canonical input parses, serializes canonically, and is
// stable from then on.
// ---------------------------------------------------------------------------

#[test]
fn loose_spacing_normalizes_then_stays_fixed() {
    let source = "# Food Diary\n\n\n## 2026-08-23\n- Lunch:salad\n-  Dinner :  rice \n";
    let (diary, dropped) = parse_diary(source);
    assert!(dropped.is_empty());

    let once = serialize_diary(&diary);
    assert_eq!(
        once,
        "# Food Diary\n\n## 2026-08-23\n\n- Lunch: salad\n- Dinner: rice\n"
    );

    let (reparsed, dropped) = parse_diary(&once);
    assert!(dropped.is_empty());
    assert_eq!(serialize_diary(&reparsed), once);
}

#[test]
fn canonical_form_snapshot() {
    let (diary, _) =
        parse_diary("## 2026-08-24\n- Dinner: pho\n\n## 2026-08-23\n- Lunch:salad\n");
    insta::assert_snapshot!(serialize_diary(&diary), @r"
    # Food Diary

    ## 2026-08-23

    - Lunch: salad

    ## 2026-08-24

    - Dinner: pho
    ");
}

#[test]
fn out_of_order_days_serialize_sorted_and_stable() {
    let source = "\
# Food Diary

## 2026-08-25

- Lunch: pho

## 2026-08-23

- Lunch: salad
";
    let (diary, _) = parse_diary(source);
    let once = serialize_diary(&diary);

    let first = once.find("2026-08-23").unwrap();
    let second = once.find("2026-08-25").unwrap();
    assert!(first < second);

    let (reparsed, _) = parse_diary(&once);
    assert_eq!(serialize_diary(&reparsed), once);
}

#[test]
fn dropped_lines_are_reported_and_do_not_survive() {
    let source = "\
# Food Diary

stray prose between days

## 2026-08-23

- Lunch: salad
- no colon here
";
    let (diary, dropped) = parse_diary(source);
    assert_eq!(dropped, vec!["stray prose between days", "- no colon here"]);

    let out = serialize_diary(&diary);
    assert!(!out.contains("stray prose"));
    assert!(!out.contains("no colon"));
    assert!(out.contains("- Lunch: salad"));
}

// ---------------------------------------------------------------------------
// Config round-trip
// ---------------------------------------------------------------------------

#[test]
fn round_trip_config() {
    let source = r#"# our diary
[diary]
name = "Food Diary"

[entries]
meals = ["Breakfast", "Lunch", "Dinner"]
days_to_display = 5

[suggest]
foods = ["oatmeal"]
learn = false

[ui]
show_key_hints = true
"#;

    // Parse with the toml crate
    let config: nosh::model::DiaryConfig = toml::from_str(source).unwrap();
    assert_eq!(config.entries.meals.len(), 3);
    assert_eq!(config.entries.days_to_display, 5);
    assert!(!config.suggest.learn);
    assert!(config.ui.show_key_hints);

    // The toml_edit document preserves the comment and formatting
    let doc: toml_edit::DocumentMut = source.parse().unwrap();
    assert_eq!(doc.to_string(), source);
}
