use crate::model::Diary;

/// Serialize a diary to its canonical text form.
///
/// Canonical means: title heading, one blank line before each day heading
/// and between a heading and its entries, entries as `- Meal: value` with
/// unfilled slots ending at the colon, trailing newline. Parsing canonical
/// text and serializing it again is the identity.
pub fn serialize_diary(diary: &Diary) -> String {
    let mut lines = Vec::new();
    lines.push(format!("# {}", diary.title));

    for day in &diary.days {
        lines.push(String::new());
        lines.push(format!("## {}", day.date.format("%Y-%m-%d")));
        lines.push(String::new());
        for entry in &day.entries {
            match &entry.value {
                Some(v) => lines.push(format!("- {}: {}", entry.key, v)),
                None => lines.push(format!("- {}:", entry.key)),
            }
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
