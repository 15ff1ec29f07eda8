use std::fs;
use std::path::Path;

use crate::io::diary_io::{CONFIG_FILE, DiaryError};
use crate::model::config::DiaryConfig;

/// Read the diary config, returning both the parsed config and the raw
/// toml_edit Document for round-trip-safe editing.
pub fn read_config(root: &Path) -> Result<(DiaryConfig, toml_edit::DocumentMut), DiaryError> {
    let config_path = root.join(CONFIG_FILE);
    let config_text = fs::read_to_string(&config_path).map_err(|e| DiaryError::ReadError {
        path: config_path.clone(),
        source: e,
    })?;
    let config: DiaryConfig = toml::from_str(&config_text)?;
    let doc: toml_edit::DocumentMut = config_text.parse().map_err(|_: toml_edit::TomlError| {
        DiaryError::ConfigParseError(toml::from_str::<DiaryConfig>("").unwrap_err())
    })?;
    Ok((config, doc))
}

/// Write the config document back to disk, preserving formatting.
pub fn write_config(root: &Path, doc: &toml_edit::DocumentMut) -> Result<(), DiaryError> {
    let config_path = root.join(CONFIG_FILE);
    fs::write(&config_path, doc.to_string()).map_err(|e| DiaryError::ReadError {
        path: config_path,
        source: e,
    })?;
    Ok(())
}

/// Append a food to `[suggest] foods` in the config document.
pub fn add_food(doc: &mut toml_edit::DocumentMut, food: &str) {
    if !doc.contains_key("suggest") {
        doc["suggest"] = toml_edit::Item::Table(toml_edit::Table::new());
    }
    if doc["suggest"].get("foods").and_then(|i| i.as_array()).is_none() {
        doc["suggest"]["foods"] = toml_edit::value(toml_edit::Array::new());
    }
    if let Some(foods) = doc["suggest"]["foods"].as_array_mut() {
        foods.push(food);
    }
}

/// Remember a newly committed food in nosh.toml so it is suggested from
/// now on. Returns false (and leaves the file alone) when the food is
/// already configured. Keeps `config` in sync with what was written.
pub fn learn_food(root: &Path, config: &mut DiaryConfig, food: &str) -> Result<bool, DiaryError> {
    if food.is_empty() {
        return Ok(false);
    }
    let known = config
        .suggest
        .foods
        .iter()
        .any(|f| f.to_lowercase() == food.to_lowercase());
    if known {
        return Ok(false);
    }

    let (_, mut doc) = read_config(root)?;
    add_food(&mut doc, food);
    write_config(root, &doc)?;
    config.suggest.foods.push(food.to_string());
    Ok(true)
}
