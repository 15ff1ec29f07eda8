use std::fs;

use crate::cli::commands::InitArgs;
use crate::io::diary_io;

const NOSH_TOML_TEMPLATE: &str = include_str!("../../templates/nosh.toml");

/// Infer a diary name from a directory name: split on hyphens and
/// underscores, title-case each word.
fn infer_name(dir_name: &str) -> String {
    dir_name
        .split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn cmd_init(args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(diary_io::CONFIG_FILE);

    if config_path.is_file() && !args.force {
        return Err("a diary already exists here (nosh.toml found); use --force to rewrite it".into());
    }

    // Check for an enclosing diary and warn
    if let Some(parent) = cwd.parent()
        && let Ok(parent_root) = diary_io::discover_diary(parent)
    {
        eprintln!("Note: enclosing diary found at {}/", parent_root.display());
        eprintln!("Creating a new diary in the current directory");
    }

    // Infer diary name
    let name = args.name.unwrap_or_else(|| {
        cwd.file_name()
            .and_then(|n| n.to_str())
            .map(infer_name)
            .unwrap_or_else(|| "Food Diary".to_string())
    });

    // Write nosh.toml
    fs::write(&config_path, NOSH_TOML_TEMPLATE.replace("{name}", &name))?;

    // Write an empty diary.md, but never clobber an existing one, even
    // with --force.
    let diary_path = cwd.join(diary_io::DIARY_FILE);
    if !diary_path.exists() {
        fs::write(&diary_path, format!("# {}\n", name))?;
    }

    println!("Initialized diary: {}", name);
    Ok(())
}
