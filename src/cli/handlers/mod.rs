mod init;
pub use init::cmd_init;

use std::path::PathBuf;
use std::sync::Mutex;

use chrono::Days;
use regex::Regex;

/// Global override for diary directory (set by -C flag)
static DIARY_DIR_OVERRIDE: Mutex<Option<PathBuf>> = Mutex::new(None);

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::field::{StaticSuggestions, SuggestionSource};
use crate::io::config_io;
use crate::io::diary_io::{self, DiaryError, LoadedDiary};
use crate::io::lock::FileLock;
use crate::model::EMPTY_LABEL;
use crate::store::EntryStore;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;

    // Store -C override for load_diary_cwd()
    if let Some(ref dir) = cli.diary_dir {
        let abs = std::fs::canonicalize(dir)
            .map_err(|e| format!("cannot resolve -C path '{}': {}", dir, e))?;
        DIARY_DIR_OVERRIDE.lock().unwrap().replace(abs);
    }

    match cli.command {
        // Bare `nosh` opens the TUI; main.rs routes that before dispatch.
        None => Ok(()),
        Some(cmd) => match cmd {
            // Init is handled in main.rs before diary discovery
            Commands::Init(args) => cmd_init(args),

            // Read commands
            Commands::Show(args) => cmd_show(args, json),
            Commands::Suggest(args) => cmd_suggest(args, json),
            Commands::Search(args) => cmd_search(args),

            // Write commands
            Commands::Set(args) => cmd_set(args),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_diary_cwd() -> Result<LoadedDiary, DiaryError> {
    let start = match DIARY_DIR_OVERRIDE.lock().unwrap().as_ref() {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().map_err(DiaryError::IoError)?,
    };
    let root = diary_io::discover_diary(&start)?;
    let loaded = diary_io::load_diary(&root)?;

    for line in &loaded.dropped {
        eprintln!("warning: ignoring unrecognized line: {}", line);
    }

    Ok(loaded)
}

/// Resolve an optional date argument, defaulting to today.
fn resolve_date(arg: Option<&str>) -> Result<chrono::NaiveDate, String> {
    match arg {
        Some(s) => parse_date_arg(s),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_show(args: ShowArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut loaded = load_diary_cwd()?;

    let start = resolve_date(args.date.as_deref())?;
    let days = args.days.unwrap_or(loaded.config.entries.days_to_display);

    // Materialized slots stay in memory; show never writes the diary back.
    loaded
        .store
        .ensure_window(start, days, &loaded.config.entries.meals);

    let window: Vec<_> = (0..days)
        .filter_map(|offset| start.checked_add_days(Days::new(offset as u64)))
        .filter_map(|date| loaded.store.diary().day(date))
        .collect();

    if json {
        let days_json: Vec<DayJson> = window.iter().map(|day| day_to_json(day)).collect();
        println!("{}", serde_json::to_string_pretty(&days_json)?);
    } else {
        for (i, day) in window.iter().enumerate() {
            if i > 0 {
                println!();
            }
            for line in format_day(day) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

fn cmd_suggest(args: SuggestArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = load_diary_cwd()?;

    let source = StaticSuggestions::merged(
        &loaded.config.suggest.foods,
        loaded.store.known_foods(),
    );
    let matches = source.filter(args.query.as_deref().unwrap_or(""));

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
    } else {
        if matches.is_empty() {
            println!("(no suggestions)");
        }
        for m in &matches {
            println!("{}", m);
        }
    }
    Ok(())
}

fn cmd_search(args: SearchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = load_diary_cwd()?;

    // Case-insensitive; if the pattern is not a valid regex, fall back to
    // matching it literally.
    let re = Regex::new(&format!("(?i){}", args.pattern))
        .or_else(|_| Regex::new(&format!("(?i){}", regex::escape(&args.pattern))))?;

    let mut hits = 0;
    for day in &loaded.store.diary().days {
        for entry in &day.entries {
            let value_match = entry.value.as_deref().is_some_and(|v| re.is_match(v));
            if value_match || re.is_match(&entry.key) {
                println!("{} {}", day.date, format_entry_line(entry));
                hits += 1;
            }
        }
    }
    if hits == 0 {
        println!("(no matches)");
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_set(args: SetArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut loaded = load_diary_cwd()?;
    let _lock = FileLock::acquire_default(&loaded.root)?;

    let date = resolve_date(args.date.as_deref())?;

    // Materialize the day so the configured meals exist even on a date the
    // file has never seen.
    loaded
        .store
        .ensure_window(date, 1, &loaded.config.entries.meals);

    let (id, key) = loaded
        .store
        .diary()
        .day(date)
        .and_then(|day| {
            day.entries
                .iter()
                .find(|e| e.key.eq_ignore_ascii_case(&args.meal))
        })
        .map(|e| (e.id, e.key.clone()))
        .ok_or_else(|| {
            format!(
                "no meal '{}' on {} (configured meals: {})",
                args.meal,
                date,
                loaded.config.entries.meals.join(", ")
            )
        })?;

    loaded.store.update_entry(id, &args.value)?;
    diary_io::save_diary(&loaded.root, &loaded.store)?;
    loaded.store.mark_clean();

    if loaded.config.suggest.learn {
        config_io::learn_food(&loaded.root, &mut loaded.config, &args.value)?;
    }

    let shown = if args.value.is_empty() {
        EMPTY_LABEL
    } else {
        args.value.as_str()
    };
    println!("{} {}: {}", date, key, shown);
    Ok(())
}
