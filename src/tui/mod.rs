pub mod app;
pub mod input;
pub mod render;
pub mod theme;

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::diary_io::{discover_diary, load_diary};
use crate::io::watcher::DiaryWatcher;

use app::{App, restore_ui_state, save_ui_state};

/// Run the TUI application
pub fn run(diary_dir: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    // Discover and load the diary
    let start = match diary_dir {
        Some(dir) => std::fs::canonicalize(dir)
            .map_err(|e| format!("cannot resolve -C path '{}': {}", dir, e))?,
        None => std::env::current_dir()?,
    };
    let root = discover_diary(&start)?;
    let loaded = load_diary(&root)?;

    let mut app = App::new(loaded);

    // Restore saved UI state
    restore_ui_state(&mut app);

    // Watch the diary directory for external edits. If the watcher cannot
    // start the TUI still works; 'r' reloads manually.
    let watcher = DiaryWatcher::start(&app.root).ok();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app, watcher.as_ref());

    // Save UI state before exit
    save_ui_state(&app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    watcher: Option<&DiaryWatcher>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut save_counter = 0u32;
    loop {
        // Pick up external edits to diary.md / nosh.toml. Events caused by
        // our own save fall inside the suppression window and are dropped.
        if let Some(w) = watcher
            && !w.poll().is_empty()
            && !app.suppressing_watch()
        {
            app.reload_from_disk(true);
        }

        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
            // Debounced state save: every ~5 key presses
            save_counter += 1;
            if save_counter >= 5 {
                save_ui_state(app);
                save_counter = 0;
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
