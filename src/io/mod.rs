pub mod config_io;
pub mod diary_io;
pub mod lock;
pub mod state;
pub mod watcher;
