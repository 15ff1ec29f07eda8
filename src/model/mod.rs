pub mod config;
pub mod diary;
pub mod entry;

pub use config::*;
pub use diary::*;
pub use entry::*;
