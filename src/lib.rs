pub mod cli;
pub mod field;
pub mod io;
pub mod model;
pub mod parse;
pub mod store;
pub mod tui;
pub mod util;
