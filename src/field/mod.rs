pub mod editable;
pub mod state;
pub mod suggest;

pub use editable::*;
pub use state::*;
pub use suggest::*;
