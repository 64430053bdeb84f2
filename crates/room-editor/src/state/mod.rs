//! Editor state types

mod editor;
mod history;

pub use editor::*;
pub use history::*;
