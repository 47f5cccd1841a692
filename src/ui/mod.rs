pub mod messages;
pub mod render;
pub mod terminal;

pub use terminal::{FixedLocation, TerminalList, TerminalMap};
