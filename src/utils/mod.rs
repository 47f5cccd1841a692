pub mod formatting;
pub mod logging;
pub mod number;
pub mod path;
