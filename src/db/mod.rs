pub mod initialize;
pub mod log;
pub mod pool;
pub mod store;

pub use store::{MemoryStore, SqliteStore};
