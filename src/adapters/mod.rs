// Adapters layer: concrete implementations of the domain ports.

pub mod file;
pub mod sql;

pub use file::{FileAdapter, LocalFileProvider};
pub use sql::UnlinkedSqlProvider;
