//! Data model for tabular data representation

pub mod key;
mod schema;
mod table;

pub use key::KeySet;
pub use schema::{CellType, Column};
pub use table::{CellValue, Row, Table};
