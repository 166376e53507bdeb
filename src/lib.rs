//! sheetcmp - Key-based comparison of spreadsheet exports
//!
//! Compares two tabular exports row-by-row on a detected or user-supplied
//! key, reporting per-row field differences and rows present on one side
//! only.

pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod reconcile;
pub mod report;

pub use config::Config;
pub use error::CompareError;
pub use model::Table;
pub use reconcile::Reconciliation;
pub use report::Report;
