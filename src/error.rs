//! Failure taxonomy for a comparison run.
//!
//! Every variant is fatal: the tool either produces a complete comparison or
//! reports one of these and exits. Malformed command-line options are rejected
//! by the argument parser before any of these can occur.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompareError {
    #[error("base file not found: {0}")]
    BaseFileMissing(PathBuf),

    #[error("compare file not found: {0}")]
    CompareFileMissing(PathBuf),

    #[error("at least two spreadsheet files are required in the working directory, found {found}")]
    NotEnoughInputFiles { found: usize },

    #[error("no usable sheet in {0}")]
    NoUsableSheet(PathBuf),

    #[error("no header row found in {0}")]
    HeaderNotFound(PathBuf),

    #[error("key column(s) missing in the {side} file: {}", .columns.join(", "))]
    KeyColumnsMissing {
        side: &'static str,
        columns: Vec<String>,
    },

    #[error("no unique key columns found in base file")]
    NoUniqueKey,
}
