//! Configuration handling for sheetcmp
//!
//! All tunables live here and are threaded explicitly into the components
//! that need them; nothing reads ambient global state.

use std::path::PathBuf;

/// Default export file when none is given
pub const DEFAULT_EXPORT_FILE: &str = "comp_result.xlsx";

/// Rows scanned from the top of a sheet when locating the header
pub const DEFAULT_PREVIEW_ROWS: usize = 20;

/// Non-empty text cells required to call a row header-like
pub const DEFAULT_MIN_NAMED_CELLS: usize = 3;

/// Upper bound on the size of an auto-discovered key combination
pub const DEFAULT_MAX_KEY_COLUMNS: usize = 3;

/// Configuration for a comparison run
#[derive(Debug, Clone)]
pub struct Config {
    /// Base file; auto-detected from the working directory when unset
    pub base_file: Option<PathBuf>,
    /// Compare file; auto-detected from the working directory when unset
    pub compare_file: Option<PathBuf>,
    /// Columns forming the row key; discovered from the base table when empty
    pub key_columns: Vec<String>,
    /// Row cap applied identically to both files
    pub max_rows: Option<usize>,
    /// Export file; None disables the export entirely
    pub export_path: Option<PathBuf>,
    /// For Excel files: read this sheet instead of auto-selecting one
    pub sheet_name: Option<String>,
    /// Print loaded columns, inferred types, and first rows after loading
    pub debug: bool,
    /// Preview window for header location
    pub preview_rows: usize,
    /// Threshold for the header heuristic
    pub min_named_cells: usize,
    /// Bound for key-combination search
    pub max_key_columns: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_file: None,
            compare_file: None,
            key_columns: Vec::new(),
            max_rows: None,
            export_path: Some(PathBuf::from(DEFAULT_EXPORT_FILE)),
            sheet_name: None,
            debug: false,
            preview_rows: DEFAULT_PREVIEW_ROWS,
            min_named_cells: DEFAULT_MIN_NAMED_CELLS,
            max_key_columns: DEFAULT_MAX_KEY_COLUMNS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set explicit input files
    pub fn with_files(mut self, base: PathBuf, compare: PathBuf) -> Self {
        self.base_file = Some(base);
        self.compare_file = Some(compare);
        self
    }

    /// Set key columns for row matching
    pub fn with_key_columns(mut self, keys: Vec<String>) -> Self {
        self.key_columns = keys;
        self
    }

    /// Cap the number of data rows read from each file
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = Some(max_rows);
        self
    }

    /// Set the export file, or disable the export with None
    pub fn with_export_path(mut self, path: Option<PathBuf>) -> Self {
        self.export_path = path;
        self
    }

    /// Set Excel sheet name
    pub fn with_sheet_name(mut self, name: String) -> Self {
        self.sheet_name = Some(name);
        self
    }

    /// Enable the post-load debug dump
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
