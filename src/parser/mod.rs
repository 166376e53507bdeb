//! Input layer: format adapters and input-file resolution

pub mod columns;
mod csv;
mod excel;
pub mod header;
pub mod sheet;

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::Config;
use crate::error::CompareError;
use crate::model::Table;

pub use self::csv::CsvParser;
pub use self::excel::ExcelParser;

/// Trait for reading a spreadsheet file into a Table
pub trait SheetParser: Send + Sync {
    /// Parse a file and return a Table
    fn parse(&self, path: &Path, config: &Config) -> Result<Table>;

    /// Check if this parser can handle the given file extension
    fn supports_extension(&self, ext: &str) -> bool;
}

/// Factory for creating parsers based on file extension
pub struct ParserFactory {
    parsers: Vec<Box<dyn SheetParser>>,
}

impl Default for ParserFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ParserFactory {
    /// Create a new parser factory with all supported parsers
    pub fn new() -> Self {
        Self {
            parsers: vec![Box::new(ExcelParser), Box::new(CsvParser)],
        }
    }

    /// Whether any parser handles this path's extension
    pub fn supports(&self, path: &Path) -> bool {
        let ext = extension_of(path);
        self.parsers.iter().any(|p| p.supports_extension(&ext))
    }

    /// Get a parser for the given file path
    pub fn get_parser(&self, path: &Path) -> Result<&dyn SheetParser> {
        let ext = extension_of(path);
        for parser in &self.parsers {
            if parser.supports_extension(&ext) {
                return Ok(parser.as_ref());
            }
        }

        anyhow::bail!(
            "Unsupported file format: {}",
            if ext.is_empty() { "unknown" } else { &ext }
        )
    }

    /// Parse a file using the appropriate parser
    pub fn parse(&self, path: &Path, config: &Config) -> Result<Table> {
        let parser = self.get_parser(path)?;
        parser.parse(path, config)
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

/// Resolve the base and compare files for a run.
///
/// Explicitly named files must exist. Unset sides fall back to the
/// alphabetically first two supported files in `dir`: the base takes the
/// first, the compare takes the second.
pub fn resolve_inputs(
    config: &Config,
    factory: &ParserFactory,
    dir: &Path,
) -> Result<(PathBuf, PathBuf)> {
    if let Some(ref base) = config.base_file {
        if !base.is_file() {
            return Err(CompareError::BaseFileMissing(base.clone()).into());
        }
    }
    if let Some(ref compare) = config.compare_file {
        if !compare.is_file() {
            return Err(CompareError::CompareFileMissing(compare.clone()).into());
        }
    }

    if let (Some(base), Some(compare)) = (&config.base_file, &config.compare_file) {
        return Ok((base.clone(), compare.clone()));
    }

    let mut candidates: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && factory.supports(path))
        .collect();
    candidates.sort();

    if candidates.len() < 2 {
        return Err(CompareError::NotEnoughInputFiles {
            found: candidates.len(),
        }
        .into());
    }

    let base = config.base_file.clone().unwrap_or_else(|| candidates[0].clone());
    let compare = config
        .compare_file
        .clone()
        .unwrap_or_else(|| candidates[1].clone());
    Ok((base, compare))
}
