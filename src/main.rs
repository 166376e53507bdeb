//! sheetcmp - Key-based comparison of spreadsheet exports

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use termcolor::{ColorChoice, StandardStream};

use sheetcmp::config::{Config, DEFAULT_EXPORT_FILE};
use sheetcmp::error::CompareError;
use sheetcmp::model::{key, KeySet, Table};
use sheetcmp::parser::{self, ParserFactory};
use sheetcmp::reconcile::reconcile;
use sheetcmp::report::{export_excel, render_console, render_table_preview};
use sheetcmp::Report;

/// Key-based comparison of spreadsheet exports (Excel, CSV)
#[derive(Parser, Debug)]
#[command(name = "sheetcmp")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base file (falls back to the first spreadsheet in the working directory)
    #[arg(short, long)]
    base: Option<PathBuf>,

    /// Compare file (falls back to the second spreadsheet in the working directory)
    #[arg(short, long)]
    compare: Option<PathBuf>,

    /// Column(s) to use as the row key, comma-separated. Discovered from the
    /// base file when omitted. A key that is not actually unique expands
    /// matches as a full cross product per duplicated key.
    #[arg(short, long, value_delimiter = ',')]
    keys: Vec<String>,

    /// Limit the number of data rows read from each file
    #[arg(short = 'n', long)]
    max_rows: Option<usize>,

    /// Export the result to this Excel file (overwrites)
    #[arg(short, long, default_value = DEFAULT_EXPORT_FILE)]
    export: PathBuf,

    /// Disable the Excel export
    #[arg(long)]
    no_export: bool,

    /// For Excel files: read this sheet instead of auto-selecting one
    #[arg(long)]
    sheet: Option<String>,

    /// Show loaded column names, inferred types, and first rows
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(has_changes) => {
            if has_changes {
                ExitCode::from(1) // Differences found
            } else {
                ExitCode::SUCCESS // No differences
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<bool> {
    let cli = Cli::parse();

    let config = Config {
        base_file: cli.base,
        compare_file: cli.compare,
        key_columns: cli.keys,
        max_rows: cli.max_rows,
        export_path: (!cli.no_export).then_some(cli.export),
        sheet_name: cli.sheet,
        debug: cli.debug,
        ..Config::default()
    };

    let factory = ParserFactory::new();
    let cwd = std::env::current_dir().context("Failed to read working directory")?;
    let (base_path, compare_path) = parser::resolve_inputs(&config, &factory, &cwd)?;

    println!("Base file: {}", base_path.display());
    println!("Compare file: {}", compare_path.display());

    let mut base = factory
        .parse(&base_path, &config)
        .with_context(|| format!("Failed to parse base file: {}", base_path.display()))?;
    let mut compare = factory
        .parse(&compare_path, &config)
        .with_context(|| format!("Failed to parse compare file: {}", compare_path.display()))?;

    if config.debug {
        let mut stdout = std::io::stdout();
        render_table_preview(&base, &base_path, &mut stdout)?;
        render_table_preview(&compare, &compare_path, &mut stdout)?;
    }

    let key_set = select_key(&config, &base, &compare)?;

    // A single comparable representation on both sides, so numeric keys in
    // one file still match text keys in the other
    base.coerce_columns_to_text(key_set.columns());
    compare.coerce_columns_to_text(key_set.columns());

    let reconciliation = reconcile(&base, &compare, &key_set);
    let report = Report::assemble(&reconciliation);

    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    render_console(&report, &mut stdout)?;

    let stats = &reconciliation.stats;
    println!(
        "\nSummary: ~{} changed, -{} base only, +{} compare only (out of {} / {} rows)",
        stats.changed, stats.base_only, stats.compare_only, stats.base_rows, stats.compare_rows
    );

    if let Some(ref export_path) = config.export_path {
        export_excel(&report, export_path)?;
        println!("\nResults saved to {}", export_path.display());
    }

    Ok(reconciliation.has_changes())
}

/// Validate user-supplied key columns against both tables, or discover a
/// unique key from the base table when none were given.
fn select_key(config: &Config, base: &Table, compare: &Table) -> Result<KeySet> {
    if let Some(key_set) = KeySet::new(config.key_columns.clone()) {
        let missing_base = key::missing_key_columns(base, key_set.columns());
        if !missing_base.is_empty() {
            return Err(CompareError::KeyColumnsMissing {
                side: "base",
                columns: missing_base,
            }
            .into());
        }
        let missing_compare = key::missing_key_columns(compare, key_set.columns());
        if !missing_compare.is_empty() {
            return Err(CompareError::KeyColumnsMissing {
                side: "compare",
                columns: missing_compare,
            }
            .into());
        }
        println!("Using user-defined key column(s): {}", key_set);
        return Ok(key_set);
    }

    let key_set =
        key::find_unique_key(base, config.max_key_columns).ok_or(CompareError::NoUniqueKey)?;
    println!("Detected key column(s): {}", key_set);
    Ok(key_set)
}
