//! CLI entry point for grid-suite.
//!
//! Browses the built-in datasets interactively, or prints one page of a
//! grid or one record's detail view for scripting.
//!
//! # Usage
//!
//! ```bash
//! grid-suite [OPTIONS] <COMMAND>
//!
//! # Interactive TUI, starting at the logs grid
//! grid-suite browse --dataset logs --log-file grid-suite.log
//!
//! # Critical findings, sorted by id descending
//! grid-suite list vulnerabilities --filter severity=critical --sort id --desc
//!
//! # One record as JSON
//! grid-suite show logs 101 --format json
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

use std::io::Write;
use std::sync::Mutex;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{WrapErr, eyre};
use gs_core::{Config, RecordId, SharedRecord};
use gs_grid::{
    Dataset, DatasetRegistry, GridOptions, GridView, NavigationContext, RecordDetail,
    RenderedValue, detail,
};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use unicode_width::UnicodeWidthStr;

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// Sortable, filterable, paginated data grids over built-in datasets.
#[derive(Parser)]
#[command(name = "grid-suite", version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    command: Commands,

    /// Path to a JSON configuration file.
    #[arg(short, long, global = true, env = "GRID_SUITE_CONFIG")]
    config: Option<Utf8PathBuf>,

    /// Rows per page (overrides the configuration).
    #[arg(long, global = true)]
    page_size: Option<usize>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Start the interactive TUI.
    Browse {
        /// Open this dataset's grid instead of the home view.
        #[arg(short, long)]
        dataset: Option<String>,

        /// Write logs to this file while the TUI runs (off by default).
        #[arg(long)]
        log_file: Option<Utf8PathBuf>,
    },

    /// List registered datasets.
    Datasets,

    /// Print one page of a dataset grid.
    List {
        /// Dataset id.
        dataset: String,

        /// Column filter as KEY=TEXT (case-insensitive substring match).
        #[arg(short, long = "filter", value_parser = parse_filter)]
        filters: Vec<(String, String)>,

        /// Field key to sort by.
        #[arg(short, long)]
        sort: Option<String>,

        /// Sort descending.
        #[arg(long, requires = "sort")]
        desc: bool,

        /// Page to print, 1-based.
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Output format.
        #[arg(long, value_enum, default_value_t = ListFormat::Table)]
        format: ListFormat,
    },

    /// Print the detail view of one record.
    Show {
        /// Dataset id.
        dataset: String,

        /// Record id.
        id: String,

        /// Output format.
        #[arg(long, value_enum, default_value_t = ShowFormat::Text)]
        format: ShowFormat,
    },
}

/// Output format of `list`.
#[derive(Clone, Copy, ValueEnum)]
enum ListFormat {
    /// Aligned columns.
    Table,
    /// JSON object with page info and rows.
    Json,
}

/// Output format of `show`.
#[derive(Clone, Copy, ValueEnum)]
enum ShowFormat {
    /// One `Label: value` line per field.
    Text,
    /// The rendered detail as JSON.
    Json,
}

/// Parses a `KEY=TEXT` filter argument.
fn parse_filter(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((key, text)) if !key.is_empty() => Ok((key.to_owned(), text.to_owned())),
        _ => Err(format!("expected KEY=TEXT, got '{arg}'")),
    }
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "info" };
        EnvFilter::new(format!("{level},mio=warn"))
    })
}

/// Initializes the tracing subscriber for logging to stderr.
///
/// Respects the `RUST_LOG` environment variable if set. Otherwise, uses
/// `debug` level if `--verbose` is set, or `info` level by default.
fn init_tracing(verbose: bool, no_color: bool) {
    let use_ansi = !no_color && std::env::var("NO_COLOR").is_err();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(use_ansi)
                .with_writer(std::io::stderr),
        )
        .with(env_filter(verbose))
        .init();
}

/// Initializes tracing into `path`, so log lines stay off the TUI screen.
fn init_file_tracing(verbose: bool, path: &Utf8Path) -> color_eyre::Result<()> {
    let file = std::fs::File::create(path)
        .wrap_err_with(|| format!("Failed to create log file: {path}"))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(env_filter(verbose))
        .init();
    Ok(())
}

/// Builds a [`Config`] from the config file and CLI overrides.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or an override is invalid.
fn build_config(cli: &Cli) -> color_eyre::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(page_size) = cli.page_size {
        if page_size == 0 {
            return Err(eyre!("--page-size must be positive"));
        }
        config.grid.page_size = page_size;
        if !config.grid.page_size_options.contains(&page_size) {
            config.grid.page_size_options.push(page_size);
            config.grid.page_size_options.sort_unstable();
        }
    }

    config.validate()?;
    Ok(config)
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

/// Runs the interactive TUI.
///
/// # Errors
///
/// Returns an error if the start dataset is unknown or the TUI fails.
async fn run_browse(
    config: Config,
    registry: DatasetRegistry,
    dataset: Option<&str>,
) -> color_eyre::Result<()> {
    info!(dataset = ?dataset, "Starting TUI");

    // Handle SIGTERM for graceful shutdown on Unix
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigterm = signal(SignalKind::terminate())?;

        tokio::select! {
            result = gs_tui::run(config, registry, dataset) => {
                result.wrap_err("TUI error")?;
            }
            _ = sigterm.recv() => {
                info!("Received SIGTERM, shutting down");
            }
        }
    }

    #[cfg(not(unix))]
    {
        gs_tui::run(config, registry, dataset)
            .await
            .wrap_err("TUI error")?;
    }

    Ok(())
}

/// Prints the registered datasets.
fn run_datasets(registry: &DatasetRegistry, out: &mut impl Write) -> color_eyre::Result<()> {
    let rows: Vec<Vec<String>> = registry
        .iter()
        .map(|dataset| {
            vec![
                dataset.id().to_string(),
                dataset.title().to_owned(),
                dataset.records().len().to_string(),
            ]
        })
        .collect();
    write_table(out, &["ID", "TITLE", "RECORDS"], &rows)?;
    Ok(())
}

/// Options of the `list` command.
struct ListArgs<'a> {
    filters: &'a [(String, String)],
    sort: Option<&'a str>,
    desc: bool,
    page: usize,
}

/// Opens `dataset`'s grid and applies filters, sort, and page.
///
/// # Errors
///
/// Returns an error on an unknown filter or sort column.
fn query_grid(
    dataset: &Dataset,
    options: &GridOptions,
    args: &ListArgs<'_>,
) -> color_eyre::Result<GridView<SharedRecord>> {
    let mut grid = dataset.open_grid(options);

    for (key, text) in args.filters {
        grid.set_filter(key, text)?;
    }
    if let Some(key) = args.sort {
        grid.toggle_sort(key)?;
        if args.desc {
            grid.toggle_sort(key)?;
        }
    }

    grid.go_to_page(args.page);
    let meta = grid.page_meta();
    if meta.page != args.page {
        warn!(requested = args.page, shown = meta.page, "Page out of range");
    }
    Ok(grid)
}

/// Prints one page of a grid.
fn write_list(
    out: &mut impl Write,
    title: &str,
    grid: &GridView<SharedRecord>,
    format: ListFormat,
) -> color_eyre::Result<()> {
    let meta = grid.page_meta();
    let columns = grid.columns();
    let rows = grid.page_rows();

    match format {
        ListFormat::Table => {
            let headers: Vec<&str> = columns.iter().map(|c| c.header()).collect();
            let cells: Vec<Vec<String>> = rows
                .iter()
                .map(|record| {
                    columns
                        .iter()
                        .map(|column| column.cell_text(record))
                        .collect()
                })
                .collect();

            writeln!(out, "{title}")?;
            writeln!(out)?;
            write_table(out, &headers, &cells)?;
            writeln!(out)?;
            writeln!(
                out,
                "Page {} of {} ({} items) · sorted: {}",
                meta.page,
                meta.total_pages,
                meta.total_items,
                grid.sort()
            )?;
        }
        ListFormat::Json => {
            let json_rows: Vec<serde_json::Value> = rows
                .iter()
                .map(|record| {
                    let row: serde_json::Map<String, serde_json::Value> = columns
                        .iter()
                        .map(|column| {
                            let key = column.field_key().unwrap_or_else(|| column.header());
                            (key.to_owned(), column.cell_text(record).into())
                        })
                        .collect();
                    serde_json::Value::Object(row)
                })
                .collect();
            let filters: serde_json::Map<String, serde_json::Value> = grid
                .filters()
                .iter()
                .map(|(key, text)| (key.to_owned(), text.into()))
                .collect();
            let report = serde_json::json!({
                "dataset": grid.dataset_id().as_str(),
                "title": title,
                "sort": grid.sort().to_string(),
                "filters": filters,
                "page": meta,
                "rows": json_rows,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
    }
    Ok(())
}

/// Resolves one record the way the grid's row activation would.
///
/// # Errors
///
/// Returns an error if the dataset or record does not exist.
fn resolve_record(
    registry: &DatasetRegistry,
    dataset: &str,
    id: &str,
) -> color_eyre::Result<RecordDetail> {
    let dataset = registry.resolve(dataset)?;
    let context = NavigationContext {
        record_id: RecordId::parse(id),
        dataset_id: dataset.id().clone(),
        origin_path: dataset.id().grid_path(),
    };
    Ok(detail::resolve(registry, &context.record_id, Some(&context))?)
}

/// Prints a record detail.
fn write_detail(
    out: &mut impl Write,
    detail: &RecordDetail,
    format: ShowFormat,
) -> color_eyre::Result<()> {
    match format {
        ShowFormat::Text => {
            writeln!(out, "{}", detail.heading())?;
            writeln!(out)?;
            for field in &detail.fields {
                match &field.value {
                    RenderedValue::Block { text } => {
                        writeln!(out, "{}:", field.label())?;
                        for line in text.lines() {
                            writeln!(out, "    {line}")?;
                        }
                    }
                    value => writeln!(out, "{}: {value}", field.label())?,
                }
            }
        }
        ShowFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(detail)?)?;
        }
    }
    Ok(())
}

// =============================================================================
// OUTPUT HELPERS
// =============================================================================

/// Writes left-aligned columns separated by two spaces.
fn write_table<S: AsRef<str>>(
    out: &mut impl Write,
    headers: &[&str],
    rows: &[Vec<S>],
) -> std::io::Result<()> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.as_ref().width());
        }
    }

    write_row(out, &widths, headers.iter().copied())?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_row(out, &widths, rule.iter().map(String::as_str))?;
    for row in rows {
        write_row(out, &widths, row.iter().map(AsRef::as_ref))?;
    }
    Ok(())
}

fn write_row<'a>(
    out: &mut impl Write,
    widths: &[usize],
    cells: impl Iterator<Item = &'a str>,
) -> std::io::Result<()> {
    let mut line = String::new();
    for (i, (cell, width)) in cells.zip(widths).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        line.extend(std::iter::repeat_n(' ', width.saturating_sub(cell.width())));
    }
    writeln!(out, "{}", line.trim_end())
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Application entry point.
#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    // 1. Install color-eyre FIRST (before any potential panics)
    color_eyre::install()?;

    // 2. Parse CLI arguments
    let cli = Cli::parse();

    // 3. Initialize tracing; the TUI only logs to a file
    match &cli.command {
        Commands::Browse {
            log_file: Some(path),
            ..
        } => init_file_tracing(cli.verbose, path)?,
        Commands::Browse { log_file: None, .. } => {}
        _ => init_tracing(cli.verbose, cli.no_color),
    }

    // 4. Load configuration and datasets
    let config = build_config(&cli)?;
    let registry = gs_datasets::default_registry()?;

    // 5. Route to appropriate command
    let stdout = std::io::stdout();
    match &cli.command {
        Commands::Browse { dataset, .. } => run_browse(config, registry, dataset.as_deref()).await,
        Commands::Datasets => run_datasets(&registry, &mut stdout.lock()),
        Commands::List {
            dataset,
            filters,
            sort,
            desc,
            page,
            format,
        } => {
            let dataset = registry.resolve(dataset)?;
            let args = ListArgs {
                filters,
                sort: sort.as_deref(),
                desc: *desc,
                page: *page,
            };
            let grid = query_grid(dataset, &GridOptions::from_config(&config.grid), &args)?;
            write_list(&mut stdout.lock(), dataset.title(), &grid, *format)
        }
        Commands::Show {
            dataset,
            id,
            format,
        } => {
            let detail = resolve_record(&registry, dataset, id)?;
            write_detail(&mut stdout.lock(), &detail, *format)
        }
    }
}
