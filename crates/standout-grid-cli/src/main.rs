//! `gridview`: render CSV or JSON records as a terminal table.
//!
//! ```text
//! gridview data.csv --box rounded --title "Inventory"
//! curl -s api/items | gridview --format json --lines
//! gridview --list-boxes
//! ```

mod input;

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde_json::Value;
use standout_grid::{
    BoxStyle, Cell, CellAdapter, Column, IntoCell, JsonAdapter, Table, TableError, TableOptions,
};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use input::{Format, Records};

const FALLBACK_WIDTH: usize = 80;

#[derive(Debug, Parser)]
#[command(name = "gridview", version, about = "Render CSV or JSON records as a table")]
struct Args {
    /// Input file; reads stdin when omitted or `-`
    file: Option<PathBuf>,

    /// Input format; guessed from the file extension when omitted
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Box style name, or `none` for no grid
    #[arg(long = "box", value_name = "NAME")]
    box_name: Option<String>,

    /// Table width; defaults to the terminal width
    #[arg(long)]
    width: Option<usize>,

    /// YAML file with table options
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    caption: Option<String>,

    /// Hide the header row
    #[arg(long)]
    no_header: bool,

    /// Hide the outer frame
    #[arg(long)]
    no_edge: bool,

    /// Separate every row with a line
    #[arg(long)]
    lines: bool,

    /// Fill the full width
    #[arg(long)]
    expand: bool,

    /// Only ASCII glyphs
    #[arg(long)]
    ascii: bool,

    /// No colors or text attributes
    #[arg(long)]
    plain: bool,

    /// Show a sample of every box style and exit
    #[arg(long)]
    list_boxes: bool,

    /// More logging on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Scalars become text, arrays and objects their compact JSON.
struct CompactAdapter;

impl CellAdapter for CompactAdapter {
    fn adapt(&self, value: &Value) -> Result<Cell, TableError> {
        match value {
            Value::Array(_) | Value::Object(_) => Ok(value.to_string().into_cell()),
            scalar => JsonAdapter.adapt(scalar),
        }
    }
}

fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn terminal_width() -> Option<usize> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as usize)
}

/// `--width` wins over the terminal, which wins over the fallback.
fn render_width(requested: Option<usize>, terminal: Option<usize>) -> usize {
    requested.or(terminal).unwrap_or(FALLBACK_WIDTH)
}

fn parse_box(name: &str) -> Result<Option<BoxStyle>> {
    if name.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    BoxStyle::by_name(name).cloned().map(Some).ok_or_else(|| {
        let known: Vec<&str> = BoxStyle::names().collect();
        anyhow!("unknown box style '{}' (known: {}, none)", name, known.join(", "))
    })
}

fn build_table(args: &Args, records: &Records) -> Result<Table> {
    let options = match &args.config {
        Some(path) => TableOptions::from_path(path)?,
        None => TableOptions::default(),
    };

    let mut table = Table::with_options(options).highlight(!args.plain);
    if let Some(name) = &args.box_name {
        table = table.box_style(parse_box(name)?);
    }
    if let Some(title) = &args.title {
        table = table.title(title.as_str());
    }
    if let Some(caption) = &args.caption {
        table = table.caption(caption.as_str());
    }
    if let Some(width) = args.width {
        table = table.width(width);
    }
    if args.no_header || records.headers.is_empty() {
        table = table.show_header(false);
    }
    if args.no_edge {
        table = table.show_edge(false);
    }
    if args.lines {
        table = table.show_lines(true);
    }
    if args.expand {
        table = table.expand(true);
    }
    if args.ascii {
        table = table.safe_box(true);
    }

    if records.headers.is_empty() {
        for _ in 0..records.width() {
            table.add_column(Column::new());
        }
    }
    for header in &records.headers {
        table.add_column(Column::named(header.as_str()));
    }
    for (index, row) in records.rows.iter().enumerate() {
        table
            .add_row_values(row, &CompactAdapter)
            .with_context(|| format!("record {}", index + 1))?;
    }

    tracing::debug!(
        columns = table.columns().len(),
        rows = table.row_count(),
        "built table"
    );
    Ok(table)
}

fn write_table(out: &mut impl Write, table: &Table, width: usize, plain: bool) -> io::Result<()> {
    if table.columns().is_empty() {
        return writeln!(out);
    }
    for line in table.render(width) {
        if plain {
            writeln!(out, "{}", line.plain())?;
        } else {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

fn list_boxes(out: &mut impl Write, plain: bool) -> Result<()> {
    for style in BoxStyle::all() {
        let mut table = Table::new()
            .box_style((*style).clone())
            .show_footer(true)
            .column(Column::named("Header").footer("Footer"))
            .column(Column::named("Value").footer("42").right());
        table.add_row(["Cell", "1"])?;
        table.add_row(["Cell", "2"])?;
        writeln!(out, "{}", style.name())?;
        write_table(out, &table, FALLBACK_WIDTH, plain)?;
        writeln!(out)?;
    }
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let plain = args.plain || !console::colors_enabled();

    if args.list_boxes {
        list_boxes(&mut out, plain)?;
        out.flush()?;
        return Ok(());
    }

    let path = args.file.as_deref().filter(|p| p.as_os_str() != "-");
    let format = args.format.unwrap_or_else(|| Format::detect(path));
    let reader: Box<dyn Read> = match path {
        Some(path) => Box::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        ),
        None => Box::new(io::stdin().lock()),
    };
    let records = input::read(reader, format)?;
    tracing::debug!(?format, rows = records.rows.len(), "read input");

    let table = build_table(args, &records)?;
    let width = render_width(args.width, terminal_width());
    write_table(&mut out, &table, width, plain)?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("gridview: {err:#}");
            ExitCode::FAILURE
        }
    }
}
