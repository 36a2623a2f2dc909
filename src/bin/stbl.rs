//! stbl CLI - render `<SimpleTable>` markup into table widgets

#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use log::{debug, warn, LevelFilter};
#[cfg(feature = "cli")]
use serde_json::{Map, Value};
#[cfg(feature = "cli")]
use simpletable::{
    diagnostics::{check_source, format_diagnostics},
    embed::{render_document, render_fragment},
    parse_table,
    utils::merge::merge_layers,
    RenderOutput, SimpleTable, SourceBlock, TableError, TableResult, TableWarning,
};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use std::path::Path;

/// Settings precedence shown in `--help`
#[cfg(feature = "cli")]
const PRECEDENCE_HELP: &str = "Settings precedence (lowest to highest): built-in defaults < --settings file < \
layout flags (--layout, --mobile-layout, --items-per-page, --paginate) < data-* attributes on each block. \
Flags act as global settings, so a block's own data-* attribute wins over them.";

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "stbl")]
#[command(version)]
#[command(about = "SimpleTable - render table markup into responsive table widgets", long_about = None)]
#[command(after_help = PRECEDENCE_HELP)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    render: RenderArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[cfg(feature = "cli")]
#[derive(Args, Clone, Default)]
struct RenderArgs {
    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Global settings file (.json or .toml)
    #[arg(short, long)]
    settings: Option<String>,

    /// Primary layout (global; a block's data-layout wins)
    #[arg(long, value_enum)]
    layout: Option<LayoutArg>,

    /// Layout for narrow viewports (global; a block's data-mobile-layout wins)
    #[arg(long, value_enum)]
    mobile_layout: Option<MobileLayoutArg>,

    /// Rows per page (global; a block's data-items-per-page wins)
    #[arg(long)]
    items_per_page: Option<usize>,

    /// Enable pagination (global; a block's data-show-pagination wins)
    #[arg(long)]
    paginate: bool,

    /// Page to show (fragment mode only)
    #[arg(long)]
    page: Option<usize>,

    /// Render a single block and print only the widget
    #[arg(short, long)]
    fragment: bool,

    /// Strict mode: exit with error if any settings warnings occur
    #[arg(long)]
    strict: bool,

    /// Quiet mode: suppress warning output to stderr
    #[arg(short, long)]
    quiet: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Render tables (default action)
    #[command(after_help = PRECEDENCE_HELP)]
    Render(RenderArgs),

    /// Print the parsed table data as JSON
    Inspect {
        /// Input file path
        input: Option<String>,
    },

    /// Check table markup for potential issues
    Check {
        /// Input file to check
        input: Option<String>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum LayoutArg {
    Horizontal,
    Vertical,
    Select,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum MobileLayoutArg {
    Overflow,
    Stack,
    Select,
    None,
}

#[cfg(feature = "cli")]
impl LayoutArg {
    fn name(self) -> &'static str {
        match self {
            LayoutArg::Horizontal => "horizontal",
            LayoutArg::Vertical => "vertical",
            LayoutArg::Select => "select",
        }
    }
}

#[cfg(feature = "cli")]
impl MobileLayoutArg {
    fn name(self) -> &'static str {
        match self {
            MobileLayoutArg::Overflow => "overflow",
            MobileLayoutArg::Stack => "stack",
            MobileLayoutArg::Select => "select",
            MobileLayoutArg::None => "none",
        }
    }
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .parse_default_env()
        .init();

    let result = match cli.command {
        Some(cmd) => handle_subcommand(cmd),
        None => run_render(&cli.render),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn handle_subcommand(cmd: Commands) -> TableResult<()> {
    match cmd {
        Commands::Render(args) => run_render(&args),

        Commands::Inspect { input } => {
            let data = parse_table(&read_input(input.as_deref())?);
            println!("{}", serde_json::to_string_pretty(&data)?);
            Ok(())
        }

        Commands::Check { input, no_color } => {
            let result = check_source(&read_input(input.as_deref())?);
            println!("{}", format_diagnostics(&result, !no_color));
            if result.has_errors() {
                std::process::exit(1);
            }
            Ok(())
        }

        Commands::Info => {
            println!("stbl v{}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Layouts:");
            println!("  ✓ horizontal, vertical (desktop grids)");
            println!("  ✓ stack, select, overflow, none (mobile)");
            println!();
            println!("Features:");
            println!("  ✓ Inline links: label [href=\"url\"]");
            println!("  ✓ Pagination with page windowing");
            println!("  ✓ Settings layers: defaults < --settings file < flags < data-* attributes");
            println!("  ✓ Whole-page embedding and single-block rendering");
            println!("  ✓ Source diagnostics (stbl check)");
            Ok(())
        }
    }
}

#[cfg(feature = "cli")]
fn run_render(args: &RenderArgs) -> TableResult<()> {
    let input = read_input(args.input_file.as_deref())?;

    let file_settings = match args.settings {
        Some(ref path) => load_settings(Path::new(path))?,
        None => Value::Null,
    };
    let global = merge_layers(&[&file_settings, &flag_overrides(args)]);
    debug!("global settings: {}", global);

    let output = if args.fragment {
        render_single(&input, &global, args.page)?
    } else {
        if args.page.is_some() {
            warn!("--page only applies with --fragment; ignoring");
        }
        render_document(&input, &global)
    };

    if !args.quiet && output.has_warnings() {
        print_warnings_to_stderr(&output.warnings);
    }
    if args.strict && output.has_warnings() {
        return Err(TableError::settings(format!(
            "{} settings warning(s) in strict mode",
            output.warnings.len()
        )));
    }

    match args.output {
        Some(ref path) => {
            let mut file = fs::File::create(path)?;
            writeln!(file, "{}", output.html)?;
            eprintln!("✓ {} table(s) written to: {}", output.tables, path);
        }
        None => println!("{}", output.html),
    }

    Ok(())
}

/// Render one block, optionally moving to `page` first
#[cfg(feature = "cli")]
fn render_single(input: &str, global: &Value, page: Option<usize>) -> TableResult<RenderOutput> {
    let Some(page) = page else {
        return Ok(render_fragment(input, global));
    };
    let (mut table, warnings) = SimpleTable::from_source(&SourceBlock::from_markup(input), global);
    table.change_page(page)?;
    let mut output = RenderOutput::new(table.to_html(), 1);
    output.warnings = warnings;
    Ok(output)
}

/// Settings layer built from command line flags
#[cfg(feature = "cli")]
fn flag_overrides(args: &RenderArgs) -> Value {
    let mut map = Map::new();
    if let Some(layout) = args.layout {
        map.insert("layout".into(), Value::from(layout.name()));
    }
    if let Some(mobile) = args.mobile_layout {
        map.insert("mobileLayout".into(), Value::from(mobile.name()));
    }
    if let Some(size) = args.items_per_page {
        map.insert("itemsPerPage".into(), Value::from(size));
    }
    if args.paginate {
        map.insert("showPagination".into(), Value::Bool(true));
    }
    Value::Object(map)
}

/// Load a global settings file; `.toml` files are parsed as TOML, anything else as JSON
#[cfg(feature = "cli")]
fn load_settings(path: &Path) -> TableResult<Value> {
    let content = fs::read_to_string(path)?;
    let is_toml = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("toml"))
        .unwrap_or(false);

    let value: Value = if is_toml {
        toml::from_str(&content).map_err(|e| {
            TableError::settings(format!("failed to parse {}: {}", path.display(), e))
        })?
    } else {
        serde_json::from_str(&content).map_err(|e| {
            TableError::settings(format!("failed to parse {}: {}", path.display(), e))
        })?
    };

    if !value.is_object() {
        return Err(TableError::settings(format!(
            "{} must contain a table of settings",
            path.display()
        )));
    }
    Ok(value)
}

#[cfg(feature = "cli")]
fn read_input(path: Option<&str>) -> TableResult<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[cfg(feature = "cli")]
fn print_warnings_to_stderr(warnings: &[TableWarning]) {
    eprintln!();
    eprintln!("⚠ {} settings warning(s):", warnings.len());
    for warning in warnings {
        eprintln!("  {}", warning);
    }
    eprintln!();
}


#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install simpletable --features cli");
    eprintln!("  stbl [OPTIONS] [INPUT_FILE]");
}
