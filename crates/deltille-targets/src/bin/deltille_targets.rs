//! deltille-targets CLI: generate printable calibration boards.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Args, Parser, Subcommand};
use deltille_targets::print::{designs, write_design_outputs, DesignConfig, OutputOptions};
use deltille_targets::{BoardSpec, CodeTable, PaperFormat};

#[cfg(not(feature = "tracing"))]
use deltille_targets::core::{init_with_level, level_from_verbosity};
#[cfg(feature = "tracing")]
use tracing_log::LogTracer;

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

const DEFAULT_DESIGN: &str = "a4_checkerboard";

#[derive(Parser)]
#[command(name = "deltille-targets")]
#[command(about = "Generate checkerboard and deltille calibration targets with embedded tags")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a design to SVG pages and a `.dsc` corner description.
    Generate(GenerateArgs),

    /// List built-in designs.
    Designs,

    /// List built-in tag families.
    Families,
}

#[derive(Debug, Clone, Args)]
struct GenerateArgs {
    /// Output path; pages are written next to it as `<stem>-<board>.svg`.
    #[arg(default_value = "pattern.svg")]
    output: PathBuf,

    /// Built-in design name (default: a4_checkerboard).
    #[arg(long, conflicts_with = "config")]
    design: Option<String>,

    /// JSON design file with custom boards.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Offset added to every tag id, e.g. to print a second copy of a target.
    #[arg(long, default_value_t = 0)]
    tag_id_offset: u32,

    /// Paper format (a0, a0b, a1, ..., a5, letter, legal).
    #[arg(long, default_value_t = PaperFormat::A4)]
    paper_format: PaperFormat,

    /// Also write a grayscale PNG preview of every page at this DPI (1 to 600).
    #[arg(long)]
    png_dpi: Option<f64>,

    /// Also write a JSON report next to the description file.
    #[arg(long)]
    json: bool,

    /// Write the resolved design as a JSON config and continue.
    #[arg(long)]
    save_config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Generate(args) => run_generate(&args),
        Commands::Designs => run_designs(),
        Commands::Families => run_families(),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "tracing"))]
fn init_logging(verbose: u8) {
    if let Err(err) = init_with_level(level_from_verbosity(verbose)) {
        eprintln!("warning: logger already installed: {err}");
    }
}

/// With tracing enabled, `RUST_LOG` controls verbosity instead of `-v`.
#[cfg(feature = "tracing")]
fn init_logging(_verbose: u8) {
    let _ = LogTracer::init();
    deltille_targets::core::init_tracing(false);
}

fn load_boards(args: &GenerateArgs) -> CliResult<(String, Vec<BoardSpec>)> {
    if let Some(path) = &args.config {
        let config = DesignConfig::load_json(path)?;
        let name = config
            .name
            .clone()
            .unwrap_or_else(|| path.display().to_string());
        return Ok((name, config.into_boards()));
    }
    let name = args.design.as_deref().unwrap_or(DEFAULT_DESIGN);
    Ok((name.to_string(), designs::design_by_name(name)?))
}

fn run_generate(args: &GenerateArgs) -> CliResult<()> {
    let (name, boards) = load_boards(args)?;
    log::info!("design {name}: {} board(s)", boards.len());

    if let Some(path) = &args.save_config {
        DesignConfig::new(name.clone(), boards.clone()).write_json(path)?;
        println!("wrote design config to {}", path.display());
    }

    let opts = OutputOptions {
        paper: args.paper_format,
        tag_id_offset: args.tag_id_offset,
        png_dpi: args.png_dpi,
        json: args.json,
    };
    let written = write_design_outputs(&CodeTable::builtin(), &boards, &args.output, &opts)?;

    for page in written.pages.iter().chain(&written.previews) {
        println!("wrote {}", page.display());
    }
    println!("wrote {}", written.description.display());
    if let Some(report) = &written.report {
        println!("wrote {}", report.display());
    }
    Ok(())
}

fn run_designs() -> CliResult<()> {
    for name in designs::design_names() {
        let boards = designs::design_by_name(name)?;
        let markers: usize = boards.iter().map(BoardSpec::marker_count).sum();
        println!(
            "{name:<16} {} board(s), {} marker(s), {}",
            boards.len(),
            markers,
            boards
                .first()
                .map(|b| b.tag_family.as_str())
                .unwrap_or("-")
        );
    }
    Ok(())
}

fn run_families() -> CliResult<()> {
    for family in CodeTable::builtin().families() {
        println!(
            "{:<14} {:<10} {:>2} bits  hamming {}  {} codes",
            family.name,
            family.lattice.as_str(),
            family.bit_count,
            family.min_hamming,
            family.len()
        );
    }
    Ok(())
}
