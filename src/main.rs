//! source-annotate - annotated views of Alterion source
//!
//! Renders a source file with syntax colors, fold markers and parser
//! problems, or summarizes a lexer comparison run.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use source_annotate::annotate::{SourceView, ViewState};
use source_annotate::config::Config;
use source_annotate::error::{AnnotateError, Result};
use source_annotate::output::{self, OutputFormat};
use source_annotate::problems::ErrorIndex;
use source_annotate::results;
use source_annotate::syntax::alterion_table;

/// Annotated views of Alterion source
#[derive(Parser, Debug)]
#[command(name = "source-annotate")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file (defaults to ~/.source-annotate.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a source file
    Render {
        /// Source file to annotate
        #[arg(value_name = "SOURCE")]
        source: PathBuf,

        /// Parser output tree (JSON) carrying problem entries
        #[arg(short, long, value_name = "FILE")]
        problems: Option<PathBuf>,

        /// Output format (overrides the config file)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Collapse the region opening on this line (1-based, repeatable)
        #[arg(short, long, value_name = "LINE")]
        collapse: Vec<usize>,

        /// Open the problem tooltip on this line (1-based, repeatable)
        #[arg(short, long, value_name = "LINE")]
        tooltip: Vec<usize>,

        /// Hide the line number gutter
        #[arg(long)]
        no_line_numbers: bool,
    },
    /// Summarize a lexer results file
    Results {
        /// Results file (JSON array)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// List only tokens whose lexer output differed
        #[arg(short, long)]
        diffs_only: bool,
    },
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true),
        )
        .with(filter)
        .init();
}

fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(AnnotateError::FileNotFound(path.display().to_string()));
    }
    Ok(fs::read_to_string(path)?)
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    debug!(?config, "configuration loaded");

    match args.command {
        Command::Render {
            source,
            problems,
            format,
            collapse,
            tooltip,
            no_line_numbers,
        } => {
            let mut table = alterion_table()?;
            config.apply(&mut table);

            let text = read_file(&source)?;
            let mut view = SourceView::new(&table, &text);
            if let Some(path) = problems {
                let index = ErrorIndex::from_json_str(&read_file(&path)?)?;
                info!(problems = index.len(), "loaded problems");
                view.set_problems(index);
            }

            let mut state = ViewState::default();
            for line in collapse {
                let anchor = to_index(line)?;
                if !view.folds().is_anchor(anchor) {
                    return Err(AnnotateError::Message(format!(
                        "line {} does not open a foldable region",
                        line
                    )));
                }
                state.folds.set_collapsed(anchor, true);
            }
            for line in tooltip {
                let index = to_index(line)?;
                if !state.tooltips.is_open(index) {
                    state.tooltips.toggle(index);
                }
            }

            let lines = view.annotate(&state);
            let line_numbers = config.line_numbers && !no_line_numbers;
            let rendered = match format.unwrap_or(config.format) {
                OutputFormat::Html => output::html_document(&view, &lines, line_numbers),
                OutputFormat::Terminal => output::terminal_document(&view, &lines, line_numbers),
                OutputFormat::Json => output::json_document(&lines)?,
            };
            print!("{}", rendered);
        }
        Command::Results { file, diffs_only } => {
            let all = results::parse_results(&read_file(&file)?)?;
            let summary = results::summarize(&all);
            println!("PASS {}  DIFF {}", summary.pass, summary.diff);

            let shown: Vec<_> = if diffs_only {
                results::diffs_only(&all).collect()
            } else {
                all.iter().collect()
            };
            for r in shown {
                println!(
                    "{:>5}  {:<4}  {}:{}  expected {} {:?}  returned {} {:?}",
                    r.index.map_or_else(|| "-".to_string(), |i| i.to_string()),
                    match r.status {
                        results::Status::Ok => "OK",
                        results::Status::Diff => "DIFF",
                        results::Status::Unknown => "?",
                    },
                    r.line,
                    r.column,
                    r.expected_type,
                    r.expected_value,
                    r.returned_type,
                    r.returned_value
                );
            }
        }
    }

    Ok(())
}

/// Convert a 1-based line number from the command line to an index
fn to_index(line: usize) -> Result<usize> {
    line.checked_sub(1)
        .ok_or_else(|| AnnotateError::Message("line numbers start at 1".to_string()))
}
