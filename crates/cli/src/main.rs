// Command-line front end for the text comparison engine
// Compares two files and prints the result inline, unified or as totals

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use log::{debug, info};
use text_compare::{DiffMode, DiffResult, Options};

const USAGE: &str = "\
Usage: text-compare <old_file> <new_file> [options]

Options:
  --mode=<character|word>        Comparison unit (default: character)
  --ignore-case                  Compare case-insensitively
  --ignore-whitespace            Collapse and trim whitespace before comparing
  --format=<inline|unified|stats>  Output format (default: inline)
  -h, --help                     Show this message

Exits with 0 when the files match, 1 when they differ.";

/// How the result is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum OutputFormat {
    #[default]
    Inline,
    Unified,
    Stats,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "inline" => Ok(OutputFormat::Inline),
            "unified" => Ok(OutputFormat::Unified),
            "stats" => Ok(OutputFormat::Stats),
            other => Err(anyhow!("unknown format `{}`", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Args {
    old_file: PathBuf,
    new_file: PathBuf,
    options: Options,
    format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Help,
    Compare(Args),
}

fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut files = Vec::new();
    let mut options = Options::default();
    let mut format = OutputFormat::default();

    for arg in args {
        if arg == "-h" || arg == "--help" {
            return Ok(Command::Help);
        } else if let Some(mode) = arg.strip_prefix("--mode=") {
            options = options.mode(mode.parse::<DiffMode>()?);
        } else if let Some(name) = arg.strip_prefix("--format=") {
            format = name.parse()?;
        } else if arg == "--ignore-case" {
            options = options.case_sensitive(false);
        } else if arg == "--ignore-whitespace" {
            options = options.ignore_whitespace(true);
        } else if arg.starts_with("--") {
            bail!("unknown option `{}`", arg);
        } else {
            files.push(PathBuf::from(arg));
        }
    }

    let mut files = files.into_iter();
    match (files.next(), files.next(), files.next()) {
        (Some(old_file), Some(new_file), None) => Ok(Command::Compare(Args {
            old_file,
            new_file,
            options,
            format,
        })),
        _ => bail!("expected exactly two files\n\n{}", USAGE),
    }
}

fn render(diff: &DiffResult<'_>, format: OutputFormat) -> String {
    match format {
        OutputFormat::Inline => format!("{}\n", diff.to_inline_markup()),
        OutputFormat::Unified => diff.to_unified_string(),
        OutputFormat::Stats => {
            let stats = diff.stats();
            format!(
                "operations: {}\nequal bytes: {}\ndeleted bytes: {}\ninserted bytes: {}\nsimilarity: {:.3}\n",
                diff.len(),
                stats.equal_bytes,
                stats.deleted_bytes,
                stats.inserted_bytes,
                diff.similarity()
            )
        }
    }
}

fn run(args: Args) -> Result<bool> {
    let old_content = fs::read_to_string(&args.old_file)
        .with_context(|| format!("failed to read {}", args.old_file.display()))?;
    let new_content = fs::read_to_string(&args.new_file)
        .with_context(|| format!("failed to read {}", args.new_file.display()))?;

    info!(
        "comparing {} ({} bytes) with {} ({} bytes)",
        args.old_file.display(),
        old_content.len(),
        args.new_file.display(),
        new_content.len()
    );
    debug!("options: {:?}", args.options);

    let diff = args.options.compare(&old_content, &new_content);
    print!("{}", render(&diff, args.format));

    Ok(diff.has_changes())
}

fn main() -> Result<ExitCode> {
    env_logger::init();

    match parse_args(std::env::args().skip(1))? {
        Command::Help => {
            println!("{}", USAGE);
            Ok(ExitCode::SUCCESS)
        }
        Command::Compare(args) => {
            let differs = run(args)?;
            Ok(if differs {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            })
        }
    }
}
