//! Command-line interface for projcat.
//!
//! Combines every selected file under a root directory into one text file,
//! or lists the file extensions present with `--list-extensions`.

use clap::{ArgAction, Parser};
use projcat::{DEFAULT_OUTPUT, ProjcatBuilder, ProjcatError, list_extensions, projcat};
use std::path::PathBuf;
use std::process::exit;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = "\
Examples:
  # Combine all files in the current project (including subdirectories):
  projcat

  # Combine only Python files from a specific project:
  projcat --root /path/to/project --include \"**.py\"

  # Combine Python files from models directories:
  projcat --include \"**/models/**.py\"

  # Combine multiple file types:
  projcat --include \"**.py\" \"**.java\" \"**.c\"

  # See all file types in your project:
  projcat --list-extensions";

/// Concatenate project files into a single file
#[derive(Parser)]
#[command(name = "projcat", version, about, long_about = None, after_help = AFTER_HELP)]
struct Cli {
    /// Root directory of the project
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Output file path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Glob patterns for files to include (e.g. "**.py" "**.java")
    #[arg(short, long, num_args = 0.., action = ArgAction::Append)]
    include: Vec<String>,

    /// Additional glob patterns for files to ignore
    #[arg(short = 'x', long, num_args = 0.., action = ArgAction::Append)]
    ignore: Vec<String>,

    /// Do not show the directory structure in the output
    #[arg(long)]
    no_structure: bool,

    /// List all file extensions found in the project
    #[arg(long)]
    list_extensions: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("projcat={}", level)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let outcome = if cli.list_extensions {
        run_list_extensions(&cli)
    } else {
        run_concat(cli)
    };
    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

fn run_list_extensions(cli: &Cli) -> Result<(), ProjcatError> {
    let extensions = list_extensions(&cli.root)?;
    println!("File extensions found in project:");
    for ext in extensions {
        println!("  {}", ext);
    }
    Ok(())
}

fn run_concat(cli: Cli) -> Result<(), ProjcatError> {
    let include = cli.include.clone();
    let options = ProjcatBuilder::new(cli.root)
        .output(cli.output)
        .include_patterns(cli.include)
        .ignore_patterns(cli.ignore)
        .show_structure(!cli.no_structure)
        .build();

    let result = projcat(&options)?;

    println!("Files have been combined into {}", result.output.display());
    if !include.is_empty() {
        println!("Included patterns: {}", include.join(", "));
    }
    Ok(())
}
