use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

mod cmd;
mod location;
mod output;
mod prompts;

use cmd::{cmd_clear, cmd_exists, cmd_get, cmd_ls, cmd_put, cmd_rm, cmd_status};
use location::LocationArgs;
use output::OutputFormat;

/// fh - store and retrieve files in well-known user directories
#[derive(Parser)]
#[command(name = "fh")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable debug logging
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Output format
  #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
  output: OutputFormat,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Store a file (from --file, --json, or stdin)
  Put {
    /// File name, without extension
    name: String,

    /// File extension
    #[arg(long)]
    ext: Option<String>,

    /// Copy the contents of this file
    #[arg(long, conflicts_with = "json")]
    file: Option<std::path::PathBuf>,

    /// Store this JSON value
    #[arg(long)]
    json: Option<String>,

    /// Indent stored JSON
    #[arg(long, requires = "json")]
    pretty: bool,

    #[command(flatten)]
    location: LocationArgs,
  },

  /// Print a stored file to stdout
  Get {
    name: String,

    #[arg(long)]
    ext: Option<String>,

    #[command(flatten)]
    location: LocationArgs,
  },

  /// Remove a stored file
  Rm {
    name: String,

    #[arg(long)]
    ext: Option<String>,

    #[command(flatten)]
    location: LocationArgs,
  },

  /// Remove everything inside the directory
  Clear {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    force: bool,

    #[command(flatten)]
    location: LocationArgs,
  },

  /// Check whether a file exists (exit code 1 if not)
  Exists {
    name: String,

    #[arg(long)]
    ext: Option<String>,

    #[command(flatten)]
    location: LocationArgs,
  },

  /// List the directory's contents
  Ls {
    #[command(flatten)]
    location: LocationArgs,
  },

  /// Show the resolved directory and whether it exists
  Status {
    #[command(flatten)]
    location: LocationArgs,
  },
}

fn main() -> Result<ExitCode> {
  let cli = Cli::parse();

  let default_level = if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  match cli.command {
    Commands::Put {
      name,
      ext,
      file,
      json,
      pretty,
      location,
    } => cmd_put(&name, ext.as_deref(), file.as_deref(), json.as_deref(), pretty, &location),
    Commands::Get { name, ext, location } => cmd_get(&name, ext.as_deref(), &location),
    Commands::Rm { name, ext, location } => cmd_rm(&name, ext.as_deref(), &location),
    Commands::Clear { force, location } => cmd_clear(force, &location),
    Commands::Exists { name, ext, location } => cmd_exists(&name, ext.as_deref(), &location, cli.output),
    Commands::Ls { location } => cmd_ls(&location, cli.output),
    Commands::Status { location } => cmd_status(&location, cli.output),
  }
}
