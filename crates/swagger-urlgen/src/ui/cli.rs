use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, Colors, ThemeMode};
use crate::generator::{descriptor::LineTemplate, orchestrator::DEFAULT_MAX_OPTIONAL_PARAMETERS};

#[derive(Parser, Debug)]
#[command(name = "swagger-urlgen")]
#[command(author, version, about = "Enumerate every request shape described by a Swagger 2.0 document")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from a Swagger specification
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Write one line per request combination to the output file
  Generate(GenerateCommand),
}

#[derive(Args, Debug)]
pub struct GenerateCommand {
  /// Path to the Swagger 2.0 JSON or YAML document
  #[arg(short, long, value_name = "FILE", default_value = "target/swagger.json")]
  pub input: PathBuf,

  /// Path where the request lines will be written
  #[arg(short, long, value_name = "FILE", default_value = "target/requests.txt")]
  pub output: PathBuf,

  /// Print the request lines to stdout instead of writing the output file
  #[arg(long, default_value_t = false, conflicts_with = "output")]
  pub stdout: bool,

  /// Host used in every URL instead of the document's `host`
  #[arg(long, value_name = "HOST")]
  pub host: Option<String>,

  /// Line template; `{produces}`, `{httpMethod}` and `{url}` are substituted
  #[arg(short, long, value_name = "TEMPLATE", default_value = LineTemplate::DEFAULT)]
  pub template: String,

  /// Skip operations with more optional query parameters than this
  #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_OPTIONAL_PARAMETERS)]
  pub max_optional: usize,

  /// Include only specific operations (comma-separated operation ids)
  #[arg(long, value_name = "IDS", value_delimiter = ',')]
  pub only: Option<Vec<String>>,

  /// Exclude specific operations (comma-separated operation ids)
  #[arg(long, value_name = "IDS", value_delimiter = ',')]
  pub exclude: Option<Vec<String>>,

  /// Enable verbose output, printing every generated line
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List all operations with the number of requests each one expands to
  Operations {
    /// Path to the Swagger 2.0 JSON or YAML document
    #[arg(short, long, value_name = "FILE", default_value = "target/swagger.json")]
    input: PathBuf,

    /// Report operations with more optional query parameters than this as skipped
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_OPTIONAL_PARAMETERS)]
    max_optional: usize,
  },
}
