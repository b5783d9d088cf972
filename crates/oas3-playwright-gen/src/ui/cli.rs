use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, Colors, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "oas3-playwright-gen")]
#[command(author, version, about = "OpenAPI to Playwright API helper generator")]
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
  /// List information from an OpenAPI specification
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate TypeScript Playwright helpers from an OpenAPI specification
  Generate(GenerateCommand),
}

#[derive(Args, Debug)]
pub struct GenerateCommand {
  /// Path or http(s) URL of the OpenAPI specification (JSON or YAML)
  #[arg(short, long, value_name = "FILE|URL", env = "SWAGGER_URL")]
  pub input: String,

  /// Directory where index.ts and Base.ts are written
  #[arg(short, long, value_name = "DIR", env = "OUTPUT_DIR")]
  pub output: PathBuf,

  /// Name of the exported helper class
  #[arg(long, value_name = "NAME", default_value = "APIHelpers")]
  pub class_name: String,

  /// Do not write the bundled Base.ts harness
  #[arg(long, default_value_t = false)]
  pub no_base: bool,

  /// Include only specific operations (comma-separated helper method names)
  #[arg(long, value_name = "IDS", value_delimiter = ',')]
  pub only: Option<Vec<String>>,

  /// Exclude specific operations (comma-separated helper method names)
  #[arg(long, value_name = "IDS", value_delimiter = ',')]
  pub exclude: Option<Vec<String>>,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List all operations and the helper method generated for each
  Operations {
    /// Path or http(s) URL of the OpenAPI specification
    #[arg(short, long, value_name = "FILE|URL", env = "SWAGGER_URL")]
    input: String,
  },
}
