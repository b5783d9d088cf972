use std::{collections::HashSet, path::PathBuf};

use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use crate::{
  generator::{
    document::Document,
    harness::{BASE_HARNESS, BASE_MODULE_FILE, INDEX_MODULE_FILE},
    metrics::GenerationStats,
    orchestrator::{GeneratedOutput, GeneratorConfig, Orchestrator},
    ts::is_identifier,
  },
  ui::{Colors, GenerateCommand},
  utils::spec::{SpecLoader, SpecSource},
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub input: SpecSource,
  pub output: PathBuf,
  pub class_name: String,
  pub write_base: bool,
  pub verbose: bool,
  pub quiet: bool,
  pub only_operations: Option<HashSet<String>>,
  pub excluded_operations: Option<HashSet<String>>,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      input,
      output,
      class_name,
      no_base,
      only,
      exclude,
      verbose,
      quiet,
    } = command;

    if !is_identifier(&class_name) {
      anyhow::bail!("Invalid class name '{class_name}': expected a TypeScript identifier");
    }

    Ok(Self {
      input: SpecSource::parse(&input),
      output,
      class_name,
      write_base: !no_base,
      verbose,
      quiet,
      only_operations: only.map(|ops| ops.into_iter().collect()),
      excluded_operations: exclude.map(|ops| ops.into_iter().collect()),
    })
  }

  async fn load_document(&self) -> anyhow::Result<Document> {
    SpecLoader::open(&self.input).await?.parse()
  }

  fn create_orchestrator(&self, document: Document) -> Orchestrator {
    let config = GeneratorConfig::builder()
      .class_name(self.class_name.clone())
      .maybe_only_operations(self.only_operations.clone())
      .maybe_excluded_operations(self.excluded_operations.clone())
      .build();
    Orchestrator::new(document, config)
  }

  /// Writes `index.ts` and, unless disabled, `Base.ts` into the output directory.
  async fn write_output(&self, code: &str) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(&self.output).await?;
    tokio::fs::write(self.output.join(INDEX_MODULE_FILE), code).await?;
    if self.write_base {
      tokio::fs::write(self.output.join(BASE_MODULE_FILE), BASE_HARNESS).await?;
    }
    Ok(())
  }
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading OpenAPI spec from: {}", self.config.input)
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self) {
    self.info(
      &"Generating Playwright helpers..."
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Operations converted:", stats.operations_converted.to_string());
    self.stat("Methods generated:", stats.methods_generated.to_string());
    self.stat("Interfaces generated:", stats.interfaces_generated.to_string());
    if stats.interface_collisions > 0 {
      self.stat("Interface collisions:", stats.interface_collisions.to_string());
    }
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }

    self.print_cycles(stats);
    self.print_warnings(stats);
  }

  fn print_cycles(&self, stats: &GenerationStats) {
    if stats.cycles_detected == 0 {
      return;
    }

    self.stat("Cycles:", stats.cycles_detected.to_string());

    if self.config.verbose {
      for (i, cycle) in stats.cycle_details.iter().enumerate() {
        println!(
          "              {}: {}",
          format!("Cycle {}", i + 1).with(self.colors.accent()),
          cycle.join(" -> ").with(self.colors.info())
        );
      }
    }
  }

  /// Skipped operations are always shown; other warnings only with `--verbose`.
  fn print_warnings(&self, stats: &GenerationStats) {
    let shown = stats
      .warnings
      .iter()
      .filter(|warning| warning.is_skipped_item() || self.config.verbose)
      .collect::<Vec<_>>();
    if shown.is_empty() {
      return;
    }

    println!();
    for warning in shown {
      let label = if warning.is_skipped_item() { "Skipped:" } else { "Warning:" };
      eprintln!(
        "{} {}",
        label.with(self.colors.accent()),
        warning.to_string().with(self.colors.primary())
      );
    }
  }

  fn log_writing(&self) {
    self.info(
      &format!("Writing to: {}", self.config.output.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_success(&self) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully generated Playwright helpers".with(self.colors.success())
      );
    }
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let document = config.load_document().await?;

  logger.log_generating();
  let orchestrator = config.create_orchestrator(document);
  let GeneratedOutput { code, stats } = orchestrator.generate(&config.input.to_string())?;
  logger.print_statistics(&stats);

  logger.log_writing();
  config.write_output(&code).await?;

  logger.log_success();
  Ok(())
}
