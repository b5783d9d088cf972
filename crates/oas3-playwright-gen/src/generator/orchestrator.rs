//! Orchestration of the OpenAPI to Playwright helper generation pipeline.
//!
//! The [`Orchestrator`] walks the document's operations in document order,
//! emits one helper method per operation, and assembles the module text.
//!
//! ## Usage
//!
//! ```ignore
//! let document = SpecLoader::open(&source).await?.parse()?;
//! let output = Orchestrator::new(document, GeneratorConfig::default()).generate("openapi.json")?;
//!
//! println!("Generated {} methods", output.stats.methods_generated);
//! tokio::fs::write("index.ts", output.code).await?;
//! ```

use std::collections::HashSet;

use anyhow::Context;

use crate::generator::{
  document::Document,
  metrics::{GenerationStats, GenerationWarning},
  module_assembler::{DEFAULT_CLASS_NAME, ModuleBuilder, ModuleHeader},
  operation_emitter::OperationEmitter,
  operation_registry::{OperationFilter, OperationRegistry},
  schema_graph::SchemaGraph,
  type_resolver::TypeResolver,
};

#[derive(Debug, Clone, bon::Builder)]
pub struct GeneratorConfig {
  /// Name of the exported helper class.
  #[builder(default = DEFAULT_CLASS_NAME.to_string(), into)]
  pub class_name: String,
  /// Helper method names to include; everything when unset.
  pub only_operations: Option<HashSet<String>>,
  /// Helper method names to leave out.
  pub excluded_operations: Option<HashSet<String>>,
}

impl Default for GeneratorConfig {
  fn default() -> Self {
    Self::builder().build()
  }
}

#[derive(Debug, Clone)]
pub struct GeneratedOutput {
  /// Text of `index.ts`.
  pub code: String,
  pub stats: GenerationStats,
}

pub struct Orchestrator {
  document: Document,
  config: GeneratorConfig,
}

impl Orchestrator {
  pub fn new(document: Document, config: GeneratorConfig) -> Self {
    Self { document, config }
  }

  /// Values for the file header, with `source` naming the input document.
  pub fn header(&self, source: &str) -> ModuleHeader {
    let (title, version) = self.document.title_and_version();
    ModuleHeader {
      title: title.to_string(),
      version: version.to_string(),
      description: self.document.info.as_ref().and_then(|info| info.description.clone()),
      source: source.to_string(),
    }
  }

  /// Generates the module.
  ///
  /// Schema reference cycles are reported in the stats up front. Resolution
  /// still fails on any cycle an operation actually reaches, as it does on
  /// references that point nowhere; either error aborts the whole run.
  pub fn generate(&self, source: &str) -> anyhow::Result<GeneratedOutput> {
    let mut stats = GenerationStats::default();
    stats.record_cycles(SchemaGraph::new(&self.document).detect_cycles());

    let filter = OperationFilter::new(
      self.config.only_operations.as_ref(),
      self.config.excluded_operations.as_ref(),
    );
    let registry = OperationRegistry::new(&self.document, &filter).context("failed to collect operations")?;
    stats.record_warnings(registry.warnings().iter().cloned());

    let emitter = OperationEmitter::new(TypeResolver::new(&self.document));
    let mut builder = ModuleBuilder::default();

    for entry in registry.operations() {
      let emitted = emitter
        .emit(entry)
        .with_context(|| format!("failed to generate '{} {}'", entry.method, entry.path))?;

      for interface in emitted.interfaces {
        let name = interface.name.clone();
        if builder.add_interface(interface).is_some() {
          stats.record_warning(GenerationWarning::InterfaceCollision {
            name,
            method: entry.method.to_string(),
            path: entry.path.to_string(),
          });
        }
      }

      let name = emitted.method.name.clone();
      if !builder.add_method(emitted.method) {
        stats.record_warning(GenerationWarning::DuplicateMethod {
          name,
          method: entry.method.to_string(),
          path: entry.path.to_string(),
        });
      }
      stats.record_warnings(emitted.warnings);
      stats.record_operation();
    }

    stats.record_module_counts(builder.interface_count(), builder.method_count());
    let code = builder.finish(&self.header(source), &self.config.class_name);

    Ok(GeneratedOutput { code, stats })
  }
}
