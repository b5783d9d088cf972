use std::collections::HashSet;

use serde_json::Value;

use crate::generator::{
  document::{Document, HttpMethod},
  operation_emitter::{EmittedOperation, OperationEmitter},
  operation_registry::{OperationEntry, OperationFilter, OperationRegistry},
  orchestrator::{GeneratedOutput, GeneratorConfig, Orchestrator},
  type_resolver::TypeResolver,
};

pub(super) fn parse_document(value: Value) -> Document {
  serde_json::from_value(value).expect("failed to parse test document")
}

pub(super) fn string_set(values: &[&str]) -> HashSet<String> {
  values.iter().map(|value| (*value).to_string()).collect::<HashSet<_>>()
}

pub(super) fn generate(document: Document) -> GeneratedOutput {
  generate_with(document, GeneratorConfig::default())
}

pub(super) fn generate_with(document: Document, config: GeneratorConfig) -> GeneratedOutput {
  Orchestrator::new(document, config)
    .generate("openapi.json")
    .expect("generation should succeed")
}

pub(super) fn find_entry<'a>(registry: &'a OperationRegistry<'a>, method: HttpMethod, path: &str) -> &'a OperationEntry<'a> {
  registry
    .operations()
    .find(|entry| entry.method == method && entry.path == path)
    .unwrap_or_else(|| panic!("operation {method} {path} should be registered"))
}

/// Emits a single operation of `document`.
pub(super) fn emit(document: &Document, method: HttpMethod, path: &str) -> EmittedOperation {
  let registry = OperationRegistry::new(document, &OperationFilter::default()).expect("registry should build");
  let entry = find_entry(&registry, method, path);
  OperationEmitter::new(TypeResolver::new(document))
    .emit(entry)
    .expect("operation should emit")
}

pub(super) fn assert_contains(code: &str, expected: &str, context: &str) {
  assert!(code.contains(expected), "missing {context}: expected '{expected}' in\n{code}");
}
