use std::collections::HashSet;

use crate::generator::{
  document::{Document, HttpMethod, Operation, Parameter, PathItem},
  errors::GenerationError,
  metrics::GenerationWarning,
  naming::identifiers::function_name,
};

/// A single (path, method) pair scheduled for emission.
#[derive(Debug, Clone)]
pub struct OperationEntry<'a> {
  /// Name of the generated helper method, also used by the operation filter.
  pub function_name: String,
  pub method: HttpMethod,
  pub path: &'a str,
  pub operation: &'a Operation,
  /// Path-level parameters merged with the operation's own, references resolved.
  pub parameters: Vec<&'a Parameter>,
}

/// Filter for including or excluding operations by helper method name.
///
/// Exclusion takes precedence when a name appears in both sets.
#[derive(Debug, Clone, Default)]
pub struct OperationFilter {
  only: Option<HashSet<String>>,
  excluded: Option<HashSet<String>>,
}

impl OperationFilter {
  #[must_use]
  pub fn new(only: Option<&HashSet<String>>, excluded: Option<&HashSet<String>>) -> Self {
    Self {
      only: only.cloned(),
      excluded: excluded.cloned(),
    }
  }

  #[must_use]
  pub fn accepts<S>(&self, name: S) -> bool
  where
    S: AsRef<str>,
  {
    if let Some(ref included) = self.only
      && !included.contains(name.as_ref())
    {
      return false;
    }

    if let Some(ref excluded) = self.excluded
      && excluded.contains(name.as_ref())
    {
      return false;
    }

    true
  }
}

/// Every operation of the document, in document order.
#[derive(Debug)]
pub struct OperationRegistry<'a> {
  entries: Vec<OperationEntry<'a>>,
  warnings: Vec<GenerationWarning>,
}

impl<'a> OperationRegistry<'a> {
  pub fn new(document: &'a Document, filter: &OperationFilter) -> Result<Self, GenerationError> {
    let mut entries = vec![];
    let mut warnings = vec![];

    for (path, item) in &document.paths {
      warnings.extend(item.skipped_methods.iter().map(|method| GenerationWarning::UnsupportedMethod {
        method: method.clone(),
        path: path.clone(),
      }));

      for (&method, operation) in &item.operations {
        let function_name = function_name(method, path);
        if !filter.accepts(&function_name) {
          continue;
        }

        entries.push(OperationEntry {
          function_name,
          method,
          path,
          operation,
          parameters: collect_parameters(document, item, operation)?,
        });
      }
    }

    Ok(Self { entries, warnings })
  }

  pub fn operations(&self) -> impl Iterator<Item = &OperationEntry<'a>> {
    self.entries.iter()
  }

  /// Methods found in the document that produce no helper.
  pub fn warnings(&self) -> &[GenerationWarning] {
    &self.warnings
  }
}

/// Path-level parameters first, then the operation's own. An operation
/// parameter replaces a path-level one with the same name and location.
fn collect_parameters<'a>(
  document: &'a Document,
  item: &'a PathItem,
  operation: &'a Operation,
) -> Result<Vec<&'a Parameter>, GenerationError> {
  let mut params = item
    .parameters
    .iter()
    .map(|param| document.resolve_parameter(param))
    .collect::<Result<Vec<_>, _>>()?;

  for param_ref in &operation.parameters {
    let param = document.resolve_parameter(param_ref)?;
    params.retain(|p| p.location != param.location || p.name != param.name);
    params.push(param);
  }

  Ok(params)
}
