use thiserror::Error;

/// Failures that abort a generation run. Nothing is written when one occurs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
  #[error("reference '{reference}' does not resolve to a component")]
  UnresolvedReference { reference: String },
  #[error("cyclic schema reference: {}", .chain.join(" -> "))]
  CyclicSchema { chain: Vec<String> },
}

impl GenerationError {
  pub(crate) fn unresolved(reference: &str) -> Self {
    Self::UnresolvedReference {
      reference: reference.to_string(),
    }
  }
}
