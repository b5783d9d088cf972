use crate::{
  generator::{
    document::{Document, PrimitiveKind, Schema},
    errors::GenerationError,
    ts::{TsPrimitive, TsProperty, TsType},
  },
  utils::ref_name,
};

pub(crate) const NO_DESCRIPTION: &str = "No description available";

impl From<PrimitiveKind> for TsPrimitive {
  fn from(kind: PrimitiveKind) -> Self {
    match kind {
      PrimitiveKind::String => Self::String,
      PrimitiveKind::Number | PrimitiveKind::Integer => Self::Number,
      PrimitiveKind::Boolean => Self::Boolean,
    }
  }
}

/// Maps schema nodes to TypeScript type expressions.
///
/// References are looked up in `components.schemas`. The chain of references
/// currently being resolved is tracked so that a schema reaching itself fails
/// with [`GenerationError::CyclicSchema`] instead of recursing forever.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TypeResolver<'a> {
  document: &'a Document,
}

impl<'a> TypeResolver<'a> {
  pub(crate) const fn new(document: &'a Document) -> Self {
    Self { document }
  }

  pub(crate) const fn document(&self) -> &'a Document {
    self.document
  }

  pub(crate) fn resolve(&self, schema: &Schema) -> Result<TsType, GenerationError> {
    self.resolve_in_chain(schema, &mut vec![])
  }

  /// Resolves an optional schema; a missing schema is `any`.
  pub(crate) fn resolve_optional(&self, schema: Option<&Schema>) -> Result<TsType, GenerationError> {
    schema.map_or(Ok(TsType::any()), |schema| self.resolve(schema))
  }

  fn resolve_in_chain(&self, schema: &Schema, chain: &mut Vec<String>) -> Result<TsType, GenerationError> {
    match schema {
      Schema::Any => Ok(TsType::any()),
      Schema::Primitive(kind) => Ok(TsType::Primitive((*kind).into())),
      Schema::Array(items) => Ok(TsType::Array(Box::new(self.resolve_in_chain(items, chain)?))),
      Schema::Object {
        properties: None,
        description,
      } => Ok(TsType::annotated_any(description.as_deref().unwrap_or(NO_DESCRIPTION))),
      Schema::Object {
        properties: Some(properties),
        ..
      } => properties
        .iter()
        .map(|(name, property)| Ok(TsProperty::optional(name, self.resolve_in_chain(property, chain)?)))
        .collect::<Result<Vec<_>, _>>()
        .map(TsType::Object),
      Schema::Reference(reference) => self.resolve_reference(reference, chain),
    }
  }

  fn resolve_reference(&self, reference: &str, chain: &mut Vec<String>) -> Result<TsType, GenerationError> {
    let name = ref_name(reference).ok_or_else(|| GenerationError::unresolved(reference))?;

    if chain.iter().any(|entry| entry == name) {
      let mut cycle = chain.clone();
      cycle.push(name.to_string());
      return Err(GenerationError::CyclicSchema { chain: cycle });
    }

    let target = self
      .document
      .schema(name)
      .ok_or_else(|| GenerationError::unresolved(reference))?;

    chain.push(name.to_string());
    let resolved = self.resolve_in_chain(target, chain);
    chain.pop();

    // Aliases of bare primitives resolve to `any`.
    resolved.map(|ty| if ty.is_primitive() { TsType::any() } else { ty })
  }
}
