//! TypeScript type expressions produced by the resolver.
//!
//! Types render in two shapes: a multi-line form used in declarations, where
//! object literals are indented by nesting depth, and a single-line form used
//! inside JSDoc tags.

use std::fmt;

const INDENT: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TsPrimitive {
  String,
  Number,
  Boolean,
}

impl TsPrimitive {
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::String => "string",
      Self::Number => "number",
      Self::Boolean => "boolean",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsType {
  /// `any`, optionally followed by an inline `/* note */`.
  Any { note: Option<String> },
  Primitive(TsPrimitive),
  Array(Box<TsType>),
  Object(Vec<TsProperty>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsProperty {
  pub name: String,
  pub optional: bool,
  pub ty: TsType,
}

impl TsProperty {
  pub fn optional(name: impl Into<String>, ty: TsType) -> Self {
    Self {
      name: name.into(),
      optional: true,
      ty,
    }
  }

  fn declaration(&self, depth: usize) -> String {
    format!(
      "{}{}{}: {};",
      INDENT.repeat(depth),
      property_key(&self.name),
      if self.optional { "?" } else { "" },
      self.ty.render(depth)
    )
  }

  fn inline(&self, notes: bool) -> String {
    format!(
      "{}{}: {}",
      property_key(&self.name),
      if self.optional { "?" } else { "" },
      self.ty.inline_with(notes)
    )
  }
}

impl TsType {
  pub const fn any() -> Self {
    Self::Any { note: None }
  }

  pub fn annotated_any(note: &str) -> Self {
    Self::Any {
      note: Some(note.replace("*/", "*\\/")),
    }
  }

  pub const fn is_bare_any(&self) -> bool {
    matches!(self, Self::Any { note: None })
  }

  pub const fn is_primitive(&self) -> bool {
    matches!(self, Self::Primitive(_))
  }

  pub const fn is_object_literal(&self) -> bool {
    matches!(self, Self::Object(_))
  }

  /// Bare primitives, bare `any`, and arrays of either carry no structure worth
  /// a named declaration.
  pub fn is_unstructured(&self) -> bool {
    match self {
      Self::Array(inner) => inner.is_primitive() || inner.is_bare_any(),
      other => other.is_primitive() || other.is_bare_any(),
    }
  }

  /// Renders the type as it appears in a declaration nested `depth` levels deep.
  pub fn render(&self, depth: usize) -> String {
    match self {
      Self::Object(properties) => {
        let mut out = String::from("{\n");
        for property in properties {
          out.push_str(&property.declaration(depth + 1));
          out.push('\n');
        }
        out.push_str(&INDENT.repeat(depth));
        out.push('}');
        out
      }
      Self::Array(inner) => format!("{}[]", inner.render(depth)),
      other => other.inline(),
    }
  }

  /// Renders the type on a single line.
  pub fn inline(&self) -> String {
    self.inline_with(true)
  }

  /// Single-line form for JSDoc tags. Notes on `any` are dropped since their
  /// comment would end the surrounding doc block.
  pub fn doc_inline(&self) -> String {
    self.inline_with(false)
  }

  fn inline_with(&self, notes: bool) -> String {
    match self {
      Self::Any { note: Some(note) } if notes => format!("any /* {note} */"),
      Self::Any { .. } => "any".to_string(),
      Self::Primitive(primitive) => primitive.as_str().to_string(),
      Self::Array(inner) => format!("{}[]", inner.inline_with(notes)),
      Self::Object(properties) if properties.is_empty() => "{}".to_string(),
      Self::Object(properties) => {
        let parts = properties.iter().map(|property| property.inline(notes)).collect::<Vec<_>>();
        format!("{{ {} }}", parts.join("; "))
      }
    }
  }
}

impl fmt::Display for TsType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.render(0))
  }
}

/// Whether `name` can be used as a bare identifier or property key.
pub fn is_identifier(name: &str) -> bool {
  let mut chars = name.chars();
  chars
    .next()
    .is_some_and(|first| first.is_ascii_alphabetic() || first == '_' || first == '$')
    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Wraps `value` in single quotes, escaping backslashes and quotes.
pub fn single_quoted(value: &str) -> String {
  format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// Property key as written in an interface or object literal.
pub fn property_key(name: &str) -> String {
  if is_identifier(name) {
    name.to_string()
  } else {
    single_quoted(name)
  }
}

/// Expression reading `name` from the `params` argument of a helper.
pub fn params_access(name: &str) -> String {
  if is_identifier(name) {
    format!("params.{name}")
  } else {
    format!("params[{}]", single_quoted(name))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn object(properties: Vec<TsProperty>) -> TsType {
    TsType::Object(properties)
  }

  #[test]
  fn test_render_nested_object() {
    let ty = object(vec![
      TsProperty::optional("id", TsType::Primitive(TsPrimitive::Number)),
      TsProperty::optional(
        "owner",
        object(vec![TsProperty::optional("name", TsType::Primitive(TsPrimitive::String))]),
      ),
    ]);

    assert_eq!(
      ty.render(0),
      "{\n  id?: number;\n  owner?: {\n    name?: string;\n  };\n}"
    );
    assert_eq!(ty.inline(), "{ id?: number; owner?: { name?: string } }");
  }

  #[test]
  fn test_render_empty_object() {
    assert_eq!(object(vec![]).render(0), "{\n}");
    assert_eq!(object(vec![]).inline(), "{}");
  }

  #[test]
  fn test_render_array_of_objects() {
    let ty = TsType::Array(Box::new(object(vec![TsProperty::optional(
      "tag",
      TsType::Primitive(TsPrimitive::String),
    )])));
    assert_eq!(ty.to_string(), "{\n  tag?: string;\n}[]");
  }

  #[test]
  fn test_annotated_any_escapes_comment_terminator() {
    let ty = TsType::annotated_any("ends */ early");
    assert_eq!(ty.inline(), "any /* ends *\\/ early */");
    assert!(!ty.is_bare_any());
  }

  #[test]
  fn test_doc_inline_drops_any_notes() {
    let ty = TsType::Array(Box::new(object(vec![TsProperty::optional(
      "meta",
      TsType::annotated_any("No description available"),
    )])));
    assert_eq!(ty.doc_inline(), "{ meta?: any }[]");
    assert_eq!(ty.inline(), "{ meta?: any /* No description available */ }[]");
  }

  #[test]
  fn test_unstructured_types() {
    assert!(TsType::any().is_unstructured());
    assert!(TsType::Primitive(TsPrimitive::String).is_unstructured());
    assert!(TsType::Array(Box::new(TsType::Primitive(TsPrimitive::Boolean))).is_unstructured());
    assert!(TsType::Array(Box::new(TsType::any())).is_unstructured());
    assert!(!TsType::annotated_any("free form").is_unstructured());
    assert!(!object(vec![]).is_unstructured());
    assert!(!TsType::Array(Box::new(object(vec![]))).is_unstructured());
  }

  #[test]
  fn test_property_keys_and_access() {
    assert_eq!(property_key("petId"), "petId");
    assert_eq!(property_key("x-api-key"), "'x-api-key'");
    assert_eq!(property_key("2fa"), "'2fa'");
    assert_eq!(params_access("petId"), "params.petId");
    assert_eq!(params_access("pet-id"), "params['pet-id']");
    assert_eq!(single_quoted("it's"), "'it\\'s'");
  }
}
