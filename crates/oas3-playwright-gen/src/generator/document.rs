//! Typed model of the OpenAPI document consumed by the generator.
//!
//! Only the parts of OpenAPI 3 that influence the emitted helpers are modelled.
//! Maps are [`IndexMap`]s so that iteration follows document order, which keeps
//! the generated module stable across runs.

use indexmap::IndexMap;
use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString};

use crate::{generator::errors::GenerationError, utils::ref_name};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Document {
  #[serde(default)]
  pub info: Option<Info>,
  #[serde(default)]
  pub paths: IndexMap<String, PathItem>,
  #[serde(default)]
  pub components: Components,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Info {
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub version: String,
  pub description: Option<String>,
}

/// Reusable component tables. Only the tables that can be referenced from an
/// operation are kept.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Components {
  #[serde(default)]
  pub schemas: IndexMap<String, Schema>,
  #[serde(default)]
  pub parameters: IndexMap<String, Parameter>,
  #[serde(default)]
  pub request_bodies: IndexMap<String, RequestBody>,
}

/// HTTP methods that produce a helper method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum HttpMethod {
  Get,
  Put,
  Post,
  Delete,
  Options,
  Head,
  Patch,
}

impl HttpMethod {
  /// Whether the request body is forwarded to the harness for this method.
  pub const fn carries_body(self) -> bool {
    !matches!(self, Self::Get | Self::Delete | Self::Head | Self::Options)
  }

  /// Name of the harness method that executes the request (`GET`, `POST`, ...).
  pub fn harness_verb(self) -> String {
    self.as_ref().to_ascii_uppercase()
  }
}

/// Operations registered under a single path, in document order.
///
/// Keys that are not HTTP methods (`summary`, `servers`, `x-*`, ...) are ignored.
/// `trace` is recognised but has no harness counterpart, so it is only recorded
/// in `skipped_methods`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(try_from = "IndexMap<String, serde_json::Value>")]
pub struct PathItem {
  pub parameters: Vec<MaybeRef<Parameter>>,
  pub operations: IndexMap<HttpMethod, Operation>,
  pub skipped_methods: Vec<String>,
}

const SKIPPED_METHODS: &[&str] = &["trace"];

impl TryFrom<IndexMap<String, serde_json::Value>> for PathItem {
  type Error = serde_json::Error;

  fn try_from(raw: IndexMap<String, serde_json::Value>) -> Result<Self, Self::Error> {
    let mut item = Self::default();

    for (key, value) in raw {
      if key == "parameters" {
        item.parameters = serde_json::from_value(value)?;
      } else if let Ok(method) = key.parse::<HttpMethod>() {
        item.operations.insert(method, serde_json::from_value(value)?);
      } else if SKIPPED_METHODS.contains(&key.as_str()) {
        item.skipped_methods.push(key);
      }
    }

    Ok(item)
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
  pub summary: Option<String>,
  pub description: Option<String>,
  #[serde(default)]
  pub deprecated: bool,
  #[serde(default)]
  pub parameters: Vec<MaybeRef<Parameter>>,
  pub request_body: Option<MaybeRef<RequestBody>>,
  #[serde(default)]
  pub responses: IndexMap<String, Response>,
}

/// Either an inline object or a `$ref` into the document's components.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MaybeRef<T> {
  Ref {
    #[serde(rename = "$ref")]
    ref_path: String,
  },
  Inline(T),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ParameterLocation {
  Path,
  Query,
  Header,
  Cookie,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Parameter {
  pub name: String,
  #[serde(rename = "in")]
  pub location: ParameterLocation,
  #[serde(default)]
  pub required: bool,
  pub schema: Option<Schema>,
  pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestBody {
  pub description: Option<String>,
  #[serde(default)]
  pub content: IndexMap<String, MediaType>,
}

impl RequestBody {
  /// Schema of the first declared media type.
  pub fn schema(&self) -> Option<&Schema> {
    self.content.values().next().and_then(|media| media.schema.as_ref())
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaType {
  pub schema: Option<Schema>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
  pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
  String,
  Number,
  Integer,
  Boolean,
}

/// A schema node reduced to the shapes the generator distinguishes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "RawSchema")]
pub enum Schema {
  /// No usable `type` and no `$ref`.
  #[default]
  Any,
  Primitive(PrimitiveKind),
  Array(Box<Schema>),
  Object {
    properties: Option<IndexMap<String, Schema>>,
    description: Option<String>,
  },
  Reference(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawSchemaType {
  Single(String),
  Multiple(Vec<String>),
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawSchema {
  #[serde(rename = "type")]
  schema_type: Option<RawSchemaType>,
  #[serde(rename = "$ref")]
  ref_path: Option<String>,
  items: Option<Box<Schema>>,
  properties: Option<IndexMap<String, Schema>>,
  description: Option<String>,
}

impl From<RawSchema> for Schema {
  fn from(raw: RawSchema) -> Self {
    if let Some(reference) = raw.ref_path {
      return Self::Reference(reference);
    }

    let Some(RawSchemaType::Single(kind)) = raw.schema_type else {
      return Self::Any;
    };

    match kind.as_str() {
      "string" => Self::Primitive(PrimitiveKind::String),
      "number" => Self::Primitive(PrimitiveKind::Number),
      "integer" => Self::Primitive(PrimitiveKind::Integer),
      "boolean" => Self::Primitive(PrimitiveKind::Boolean),
      "array" => Self::Array(raw.items.unwrap_or_default()),
      "object" => Self::Object {
        properties: raw.properties,
        description: raw.description,
      },
      _ => Self::Any,
    }
  }
}

impl Document {
  /// Looks up a shared schema by its component name.
  pub fn schema(&self, name: &str) -> Option<&Schema> {
    self.components.schemas.get(name)
  }

  pub fn resolve_parameter<'a>(&'a self, parameter: &'a MaybeRef<Parameter>) -> Result<&'a Parameter, GenerationError> {
    match parameter {
      MaybeRef::Inline(parameter) => Ok(parameter),
      MaybeRef::Ref { ref_path } => ref_name(ref_path)
        .and_then(|name| self.components.parameters.get(name))
        .ok_or_else(|| GenerationError::unresolved(ref_path)),
    }
  }

  pub fn resolve_request_body<'a>(
    &'a self,
    request_body: &'a MaybeRef<RequestBody>,
  ) -> Result<&'a RequestBody, GenerationError> {
    match request_body {
      MaybeRef::Inline(body) => Ok(body),
      MaybeRef::Ref { ref_path } => ref_name(ref_path)
        .and_then(|name| self.components.request_bodies.get(name))
        .ok_or_else(|| GenerationError::unresolved(ref_path)),
    }
  }

  /// API title and version for the generated file header.
  pub fn title_and_version(&self) -> (&str, &str) {
    self
      .info
      .as_ref()
      .map_or(("", ""), |info| (info.title.as_str(), info.version.as_str()))
  }
}
