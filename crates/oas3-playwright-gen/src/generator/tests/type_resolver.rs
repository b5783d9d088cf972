use serde_json::json;

use super::support::parse_document;
use crate::generator::{
  document::Schema,
  errors::GenerationError,
  ts::{TsPrimitive, TsType},
  type_resolver::TypeResolver,
};

fn schema(value: serde_json::Value) -> Schema {
  serde_json::from_value(value).expect("schema should parse")
}

fn resolve_in(document: serde_json::Value, node: serde_json::Value) -> Result<TsType, GenerationError> {
  let document = parse_document(document);
  TypeResolver::new(&document).resolve(&schema(node))
}

fn resolve(node: serde_json::Value) -> String {
  resolve_in(json!({}), node).expect("schema should resolve").to_string()
}

#[test]
fn test_primitive_mapping() {
  let cases = [
    (json!({"type": "string"}), "string"),
    (json!({"type": "number"}), "number"),
    (json!({"type": "integer", "format": "int64"}), "number"),
    (json!({"type": "boolean"}), "boolean"),
    (json!({}), "any"),
    (json!({"type": "null"}), "any"),
    (json!({"type": ["string", "null"]}), "any"),
    (json!({"description": "untyped"}), "any"),
  ];

  for (node, expected) in cases {
    assert_eq!(resolve(node.clone()), expected, "failed for {node}");
  }
}

#[test]
fn test_arrays() {
  assert_eq!(resolve(json!({"type": "array", "items": {"type": "string"}})), "string[]");
  assert_eq!(
    resolve(json!({"type": "array", "items": {"type": "array", "items": {"type": "integer"}}})),
    "number[][]"
  );
  assert_eq!(resolve(json!({"type": "array"})), "any[]");
}

#[test]
fn test_object_without_properties() {
  assert_eq!(
    resolve(json!({"type": "object", "description": "Free-form metadata"})),
    "any /* Free-form metadata */"
  );
  assert_eq!(resolve(json!({"type": "object"})), "any /* No description available */");
}

#[test]
fn test_object_properties_are_optional_and_quoted() {
  let resolved = resolve(json!({
    "type": "object",
    "required": ["id"],
    "properties": {
      "id": {"type": "integer"},
      "display-name": {"type": "string"},
      "tags": {"type": "array", "items": {"type": "string"}}
    }
  }));

  assert_eq!(
    resolved,
    "{\n  id?: number;\n  'display-name'?: string;\n  tags?: string[];\n}"
  );
}

#[test]
fn test_reference_to_object_is_inlined() {
  let document = json!({
    "components": {"schemas": {
      "Pet": {"type": "object", "properties": {"name": {"type": "string"}}}
    }}
  });

  let resolved = resolve_in(document, json!({"$ref": "#/components/schemas/Pet"})).unwrap();
  assert_eq!(resolved.to_string(), "{\n  name?: string;\n}");
}

#[test]
fn test_reference_to_primitive_resolves_to_any() {
  let document = json!({
    "components": {"schemas": {
      "Tag": {"type": "string"},
      "Count": {"type": "integer"},
      "Tags": {"type": "array", "items": {"$ref": "#/components/schemas/Tag"}}
    }}
  });

  for (reference, expected) in [
    ("#/components/schemas/Tag", "any"),
    ("#/components/schemas/Count", "any"),
    ("#/components/schemas/Tags", "any[]"),
  ] {
    let resolved = resolve_in(document.clone(), json!({"$ref": reference})).unwrap();
    assert_eq!(resolved.to_string(), expected, "failed for {reference}");
  }
}

#[test]
fn test_ref_wins_over_type() {
  let document = json!({
    "components": {"schemas": {"Flag": {"type": "object", "properties": {"on": {"type": "boolean"}}}}}
  });
  let resolved = resolve_in(document, json!({"type": "string", "$ref": "#/components/schemas/Flag"})).unwrap();
  assert!(resolved.is_object_literal());
}

#[test]
fn test_unresolved_reference_is_an_error() {
  let err = resolve_in(json!({}), json!({"$ref": "#/components/schemas/Missing"})).unwrap_err();
  assert_eq!(
    err,
    GenerationError::UnresolvedReference {
      reference: "#/components/schemas/Missing".to_string()
    }
  );
}

#[test]
fn test_cyclic_reference_is_an_error() {
  let document = json!({
    "components": {"schemas": {
      "Node": {"type": "object", "properties": {
        "value": {"type": "string"},
        "next": {"$ref": "#/components/schemas/Node"}
      }}
    }}
  });

  let err = resolve_in(document, json!({"$ref": "#/components/schemas/Node"})).unwrap_err();
  assert_eq!(
    err,
    GenerationError::CyclicSchema {
      chain: vec!["Node".to_string(), "Node".to_string()]
    }
  );
  assert_eq!(err.to_string(), "cyclic schema reference: Node -> Node");
}

#[test]
fn test_mutual_cycle_reports_chain() {
  let document = json!({
    "components": {"schemas": {
      "A": {"type": "object", "properties": {"b": {"$ref": "#/components/schemas/B"}}},
      "B": {"type": "array", "items": {"$ref": "#/components/schemas/A"}}
    }}
  });

  let err = resolve_in(document, json!({"$ref": "#/components/schemas/A"})).unwrap_err();
  assert_eq!(
    err,
    GenerationError::CyclicSchema {
      chain: vec!["A".to_string(), "B".to_string(), "A".to_string()]
    }
  );
}

#[test]
fn test_shared_reference_is_not_a_cycle() {
  let document = json!({
    "components": {"schemas": {
      "Money": {"type": "object", "properties": {"amount": {"type": "number"}}},
      "Order": {"type": "object", "properties": {
        "total": {"$ref": "#/components/schemas/Money"},
        "tax": {"$ref": "#/components/schemas/Money"}
      }}
    }}
  });

  let resolved = resolve_in(document, json!({"$ref": "#/components/schemas/Order"})).unwrap();
  assert_eq!(
    resolved.to_string(),
    "{\n  total?: {\n    amount?: number;\n  };\n  tax?: {\n    amount?: number;\n  };\n}"
  );
}

#[test]
fn test_missing_schema_is_any() {
  let document = parse_document(json!({}));
  let resolved = TypeResolver::new(&document).resolve_optional(None).unwrap();
  assert_eq!(resolved, TsType::any());
  assert_ne!(resolved, TsType::Primitive(TsPrimitive::String));
}
