use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::{
  generator::{document::Document, naming::identifiers::function_name},
  ui::{Colors, colors::comfy, term_width},
  utils::spec::{SpecLoader, SpecSource},
};

/// `(method name, method, path)` for every operation, in document order.
fn operation_rows(document: &Document) -> Vec<(String, String, String)> {
  document
    .paths
    .iter()
    .flat_map(|(path, item)| {
      item
        .operations
        .keys()
        .map(move |&method| (function_name(method, path), method.harness_verb(), path.clone()))
    })
    .collect()
}

pub async fn list_operations(input: &str, colors: &Colors) -> anyhow::Result<()> {
  let document = SpecLoader::open(&SpecSource::parse(input)).await?.parse()?;

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut header = Row::new();
  for title in ["METHOD NAME", "METHOD", "PATH"] {
    header.add_cell(Cell::new(title).fg(comfy(colors.label())));
  }
  table.set_header(header);

  for (name, method, path) in operation_rows(&document) {
    let mut row = Row::new();
    row.add_cell(Cell::new(name).fg(comfy(colors.value())).add_attribute(Attribute::Bold));
    row.add_cell(
      Cell::new(method)
        .fg(comfy(colors.accent()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(Cell::new(path).fg(comfy(colors.primary())));
    table.add_row(row);
  }

  println!("{table}");

  Ok(())
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn test_operation_rows_follow_document_order() {
    let document: Document = serde_json::from_value(json!({
      "paths": {
        "/pets/{petId}": {"delete": {}, "get": {}},
        "/pets": {"post": {}}
      }
    }))
    .unwrap();

    assert_eq!(
      operation_rows(&document),
      [
        ("deletePetsPetid".to_string(), "DELETE".to_string(), "/pets/{petId}".to_string()),
        ("getPetsPetid".to_string(), "GET".to_string(), "/pets/{petId}".to_string()),
        ("postPets".to_string(), "POST".to_string(), "/pets".to_string()),
      ]
    );
  }
}
