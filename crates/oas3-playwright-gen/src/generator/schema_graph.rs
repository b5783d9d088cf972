use std::collections::{BTreeMap, BTreeSet};

use petgraph::{algo::kosaraju_scc, graphmap::DiGraphMap};

use crate::{
  generator::document::{Document, Schema},
  utils::ref_name,
};

/// Reference graph over `components.schemas`.
///
/// Every `$ref` inside a schema becomes an edge to the named schema. A missing
/// target is a leaf and never takes part in a cycle.
#[derive(Debug, Default)]
pub(crate) struct SchemaGraph {
  /// schema_name -> schemas it references
  dependencies: BTreeMap<String, BTreeSet<String>>,
}

impl SchemaGraph {
  pub(crate) fn new(document: &Document) -> Self {
    let dependencies = document
      .components
      .schemas
      .iter()
      .map(|(name, schema)| {
        let mut deps = BTreeSet::new();
        collect_dependencies(schema, &mut deps);
        (name.clone(), deps)
      })
      .collect();

    Self { dependencies }
  }

  /// Strongly connected components that form a cycle, including schemas that
  /// reference themselves. Each cycle is sorted, and cycles are ordered by
  /// their first member.
  pub(crate) fn detect_cycles(&self) -> Vec<Vec<String>> {
    let mut graph = DiGraphMap::<&str, ()>::new();
    for (node, deps) in &self.dependencies {
      graph.add_node(node.as_str());
      for dep in deps {
        graph.add_edge(node.as_str(), dep.as_str(), ());
      }
    }

    let mut cycles = kosaraju_scc(&graph)
      .into_iter()
      .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
      .map(|scc| {
        let mut members = scc.into_iter().map(String::from).collect::<Vec<_>>();
        members.sort();
        members
      })
      .collect::<Vec<_>>();
    cycles.sort();
    cycles
  }
}

fn collect_dependencies(schema: &Schema, deps: &mut BTreeSet<String>) {
  match schema {
    Schema::Reference(reference) => {
      if let Some(name) = ref_name(reference) {
        deps.insert(name.to_string());
      }
    }
    Schema::Array(items) => collect_dependencies(items, deps),
    Schema::Object {
      properties: Some(properties),
      ..
    } => {
      for property in properties.values() {
        collect_dependencies(property, deps);
      }
    }
    Schema::Any | Schema::Primitive(_) | Schema::Object { properties: None, .. } => {}
  }
}
