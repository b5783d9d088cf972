//! Assembly of the final TypeScript module.
//!
//! Interfaces are keyed by name. Inserting a name that already exists replaces
//! the earlier declaration in place (last write wins) and hands the replaced
//! value back so callers can report the collision.

use indexmap::IndexMap;

pub(crate) const DEFAULT_CLASS_NAME: &str = "APIHelpers";

const IMPORTS: &str = "import Base, { RequestOptions } from './Base';\n\
                       import { APIRequestContext, expect } from '@playwright/test';\n";

const OPTIONS_INTERFACE: &str = "export interface options extends RequestOptions {\n  validateSuccess?: boolean;\n}\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedInterface {
  pub name: String,
  pub declaration: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMethod {
  pub name: String,
  pub body: String,
}

/// Values for the comment block at the top of the module.
#[derive(Debug, Clone, Default)]
pub struct ModuleHeader {
  pub title: String,
  pub version: String,
  pub description: Option<String>,
  pub source: String,
}

impl ModuleHeader {
  fn render(&self) -> String {
    let title = if self.title.is_empty() { "Untitled API" } else { &self.title };
    let mut out = format!(
      "// AUTO-GENERATED CODE - DO NOT EDIT!\n\
       //\n\
       // {title}\n\
       // Source: {}\n\
       // Version: {}\n\
       // Generated by `oas3-playwright-gen`\n",
      self.source, self.version
    );

    if let Some(description) = self.description.as_deref().filter(|text| !text.trim().is_empty()) {
      out.push_str("//\n");
      for line in description.trim_end().lines() {
        out.push_str(format!("// {line}").trim_end());
        out.push('\n');
      }
    }

    out
  }
}

#[derive(Debug, Default)]
pub(crate) struct ModuleBuilder {
  interfaces: IndexMap<String, GeneratedInterface>,
  methods: Vec<GeneratedMethod>,
}

impl ModuleBuilder {
  /// Adds an interface, returning the declaration it replaced, if any.
  pub(crate) fn add_interface(&mut self, interface: GeneratedInterface) -> Option<GeneratedInterface> {
    self.interfaces.insert(interface.name.clone(), interface)
  }

  /// Appends a method, returning `false` when one with the same name was
  /// already added. Both are kept.
  pub(crate) fn add_method(&mut self, method: GeneratedMethod) -> bool {
    let unique = self.methods.iter().all(|existing| existing.name != method.name);
    self.methods.push(method);
    unique
  }

  pub(crate) fn interface_count(&self) -> usize {
    self.interfaces.len()
  }

  pub(crate) fn method_count(&self) -> usize {
    self.methods.len()
  }

  pub(crate) fn finish(self, header: &ModuleHeader, class_name: &str) -> String {
    let mut out = header.render();
    out.push('\n');
    out.push_str(IMPORTS);
    out.push('\n');

    for interface in self.interfaces.into_values() {
      out.push_str(&interface.declaration);
      out.push_str("\n\n");
    }

    out.push_str(OPTIONS_INTERFACE);
    out.push('\n');
    out.push_str(&class_declaration(class_name, &self.methods));
    out
  }
}

fn class_declaration(class_name: &str, methods: &[GeneratedMethod]) -> String {
  let mut out = format!(
    "export default class {class_name} extends Base {{\n  \
     constructor(request: APIRequestContext, baseUrl: string) {{\n    \
     super(request, baseUrl);\n  \
     }}\n"
  );

  for method in methods {
    out.push('\n');
    out.push_str(&method.body);
  }

  out.push_str("}\n");
  out
}
