use crate::generator::module_assembler::{GeneratedInterface, GeneratedMethod, ModuleBuilder, ModuleHeader};

fn interface(name: &str, body: &str) -> GeneratedInterface {
  GeneratedInterface {
    name: name.to_string(),
    declaration: format!("export interface {name} {body}"),
  }
}

fn header() -> ModuleHeader {
  ModuleHeader {
    title: "Petstore".to_string(),
    version: "1.0.0".to_string(),
    description: None,
    source: "petstore.json".to_string(),
  }
}

#[test]
fn test_module_layout() {
  let mut builder = ModuleBuilder::default();
  builder.add_interface(interface("InterfaceGetPetsParams", "{\n}"));
  builder.add_method(GeneratedMethod {
    name: "getPets".to_string(),
    body: "  public async getPets() {}\n".to_string(),
  });

  let code = builder.finish(&header(), "PetstoreHelpers");
  let expected = "// AUTO-GENERATED CODE - DO NOT EDIT!
//
// Petstore
// Source: petstore.json
// Version: 1.0.0
// Generated by `oas3-playwright-gen`

import Base, { RequestOptions } from './Base';
import { APIRequestContext, expect } from '@playwright/test';

export interface InterfaceGetPetsParams {
}

export interface options extends RequestOptions {
  validateSuccess?: boolean;
}

export default class PetstoreHelpers extends Base {
  constructor(request: APIRequestContext, baseUrl: string) {
    super(request, baseUrl);
  }

  public async getPets() {}
}
";

  assert_eq!(code, expected);
}

#[test]
fn test_interface_collision_last_write_wins() {
  let mut builder = ModuleBuilder::default();
  assert!(builder.add_interface(interface("InterfaceA", "{ first: 1 }")).is_none());
  assert!(builder.add_interface(interface("InterfaceB", "{ b: 1 }")).is_none());

  let replaced = builder.add_interface(interface("InterfaceA", "{ second: 2 }"));
  assert_eq!(replaced, Some(interface("InterfaceA", "{ first: 1 }")));
  assert_eq!(builder.interface_count(), 2);

  let code = builder.finish(&header(), "APIHelpers");
  assert!(!code.contains("first: 1"));
  let a = code.find("export interface InterfaceA { second: 2 }").expect("replacement is emitted");
  let b = code.find("export interface InterfaceB").expect("second interface is emitted");
  assert!(a < b, "replacement keeps the original position");
}

#[test]
fn test_duplicate_method_names_are_reported() {
  let method = || GeneratedMethod {
    name: "getUsersId".to_string(),
    body: "  public async getUsersId() {}\n".to_string(),
  };

  let mut builder = ModuleBuilder::default();
  assert!(builder.add_method(method()));
  assert!(!builder.add_method(method()));
  assert_eq!(builder.method_count(), 2);
}

#[test]
fn test_header_description_and_untitled() {
  let header = ModuleHeader {
    title: String::new(),
    version: "2".to_string(),
    description: Some("Line one\nLine two\n".to_string()),
    source: "https://example.com/openapi.json".to_string(),
  };

  let code = ModuleBuilder::default().finish(&header, "APIHelpers");
  assert!(code.starts_with(
    "// AUTO-GENERATED CODE - DO NOT EDIT!\n//\n// Untitled API\n// Source: https://example.com/openapi.json\n// Version: 2\n// Generated by `oas3-playwright-gen`\n//\n// Line one\n// Line two\n\n"
  ));
  assert!(code.ends_with("    super(request, baseUrl);\n  }\n}\n"));
}
