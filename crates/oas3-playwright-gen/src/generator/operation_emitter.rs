//! Per-operation code generation.
//!
//! Each piece of a helper method (endpoint template, header merge, query
//! string assembly, invocation, status assertion, JSDoc) is produced by a small
//! function returning its source text. [`OperationEmitter::emit`] stitches them
//! together and collects the interfaces the method refers to.

use std::sync::LazyLock;

use indexmap::IndexMap;
use itertools::Itertools;
use regex::{Captures, Regex};

use crate::generator::{
  document::{HttpMethod, Parameter, ParameterLocation, Response},
  errors::GenerationError,
  metrics::GenerationWarning,
  module_assembler::{GeneratedInterface, GeneratedMethod},
  naming::identifiers::{InterfaceKind, interface_name},
  operation_registry::OperationEntry,
  parameters::ClassifiedParameters,
  ts::{TsType, params_access, single_quoted},
  type_resolver::TypeResolver,
};

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{([^{}]+)\}").unwrap());

const METHOD_INDENT: &str = "  ";

/// Everything one operation contributes to the module.
#[derive(Debug, Clone)]
pub(crate) struct EmittedOperation {
  pub(crate) method: GeneratedMethod,
  /// The params interface first, then the body declaration when there is one.
  pub(crate) interfaces: Vec<GeneratedInterface>,
  pub(crate) warnings: Vec<GenerationWarning>,
}

/// How the request body appears in the generated method.
#[derive(Debug, Clone, PartialEq, Eq)]
enum BodyType {
  /// Typed as `any`; no declaration is emitted.
  Untyped,
  /// Typed through a named declaration.
  Named { name: String, declaration: String },
}

impl BodyType {
  fn annotation(&self) -> &str {
    match self {
      Self::Untyped => "any",
      Self::Named { name, .. } => name,
    }
  }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct OperationEmitter<'a> {
  resolver: TypeResolver<'a>,
}

impl<'a> OperationEmitter<'a> {
  pub(crate) const fn new(resolver: TypeResolver<'a>) -> Self {
    Self { resolver }
  }

  pub(crate) fn emit(&self, entry: &OperationEntry<'_>) -> Result<EmittedOperation, GenerationError> {
    let params_name = interface_name(entry.method, entry.path, InterfaceKind::Params);
    let classified = ClassifiedParameters::classify(&self.resolver, &entry.parameters)?;
    let body = self.body_type(entry)?;

    let (endpoint, unmatched) = endpoint_template(entry.path, &classified.path());
    let warnings = unmatched
      .into_iter()
      .map(|placeholder| GenerationWarning::UnmatchedPathPlaceholder {
        method: entry.method.to_string(),
        path: entry.path.to_string(),
        placeholder,
      })
      .collect();

    // The body is forwarded only for methods that carry one.
    let passed_body = entry.method.carries_body().then(|| body.clone().unwrap_or(BodyType::Untyped));

    let mut text = doc_block(entry, &params_name, &classified, passed_body.as_ref());
    text.push_str(&signature(&entry.function_name, &params_name, passed_body.as_ref()));
    text.push_str(&indent(&format!("let requestEndpoint = `{endpoint}`;\n")));
    text.push('\n');
    text.push_str(&indent(&request_options(&classified.header())));

    let query = classified.query();
    if !query.is_empty() {
      text.push('\n');
      text.push_str(&indent(&query_block(&query)));
    }

    text.push('\n');
    text.push_str(&indent(&invocation(entry.method, passed_body.is_some())));

    if let Some(status) = expected_status(&entry.operation.responses) {
      text.push('\n');
      text.push_str(&indent(&validation(status)));
    }

    text.push('\n');
    text.push_str(&indent("return response;\n"));
    text.push_str("}\n");

    let mut interfaces = vec![classified.interface(&params_name)];
    if let Some(BodyType::Named { name, declaration }) = body {
      interfaces.push(GeneratedInterface { name, declaration });
    }

    Ok(EmittedOperation {
      method: GeneratedMethod {
        name: entry.function_name.clone(),
        body: indent_with(&text, METHOD_INDENT),
      },
      interfaces,
      warnings,
    })
  }

  /// Resolves the declared request body, if any.
  ///
  /// Unstructured types are typed as `any`. Object literals become an
  /// `export interface`, anything else an `export type` alias.
  fn body_type(&self, entry: &OperationEntry<'_>) -> Result<Option<BodyType>, GenerationError> {
    let Some(body_ref) = &entry.operation.request_body else {
      return Ok(None);
    };

    let document = self.resolver.document();
    let ty = self
      .resolver
      .resolve_optional(document.resolve_request_body(body_ref)?.schema())?;

    if ty.is_unstructured() {
      return Ok(Some(BodyType::Untyped));
    }

    let name = interface_name(entry.method, entry.path, InterfaceKind::Data);
    let declaration = body_declaration(&name, &ty);
    Ok(Some(BodyType::Named { name, declaration }))
  }
}

fn body_declaration(name: &str, ty: &TsType) -> String {
  if ty.is_object_literal() {
    format!("export interface {name} {}", ty.render(0))
  } else {
    format!("export type {name} = {};", ty.render(0))
  }
}

/// Substitutes every `{name}` that matches a path parameter with
/// `${params.name}`. Returns the template and the placeholder names that
/// matched nothing, which stay literal.
pub(crate) fn endpoint_template(path: &str, path_params: &[&Parameter]) -> (String, Vec<String>) {
  let mut unmatched = vec![];
  let escaped = path.replace('\\', "\\\\").replace('`', "\\`");

  let template = PLACEHOLDER_RE.replace_all(&escaped, |caps: &Captures<'_>| {
    let name = &caps[1];
    if path_params.iter().any(|param| param.name == name) {
      format!("${{{}}}", params_access(name))
    } else {
      if !unmatched.iter().any(|seen| seen == name) {
        unmatched.push(name.to_string());
      }
      caps[0].to_string()
    }
  });

  (template.into_owned(), unmatched)
}

/// The status code asserted under `validateSuccess`: `200` when declared,
/// otherwise the first key that is a numeric status code. `default` and range
/// keys such as `2XX` are skipped rather than asserted, since neither is a
/// valid argument to `toBe`.
pub(crate) fn expected_status(responses: &IndexMap<String, Response>) -> Option<u16> {
  if responses.contains_key("200") {
    return Some(200);
  }
  responses.keys().find_map(|code| code.parse::<u16>().ok())
}

fn doc_text(text: &str) -> String {
  text.split_whitespace().join(" ").replace("*/", "*\\/")
}

fn location_marker(location: ParameterLocation) -> Option<&'static str> {
  match location {
    ParameterLocation::Path => Some("(path parameter)"),
    ParameterLocation::Query => Some("(query parameter)"),
    ParameterLocation::Header => Some("(header parameter)"),
    ParameterLocation::Cookie => None,
  }
}

fn doc_block(
  entry: &OperationEntry<'_>,
  params_name: &str,
  classified: &ClassifiedParameters<'_>,
  body: Option<&BodyType>,
) -> String {
  let mut lines = vec!["/**".to_string()];

  let summary = entry
    .operation
    .summary
    .as_deref()
    .or(entry.operation.description.as_deref())
    .unwrap_or_default();
  let summary_lines = summary.lines().map(str::trim).filter(|line| !line.is_empty()).collect::<Vec<_>>();
  if !summary_lines.is_empty() {
    lines.extend(summary_lines.into_iter().map(|line| format!(" * {}", doc_text(line))));
    lines.push(" *".to_string());
  }

  if entry.operation.deprecated {
    lines.push(" * @deprecated".to_string());
  }

  lines.push(format!(" * @param {{{params_name}}} params - The request parameters"));

  for field in classified.fields() {
    let parameter = field.parameter;
    let description = parameter.description.as_deref().map(doc_text).unwrap_or_default();
    let detail = [
      Some(description.as_str()).filter(|text| !text.is_empty()),
      location_marker(parameter.location),
      parameter.required.then_some("(required)"),
    ]
    .into_iter()
    .flatten()
    .join(" ");

    lines.push(
      format!(
        " * @param {{{}}} {} - {detail}",
        field.ty.doc_inline(),
        params_access(&parameter.name)
      )
      .trim_end()
      .to_string(),
    );
  }

  if let Some(body) = body {
    lines.push(format!(" * @param {{{}}} data - The request body", body.annotation()));
  }

  lines.push(" * @param {object} options - Additional request options".to_string());
  lines.push(
    " * @param {boolean} options.validateSuccess - Whether to validate the response as successful".to_string(),
  );
  lines.push(" */".to_string());

  let mut out = lines.join("\n");
  out.push('\n');
  out
}

fn signature(function_name: &str, params_name: &str, body: Option<&BodyType>) -> String {
  let data = body.map_or_else(String::new, |body| format!("data: {}, ", body.annotation()));
  format!("public async {function_name}(params: {params_name}, {data}options?: options): Promise<any> {{\n")
}

fn request_options(headers: &[&Parameter]) -> String {
  let mut out = String::from("const requestOptions: RequestOptions = {\n  ...options,\n  headers: {\n    ...options?.headers,\n");
  for header in headers {
    let key = single_quoted(&header.name);
    out.push_str(&format!("    {key}: params[{key}],\n"));
  }
  out.push_str("  },\n};\n");
  out
}

/// Query string assembly. Values are appended as-is and the trailing `&` is
/// kept.
fn query_block(query: &[&Parameter]) -> String {
  let mut out = String::from("// Append query parameters\nconst queryParameters = [\n");
  for param in query {
    out.push_str(&format!("  {},\n", single_quoted(&param.name)));
  }
  out.push_str(
    "];\n\n\
     if (params) {\n  \
     requestEndpoint += '?';\n  \
     Object.entries(params).map(([key, value]) => {\n    \
     if (queryParameters.includes(key)) {\n      \
     requestEndpoint += `${key}=${value}&`;\n    \
     }\n  \
     });\n\
     }\n",
  );
  out
}

fn invocation(method: HttpMethod, with_body: bool) -> String {
  let data = if with_body { "data, " } else { "" };
  format!(
    "const response = await this.{}(requestEndpoint, {data}requestOptions);\n",
    method.harness_verb()
  )
}

fn validation(status: u16) -> String {
  format!(
    "// Validate response if validateSuccess is true\n\
     if (options?.validateSuccess) {{\n  \
     expect(response.status()).toBe({status});\n\
     }}\n"
  )
}

fn indent(text: &str) -> String {
  indent_with(text, METHOD_INDENT)
}

/// Prefixes every non-empty line with `prefix`.
fn indent_with(text: &str, prefix: &str) -> String {
  text
    .split_inclusive('\n')
    .map(|line| {
      if line.trim().is_empty() {
        line.trim_start_matches([' ', '\t']).to_string()
      } else {
        format!("{prefix}{line}")
      }
    })
    .collect()
}
