use std::sync::LazyLock;

use regex::Regex;
use strum::Display;

use crate::generator::document::HttpMethod;

pub(crate) const INTERFACE_PREFIX: &str = "Interface";

static INVALID_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap());
static MULTI_UNDERSCORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+").unwrap());

/// Trailing token of a synthesized interface name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub(crate) enum InterfaceKind {
  /// The interface describing the helper's `params` argument.
  Params,
  /// The interface describing the request body.
  Data,
}

/// Replaces every character that cannot appear in an identifier with `_`,
/// collapses runs of `_`, and strips trailing underscores.
///
/// Path separators, template braces and hyphens all fall into the replaced set,
/// so `get_/pets/{petId}` becomes `get_pets_petId`.
pub(crate) fn normalize(input: &str) -> String {
  let replaced = INVALID_CHARS_RE.replace_all(input, "_");
  let collapsed = MULTI_UNDERSCORE_RE.replace_all(&replaced, "_");
  collapsed.trim_end_matches('_').to_string()
}

fn capitalize(segment: &str) -> String {
  let mut chars = segment.chars();
  chars.next().map_or_else(String::new, |first| {
    first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
  })
}

/// Name of the helper method for an operation.
///
/// The first segment is lowercased and every following segment is capitalized
/// with the rest of it lowercased: `get /pets/{petId}` becomes `getPetsPetid`.
pub(crate) fn function_name(method: HttpMethod, path: &str) -> String {
  normalize(&format!("{method}_{path}"))
    .split('_')
    .enumerate()
    .map(|(index, segment)| {
      if index == 0 {
        segment.to_lowercase()
      } else {
        capitalize(segment)
      }
    })
    .collect()
}

/// Name of a generated interface, e.g. `InterfaceGetPetsPetidParams`.
pub(crate) fn interface_name(method: HttpMethod, path: &str, kind: InterfaceKind) -> String {
  let body = normalize(&format!("{method}_{path}_{kind}"))
    .split('_')
    .map(capitalize)
    .collect::<String>();
  format!("{INTERFACE_PREFIX}{body}")
}
