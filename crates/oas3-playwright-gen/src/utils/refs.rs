/// Extracts the component name a `$ref` points at.
///
/// The name is the trailing segment of the JSON pointer, so
/// `#/components/schemas/Pet` yields `Pet`. The section of the pointer is not
/// checked; the caller decides which component table the name is looked up in.
/// Returns `None` when the pointer ends in `/` or is empty.
pub fn ref_name(ref_path: &str) -> Option<&str> {
  ref_path.rsplit('/').next().filter(|name| !name.is_empty())
}
