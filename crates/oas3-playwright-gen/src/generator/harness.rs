//! The request-execution harness the generated module extends.

pub const INDEX_MODULE_FILE: &str = "index.ts";
pub const BASE_MODULE_FILE: &str = "Base.ts";

/// Source of `Base.ts`, written next to `index.ts` unless disabled.
pub const BASE_HARNESS: &str = include_str!("../../templates/base.ts");
