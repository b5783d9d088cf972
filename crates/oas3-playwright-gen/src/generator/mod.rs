pub mod document;
pub mod errors;
pub mod harness;
pub mod metrics;
pub mod module_assembler;
pub(crate) mod naming;
pub(crate) mod operation_emitter;
pub mod operation_registry;
pub mod orchestrator;
pub(crate) mod parameters;
pub(crate) mod schema_graph;
pub mod ts;
pub(crate) mod type_resolver;

#[cfg(test)]
mod tests;
