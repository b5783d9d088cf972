mod module_assembler;
mod support;
mod type_resolver;
