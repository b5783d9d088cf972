use strum::Display;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub operations_converted: usize,
  pub interfaces_generated: usize,
  pub methods_generated: usize,
  pub interface_collisions: usize,
  pub cycles_detected: usize,
  pub cycle_details: Vec<Vec<String>>,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_operation(&mut self) {
    self.operations_converted += 1;
  }

  pub fn record_module_counts(&mut self, interfaces: usize, methods: usize) {
    self.interfaces_generated = interfaces;
    self.methods_generated = methods;
  }

  pub fn record_cycles(&mut self, cycles: Vec<Vec<String>>) {
    self.cycles_detected += cycles.len();
    self.cycle_details.extend(cycles);
  }

  pub fn record_warning(&mut self, warning: GenerationWarning) {
    if matches!(warning, GenerationWarning::InterfaceCollision { .. }) {
      self.interface_collisions += 1;
    }
    self.warnings.push(warning);
  }

  pub fn record_warnings(&mut self, warnings: impl IntoIterator<Item = GenerationWarning>) {
    for warning in warnings {
      self.record_warning(warning);
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "Interface '{name}' from '{method} {path}' replaced an earlier declaration")]
  InterfaceCollision { name: String, method: String, path: String },
  #[strum(to_string = "Placeholder '{{{placeholder}}}' in '{method} {path}' has no matching path parameter")]
  UnmatchedPathPlaceholder {
    method: String,
    path: String,
    placeholder: String,
  },
  #[strum(to_string = "Helper '{name}' from '{method} {path}' has the same name as an earlier helper")]
  DuplicateMethod { name: String, method: String, path: String },
  #[strum(to_string = "Method '{method}' on '{path}' has no harness verb")]
  UnsupportedMethod { method: String, path: String },
}

impl GenerationWarning {
  /// Warnings about operations that were left out of the module entirely.
  pub fn is_skipped_item(&self) -> bool {
    matches!(self, Self::UnsupportedMethod { .. })
  }
}
