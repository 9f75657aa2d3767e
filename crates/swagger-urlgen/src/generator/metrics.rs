use strum::Display;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub operations_enumerated: usize,
  pub operations_skipped: usize,
  pub requests_generated: usize,
  pub duplicates_collapsed: usize,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_operation(&mut self, produced: usize, collapsed: usize) {
    self.operations_enumerated += 1;
    self.requests_generated += produced - collapsed;
    self.duplicates_collapsed += collapsed;
  }

  pub fn record_skipped_operation(&mut self, warning: GenerationWarning) {
    self.operations_skipped += 1;
    self.record_warning(warning);
  }

  pub fn record_warning(&mut self, warning: GenerationWarning) {
    self.warnings.push(warning);
  }

  pub fn record_warnings(&mut self, warnings: impl IntoIterator<Item = GenerationWarning>) {
    self.warnings.extend(warnings);
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "Unknown swagger spec version '{version}', continuing")]
  UnsupportedVersion { version: String },
  #[strum(to_string = "Document declares no schemes, no request URLs can be built")]
  NoSchemes,
  #[strum(to_string = "[{operation_id}] Could not resolve parameter reference '{reference}'")]
  UnresolvedParameter { operation_id: String, reference: String },
  #[strum(
    to_string = "Skipped operation '{operation_id}': {count} optional query parameters exceed the limit of {limit}"
  )]
  TooManyOptionalParameters {
    operation_id: String,
    count: usize,
    limit: usize,
  },
}

impl GenerationWarning {
  pub fn is_skipped_item(&self) -> bool {
    matches!(self, Self::TooManyOptionalParameters { .. })
  }
}
