use strum::Display;

/// Where a parameter lives in the request.
///
/// Only path and query parameters take part in enumeration. Every other
/// location the document may declare (`header`, `body`, `formData`, ...) is
/// classified as [`ParameterLocation::Unsupported`] and dropped by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ParameterLocation {
  Path,
  Query,
  Unsupported,
}

impl ParameterLocation {
  /// Maps a raw `in` token from the document, ignoring ASCII case.
  #[must_use]
  pub fn classify(token: &str) -> Self {
    if token.eq_ignore_ascii_case("path") {
      Self::Path
    } else if token.eq_ignore_ascii_case("query") {
      Self::Query
    } else {
      Self::Unsupported
    }
  }
}

/// A single named operation input.
///
/// An empty `allowed_values` means the parameter is unrestricted; its
/// placeholder is left in the URL for the caller to fill.
#[derive(Debug, Clone, PartialEq, Eq, Hash, bon::Builder)]
pub struct Parameter {
  #[builder(into)]
  pub name: String,
  pub location: ParameterLocation,
  #[builder(default)]
  pub required: bool,
  #[builder(default)]
  pub allowed_values: Vec<String>,
}

impl Parameter {
  #[must_use]
  pub fn is_restricted(&self) -> bool {
    !self.allowed_values.is_empty()
  }

  #[must_use]
  pub fn is_optional_query(&self) -> bool {
    self.location == ParameterLocation::Query && !self.required
  }
}
