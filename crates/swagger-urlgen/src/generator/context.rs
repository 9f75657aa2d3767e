use std::collections::{BTreeMap, BTreeSet};

use http::Method;

use super::parameter::{Parameter, ParameterLocation};

/// Document-wide defaults shared by every operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
pub struct GlobalContext {
  #[builder(default)]
  pub schemes: Vec<String>,
  #[builder(default, into)]
  pub host: String,
  #[builder(default, into)]
  pub base_path: String,
  #[builder(default)]
  pub produces: Vec<String>,
}

impl GlobalContext {
  /// `basePath` of exactly `/` contributes nothing to the URL.
  #[must_use]
  pub fn normalize_base_path(base_path: &str) -> String {
    if base_path == "/" {
      String::new()
    } else {
      base_path.to_string()
    }
  }

  /// One `scheme://host/basePath` prefix per declared scheme.
  #[must_use]
  pub fn base_urls(&self) -> BTreeSet<String> {
    let base_path = Self::normalize_base_path(&self.base_path);
    self
      .schemes
      .iter()
      .map(|scheme| format!("{scheme}://{}{base_path}", self.host))
      .collect()
  }
}

/// Resolved inputs for enumerating a single operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationContext {
  pub base_urls: BTreeSet<String>,
  pub media_types: BTreeSet<String>,
  pub path_template: String,
  pub http_method: String,
  pub path_parameters: BTreeMap<String, Parameter>,
  pub query_parameters: BTreeMap<String, Parameter>,
}

impl OperationContext {
  /// Starts a context from the document defaults, with no parameters yet.
  #[must_use]
  pub fn new(global: &GlobalContext, path_template: impl Into<String>, method: &Method) -> Self {
    Self {
      base_urls: global.base_urls(),
      media_types: global.produces.iter().cloned().collect(),
      path_template: path_template.into(),
      http_method: method.as_str().to_uppercase(),
      path_parameters: BTreeMap::new(),
      query_parameters: BTreeMap::new(),
    }
  }

  /// Replaces the document-level media types with an operation-level list.
  #[must_use]
  pub fn with_media_types<I, S>(mut self, media_types: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.media_types = media_types.into_iter().map(Into::into).collect();
    self
  }

  /// Sorts parameters into the path and query maps.
  ///
  /// Parameters with an unsupported location are dropped. A later parameter
  /// with the same name and location replaces an earlier one.
  #[must_use]
  pub fn with_parameters(mut self, parameters: impl IntoIterator<Item = Parameter>) -> Self {
    for parameter in parameters {
      match parameter.location {
        ParameterLocation::Path => {
          self.path_parameters.insert(parameter.name.clone(), parameter);
        }
        ParameterLocation::Query => {
          self.query_parameters.insert(parameter.name.clone(), parameter);
        }
        ParameterLocation::Unsupported => {}
      }
    }
    self
  }

  /// Required query parameter names, in ascending order.
  pub fn required_query_names(&self) -> impl Iterator<Item = &str> {
    self
      .query_parameters
      .values()
      .filter(|p| p.required)
      .map(|p| p.name.as_str())
  }

  /// Optional query parameter names, in ascending order.
  #[must_use]
  pub fn optional_query_names(&self) -> Vec<&str> {
    self
      .query_parameters
      .values()
      .filter(|p| p.is_optional_query())
      .map(|p| p.name.as_str())
      .collect()
  }

  /// Looks up an enum-restricted parameter, preferring `preferred` and
  /// falling back to the other supported location.
  #[must_use]
  pub fn restricted_parameter(&self, name: &str, preferred: ParameterLocation) -> Option<&Parameter> {
    let (first, second) = match preferred {
      ParameterLocation::Path => (&self.path_parameters, &self.query_parameters),
      _ => (&self.query_parameters, &self.path_parameters),
    };
    first
      .get(name)
      .or_else(|| second.get(name))
      .filter(|p| p.is_restricted())
  }
}
