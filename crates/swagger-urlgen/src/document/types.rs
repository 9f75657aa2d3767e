use http::Method;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// The subset of a Swagger 2.0 document that describes request shapes.
///
/// Every field is optional in the source; absent collections deserialize as
/// empty. Non-string entries of `schemes` and `produces` are skipped, as are
/// `x-` vendor extension keys under `paths`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwaggerDocument {
  #[serde(default)]
  pub swagger: Option<Value>,
  #[serde(default)]
  pub host: Option<String>,
  #[serde(default)]
  pub base_path: Option<String>,
  #[serde(default, deserialize_with = "text_entries")]
  pub schemes: Vec<String>,
  #[serde(default, deserialize_with = "text_entries")]
  pub produces: Vec<String>,
  #[serde(default, deserialize_with = "path_items")]
  pub paths: IndexMap<String, PathItem>,
  #[serde(default)]
  pub parameters: IndexMap<String, RawParameter>,
}

impl SwaggerDocument {
  pub const SUPPORTED_VERSION: &'static str = "2.0";

  /// The `swagger` field as text, if present.
  #[must_use]
  pub fn version(&self) -> Option<String> {
    self.swagger.as_ref().map(scalar_text)
  }

  #[must_use]
  pub fn is_supported_version(&self) -> bool {
    self.version().as_deref() == Some(Self::SUPPORTED_VERSION)
  }

  /// Every `(path, method, operation)` triple in document order.
  pub fn operations(&self) -> impl Iterator<Item = (&str, Method, &Operation, &PathItem)> {
    self.paths.iter().flat_map(|(path, item)| {
      item
        .methods()
        .into_iter()
        .map(move |(method, operation)| (path.as_str(), method, operation, item))
    })
  }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PathItem {
  pub get: Option<Operation>,
  pub put: Option<Operation>,
  pub post: Option<Operation>,
  pub delete: Option<Operation>,
  pub options: Option<Operation>,
  pub head: Option<Operation>,
  pub patch: Option<Operation>,
  #[serde(default)]
  pub parameters: Vec<ParameterOrRef>,
}

impl PathItem {
  #[must_use]
  pub fn methods(&self) -> Vec<(Method, &Operation)> {
    [
      (Method::GET, &self.get),
      (Method::PUT, &self.put),
      (Method::POST, &self.post),
      (Method::DELETE, &self.delete),
      (Method::OPTIONS, &self.options),
      (Method::HEAD, &self.head),
      (Method::PATCH, &self.patch),
    ]
    .into_iter()
    .filter_map(|(method, operation)| operation.as_ref().map(|op| (method, op)))
    .collect()
  }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
  #[serde(default)]
  pub operation_id: Option<String>,
  /// Overrides the document-level `produces` when present, even if empty.
  #[serde(default, deserialize_with = "optional_text_entries")]
  pub produces: Option<Vec<String>>,
  #[serde(default)]
  pub parameters: Vec<ParameterOrRef>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ParameterOrRef {
  Ref {
    #[serde(rename = "$ref")]
    reference: String,
  },
  Inline(RawParameter),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawParameter {
  pub name: String,
  #[serde(rename = "in")]
  pub location: String,
  #[serde(default)]
  pub required: bool,
  #[serde(default, rename = "enum")]
  pub enum_values: Vec<Value>,
}

/// Renders a scalar JSON value the way it reads in a URL.
#[must_use]
pub fn scalar_text(value: &Value) -> String {
  match value {
    Value::String(s) => s.clone(),
    other => other.to_string(),
  }
}

/// Keys of the Paths object reserved for vendor extensions.
const EXTENSION_PREFIX: &str = "x-";

/// Decodes the Paths object, skipping `x-` vendor extensions.
fn path_items<'de, D>(deserializer: D) -> Result<IndexMap<String, PathItem>, D::Error>
where
  D: Deserializer<'de>,
{
  Option::<IndexMap<String, Value>>::deserialize(deserializer)?
    .unwrap_or_default()
    .into_iter()
    .filter(|(path, _)| !path.starts_with(EXTENSION_PREFIX))
    .map(|(path, item)| {
      serde_json::from_value(item)
        .map(|item| (path, item))
        .map_err(serde::de::Error::custom)
    })
    .collect()
}

/// String entries of an array; anything else in it is skipped.
fn texts(value: Value) -> Option<Vec<String>> {
  let Value::Array(items) = value else {
    return None;
  };
  Some(
    items
      .into_iter()
      .filter_map(|item| match item {
        Value::String(text) => Some(text),
        _ => None,
      })
      .collect(),
  )
}

fn text_entries<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(texts(Value::deserialize(deserializer)?).unwrap_or_default())
}

/// Like [`text_entries`], but only an array counts as present.
fn optional_text_entries<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(texts(Value::deserialize(deserializer)?))
}
