mod types;


use indexmap::IndexMap;
pub use types::{Operation, ParameterOrRef, PathItem, RawParameter, SwaggerDocument, scalar_text};

use crate::generator::parameter::{Parameter, ParameterLocation};

const LOCAL_PARAMETER_PREFIX: &str = "#/parameters/";

impl RawParameter {
  /// Converts the raw record into the enumeration model.
  ///
  /// Never fails: an unknown `in` classifies as unsupported and enum values
  /// of any scalar type become text.
  #[must_use]
  pub fn to_parameter(&self) -> Parameter {
    Parameter::builder()
      .name(self.name.as_str())
      .location(ParameterLocation::classify(&self.location))
      .required(self.required)
      .allowed_values(self.enum_values.iter().map(scalar_text).collect())
      .build()
  }
}

/// Resolves `$ref` parameters against the document-level definitions.
pub struct ParameterResolver<'a> {
  definitions: &'a IndexMap<String, RawParameter>,
}

impl<'a> ParameterResolver<'a> {
  #[must_use]
  pub fn new(document: &'a SwaggerDocument) -> Self {
    Self {
      definitions: &document.parameters,
    }
  }

  /// Returns the referenced definition, or the unresolved reference string.
  pub fn resolve<'p>(&self, parameter: &'p ParameterOrRef) -> Result<&'p RawParameter, &'p str>
  where
    'a: 'p,
  {
    match parameter {
      ParameterOrRef::Inline(raw) => Ok(raw),
      ParameterOrRef::Ref { reference } => reference
        .strip_prefix(LOCAL_PARAMETER_PREFIX)
        .and_then(|name| self.definitions.get(name))
        .ok_or(reference.as_str()),
    }
  }

  /// Collects an operation's effective parameters.
  ///
  /// Path-level parameters come first; an operation-level parameter with the
  /// same name and location replaces the inherited one. Unresolvable
  /// references are returned separately and left out.
  #[must_use]
  pub fn collect(&self, path_item: &PathItem, operation: &Operation) -> (Vec<Parameter>, Vec<String>) {
    let mut params: Vec<Parameter> = vec![];
    let mut unresolved = vec![];

    for entry in path_item.parameters.iter().chain(&operation.parameters) {
      match self.resolve(entry) {
        Ok(raw) => {
          let param = raw.to_parameter();
          params.retain(|p| p.location != param.location || p.name != param.name);
          params.push(param);
        }
        Err(reference) => unresolved.push(reference.to_string()),
      }
    }

    (params, unresolved)
  }
}
