use std::collections::BTreeSet;

use http::Method;

use crate::{
  document::SwaggerDocument,
  generator::{
    context::{GlobalContext, OperationContext},
    descriptor::RequestDescriptor,
    parameter::{Parameter, ParameterLocation},
  },
};

pub(super) fn global(produces: &[&str]) -> GlobalContext {
  GlobalContext::builder()
    .schemes(vec!["https".to_string()])
    .host("api.example.com")
    .base_path("/v1")
    .produces(produces.iter().map(|p| (*p).to_string()).collect())
    .build()
}

pub(super) fn get_context(path: &str, produces: &[&str]) -> OperationContext {
  OperationContext::new(&global(produces), path, &Method::GET)
}

pub(super) fn query(name: &str, required: bool) -> Parameter {
  Parameter::builder()
    .name(name)
    .location(ParameterLocation::Query)
    .required(required)
    .build()
}

pub(super) fn path_enum(name: &str, values: &[&str]) -> Parameter {
  Parameter::builder()
    .name(name)
    .location(ParameterLocation::Path)
    .required(true)
    .allowed_values(values.iter().map(|v| (*v).to_string()).collect())
    .build()
}

pub(super) fn query_enum(name: &str, required: bool, values: &[&str]) -> Parameter {
  Parameter::builder()
    .name(name)
    .location(ParameterLocation::Query)
    .required(required)
    .allowed_values(values.iter().map(|v| (*v).to_string()).collect())
    .build()
}

pub(super) fn urls(descriptors: &BTreeSet<RequestDescriptor>) -> Vec<&str> {
  descriptors.iter().map(|d| d.url.as_str()).collect()
}

/// `(url, method, media type)` triples in set order.
pub(super) fn shapes(descriptors: &BTreeSet<RequestDescriptor>) -> Vec<(&str, &str, &str)> {
  descriptors
    .iter()
    .map(|d| (d.url.as_str(), d.http_method.as_str(), d.media_type_str()))
    .collect()
}

pub(super) fn parse_document(json: &str) -> SwaggerDocument {
  serde_json::from_str(json).expect("failed to parse test document")
}
