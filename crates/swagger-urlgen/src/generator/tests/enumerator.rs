use std::collections::{BTreeSet, HashSet};

use http::Method;

use super::support::{get_context, global, path_enum, query, query_enum, urls};
use crate::generator::{
  context::{GlobalContext, OperationContext},
  enumerator::{enumerate, placeholder_names},
  parameter::{Parameter, ParameterLocation},
};

#[test]
fn test_no_parameters_yields_one_descriptor() {
  let result = enumerate(&get_context("/items", &["application/json"]));

  assert_eq!(result.len(), 1);
  let descriptor = result.first().unwrap();
  assert_eq!(descriptor.url, "https://api.example.com/v1/items");
  assert_eq!(descriptor.http_method, "GET");
  assert_eq!(descriptor.media_type.as_deref(), Some("application/json"));
}

#[test]
fn test_required_and_optional_query_scenario() {
  let ctx = get_context("/items", &["application/json"]).with_parameters([query("id", true), query("verbose", false)]);
  let result = enumerate(&ctx);

  assert_eq!(
    urls(&result),
    vec![
      "https://api.example.com/v1/items?id={id}",
      "https://api.example.com/v1/items?id={id}&verbose={verbose}",
    ]
  );
  assert!(
    result
      .iter()
      .all(|d| d.media_type.as_deref() == Some("application/json") && d.http_method == "GET")
  );
}

#[test]
fn test_optional_parameters_expand_to_power_set() {
  let ctx = get_context("/search", &["application/json"]).with_parameters([
    query("a", false),
    query("b", false),
    query("c", false),
  ]);
  let result = enumerate(&ctx);

  assert_eq!(result.len(), 8);
  let shapes = result
    .iter()
    .map(|d| d.url.split_once('?').map(|(_, q)| q.to_string()).unwrap_or_default())
    .collect::<HashSet<_>>();
  assert_eq!(shapes.len(), 8);
  assert!(shapes.contains(""));
  assert!(shapes.contains("a={a}&b={b}&c={c}"));
  assert!(shapes.contains("b={b}"));
  assert!(result.iter().all(|d| d.url.starts_with("https://api.example.com/v1/search")));
}

#[test]
fn test_path_enum_replaces_placeholder() {
  let ctx = get_context("/items/{status}", &[]).with_parameters([path_enum("status", &["open", "closed"])]);
  let result = enumerate(&ctx);

  assert_eq!(
    urls(&result),
    vec![
      "https://api.example.com/v1/items/closed",
      "https://api.example.com/v1/items/open",
    ]
  );
  assert!(result.iter().all(|d| !d.url.contains("{status}")));
}

#[test]
fn test_empty_media_types_keep_single_variant() {
  let result = enumerate(&get_context("/items", &[]));

  assert_eq!(result.len(), 1);
  assert!(result.first().unwrap().media_type.is_none());
}

#[test]
fn test_media_types_fan_out() {
  let ctx = get_context("/items", &["application/json", "application/xml"]).with_parameters([query("q", false)]);
  let result = enumerate(&ctx);

  assert_eq!(result.len(), 4);
  let media = result
    .iter()
    .filter_map(|d| d.media_type.as_deref())
    .collect::<BTreeSet<_>>();
  assert_eq!(media.into_iter().collect::<Vec<_>>(), vec!["application/json", "application/xml"]);
}

#[test]
fn test_every_scheme_gets_a_base_url() {
  let global = GlobalContext::builder()
    .schemes(vec!["http".to_string(), "https".to_string()])
    .host("h")
    .build();
  let ctx = OperationContext::new(&global, "/ping", &Method::HEAD);
  let result = enumerate(&ctx);

  assert_eq!(urls(&result), vec!["http://h/ping", "https://h/ping"]);
  assert!(result.iter().all(|d| d.http_method == "HEAD"));
}

#[test]
fn test_no_schemes_yields_nothing() {
  let ctx = OperationContext::new(&GlobalContext::default(), "/ping", &Method::GET);
  assert!(enumerate(&ctx).is_empty());
}

#[test]
fn test_multiple_enum_placeholders_combine() {
  let ctx = get_context("/items/{kind}/{size}", &[])
    .with_parameters([path_enum("kind", &["a", "b"]), path_enum("size", &["s", "m", "l"])]);
  let result = enumerate(&ctx);

  assert_eq!(result.len(), 6);
  assert!(result.iter().all(|d| placeholder_names(&d.url).is_empty()));
  assert!(urls(&result).contains(&"https://api.example.com/v1/items/b/m"));
}

#[test]
fn test_unknown_and_unrestricted_placeholders_stay() {
  let ctx = get_context("/items/{id}/{unknown}", &[]).with_parameters([Parameter::builder()
    .name("id")
    .location(ParameterLocation::Path)
    .required(true)
    .build()]);
  let result = enumerate(&ctx);

  assert_eq!(urls(&result), vec!["https://api.example.com/v1/items/{id}/{unknown}"]);
}

#[test]
fn test_optional_query_enum_expands_values() {
  let ctx = get_context("/items", &[]).with_parameters([query_enum("verbose", false, &["true", "false"])]);
  let result = enumerate(&ctx);

  assert_eq!(
    urls(&result),
    vec![
      "https://api.example.com/v1/items",
      "https://api.example.com/v1/items?verbose=false",
      "https://api.example.com/v1/items?verbose=true",
    ]
  );
}

#[test]
fn test_path_and_query_placeholders_resolve_by_position() {
  let ctx = get_context("/items/{id}", &[]).with_parameters([path_enum("id", &["p1"]), query_enum("id", true, &["q1"])]);
  let result = enumerate(&ctx);

  assert_eq!(urls(&result), vec!["https://api.example.com/v1/items/p1?id=q1"]);
}

#[test]
fn test_repeated_placeholder_occurrences_expand_independently() {
  let ctx = get_context("/{x}/to/{x}", &[]).with_parameters([path_enum("x", &["1", "2"])]);
  let result = enumerate(&ctx);

  assert_eq!(
    urls(&result),
    vec![
      "https://api.example.com/v1/1/to/1",
      "https://api.example.com/v1/1/to/2",
      "https://api.example.com/v1/2/to/1",
      "https://api.example.com/v1/2/to/2",
    ]
  );
}

#[test]
fn test_substituted_values_are_not_rescanned() {
  let ctx = get_context("/{x}/{y}", &[]).with_parameters([path_enum("x", &["{y}"]), path_enum("y", &["1"])]);
  let result = enumerate(&ctx);

  assert_eq!(urls(&result), vec!["https://api.example.com/v1/{y}/1"]);
}

#[test]
fn test_enumeration_is_idempotent() {
  let ctx = get_context("/items/{status}", &["application/json", "text/csv"]).with_parameters([
    path_enum("status", &["open", "closed"]),
    query("page", false),
    query("size", false),
    query("id", true),
  ]);

  let first = enumerate(&ctx).into_iter().collect::<Vec<_>>();
  let second = enumerate(&ctx).into_iter().collect::<Vec<_>>();
  assert_eq!(first, second);
  assert_eq!(first.len(), 2 * 2 * 4);
}

#[test]
fn test_output_is_sorted_by_url() {
  let ctx = get_context("/items/{status}", &[])
    .with_parameters([path_enum("status", &["b", "c", "a"]), query("q", false)]);
  let result = urls(&enumerate(&ctx)).into_iter().map(str::to_string).collect::<Vec<_>>();

  let mut sorted = result.clone();
  sorted.sort();
  assert_eq!(result, sorted);
}

#[test]
fn test_placeholder_scan_skips_empty_and_nested() {
  assert_eq!(placeholder_names("/a/{}/{b}"), vec!["b"]);
  assert_eq!(placeholder_names("/a/{x{y}/z"), vec!["y"]);
  assert_eq!(placeholder_names("/a/{open"), Vec::<&str>::new());
}

#[test]
fn test_global_produces_used_by_default() {
  let ctx = OperationContext::new(&global(&["text/plain"]), "/x", &Method::POST);
  let result = enumerate(&ctx);
  assert_eq!(result.first().unwrap().media_type.as_deref(), Some("text/plain"));
  assert_eq!(result.first().unwrap().http_method, "POST");
}
