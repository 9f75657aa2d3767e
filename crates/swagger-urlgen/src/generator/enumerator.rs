//! Combinatorial request enumeration for a single operation.
//!
//! The engine runs four expansion steps over a working set of
//! [`RequestDescriptor`]s:
//!
//! 1. one base descriptor per base URL, carrying every required query parameter
//! 2. fan-out over the operation's media types
//! 3. fan-out over every non-empty combination of optional query parameters
//! 4. substitution of each enum-restricted `{name}` placeholder by every allowed value
//!
//! The result is a [`BTreeSet`], which both deduplicates and orders the output.

use std::collections::BTreeSet;

use itertools::Itertools;

use super::{
  combinations::NonEmptySubsets,
  context::OperationContext,
  descriptor::RequestDescriptor,
  parameter::{Parameter, ParameterLocation},
};

/// Computes every request shape for `ctx`.
///
/// # Panics
///
/// Panics if the operation has more optional query parameters than
/// [`MAX_COMBINATION_WIDTH`](super::combinations::MAX_COMBINATION_WIDTH).
/// Callers bound this before enumerating.
#[must_use]
pub fn enumerate(ctx: &OperationContext) -> BTreeSet<RequestDescriptor> {
  let base = base_descriptors(ctx);
  let with_media = expand_media_types(base, &ctx.media_types);
  let with_optional = expand_optional_parameters(with_media, &ctx.optional_query_names());
  substitute_enum_values(with_optional, ctx)
}

fn query_fragment<S: AsRef<str>>(names: impl IntoIterator<Item = S>) -> String {
  names
    .into_iter()
    .map(|name| format!("{0}={{{0}}}", name.as_ref()))
    .join("&")
}

fn append_query(url: &str, fragment: &str) -> String {
  let separator = if url.contains('?') { '&' } else { '?' };
  format!("{url}{separator}{fragment}")
}

fn base_descriptors(ctx: &OperationContext) -> BTreeSet<RequestDescriptor> {
  let required = query_fragment(ctx.required_query_names());

  ctx
    .base_urls
    .iter()
    .map(|base_url| {
      let url = format!("{base_url}{}", ctx.path_template);
      let url = if required.is_empty() {
        url
      } else {
        append_query(&url, &required)
      };
      RequestDescriptor::new(url, &ctx.http_method)
    })
    .collect()
}

/// An empty media type list keeps the working set as is.
fn expand_media_types(
  descriptors: BTreeSet<RequestDescriptor>,
  media_types: &BTreeSet<String>,
) -> BTreeSet<RequestDescriptor> {
  if media_types.is_empty() {
    return descriptors;
  }

  descriptors
    .iter()
    .cartesian_product(media_types)
    .map(|(descriptor, media_type)| descriptor.with_media_type(media_type))
    .collect()
}

/// Adds one variant per non-empty optional parameter combination; the
/// originals stay in the set as the "no optional parameters" variants.
fn expand_optional_parameters(
  mut descriptors: BTreeSet<RequestDescriptor>,
  optional_names: &[&str],
) -> BTreeSet<RequestDescriptor> {
  let fragments = NonEmptySubsets::new(optional_names)
    .map(|subset| query_fragment(subset.into_iter().copied()))
    .collect::<Vec<_>>();

  let variants = descriptors
    .iter()
    .cartesian_product(&fragments)
    .map(|(descriptor, fragment)| descriptor.with_url(append_query(&descriptor.url, fragment)))
    .collect::<Vec<_>>();

  descriptors.extend(variants);
  descriptors
}

/// A `{name}` placeholder found in a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Placeholder<'a> {
  name: &'a str,
  start: usize,
  end: usize,
}

impl Placeholder<'_> {
  /// Placeholders after the first `?` belong to the query string.
  fn location(&self, url: &str) -> ParameterLocation {
    match url.find('?') {
      Some(query_start) if self.start > query_start => ParameterLocation::Query,
      _ => ParameterLocation::Path,
    }
  }
}

fn next_placeholder(url: &str, from: usize) -> Option<Placeholder<'_>> {
  let rest = url.get(from..)?;
  let open_pos = rest.find('{')?;
  let after_open = &rest[open_pos + 1..];
  let close_pos = after_open.find('}')?;
  let start = from + open_pos;
  let end = start + close_pos + 2;

  match &url[start + 1..end - 1] {
    "" => next_placeholder(url, end),
    name if name.contains('{') => next_placeholder(url, start + 1),
    name => Some(Placeholder { name, start, end }),
  }
}

/// Finds the first placeholder at or after `from` that an enum-restricted
/// parameter can fill.
fn next_restricted<'c>(ctx: &'c OperationContext, url: &str, mut from: usize) -> Option<(usize, usize, &'c Parameter)> {
  while let Some(placeholder) = next_placeholder(url, from) {
    let preferred = placeholder.location(url);
    if let Some(parameter) = ctx.restricted_parameter(placeholder.name, preferred) {
      return Some((placeholder.start, placeholder.end, parameter));
    }
    from = placeholder.end;
  }
  None
}

/// Replaces each restricted placeholder occurrence by every allowed value.
///
/// Work items carry a scan cursor so a substituted value is never itself
/// scanned for placeholders. Unknown or unrestricted placeholders are left
/// untouched.
fn substitute_enum_values(
  descriptors: BTreeSet<RequestDescriptor>,
  ctx: &OperationContext,
) -> BTreeSet<RequestDescriptor> {
  let mut pending = descriptors.into_iter().map(|d| (d, 0usize)).collect::<Vec<_>>();
  let mut finished = BTreeSet::new();

  while let Some((descriptor, cursor)) = pending.pop() {
    let Some((start, end, parameter)) = next_restricted(ctx, &descriptor.url, cursor) else {
      finished.insert(descriptor);
      continue;
    };

    for value in &parameter.allowed_values {
      let mut url = String::with_capacity(descriptor.url.len() + value.len());
      url.push_str(&descriptor.url[..start]);
      url.push_str(value);
      url.push_str(&descriptor.url[end..]);
      pending.push((descriptor.with_url(url), start + value.len()));
    }
  }

  finished
}

#[cfg(test)]
pub(super) fn placeholder_names(url: &str) -> Vec<&str> {
  let mut names = vec![];
  let mut from = 0;
  while let Some(placeholder) = next_placeholder(url, from) {
    names.push(placeholder.name);
    from = placeholder.end;
  }
  names
}
