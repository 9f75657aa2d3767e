//! Runs the enumeration engine over every operation of a document.
//!
//! Each operation is turned into an [`OperationContext`] and enumerated on its
//! own. The per-operation sets are then folded into one ordered,
//! deduplicated collection, so no state is shared between operations.

use std::collections::{BTreeSet, HashSet};

use http::Method;

use crate::{
  document::{ParameterResolver, SwaggerDocument},
  generator::{
    combinations::MAX_COMBINATION_WIDTH,
    context::{GlobalContext, OperationContext},
    descriptor::RequestDescriptor,
    enumerator::enumerate,
    metrics::{GenerationStats, GenerationWarning},
  },
};

pub const DEFAULT_MAX_OPTIONAL_PARAMETERS: usize = 16;

/// Filter for including or excluding operations by id.
///
/// Exclusion takes precedence if an operation matches both sets.
#[derive(Debug, Clone, Default)]
pub struct OperationFilter {
  only: Option<HashSet<String>>,
  excluded: Option<HashSet<String>>,
}

impl OperationFilter {
  #[must_use]
  pub fn new(only: Option<HashSet<String>>, excluded: Option<HashSet<String>>) -> Self {
    Self { only, excluded }
  }

  #[must_use]
  pub fn accepts<S>(&self, id: S) -> bool
  where
    S: AsRef<str>,
  {
    if let Some(ref included) = self.only
      && !included.contains(id.as_ref())
    {
      return false;
    }

    if let Some(ref excluded) = self.excluded
      && excluded.contains(id.as_ref())
    {
      return false;
    }

    true
  }
}

#[derive(Debug, Clone, bon::Builder)]
pub struct EnumerationConfig {
  /// Replaces the document's `host` when set.
  pub host_override: Option<String>,
  #[builder(default = DEFAULT_MAX_OPTIONAL_PARAMETERS)]
  pub max_optional_parameters: usize,
  #[builder(default)]
  pub filter: OperationFilter,
}

impl Default for EnumerationConfig {
  fn default() -> Self {
    Self::builder().build()
  }
}

/// One operation ready to be enumerated.
#[derive(Debug, Clone)]
pub struct OperationEntry {
  pub id: String,
  pub method: Method,
  pub path: String,
  pub context: OperationContext,
}

impl OperationEntry {
  pub fn optional_parameter_count(&self) -> usize {
    self.context.optional_query_names().len()
  }
}

/// Output of a full run.
#[derive(Debug, Clone, Default)]
pub struct GeneratedOutput {
  pub descriptors: BTreeSet<RequestDescriptor>,
  pub stats: GenerationStats,
}

/// Derives an id for operations without `operationId`, e.g. `get_pets_by_id`.
pub fn fallback_operation_id(method: &str, path: &str) -> String {
  let path_parts: Vec<&str> = path
    .split('/')
    .filter(|s| !s.is_empty())
    .map(|s| {
      if s.starts_with('{') && s.ends_with('}') {
        "by_id"
      } else {
        s
      }
    })
    .collect();

  let method_lower = method.to_lowercase();
  if path_parts.is_empty() {
    method_lower
  } else {
    format!("{}_{}", method_lower, path_parts.join("_"))
  }
}

fn ensure_unique_id(base: String, taken: &HashSet<String>) -> String {
  if !taken.contains(&base) {
    return base;
  }
  let mut n = 2;
  loop {
    let candidate = format!("{base}_{n}");
    if !taken.contains(&candidate) {
      return candidate;
    }
    n += 1;
  }
}

/// Adds `next` into `acc`, returning how many of its descriptors were
/// already present.
fn merge_into(acc: &mut BTreeSet<RequestDescriptor>, next: BTreeSet<RequestDescriptor>) -> usize {
  let before = acc.len() + next.len();
  acc.extend(next);
  before - acc.len()
}

pub struct Orchestrator {
  document: SwaggerDocument,
  config: EnumerationConfig,
}

impl Orchestrator {
  #[must_use]
  pub fn new(document: SwaggerDocument, config: EnumerationConfig) -> Self {
    Self { document, config }
  }

  fn optional_limit(&self) -> usize {
    self.config.max_optional_parameters.min(MAX_COMBINATION_WIDTH)
  }

  /// Document-wide defaults with the host override applied.
  #[must_use]
  pub fn global_context(&self) -> GlobalContext {
    let host = self
      .config
      .host_override
      .clone()
      .or_else(|| self.document.host.clone())
      .unwrap_or_default();

    GlobalContext::builder()
      .schemes(self.document.schemes.clone())
      .host(host)
      .base_path(self.document.base_path.clone().unwrap_or_default())
      .produces(self.document.produces.clone())
      .build()
  }

  /// Document-level warnings that do not depend on any single operation.
  fn document_warnings(&self) -> Vec<GenerationWarning> {
    let mut warnings = vec![];
    if !self.document.is_supported_version() {
      warnings.push(GenerationWarning::UnsupportedVersion {
        version: self.document.version().unwrap_or_default(),
      });
    }
    if self.document.schemes.is_empty() {
      warnings.push(GenerationWarning::NoSchemes);
    }
    warnings
  }

  /// Builds one [`OperationEntry`] per operation that passes the filter.
  pub fn operations(&self) -> (Vec<OperationEntry>, Vec<GenerationWarning>) {
    let global = self.global_context();
    let resolver = ParameterResolver::new(&self.document);
    let mut taken = HashSet::new();
    let mut entries = vec![];
    let mut warnings = vec![];

    for (path, method, operation, path_item) in self.document.operations() {
      let base_id = operation
        .operation_id
        .clone()
        .unwrap_or_else(|| fallback_operation_id(method.as_str(), path));

      if !self.config.filter.accepts(&base_id) {
        continue;
      }

      let id = ensure_unique_id(base_id, &taken);
      taken.insert(id.clone());

      let (parameters, unresolved) = resolver.collect(path_item, operation);
      warnings.extend(
        unresolved
          .into_iter()
          .map(|reference| GenerationWarning::UnresolvedParameter {
            operation_id: id.clone(),
            reference,
          }),
      );

      let mut context = OperationContext::new(&global, path, &method);
      if let Some(produces) = &operation.produces {
        context = context.with_media_types(produces);
      }
      let context = context.with_parameters(parameters);

      entries.push(OperationEntry {
        id,
        method,
        path: path.to_string(),
        context,
      });
    }

    (entries, warnings)
  }

  /// Enumerates a single entry, or explains why it was skipped.
  pub fn enumerate_entry(&self, entry: &OperationEntry) -> Result<BTreeSet<RequestDescriptor>, GenerationWarning> {
    let count = entry.optional_parameter_count();
    let limit = self.optional_limit();
    if count > limit {
      return Err(GenerationWarning::TooManyOptionalParameters {
        operation_id: entry.id.clone(),
        count,
        limit,
      });
    }
    Ok(enumerate(&entry.context))
  }

  /// Enumerates every operation and merges the results.
  pub fn generate(&self) -> GeneratedOutput {
    let mut stats = GenerationStats::default();
    stats.record_warnings(self.document_warnings());

    let (entries, warnings) = self.operations();
    stats.record_warnings(warnings);

    let (descriptors, stats) = entries.iter().map(|entry| self.enumerate_entry(entry)).fold(
      (BTreeSet::new(), stats),
      |(mut acc, mut stats), result| {
        match result {
          Ok(set) => {
            let produced = set.len();
            let collapsed = merge_into(&mut acc, set);
            stats.record_operation(produced, collapsed);
          }
          Err(warning) => stats.record_skipped_operation(warning),
        }
        (acc, stats)
      },
    );

    GeneratedOutput { descriptors, stats }
  }
}
