use std::path::Path;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::{
  generator::orchestrator::{EnumerationConfig, OperationEntry, Orchestrator},
  ui::{Colors, colors::IntoComfyColor, term_width},
  utils::spec::SpecLoader,
};

/// Requests an operation expands to, or why it would be skipped.
fn request_count(orchestrator: &Orchestrator, entry: &OperationEntry) -> String {
  match orchestrator.enumerate_entry(entry) {
    Ok(descriptors) => descriptors.len().to_string(),
    Err(_) => format!("skipped ({} optional)", entry.optional_parameter_count()),
  }
}

pub async fn list_operations(input: &Path, enumeration: EnumerationConfig, colors: &Colors) -> anyhow::Result<()> {
  let document = SpecLoader::open(input).await?.parse()?;
  let orchestrator = Orchestrator::new(document, enumeration);

  let (mut operations, _) = orchestrator.operations();
  operations.sort_by(|a, b| a.id.cmp(&b.id));

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut row = Row::new();
  for header in ["OPERATION ID", "METHOD", "PATH", "REQUESTS"] {
    row.add_cell(Cell::new(header).fg(IntoComfyColor::into(colors.label())));
  }
  table.set_header(row);

  for entry in &operations {
    let mut row = Row::new();
    row.add_cell(
      Cell::new(&entry.id)
        .fg(IntoComfyColor::into(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(
      Cell::new(entry.method.as_str())
        .fg(IntoComfyColor::into(colors.accent()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(Cell::new(&entry.path).fg(IntoComfyColor::into(colors.primary())));
    row.add_cell(
      Cell::new(request_count(&orchestrator, entry))
        .fg(IntoComfyColor::into(colors.info()))
        .set_alignment(CellAlignment::Right),
    );
    table.add_row(row);
  }

  println!("{table}");

  Ok(())
}
