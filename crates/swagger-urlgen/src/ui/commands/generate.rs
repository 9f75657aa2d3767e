use std::{collections::HashSet, path::PathBuf};

use chrono::{Local, Timelike};
use crossterm::style::Stylize;
use num_format::{Locale, ToFormattedString};
use tokio::io::AsyncWriteExt;

use crate::{
  generator::{
    descriptor::{LineTemplate, RequestDescriptor},
    metrics::GenerationStats,
    orchestrator::{EnumerationConfig, GeneratedOutput, OperationFilter, Orchestrator},
  },
  ui::{Colors, GenerateCommand},
  utils::spec::SpecLoader,
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
  File(PathBuf),
  Stdout,
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub input: PathBuf,
  pub output: OutputTarget,
  pub template: LineTemplate,
  pub enumeration: EnumerationConfig,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> Self {
    let GenerateCommand {
      input,
      output,
      stdout,
      host,
      template,
      max_optional,
      only,
      exclude,
      verbose,
      quiet,
    } = command;

    let output = if stdout {
      OutputTarget::Stdout
    } else {
      OutputTarget::File(output)
    };

    let filter = OperationFilter::new(
      only.map(|ids| ids.into_iter().collect::<HashSet<_>>()),
      exclude.map(|ids| ids.into_iter().collect::<HashSet<_>>()),
    );

    let enumeration = EnumerationConfig::builder()
      .maybe_host_override(host)
      .max_optional_parameters(max_optional)
      .filter(filter)
      .build();

    Self {
      input,
      output,
      template: LineTemplate::parse(&template),
      enumeration,
      verbose,
      // stdout carries the payload, so progress output would corrupt it
      quiet: quiet || stdout,
    }
  }

  pub fn render_lines(&self, descriptors: impl IntoIterator<Item = RequestDescriptor>) -> String {
    descriptors.into_iter().fold(String::new(), |mut out, descriptor| {
      out.push_str(&descriptor.render(&self.template));
      out.push('\n');
      out
    })
  }

  async fn write_output(&self, content: String) -> anyhow::Result<()> {
    match &self.output {
      OutputTarget::File(path) => {
        if let Some(parent) = path.parent()
          && !parent.as_os_str().is_empty()
        {
          tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, content).await?;
      }
      OutputTarget::Stdout => {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(content.as_bytes()).await?;
        stdout.flush().await?;
      }
    }
    Ok(())
  }
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading swagger spec from: {}", self.config.input.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self) {
    self.info(&"Generating urls...".with(self.colors.primary()).to_string());
  }

  fn log_lines(&self, content: &str) {
    if self.config.verbose && !self.config.quiet {
      for line in content.lines() {
        println!("            {}", line.with(self.colors.info()));
      }
    }
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat(
      "Operations enumerated:",
      stats.operations_enumerated.to_formatted_string(&Locale::en),
    );
    if stats.operations_skipped > 0 {
      self.stat(
        "Operations skipped:",
        stats.operations_skipped.to_formatted_string(&Locale::en),
      );
    }
    self.stat(
      "Requests generated:",
      stats.requests_generated.to_formatted_string(&Locale::en),
    );
    if stats.duplicates_collapsed > 0 {
      self.stat(
        "Duplicates collapsed:",
        stats.duplicates_collapsed.to_formatted_string(&Locale::en),
      );
    }
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }

    self.print_warnings(stats);
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    let mut printed_header = false;
    for warning in &stats.warnings {
      if !printed_header {
        println!();
        printed_header = true;
      }

      let label = if warning.is_skipped_item() {
        "Skipped:"
      } else {
        "Warning:"
      };
      eprintln!(
        "{} {}",
        label.with(self.colors.accent()),
        format!("{warning}").with(self.colors.primary())
      );
    }
  }

  fn log_writing(&self) {
    if let OutputTarget::File(path) = &self.config.output {
      self.info(
        &format!("Writing to: {}", path.display())
          .with(self.colors.primary())
          .to_string(),
      );
    }
  }

  fn log_success(&self) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Urls generated".with(self.colors.success())
      );
    }
  }
}

pub async fn generate_requests(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let document = SpecLoader::open(&config.input).await?.parse()?;

  logger.log_generating();
  let orchestrator = Orchestrator::new(document, config.enumeration.clone());
  let GeneratedOutput { descriptors, stats } = orchestrator.generate();

  let content = config.render_lines(descriptors);
  logger.log_lines(&content);
  logger.print_statistics(&stats);

  logger.log_writing();
  config.write_output(content).await?;

  logger.log_success();
  Ok(())
}
