#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
use clap::Parser;

use crate::{
  generator::orchestrator::EnumerationConfig,
  ui::{Cli, Colors, Commands, ListCommands, colors},
};

mod document;
mod generator;
mod ui;
mod utils;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  let colors = Colors::new(colors::colors_enabled(cli.color), colors::detect_theme(cli.theme));

  match cli.command {
    Commands::List { list_command } => match list_command {
      ListCommands::Operations { input, max_optional } => {
        let enumeration = EnumerationConfig::builder().max_optional_parameters(max_optional).build();
        ui::commands::list_operations(&input, enumeration, &colors).await?;
      }
    },
    Commands::Generate(command) => {
      let config = ui::commands::GenerateConfig::from_command(command);
      ui::commands::generate_requests(config, &colors).await?;
    }
  }

  Ok(())
}
