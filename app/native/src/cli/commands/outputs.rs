//! Output listing command.

use colored::Colorize;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::error::SwaypaperError;
use crate::ipc::SwayClient;

#[derive(Tabled)]
struct OutputRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Resolution")]
    resolution: String,
}

/// Execute the outputs listing command.
pub fn execute(json: bool) -> Result<(), SwaypaperError> {
    let client = SwayClient::from_env()?;
    let screens = client.outputs()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&screens)?);
        return Ok(());
    }

    if screens.is_empty() {
        println!("{}", "No outputs detected.".dimmed());
        return Ok(());
    }

    let rows: Vec<OutputRow> = screens
        .iter()
        .map(|screen| OutputRow {
            name: screen.name.clone(),
            resolution: format!("{}x{}", screen.rect.width, screen.rect.height),
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..2)).with(Alignment::right()))
        .to_string();

    let count = screens.len();
    println!("{}", format!("Outputs ({count})").bold());
    println!("{table}");

    Ok(())
}
