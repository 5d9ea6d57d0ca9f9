use colored::*;
use eyre::{Context, Result};
use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::identity::IdentityRecord;
use crate::identity::store::IdentityStore;

pub fn run(ai_settings: Option<PathBuf>, format: OutputFormat, config: &Config) -> Result<()> {
    let store = super::identity_store(config, ai_settings);

    let Some(record) = store.load()? else {
        match format {
            OutputFormat::Json => println!("null"),
            OutputFormat::Yaml => println!("~"),
            OutputFormat::Text => {
                println!("{} No identity stored at {}", "⚠".yellow(), store.path().display());
                println!("  Run {} to create one", "autoagent setup".cyan());
            }
        }
        return Ok(());
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&record).context("Failed to serialize identity")?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(&record).context("Failed to serialize identity")?);
        }
        OutputFormat::Text => print_text(&record),
    }

    Ok(())
}

fn print_text(record: &IdentityRecord) {
    println!("{}", record.name().bold());
    println!();
    println!("{}: {}", "role".cyan(), record.role());
    println!("{}:", "goals".cyan());
    for (i, goal) in record.goals().iter().enumerate() {
        println!("  {}. {}", i + 1, goal);
    }
    println!("{}: {}", "budget".cyan(), record.budget_label());
}
