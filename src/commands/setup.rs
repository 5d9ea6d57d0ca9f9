use colored::*;
use eyre::Result;
use std::path::PathBuf;

use crate::budget::ApiBudget;
use crate::config::Config;
use crate::console::TerminalConsole;
use crate::llm::openai::OpenAiClient;
use crate::setup::{BootstrapController, BootstrapSettings};

pub struct SetupOptions {
    pub skip_reprompt: bool,
    pub ai_settings: Option<PathBuf>,
    pub model: Option<String>,
    pub quiet: bool,
}

pub fn run(opts: SetupOptions, config: &Config) -> Result<()> {
    let mut config = config.clone();
    if opts.skip_reprompt {
        config.skip_reprompt = true;
    }
    if let Some(model) = opts.model {
        config.fast_llm_model = model;
    }

    let store = super::identity_store(&config, opts.ai_settings);
    let client = OpenAiClient::from_config(&config.llm);
    let mut console = TerminalConsole::new();
    let mut budget = ApiBudget::new();

    log::info!(
        "Starting setup (identity file: {}, model: {})",
        store.path().display(),
        config.fast_llm_model
    );

    let record = BootstrapController::new(
        BootstrapSettings::from(&config),
        &mut console,
        &client,
        &store,
        &mut budget,
    )
    .run();

    log::info!("Identity ready: {} (budget {})", record.name(), record.budget_label());

    if !opts.quiet {
        println!();
        println!("{} {} is ready", "✓".green(), record.name().bold());
        println!("  Identity file: {}", store.path().display().to_string().cyan());
        if budget.is_unlimited() {
            println!("  API budget: {}", "unlimited".yellow());
        } else {
            println!("  API budget: ${}", budget.total_budget());
        }
    }

    Ok(())
}
