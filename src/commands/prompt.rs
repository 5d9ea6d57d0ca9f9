use eyre::Result;
use std::path::PathBuf;

use crate::config::Config;
use crate::identity::store::IdentityStore;
use crate::prompt::{DEFAULT_TRIGGERING_PROMPT, build_default_prompt_generator};

pub fn run(ai_settings: Option<PathBuf>, config: &Config) -> Result<()> {
    let store = super::identity_store(config, ai_settings);

    let record = store.load()?.ok_or_else(|| {
        eyre::eyre!(
            "No identity stored at {}. Run `autoagent setup` first.",
            store.path().display()
        )
    })?;

    let generator = build_default_prompt_generator();
    println!("{}", record.construct_full_prompt(&generator));
    println!();
    println!("{}", DEFAULT_TRIGGERING_PROMPT);

    Ok(())
}
