pub mod completions;
pub mod prompt;
pub mod setup;
pub mod show;

use std::path::PathBuf;

use crate::config::Config;
use crate::identity::store::YamlIdentityStore;

/// Identity store at the configured path, or at `ai_settings` when given
fn identity_store(config: &Config, ai_settings: Option<PathBuf>) -> YamlIdentityStore {
    let path = match ai_settings {
        Some(path) => Config::expand_path(&path),
        None => config.ai_settings_path(),
    };
    YamlIdentityStore::new(path)
}
