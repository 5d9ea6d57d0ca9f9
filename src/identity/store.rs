//! Identity persistence

use eyre::{Context, Result};
use std::fs;
use std::path::PathBuf;

use super::{IdentityRecord, RawIdentity};

/// Loads and saves the identity between runs
pub trait IdentityStore {
    /// `None` when nothing usable is stored
    fn load(&self) -> Result<Option<IdentityRecord>>;
    fn save(&self, record: &IdentityRecord) -> Result<()>;
}

/// Stores the identity as a YAML settings file
#[derive(Debug, Clone)]
pub struct YamlIdentityStore {
    path: PathBuf,
}

impl YamlIdentityStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl IdentityStore for YamlIdentityStore {
    fn load(&self) -> Result<Option<IdentityRecord>> {
        if !self.path.exists() {
            log::debug!("No identity file at {}", self.path.display());
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read identity file: {}", self.path.display()))?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        let raw: RawIdentity = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse identity file: {}", self.path.display()))?;

        // A blank name means setup never completed
        if raw.ai_name.trim().is_empty() {
            return Ok(None);
        }

        log::info!("Loaded identity from: {}", self.path.display());
        Ok(Some(raw.into()))
    }

    fn save(&self, record: &IdentityRecord) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).context("Failed to create identity directory")?;
        }

        let yaml_str = serde_yaml::to_string(record).context("Failed to serialize identity")?;
        fs::write(&self.path, yaml_str)
            .with_context(|| format!("Failed to write identity file: {}", self.path.display()))?;

        log::info!("Saved identity to: {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let store = YamlIdentityStore::new(temp.path().join("ai_settings.yaml"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let temp = TempDir::new().unwrap();
        let store = YamlIdentityStore::new(temp.path().join("nested").join("ai_settings.yaml"));
        let record = IdentityRecord::new("FooGPT", "does foo", vec!["g1".to_string()], 3.25);

        store.save(&record).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn test_blank_name_counts_as_absent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ai_settings.yaml");
        fs::write(&path, "ai_name: ''\nai_role: something\n").unwrap();

        let store = YamlIdentityStore::new(path);
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_empty_file_counts_as_absent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ai_settings.yaml");
        fs::write(&path, "\n").unwrap();

        let store = YamlIdentityStore::new(path);
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ai_settings.yaml");
        fs::write(&path, "ai_goals: {not: [a list\n").unwrap();

        let store = YamlIdentityStore::new(path);
        assert!(store.load().is_err());
    }

    #[test]
    fn test_missing_role_uses_default() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ai_settings.yaml");
        fs::write(&path, "ai_name: Bob\n").unwrap();

        let record = YamlIdentityStore::new(path).load().unwrap().unwrap();
        assert_eq!(record.name(), "Bob");
        assert_eq!(record.role(), crate::identity::DEFAULT_ROLE);
    }
}
