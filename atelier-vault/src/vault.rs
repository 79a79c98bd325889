use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;

use atelier_entities::PortfolioData;
use atelier_error::{AtelierError, Result};

/// Persistence adapter for the snapshot document.
///
/// Loading never fails outward: an absent, unreadable, unparseable or
/// structurally invalid snapshot falls back to the built-in seed dataset.
/// Saving writes the whole document in one pass; there are no partial
/// writes, no transactions and no schema versioning.
pub struct Vault {
    label: String,
    path: PathBuf,
}

impl Vault {
    /// Create a vault with a diagnostic label and a snapshot file path.
    pub fn new(label: impl Into<String>, path: &Path) -> Self {
        Self {
            label: label.into(),
            path: PathBuf::from(path),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot, falling back to [`PortfolioData::seed`] on any
    /// missing or malformed input.
    pub fn load(&self) -> PortfolioData {
        if !self.path.exists() {
            log::info!("{}: no snapshot at {:?}, seeding", self.label, self.path);
            return PortfolioData::seed();
        }

        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) => {
                log::warn!("{}: unreadable snapshot, seeding: {}", self.label, err);
                return PortfolioData::seed();
            }
        };

        let value: Value = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("{}: corrupt snapshot, seeding: {}", self.label, err);
                return PortfolioData::seed();
            }
        };

        if !has_required_keys(&value) {
            log::warn!("{}: snapshot shape mismatch, seeding", self.label);
            return PortfolioData::seed();
        }

        match serde_json::from_value(value) {
            Ok(data) => data,
            Err(err) => {
                log::warn!("{}: undecodable snapshot, seeding: {}", self.label, err);
                PortfolioData::seed()
            }
        }
    }

    /// Serialize and write the whole document.
    pub fn save(&self, data: &PortfolioData) -> Result<()> {
        let parent = self.path.parent().ok_or_else(|| {
            AtelierError::Storage(
                self.label.clone(),
                "Snapshot path has no parent directory".to_owned(),
            )
        })?;
        fs::create_dir_all(parent)?;

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        let text = serde_json::to_string(data)?;
        writer.write_all(text.as_bytes())?;
        writer.flush()?;

        log::info!(
            "{}: wrote {} projects, {} categories ({} bytes)",
            self.label,
            data.projects.len(),
            data.categories.len(),
            text.len()
        );
        Ok(())
    }

    /// Remove the snapshot file.
    pub fn erase(&self) -> Result<()> {
        fs::remove_file(&self.path).map_err(|err| {
            AtelierError::Storage(self.label.clone(), err.to_string())
        })
    }
}

/// Structural validity of a raw snapshot or backup document: an object
/// carrying `profile` and an array-shaped `projects`.
pub(crate) fn has_required_keys(value: &Value) -> bool {
    value.get("profile").is_some()
        && value
            .get("projects")
            .map(Value::is_array)
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempdir::TempDir;

    use super::*;
    use atelier_entities::PortfolioData;

    fn vault_in(dir: &TempDir) -> Vault {
        Vault::new("TestVault", &dir.path().join("portfolio.json"))
    }

    #[test]
    fn round_trip_preserves_the_document() {
        let dir = TempDir::new("vault").unwrap();
        let vault = vault_in(&dir);

        let mut data = PortfolioData::seed();
        data.profile.name = "Round Trip".to_string();
        data.projects[0].title = "Edited".to_string();

        vault.save(&data).unwrap();
        assert_eq!(vault.load(), data);
    }

    #[test]
    fn missing_snapshot_loads_the_seed() {
        let dir = TempDir::new("vault").unwrap();
        assert_eq!(vault_in(&dir).load(), PortfolioData::seed());
    }

    #[test]
    fn corrupt_snapshot_loads_the_seed() {
        let dir = TempDir::new("vault").unwrap();
        let vault = vault_in(&dir);
        fs::write(vault.path(), "{not json").unwrap();
        assert_eq!(vault.load(), PortfolioData::seed());
    }

    #[test]
    fn shape_mismatch_loads_the_seed() {
        let dir = TempDir::new("vault").unwrap();
        let vault = vault_in(&dir);

        // `projects` must be an array, not an object.
        fs::write(
            vault.path(),
            r#"{"profile": {}, "projects": {}, "categories": []}"#,
        )
        .unwrap();
        assert_eq!(vault.load(), PortfolioData::seed());

        fs::write(vault.path(), r#"{"projects": []}"#).unwrap();
        assert_eq!(vault.load(), PortfolioData::seed());
    }

    #[test]
    fn erase_removes_the_snapshot() {
        let dir = TempDir::new("vault").unwrap();
        let vault = vault_in(&dir);
        vault.save(&PortfolioData::seed()).unwrap();
        assert!(vault.path().exists());
        vault.erase().unwrap();
        assert!(!vault.path().exists());
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = TempDir::new("vault").unwrap();
        let nested = dir.path().join("deep/nested/portfolio.json");
        let vault = Vault::new("TestVault", &nested);
        vault.save(&PortfolioData::seed()).unwrap();
        assert!(nested.exists());
    }
}
