//! Manual backup escape hatch: the snapshot lives per machine, so the
//! owner can export the draft to a dated file and import it elsewhere.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde_json::Value;

use atelier_entities::{PortfolioData, ALL_CATEGORY};
use atelier_error::{AtelierError, Result};

use crate::vault::has_required_keys;

/// Write `data` to `portfolio-backup-YYYY-MM-DD.json` under `dir` and
/// return the path. Exports the draft as given, committed or not.
pub fn export(data: &PortfolioData, dir: &Path) -> Result<PathBuf> {
    let filename =
        format!("portfolio-backup-{}.json", Local::now().format("%Y-%m-%d"));
    let path = dir.join(filename);

    fs::create_dir_all(dir)?;
    fs::write(&path, serde_json::to_string(data)?)?;
    log::info!("exported backup to {:?}", path);
    Ok(path)
}

/// Read and validate a backup file.
///
/// Rejects unparseable documents and documents missing `profile` or an
/// array-shaped `projects`; the caller's draft stays untouched in that
/// case. A missing `categories` key is tolerated and replaced with the
/// reserved default so the imported draft stays usable. The result only
/// ever replaces a draft; committing remains a separate, explicit step.
pub fn import(path: &Path) -> Result<PortfolioData> {
    let text = fs::read_to_string(path).map_err(|err| {
        AtelierError::Backup(format!("cannot read {:?}: {}", path, err))
    })?;

    let mut value: Value = serde_json::from_str(&text).map_err(|_| {
        AtelierError::Backup("not a parseable JSON document".to_owned())
    })?;

    if !has_required_keys(&value) {
        return Err(AtelierError::Backup(
            "missing required keys: profile, projects".to_owned(),
        ));
    }

    let categories_missing = !value
        .get("categories")
        .map(Value::is_array)
        .unwrap_or(false);
    if categories_missing {
        if let Some(object) = value.as_object_mut() {
            object.insert(
                "categories".to_owned(),
                Value::Array(vec![Value::String(ALL_CATEGORY.to_owned())]),
            );
        }
    }

    serde_json::from_value(value).map_err(|err| {
        AtelierError::Backup(format!("invalid backup document: {}", err))
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempdir::TempDir;

    use super::*;
    use atelier_entities::PortfolioData;

    #[test]
    fn export_uses_a_dated_filename_and_round_trips() {
        let dir = TempDir::new("backup").unwrap();
        let data = PortfolioData::seed();

        let path = export(&data, dir.path()).unwrap();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("portfolio-backup-"));
        assert!(name.ends_with(".json"));

        assert_eq!(import(&path).unwrap(), data);
    }

    #[test]
    fn import_rejects_unparseable_files() {
        let dir = TempDir::new("backup").unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "]{[").unwrap();
        assert!(matches!(
            import(&path),
            Err(AtelierError::Backup(_))
        ));
    }

    #[test]
    fn import_rejects_a_file_missing_projects() {
        let dir = TempDir::new("backup").unwrap();
        let path = dir.path().join("partial.json");
        fs::write(&path, r#"{"profile": {"avatar": "", "name": "", "bio": "", "email": ""}}"#)
            .unwrap();
        assert!(matches!(
            import(&path),
            Err(AtelierError::Backup(_))
        ));
    }

    #[test]
    fn import_rejects_a_file_missing_profile() {
        let dir = TempDir::new("backup").unwrap();
        let path = dir.path().join("partial.json");
        fs::write(&path, r#"{"projects": [], "categories": []}"#).unwrap();
        assert!(matches!(
            import(&path),
            Err(AtelierError::Backup(_))
        ));
    }

    #[test]
    fn import_tolerates_missing_categories() {
        let dir = TempDir::new("backup").unwrap();
        let path = dir.path().join("no-categories.json");
        fs::write(
            &path,
            r#"{
                "profile": {"avatar": "", "name": "N", "bio": "", "email": ""},
                "projects": []
            }"#,
        )
        .unwrap();

        let imported = import(&path).unwrap();
        assert_eq!(imported.categories, vec![ALL_CATEGORY.to_string()]);
    }

    #[test]
    fn missing_file_is_a_backup_error() {
        let dir = TempDir::new("backup").unwrap();
        let path = dir.path().join("nope.json");
        assert!(matches!(
            import(&path),
            Err(AtelierError::Backup(_))
        ));
    }
}
