use atelier_entities::PortfolioData;

use crate::Vault;

/// Single writer path over the committed model.
///
/// The public view reads `committed()`; the admin surface commits a whole
/// draft document at once, which write-through saves. A failed save keeps
/// the in-memory model authoritative for the session and only raises the
/// `dirty` marker so the UI can warn that edits are not durable.
pub struct Store {
    vault: Vault,
    committed: PortfolioData,
    dirty: bool,
}

impl Store {
    /// Hydrate the committed model from the vault.
    pub fn open(vault: Vault) -> Self {
        let committed = vault.load();
        Self {
            vault,
            committed,
            dirty: false,
        }
    }

    pub fn committed(&self) -> &PortfolioData {
        &self.committed
    }

    /// Location of the snapshot document on disk.
    pub fn snapshot_path(&self) -> &std::path::Path {
        self.vault.path()
    }

    /// Whether the last commit failed to reach disk.
    pub fn dirty(&self) -> bool {
        self.dirty
    }

    /// Replace the committed model wholesale and persist it.
    pub fn commit(&mut self, data: PortfolioData) {
        self.committed = data;
        match self.vault.save(&self.committed) {
            Ok(()) => self.dirty = false,
            Err(err) => {
                log::warn!(
                    "commit not durable, keeping in-memory state: {}",
                    err
                );
                self.dirty = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tempdir::TempDir;

    use super::*;
    use atelier_entities::{Draft, PortfolioData};

    #[test]
    fn open_hydrates_from_the_vault() {
        let dir = TempDir::new("store").unwrap();
        let path = dir.path().join("portfolio.json");

        let mut data = PortfolioData::seed();
        data.profile.name = "Persisted".to_string();
        Vault::new("Setup", &path).save(&data).unwrap();

        let store = Store::open(Vault::new("Store", &path));
        assert_eq!(store.committed().profile.name, "Persisted");
        assert!(!store.dirty());
    }

    #[test]
    fn commit_replaces_and_persists_the_whole_draft() {
        let dir = TempDir::new("store").unwrap();
        let path = dir.path().join("portfolio.json");
        let mut store = Store::open(Vault::new("Store", &path));

        let mut draft = Draft::from_committed(store.committed());
        draft.data.profile.bio = "Committed bio".to_string();
        draft.add_category();
        store.commit(draft.data.clone());

        assert_eq!(store.committed(), &draft.data);
        assert!(!store.dirty());

        // A fresh store sees exactly what was committed.
        let reopened = Store::open(Vault::new("Store", &path));
        assert_eq!(reopened.committed(), &draft.data);
    }

    #[test]
    fn failed_save_keeps_memory_authoritative_and_flags_dirty() {
        let dir = TempDir::new("store").unwrap();
        // A snapshot path whose parent is a file makes saving impossible.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"file").unwrap();
        let path = blocker.join("portfolio.json");

        let mut store = Store::open(Vault::new("Store", &path));
        let mut draft = Draft::from_committed(store.committed());
        draft.data.profile.name = "In Memory Only".to_string();
        store.commit(draft.data.clone());

        assert!(store.dirty());
        assert_eq!(store.committed().profile.name, "In Memory Only");
    }

    #[test]
    fn snapshot_path_points_at_the_vault_file() {
        let dir = TempDir::new("store").unwrap();
        let path = dir.path().join("portfolio.json");
        let store = Store::open(Vault::new("Store", &path));
        assert_eq!(store.snapshot_path(), path);
    }
}
