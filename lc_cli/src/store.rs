//! JSON snapshot files, one per championship.

use anyhow::{Context, Result};
use league_cup::{Championship, ChampionshipId};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory of `<id>.json` championship snapshots
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, id: &ChampionshipId) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    /// Read and validate a stored snapshot.
    pub fn load(&self, id: &ChampionshipId) -> Result<Championship> {
        let path = self.path_for(id);
        let championship = load_file(&path)?;
        debug!("Loaded {} from {}", championship.id, path.display());
        Ok(championship)
    }

    /// Write a snapshot, replacing any previous version of it
    ///
    /// The JSON goes to a temporary file first and is renamed over the
    /// target, so a failed write never leaves a truncated snapshot.
    pub fn save(&self, championship: &Championship) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create data directory {}", self.dir.display()))?;

        let path = self.path_for(&championship.id);
        let tmp = path.with_extension("json.tmp");
        let json = championship
            .to_json()
            .context("Failed to serialize championship")?;
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &path)
            .with_context(|| format!("Failed to replace {}", path.display()))?;

        debug!("Saved {} to {}", championship.id, path.display());
        Ok(path)
    }
}

impl SnapshotStore {
    /// Every readable snapshot in the directory, oldest first
    ///
    /// A missing directory is an empty list. Files that fail to load are
    /// logged and skipped so one bad snapshot does not hide the rest.
    pub fn list(&self) -> Result<Vec<Championship>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let entries = fs::read_dir(&self.dir)
            .with_context(|| format!("Failed to read data directory {}", self.dir.display()))?;

        let mut championships = Vec::new();
        for entry in entries {
            let path = entry
                .with_context(|| format!("Failed to read data directory {}", self.dir.display()))?
                .path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            match load_file(&path) {
                Ok(championship) => championships.push(championship),
                Err(err) => warn!("Skipping {}: {err:#}", path.display()),
            }
        }

        championships.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(championships)
    }

    /// Remove a stored snapshot.
    pub fn delete(&self, id: &ChampionshipId) -> Result<()> {
        let path = self.path_for(id);
        fs::remove_file(&path)
            .with_context(|| format!("Failed to delete championship {}", path.display()))?;
        debug!("Deleted {}", path.display());
        Ok(())
    }
}

fn load_file(path: &Path) -> Result<Championship> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read championship {}", path.display()))?;
    Championship::from_json(&json)
        .with_context(|| format!("Failed to load championship {}", path.display()))
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use league_cup::{ChampionshipConfig, ChampionshipKind, Entrant};

    fn sample() -> Championship {
        Championship::create(
            ChampionshipConfig::named("Stored"),
            ChampionshipKind::League,
            "tester",
        )
        .unwrap()
        .register(Entrant::new("a", "Ana", "Santos"))
        .unwrap()
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("nested"));
        let championship = sample();

        let path = store.save(&championship).unwrap();
        assert!(path.ends_with(format!("{}.json", championship.id)));
        assert_eq!(store.load(&championship.id).unwrap(), championship);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path());
        let err = store.load(&uuid::Uuid::new_v4()).unwrap_err();
        assert!(err.to_string().contains("Failed to read championship"));
    }

    #[test]
    fn test_load_rejects_corrupt_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path());
        let championship = sample();
        fs::write(store.path_for(&championship.id), "{\"id\": 1}").unwrap();
        assert!(store.load(&championship.id).is_err());
    }

    #[test]
    fn test_list_skips_broken_and_foreign_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path());
        let first = sample();
        let second = Championship::create(
            ChampionshipConfig::named("Second"),
            ChampionshipKind::Cup,
            "tester",
        )
        .unwrap();
        store.save(&first).unwrap();
        store.save(&second).unwrap();
        fs::write(dir.path().join("broken.json"), "{").unwrap();
        fs::write(dir.path().join("notes.txt"), "not a snapshot").unwrap();

        let listed = store.list().unwrap();
        let mut ids: Vec<_> = listed.iter().map(|c| c.id).collect();
        ids.sort();
        let mut expected = vec![first.id, second.id];
        expected.sort();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_list_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("never-created"));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path());
        let championship = sample();
        store.save(&championship).unwrap();

        store.delete(&championship.id).unwrap();
        assert!(!store.path_for(&championship.id).exists());
        assert!(store.load(&championship.id).is_err());

        let err = store.delete(&championship.id).unwrap_err();
        assert!(err.to_string().contains("Failed to delete championship"));
    }
}
