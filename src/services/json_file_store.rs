use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use chrono::Utc;
use crate::errors::{PrioritizerError, PrioritizerResult};
use crate::structs::stored_prioritization::{NewPrioritization, StoredPrioritization};
use crate::traits::prioritization_store::PrioritizationStore;

/// Stores every prioritization in one pretty-printed JSON array.
///
/// Assumes a single writing process. Each save rewrites a sibling
/// `.json.tmp` file and renames it over the store, so a crash mid-write
/// leaves the previous contents intact.
pub struct JsonFileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn read_all(&self) -> PrioritizerResult<Vec<StoredPrioritization>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| PrioritizerError::storage_error("read", &format!("{}: {e}", self.path.display())))?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    fn write_all(&self, records: &[StoredPrioritization]) -> PrioritizerResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| PrioritizerError::storage_error("create directory", &e.to_string()))?;
            }
        }

        let content = serde_json::to_string_pretty(records)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)
            .map_err(|e| PrioritizerError::storage_error("write", &format!("{}: {e}", tmp.display())))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| PrioritizerError::storage_error("rename", &format!("{}: {e}", self.path.display())))
    }
}

impl PrioritizationStore for JsonFileStore {
    fn find_by_client(&self, client_id: &str) -> PrioritizerResult<Option<StoredPrioritization>> {
        Ok(self.read_all()?.into_iter().find(|r| r.client_id == client_id))
    }

    fn list(&self) -> PrioritizerResult<Vec<StoredPrioritization>> {
        self.read_all()
    }

    fn save(&self, new: NewPrioritization, replace: bool) -> PrioritizerResult<StoredPrioritization> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| PrioritizerError::storage_error("lock", "store lock poisoned"))?;

        let mut records = self.read_all()?;
        let now = Utc::now();

        let saved = match records.iter_mut().find(|r| r.client_id == new.client_id) {
            Some(existing) if !replace => {
                return Err(PrioritizerError::DuplicatePrioritization {
                    client_id: new.client_id,
                    existing_id: existing.id.clone(),
                });
            }
            Some(existing) => {
                existing.replace(new, now);
                log::debug!("Replaced prioritization {} for client {}", existing.id, existing.client_id);
                existing.clone()
            }
            None => {
                let stored = StoredPrioritization::create(new, now);
                log::debug!("Created prioritization {} for client {}", stored.id, stored.client_id);
                records.push(stored.clone());
                stored
            }
        };

        self.write_all(&records)?;
        Ok(saved)
    }
}
