use super::DataStore;
use crate::error::{GeologError, Result};
use crate::model::Sample;
use std::fs;
use std::path::{Path, PathBuf};

const SLOT_FILENAME: &str = "samples.json";

/// File-backed storage: the slot is `samples.json` under a root directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn slot_path(&self) -> PathBuf {
        self.root.join(SLOT_FILENAME)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(GeologError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Sample>> {
        let path = self.slot_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).map_err(GeologError::Io)?;
        serde_json::from_str(&content)
            .map_err(|e| GeologError::CorruptData(format!("{}: {}", path.display(), e)))
    }

    fn save(&mut self, samples: &[Sample]) -> Result<()> {
        self.ensure_dir(&self.root)?;
        let content = serde_json::to_string_pretty(samples).map_err(GeologError::Serialization)?;
        fs::write(self.slot_path(), content).map_err(GeologError::Io)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        let path = self.slot_path();
        if path.exists() {
            fs::remove_file(path).map_err(GeologError::Io)?;
        }
        Ok(())
    }
}
