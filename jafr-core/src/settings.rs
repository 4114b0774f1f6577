//! Per-user settings at ~/.jafr/user-settings.json

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{JafrError, JafrResult};

const SETTINGS_DIR: &str = ".jafr";
const SETTINGS_FILE: &str = "user-settings.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory holding tasks.md and meetings.md
    #[serde(default)]
    pub master: String,

    /// Keys jafr doesn't use. They are written back on save.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Settings {
    /// Settings file under a given home directory.
    pub fn path_in(home_dir: &Path) -> PathBuf {
        home_dir.join(SETTINGS_DIR).join(SETTINGS_FILE)
    }

    /// Settings file of the user running the process.
    pub fn default_path() -> JafrResult<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| JafrError::Settings("Could not determine home directory".into()))?;
        Ok(Self::path_in(&home))
    }

    pub fn load(path: &Path) -> JafrResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            JafrError::Settings(format!("Could not read {}: {e}", path.display()))
        })?;

        serde_json::from_str(&contents)
            .map_err(|e| JafrError::Settings(format!("Could not parse {}: {e}", path.display())))
    }

    /// Rewrite the settings file wholesale, unknown keys included.
    pub fn save(&self, path: &Path) -> JafrResult<()> {
        let contents =
            serde_json::to_string(self).map_err(|e| JafrError::Settings(e.to_string()))?;

        std::fs::write(path, contents).map_err(|e| {
            JafrError::Settings(format!("Could not write {}: {e}", path.display()))
        })?;

        Ok(())
    }

    /// The master directory, if one is set.
    pub fn master_dir(&self) -> Option<PathBuf> {
        if self.master.trim().is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.master))
        }
    }
}
