use super::ScopeState;
use anyhow::{Context, Result};
use std::{fs, path::PathBuf};
use tracing::warn;

fn config_dir() -> PathBuf {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("modscope")
}

/// Loads and stores the persisted scope flags.
#[derive(Debug)]
pub struct SettingsManager {
    path: PathBuf,
    data: ScopeState,
}

impl SettingsManager {
    pub fn load_or_default() -> Self {
        Self::load_from(config_dir().join("settings.json"))
    }

    /// Loads from an explicit path; unreadable or unparsable files fall
    /// back to defaults.
    pub fn load_from(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = fs::read_to_string(&path)
            .ok()
            .and_then(|s| {
                serde_json::from_str(&s)
                    .map_err(|e| warn!("[settings] parse error {path:?}: {e}"))
                    .ok()
            })
            .unwrap_or_default();
        Self { path, data }
    }

    pub fn state(&self) -> ScopeState {
        self.data
    }

    pub fn set_state(&mut self, state: ScopeState) {
        self.data = state;
    }

    /// Writes the settings atomically via a temp file in the same
    /// directory, so a crash mid-write cannot truncate the stored state.
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data).context("serialize settings")?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| format!("create {parent:?}"))?;
        }
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, &json).with_context(|| format!("write {temp_path:?}"))?;
        fs::rename(&temp_path, &self.path)
            .with_context(|| format!("rename into {:?}", self.path))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SettingsManager::load_from(dir.path().join("settings.json"));
        assert_eq!(manager.state(), ScopeState::default());
    }

    #[test]
    fn garbage_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json{{").unwrap();
        let manager = SettingsManager::load_from(path);
        assert_eq!(manager.state(), ScopeState::default());
    }

    #[test]
    fn save_and_reload_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut manager = SettingsManager::load_from(&path);
        manager.set_state(ScopeState {
            lissajous: true,
            external: true,
        });
        manager.save().unwrap();

        // The wire format stores the flags as integers.
        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["lissajous"], 1);
        assert_eq!(raw["external"], 1);

        let reloaded = SettingsManager::load_from(&path);
        assert_eq!(reloaded.state(), manager.state());
    }
}
