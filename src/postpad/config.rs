use crate::error::{PostpadError, Result};
use crate::render::DEFAULT_PREVIEW_CHARS;
use crate::store::{is_valid_key, DEFAULT_STORAGE_KEY};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_FILE_EXT: &str = ".md";

/// Configuration for postpad, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostpadConfig {
    /// Key the post collection is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// How many chars of content a list card shows
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,

    /// Extension of the temporary file handed to `$EDITOR`
    #[serde(default = "default_file_ext")]
    pub file_ext: String,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_preview_chars() -> usize {
    DEFAULT_PREVIEW_CHARS
}

fn default_file_ext() -> String {
    DEFAULT_FILE_EXT.to_string()
}

impl Default for PostpadConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            preview_chars: default_preview_chars(),
            file_ext: default_file_ext(),
        }
    }
}

impl PostpadConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PostpadError::Io)?;
        let mut config: PostpadConfig =
            serde_json::from_str(&content).map_err(PostpadError::Serialization)?;

        // a hand-edited key the backend would refuse loses every write
        if !is_valid_key(&config.storage_key) {
            warn!(
                key = ?config.storage_key,
                fallback = DEFAULT_STORAGE_KEY,
                "invalid storage key in config, using the default"
            );
            config.storage_key = default_storage_key();
        }
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PostpadError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PostpadError::Serialization)?;
        fs::write(config_path, content).map_err(PostpadError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-key" => Some(self.storage_key.clone()),
            "preview-chars" => Some(self.preview_chars.to_string()),
            "file-ext" => Some(self.file_ext.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "storage-key" => {
                if !is_valid_key(value) {
                    return Err(format!(
                        "Invalid storage key {:?}: use letters, digits, '-' or '_'",
                        value
                    ));
                }
                self.storage_key = value.to_string();
            }
            "preview-chars" => {
                self.preview_chars = value
                    .parse()
                    .map_err(|_| format!("preview-chars must be a number, got {:?}", value))?;
            }
            "file-ext" => self.set_file_ext(value),
            other => return Err(format!("Unknown config key: {}", other)),
        }
        Ok(())
    }

    /// Set the file extension (normalizes to start with a dot)
    pub fn set_file_ext(&mut self, ext: &str) {
        if ext.starts_with('.') {
            self.file_ext = ext.to_string();
        } else {
            self.file_ext = format!(".{}", ext);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = PostpadConfig::default();
        assert_eq!(config.storage_key, "posts");
        assert_eq!(config.preview_chars, 160);
        assert_eq!(config.file_ext, ".md");
    }

    #[test]
    fn test_set_file_ext_without_dot() {
        let mut config = PostpadConfig::default();
        config.set_file_ext("txt");
        assert_eq!(config.file_ext, ".txt");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = PostpadConfig::default();
        assert!(config.set("preview-chars", "many").is_err());
        assert!(config.set("storage-key", "../up").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert_eq!(config, PostpadConfig::default());
    }

    #[test]
    fn test_get_and_set_known_keys() {
        let mut config = PostpadConfig::default();
        config.set("preview-chars", "40").unwrap();
        config.set("storage-key", "journal").unwrap();
        assert_eq!(config.get("preview-chars").as_deref(), Some("40"));
        assert_eq!(config.get("storage-key").as_deref(), Some("journal"));
        assert_eq!(config.get("nope"), None);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = PostpadConfig::load(dir.path()).unwrap();
        assert_eq!(config, PostpadConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"preview_chars": 20}"#).unwrap();
        let config = PostpadConfig::load(dir.path()).unwrap();
        assert_eq!(config.preview_chars, 20);
        assert_eq!(config.storage_key, "posts");
    }

    #[test]
    fn test_invalid_stored_key_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"storage_key": "my posts", "preview_chars": 30}"#,
        )
        .unwrap();

        let config = PostpadConfig::load(dir.path()).unwrap();
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.preview_chars, 30);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("data");

        let mut config = PostpadConfig::default();
        config.set_file_ext(".txt");
        config.save(&target).unwrap();

        let loaded = PostpadConfig::load(&target).unwrap();
        assert_eq!(loaded.file_ext, ".txt");
    }
}
