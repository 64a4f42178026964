use super::{is_valid_key, StorageBackend};
use crate::error::{PostpadError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File-backed storage: each key is a `<key>.json` file under `root`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `key`. Keys are restricted to `[A-Za-z0-9_-]`.
    pub fn key_path(&self, key: &str) -> Result<PathBuf> {
        if !is_valid_key(key) {
            return Err(PostpadError::Store(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(PostpadError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PostpadError::Io(e)),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        self.ensure_dir()?;

        // write-then-rename so readers never see a half-written file
        let tmp_file = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_file, value).map_err(PostpadError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(PostpadError::Io(e));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_none() {
        let dir = TempDir::new().unwrap();
        let backend = FsBackend::new(dir.path());
        assert_eq!(backend.read("posts").unwrap(), None);
    }

    #[test]
    fn write_creates_dir_and_file() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("nested").join("data");
        let backend = FsBackend::new(&root);

        backend.write("posts", "[]").unwrap();
        assert_eq!(fs::read_to_string(root.join("posts.json")).unwrap(), "[]");
        assert_eq!(backend.read("posts").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn write_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let backend = FsBackend::new(dir.path());
        backend.write("posts", "[1]").unwrap();
        backend.write("posts", "[2]").unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["posts.json".to_string()]);
    }

    #[test]
    fn rejects_path_like_keys() {
        let dir = TempDir::new().unwrap();
        let backend = FsBackend::new(dir.path());
        for key in ["", "../escape", "a/b", "with space", "dot.json"] {
            assert!(backend.key_path(key).is_err(), "{:?} should be rejected", key);
        }
        assert!(backend.key_path("my-posts_2").is_ok());
    }
}
