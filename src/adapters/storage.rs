use crate::domain::ports::Storage;
use crate::utils::error::{FolioError, Result};
use std::path::{Component, Path, PathBuf};

/// Files under a base directory: page templates in, rendered pages out.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Paths must stay under the base directory: no root, drive prefix or `..`.
    fn resolve(&self, path: &str) -> Result<PathBuf> {
        let relative = Path::new(path);
        let confined = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));

        if !confined {
            return Err(FolioError::IoError(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Path escapes storage directory: {}", path),
            )));
        }
        Ok(self.base_path.join(relative))
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path)?;
        let data = tokio::fs::read(full_path).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path)?;

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_then_read_creates_parents() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        storage
            .write_file("nested/index.html", b"<html></html>")
            .await
            .unwrap();

        let data = storage.read_file("nested/index.html").await.unwrap();
        assert_eq!(data, b"<html></html>");
    }

    #[tokio::test]
    async fn test_read_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        let err = storage.read_file("missing.html").await.unwrap_err();
        assert!(matches!(err, crate::utils::error::FolioError::IoError(_)));
    }

    #[tokio::test]
    async fn test_paths_outside_base_are_rejected() {
        let dir = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        let target = outside.path().join("gallery.html");
        std::fs::write(&target, "ORIGINAL").unwrap();
        let storage = LocalStorage::new(dir.path());

        let absolute = target.to_string_lossy();
        assert!(storage.write_file(&absolute, b"x").await.is_err());
        assert!(storage.read_file(&absolute).await.is_err());
        assert!(storage.write_file("../escape.html", b"x").await.is_err());
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "ORIGINAL");

        storage.write_file("./ok.html", b"x").await.unwrap();
        assert!(dir.path().join("ok.html").exists());
    }
}
