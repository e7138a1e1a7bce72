//! Object storage for donated item photos.
//!
//! The hosted bucket service is an opaque collaborator: the core only needs
//! `upload(bucket, path, bytes) -> public URL`. The shipped implementation
//! writes beneath a configured root directory and joins a public base URL,
//! which is sufficient for self-hosted deployments and tests.

use std::path::PathBuf;

use crate::server::error::Error;

#[derive(Clone)]
pub struct ObjectStorage {
    root: PathBuf,
    public_base_url: String,
}

impl ObjectStorage {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        let public_base_url = public_base_url.into().trim_end_matches('/').to_string();

        Self {
            root: root.into(),
            public_base_url,
        }
    }

    /// Stores `bytes` under `bucket/path` and returns the public URL.
    ///
    /// `bucket` and `path` must be plain names; separators and parent
    /// references are rejected so callers cannot escape the storage root.
    pub async fn upload(&self, bucket: &str, path: &str, bytes: &[u8]) -> Result<String, Error> {
        validate_segment(bucket)?;
        validate_segment(path)?;

        let dir = self.root.join(bucket);
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join(path), bytes).await?;

        Ok(format!("{}/{}/{}", self.public_base_url, bucket, path))
    }
}

fn validate_segment(segment: &str) -> Result<(), Error> {
    let valid = !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment.contains(['/', '\\']);

    if valid {
        Ok(())
    } else {
        Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("invalid storage segment: {segment:?}"),
        )
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upload_writes_file_and_returns_public_url() {
        let dir = tempfile::tempdir().unwrap();
        let storage = ObjectStorage::new(dir.path(), "https://cdn.example.org/");

        let url = storage
            .upload("laptop-images", "photo.jpg", b"bytes")
            .await
            .unwrap();

        assert_eq!(url, "https://cdn.example.org/laptop-images/photo.jpg");
        let written = std::fs::read(dir.path().join("laptop-images/photo.jpg")).unwrap();
        assert_eq!(written, b"bytes");
    }

    #[tokio::test]
    async fn upload_rejects_path_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let storage = ObjectStorage::new(dir.path(), "https://cdn.example.org");

        let result = storage.upload("..", "photo.jpg", b"bytes").await;
        assert!(result.is_err());

        let result = storage.upload("images", "../escape.jpg", b"bytes").await;
        assert!(result.is_err());
    }
}
