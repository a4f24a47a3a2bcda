//! Storage for uploaded ad images.
//!
//! An ad keeps only the opaque reference returned by [`AssetStore::put`].

mod local;
mod memory;

pub use local::LocalAssetStore;
pub use memory::MemoryAssetStore;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("invalid asset: {0}")]
    Invalid(String),
    #[error("asset io: {0}")]
    Io(#[from] std::io::Error),
}

/// An uploaded file as handed over by the transport layer.
#[derive(Debug, Clone)]
pub struct AssetUpload {
    pub filename: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl AssetUpload {
    pub fn new(
        filename: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self { filename: filename.into(), content_type: content_type.into(), bytes: bytes.into() }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn is_image(&self) -> bool {
        self.content_type.trim().to_ascii_lowercase().starts_with("image/")
    }
}

#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Store the bytes and return the reference to keep on the ad.
    async fn put(&self, upload: &AssetUpload) -> Result<String, AssetError>;
    /// Remove a stored asset. Unknown references are not an error.
    async fn delete(&self, reference: &str) -> Result<(), AssetError>;
    async fn exists(&self, reference: &str) -> Result<bool, AssetError>;
}

/// Keep the last path component and replace anything outside `[A-Za-z0-9._-]`.
pub fn sanitize_filename(name: &str) -> Result<String, AssetError> {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default().trim();
    let cleaned: String = base
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') { c } else { '_' })
        .collect();
    if cleaned.trim_matches('.').is_empty() {
        return Err(AssetError::Invalid(format!("unusable filename {name:?}")));
    }
    Ok(cleaned)
}

pub(crate) fn new_reference(filename: &str) -> Result<String, AssetError> {
    Ok(format!("{}_{}", uuid::Uuid::new_v4(), sanitize_filename(filename)?))
}

/// References are single file names; anything that could walk the tree is refused.
pub(crate) fn check_reference(reference: &str) -> Result<(), AssetError> {
    if reference.is_empty() || reference.starts_with('.') || reference.contains(['/', '\\']) {
        return Err(AssetError::Invalid(format!("bad reference {reference:?}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_directories_and_odd_characters() {
        assert_eq!(sanitize_filename("test.png").unwrap(), "test.png");
        assert_eq!(sanitize_filename("../../etc/passwd").unwrap(), "passwd");
        assert_eq!(sanitize_filename("C:\\photos\\my cat.jpg").unwrap(), "my_cat.jpg");
        assert_eq!(sanitize_filename("광고.png").unwrap(), "__.png");
    }

    #[test]
    fn sanitize_rejects_empty_names() {
        assert!(matches!(sanitize_filename(""), Err(AssetError::Invalid(_))));
        assert!(matches!(sanitize_filename("dir/"), Err(AssetError::Invalid(_))));
        assert!(matches!(sanitize_filename(".."), Err(AssetError::Invalid(_))));
    }

    #[test]
    fn references_are_unique_and_flat() {
        let a = new_reference("test.png").unwrap();
        let b = new_reference("test.png").unwrap();
        assert_ne!(a, b);
        assert!(a.ends_with("_test.png"));
        check_reference(&a).unwrap();
        assert!(check_reference("../secret").is_err());
        assert!(check_reference("a/b.png").is_err());
    }

    #[test]
    fn upload_content_type_check() {
        assert!(AssetUpload::new("a.png", "image/png", &b"dummy"[..]).is_image());
        assert!(AssetUpload::new("a.png", " IMAGE/JPEG", &b"dummy"[..]).is_image());
        assert!(!AssetUpload::new("a.txt", "text/plain", &b"dummy"[..]).is_image());
    }
}
