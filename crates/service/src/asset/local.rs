use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use super::{check_reference, new_reference, AssetError, AssetStore, AssetUpload};

/// Assets written as plain files under a root directory.
#[derive(Debug, Clone)]
pub struct LocalAssetStore {
    root: PathBuf,
}

impl LocalAssetStore {
    /// Creates the root directory if missing.
    pub async fn new<P: Into<PathBuf>>(root: P) -> Result<Self, AssetError> {
        let root = root.into();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, reference: &str) -> Result<PathBuf, AssetError> {
        check_reference(reference)?;
        Ok(self.root.join(reference))
    }
}

#[async_trait]
impl AssetStore for LocalAssetStore {
    async fn put(&self, upload: &AssetUpload) -> Result<String, AssetError> {
        let reference = new_reference(&upload.filename)?;
        let path = self.path_for(&reference)?;
        fs::write(&path, &upload.bytes).await?;
        debug!(asset = %reference, bytes = upload.len(), "asset_stored");
        Ok(reference)
    }

    async fn delete(&self, reference: &str) -> Result<(), AssetError> {
        let path = self.path_for(reference)?;
        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!(asset = %reference, "asset_deleted");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn exists(&self, reference: &str) -> Result<bool, AssetError> {
        let path = self.path_for(reference)?;
        Ok(fs::try_exists(&path).await?)
    }
}
