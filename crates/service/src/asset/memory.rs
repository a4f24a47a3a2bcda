use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::Mutex;

use super::{check_reference, new_reference, AssetError, AssetStore, AssetUpload};

/// In-memory asset store for tests and doc examples.
#[derive(Default)]
pub struct MemoryAssetStore {
    objects: Mutex<HashMap<String, Bytes>>,
    fail: bool,
}

impl MemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail with an I/O error.
    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub async fn len(&self) -> usize {
        self.objects.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.objects.lock().await.is_empty()
    }

    pub async fn get(&self, reference: &str) -> Option<Bytes> {
        self.objects.lock().await.get(reference).cloned()
    }
}

#[async_trait]
impl AssetStore for MemoryAssetStore {
    async fn put(&self, upload: &AssetUpload) -> Result<String, AssetError> {
        if self.fail {
            return Err(AssetError::Io(std::io::Error::other("asset store unavailable")));
        }
        let reference = new_reference(&upload.filename)?;
        self.objects.lock().await.insert(reference.clone(), upload.bytes.clone());
        Ok(reference)
    }

    async fn delete(&self, reference: &str) -> Result<(), AssetError> {
        check_reference(reference)?;
        self.objects.lock().await.remove(reference);
        Ok(())
    }

    async fn exists(&self, reference: &str) -> Result<bool, AssetError> {
        check_reference(reference)?;
        Ok(self.objects.lock().await.contains_key(reference))
    }
}
