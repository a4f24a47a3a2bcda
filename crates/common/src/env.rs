//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use tracing::{info, warn};

/// Ensure the asset directory exists, creating it when missing.
pub async fn ensure_asset_dir(asset_dir: &str) -> anyhow::Result<()> {
    match tokio::fs::metadata(asset_dir).await {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(anyhow::anyhow!("{asset_dir} exists but is not a directory")),
        Err(_) => {
            warn!(%asset_dir, "asset directory not found; creating it");
            tokio::fs::create_dir_all(asset_dir)
                .await
                .map_err(|e| anyhow::anyhow!("cannot create {asset_dir}: {e}"))?;
            info!(%asset_dir, "asset directory created");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ensure_asset_dir;

    #[tokio::test]
    async fn creates_missing_directory() -> anyhow::Result<()> {
        let dir = std::env::temp_dir().join(format!("assets_{}", uuid::Uuid::new_v4()));
        let path = dir.to_string_lossy().to_string();
        ensure_asset_dir(&path).await?;
        assert!(tokio::fs::metadata(&dir).await?.is_dir());
        // second call is a no-op
        ensure_asset_dir(&path).await?;
        tokio::fs::remove_dir_all(&dir).await?;
        Ok(())
    }

    #[tokio::test]
    async fn rejects_plain_file() -> anyhow::Result<()> {
        let file = std::env::temp_dir().join(format!("not_a_dir_{}", uuid::Uuid::new_v4()));
        tokio::fs::write(&file, b"x").await?;
        let res = ensure_asset_dir(&file.to_string_lossy()).await;
        assert!(res.is_err());
        tokio::fs::remove_file(&file).await?;
        Ok(())
    }
}
