use std::sync::Arc;

use common::{Page, Pagination};
use tracing::{info, instrument, warn};

use super::domain::{AdDraft, AdId, AdRequest, AdResponse};
use super::repository::AdRepository;
use crate::asset::{sanitize_filename, AssetStore, AssetUpload};
use crate::errors::ServiceError;
use crate::user::domain::UserId;
use crate::user::repository::UserRepository;

pub const DEFAULT_MAX_ASSET_BYTES: usize = 10 * 1024 * 1024;

/// Ad service configuration
#[derive(Clone, Debug)]
pub struct AdServiceConfig {
    pub max_asset_bytes: usize,
}

impl Default for AdServiceConfig {
    fn default() -> Self {
        Self { max_asset_bytes: DEFAULT_MAX_ASSET_BYTES }
    }
}

/// Ad business service independent of web framework
pub struct AdService<R: AdRepository, U: UserRepository> {
    ads: Arc<R>,
    users: Arc<U>,
    assets: Arc<dyn AssetStore>,
    cfg: AdServiceConfig,
}

fn validate_request(req: &AdRequest) -> Result<(), ServiceError> {
    models::ad::validate_title(req.title.trim())?;
    if req.content.trim().is_empty() {
        return Err(ServiceError::Validation("content required".into()));
    }
    Ok(())
}

impl<R: AdRepository, U: UserRepository> AdService<R, U> {
    pub fn new(
        ads: Arc<R>,
        users: Arc<U>,
        assets: Arc<dyn AssetStore>,
        cfg: AdServiceConfig,
    ) -> Self {
        Self { ads, users, assets, cfg }
    }

    fn validate_upload(&self, upload: &AssetUpload) -> Result<(), ServiceError> {
        if !upload.is_image() {
            return Err(ServiceError::Validation(format!("unsupported content type {}", upload.content_type)));
        }
        if upload.is_empty() {
            return Err(ServiceError::Validation("empty file".into()));
        }
        if upload.len() > self.cfg.max_asset_bytes {
            return Err(ServiceError::Validation(format!("file larger than {} bytes", self.cfg.max_asset_bytes)));
        }
        sanitize_filename(&upload.filename).map_err(|e| ServiceError::Validation(e.to_string()))?;
        Ok(())
    }

    /// Best effort; a leftover file is logged, never surfaced.
    async fn discard_asset(&self, reference: &str) {
        if let Err(e) = self.assets.delete(reference).await {
            warn!(asset = %reference, error = %e, "asset_cleanup_failed");
        }
    }

    /// Create an ad for `user_id` with its image. The ad always starts active.
    ///
    /// The image is stored first; if the ad cannot be saved the image is removed again.
    ///
    /// # Examples
    /// ```
    /// use service::ad::{AdService, AdServiceConfig, domain::AdRequest, repository::mock::MockAdRepository};
    /// use service::asset::{AssetUpload, MemoryAssetStore};
    /// use service::user::{domain::NewUser, repository::{mock::MockUserRepository, UserRepository}};
    /// use std::sync::Arc;
    /// let users = Arc::new(MockUserRepository::default());
    /// let ads = Arc::new(MockAdRepository::new(users.clone()));
    /// let svc = AdService::new(ads, users.clone(), Arc::new(MemoryAssetStore::new()), AdServiceConfig::default());
    /// let owner = tokio_test::block_on(users.save(NewUser::new("test@test.com", "닉네임", "1234"))).unwrap();
    /// let mut req = AdRequest::new("테스트 광고", "테스트 내용");
    /// req.active = Some(false);
    /// let file = AssetUpload::new("test.png", "image/png", &b"dummy"[..]);
    /// let ad = tokio_test::block_on(svc.create_ad(owner.id, req, file)).unwrap();
    /// assert!(ad.active);
    /// assert!(ad.img.unwrap().ends_with("_test.png"));
    /// ```
    #[instrument(skip(self, req, upload), fields(filename = %upload.filename))]
    pub async fn create_ad(
        &self,
        user_id: UserId,
        req: AdRequest,
        upload: AssetUpload,
    ) -> Result<AdResponse, ServiceError> {
        self.users.find_by_id(user_id).await?.ok_or_else(|| ServiceError::not_found("user"))?;
        validate_request(&req)?;
        self.validate_upload(&upload)?;

        let img = self.assets.put(&upload).await?;
        let draft = AdDraft::new(user_id, req.title.trim(), req.content, Some(img.clone()));
        match self.ads.save(draft).await {
            Ok(ad) => {
                info!(ad_id = ad.id, user_id = ad.user_id, asset = %img, "ad_created");
                Ok(ad.into())
            }
            Err(e) => {
                self.discard_asset(&img).await;
                Err(e)
            }
        }
    }

    /// Newest ads first, active or not. `page` is 1-based.
    pub async fn get_latest_ads_with_paging(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<AdResponse>, ServiceError> {
        let ads = self.ads.find_ads_with_paging(Pagination::new(page, page_size)).await?;
        Ok(ads.into_iter().map(AdResponse::from).collect())
    }

    pub async fn get_ad(&self, id: AdId) -> Result<AdResponse, ServiceError> {
        let ad = self.ads.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found("ad"))?;
        Ok(ad.into())
    }

    /// Overwrite title and content, and `active` when the request carries it.
    ///
    /// A new upload replaces the image; the previous file is removed only once the ad is saved.
    #[instrument(skip(self, req, upload), fields(ad_id = id))]
    pub async fn update_ad(
        &self,
        id: AdId,
        req: AdRequest,
        upload: Option<AssetUpload>,
    ) -> Result<AdResponse, ServiceError> {
        let current = self.ads.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found("ad"))?;
        validate_request(&req)?;
        if let Some(u) = &upload {
            self.validate_upload(u)?;
        }

        let new_img = match &upload {
            Some(u) => Some(self.assets.put(u).await?),
            None => None,
        };
        let old_img = current.img.clone();

        let mut draft = AdDraft::from(current);
        draft.title = req.title.trim().to_string();
        draft.content = req.content;
        if let Some(active) = req.active {
            draft.active = active;
        }
        if new_img.is_some() {
            draft.img = new_img.clone();
        }

        match self.ads.save(draft).await {
            Ok(ad) => {
                if let (Some(_), Some(old)) = (&new_img, &old_img) {
                    self.discard_asset(old).await;
                }
                info!(ad_id = ad.id, active = ad.active, "ad_updated");
                Ok(ad.into())
            }
            Err(e) => {
                if let Some(fresh) = &new_img {
                    self.discard_asset(fresh).await;
                }
                Err(e)
            }
        }
    }

    pub async fn set_active(&self, id: AdId, active: bool) -> Result<AdResponse, ServiceError> {
        let current = self.ads.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found("ad"))?;
        let ad = self.ads.save(AdDraft::from(current).with_active(active)).await?;
        info!(ad_id = ad.id, active, "ad_active_changed");
        Ok(ad.into())
    }

    /// Remove the ad, then its image.
    #[instrument(skip(self), fields(ad_id = id))]
    pub async fn delete_ad(&self, id: AdId) -> Result<(), ServiceError> {
        let current = self.ads.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found("ad"))?;
        if !self.ads.delete_by_id(id).await? {
            return Err(ServiceError::not_found("ad"));
        }
        if let Some(img) = &current.img {
            self.discard_asset(img).await;
        }
        info!(ad_id = id, "ad_deleted");
        Ok(())
    }

    pub async fn list_active_ads(&self) -> Result<Vec<AdResponse>, ServiceError> {
        Ok(self.ads.find_all_by_active_true().await?.into_iter().map(AdResponse::from).collect())
    }

    /// Active ads whose title contains `keyword`. An empty keyword matches every active ad.
    pub async fn search_active_ads(&self, keyword: &str) -> Result<Vec<AdResponse>, ServiceError> {
        let ads = self.ads.find_by_title_containing_and_active_true(keyword.trim()).await?;
        Ok(ads.into_iter().map(AdResponse::from).collect())
    }

    pub async fn list_user_ads(&self, user_id: UserId) -> Result<Vec<AdResponse>, ServiceError> {
        self.users.find_by_id(user_id).await?.ok_or_else(|| ServiceError::not_found("user"))?;
        Ok(self.ads.find_all_by_user_id(user_id).await?.into_iter().map(AdResponse::from).collect())
    }

    pub async fn get_active_ads_page(
        &self,
        page: Pagination,
    ) -> Result<Page<AdResponse>, ServiceError> {
        Ok(self.ads.find_active_page(page).await?.map(AdResponse::from))
    }
}
