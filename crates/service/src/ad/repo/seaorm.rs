use common::{Page, Pagination};
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::debug;

use crate::ad::domain::{Ad, AdDraft, AdId};
use crate::ad::repository::AdRepository;
use crate::errors::ServiceError;
use crate::user::domain::UserId;

pub struct SeaOrmAdRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmAdRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn into_ads(rows: Vec<models::ad::Model>) -> Vec<Ad> {
    rows.into_iter().map(Ad::from).collect()
}

#[async_trait::async_trait]
impl AdRepository for SeaOrmAdRepository {
    async fn save(&self, draft: AdDraft) -> Result<Ad, ServiceError> {
        let fields = draft.fields();
        match draft.id {
            None => Ok(models::ad::create(&self.db, draft.user_id, fields).await?.into()),
            Some(id) => {
                // rolled back on drop if the update fails
                let txn = self.db.begin().await?;
                let updated = models::ad::update(&txn, id, fields).await?;
                txn.commit().await?;
                debug!(ad_id = id, "ad_row_updated");
                Ok(updated.into())
            }
        }
    }

    async fn find_by_id(&self, id: AdId) -> Result<Option<Ad>, ServiceError> {
        Ok(models::ad::find_by_id(&self.db, id).await?.map(Ad::from))
    }

    async fn delete_by_id(&self, id: AdId) -> Result<bool, ServiceError> {
        Ok(models::ad::delete_by_id(&self.db, id).await?)
    }

    async fn find_all_by_active_true(&self) -> Result<Vec<Ad>, ServiceError> {
        Ok(into_ads(models::ad::find_all_active(&self.db).await?))
    }

    async fn find_by_title_containing_and_active_true(
        &self,
        keyword: &str,
    ) -> Result<Vec<Ad>, ServiceError> {
        Ok(into_ads(models::ad::find_by_title_containing_active(&self.db, keyword).await?))
    }

    async fn find_ads_with_paging(&self, page: Pagination) -> Result<Vec<Ad>, ServiceError> {
        let (page_idx, per_page) = page.normalize();
        Ok(into_ads(models::ad::find_page_by_recency(&self.db, page_idx, per_page).await?))
    }

    async fn find_all_by_user_id(&self, user_id: UserId) -> Result<Vec<Ad>, ServiceError> {
        Ok(into_ads(models::ad::find_all_by_user(&self.db, user_id).await?))
    }

    async fn find_active_page(&self, page: Pagination) -> Result<Page<Ad>, ServiceError> {
        let (page_idx, per_page) = page.normalize();
        let (rows, total) = models::ad::find_active_page(&self.db, page_idx, per_page).await?;
        Ok(Page::new(into_ads(rows), page, total))
    }
}
