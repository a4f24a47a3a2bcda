use async_trait::async_trait;
use common::{Page, Pagination};

use super::domain::{Ad, AdDraft, AdId};
use crate::errors::ServiceError;
use crate::user::domain::UserId;

/// Repository abstraction for ad persistence.
///
/// Listings are ordered newest first (`created_at DESC, id DESC`).
#[async_trait]
pub trait AdRepository: Send + Sync {
    /// Insert (`draft.id == None`) or update an existing ad; updating an unknown id is `NotFound`.
    async fn save(&self, draft: AdDraft) -> Result<Ad, ServiceError>;
    async fn find_by_id(&self, id: AdId) -> Result<Option<Ad>, ServiceError>;
    /// Returns whether a row existed.
    async fn delete_by_id(&self, id: AdId) -> Result<bool, ServiceError>;
    async fn find_all_by_active_true(&self) -> Result<Vec<Ad>, ServiceError>;
    async fn find_by_title_containing_and_active_true(
        &self,
        keyword: &str,
    ) -> Result<Vec<Ad>, ServiceError>;
    /// One page over all ads regardless of `active`.
    async fn find_ads_with_paging(&self, page: Pagination) -> Result<Vec<Ad>, ServiceError>;
    async fn find_all_by_user_id(&self, user_id: UserId) -> Result<Vec<Ad>, ServiceError>;
    async fn find_active_page(&self, page: Pagination) -> Result<Page<Ad>, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use crate::user::repository::mock::MockUserRepository;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct State {
        ads: BTreeMap<AdId, Ad>,
        last_id: AdId,
    }

    impl State {
        fn newest_first(&self, keep: impl Fn(&Ad) -> bool) -> Vec<Ad> {
            let mut out: Vec<Ad> = self.ads.values().filter(|a| keep(a)).cloned().collect();
            out.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
            out
        }
    }

    /// Checks owners against a `MockUserRepository` the way a foreign key would.
    pub struct MockAdRepository {
        users: Arc<MockUserRepository>,
        state: Mutex<State>,
        fail_saves: AtomicBool,
    }

    impl MockAdRepository {
        pub fn new(users: Arc<MockUserRepository>) -> Self {
            Self { users, state: Mutex::new(State::default()), fail_saves: AtomicBool::new(false) }
        }

        /// Make every following `save` fail with a database error.
        pub fn fail_saves(&self, fail: bool) {
            self.fail_saves.store(fail, Ordering::SeqCst);
        }

        pub async fn count(&self) -> usize {
            self.state.lock().await.ads.len()
        }
    }

    #[async_trait]
    impl AdRepository for MockAdRepository {
        async fn save(&self, draft: AdDraft) -> Result<Ad, ServiceError> {
            if self.fail_saves.load(Ordering::SeqCst) {
                return Err(ServiceError::Db("save rejected".into()));
            }
            models::ad::validate_title(&draft.title)?;
            let mut state = self.state.lock().await;
            match draft.id {
                None => {
                    if !self.users.contains(draft.user_id).await {
                        return Err(ServiceError::Validation(format!("user {} does not exist", draft.user_id)));
                    }
                    state.last_id += 1;
                    let ad = Ad {
                        id: state.last_id,
                        user_id: draft.user_id,
                        title: draft.title,
                        content: draft.content,
                        img: draft.img,
                        active: draft.active,
                        created_at: chrono::Utc::now().into(),
                    };
                    state.ads.insert(ad.id, ad.clone());
                    Ok(ad)
                }
                Some(id) => {
                    let ad = state.ads.get_mut(&id).ok_or_else(|| ServiceError::not_found("ad"))?;
                    ad.title = draft.title;
                    ad.content = draft.content;
                    ad.img = draft.img;
                    ad.active = draft.active;
                    Ok(ad.clone())
                }
            }
        }

        async fn find_by_id(&self, id: AdId) -> Result<Option<Ad>, ServiceError> {
            Ok(self.state.lock().await.ads.get(&id).cloned())
        }

        async fn delete_by_id(&self, id: AdId) -> Result<bool, ServiceError> {
            Ok(self.state.lock().await.ads.remove(&id).is_some())
        }

        async fn find_all_by_active_true(&self) -> Result<Vec<Ad>, ServiceError> {
            Ok(self.state.lock().await.newest_first(|a| a.active))
        }

        async fn find_by_title_containing_and_active_true(
            &self,
            keyword: &str,
        ) -> Result<Vec<Ad>, ServiceError> {
            Ok(self.state.lock().await.newest_first(|a| a.active && a.title.contains(keyword)))
        }

        async fn find_ads_with_paging(&self, page: Pagination) -> Result<Vec<Ad>, ServiceError> {
            let (idx, per_page) = page.normalize();
            let all = self.state.lock().await.newest_first(|_| true);
            Ok(all.into_iter().skip((idx * per_page) as usize).take(per_page as usize).collect())
        }

        async fn find_all_by_user_id(&self, user_id: UserId) -> Result<Vec<Ad>, ServiceError> {
            Ok(self.state.lock().await.newest_first(|a| a.user_id == user_id))
        }

        async fn find_active_page(&self, page: Pagination) -> Result<Page<Ad>, ServiceError> {
            let active = self.state.lock().await.newest_first(|a| a.active);
            let total = active.len() as u64;
            let items = active.into_iter().skip(page.offset() as usize).take(page.normalize().1 as usize).collect();
            Ok(Page::new(items, page, total))
        }
    }
}
