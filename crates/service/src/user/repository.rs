use async_trait::async_trait;

use super::domain::{NewUser, User, UserId};
use crate::errors::ServiceError;

/// Repository abstraction for user persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user; a taken email is a `Conflict`.
    async fn save(&self, user: NewUser) -> Result<User, ServiceError>;
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, ServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct State {
        users: BTreeMap<UserId, User>,
        last_id: UserId,
    }

    #[derive(Default)]
    pub struct MockUserRepository {
        state: Mutex<State>,
    }

    impl MockUserRepository {
        pub async fn contains(&self, id: UserId) -> bool {
            self.state.lock().await.users.contains_key(&id)
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn save(&self, user: NewUser) -> Result<User, ServiceError> {
            let mut state = self.state.lock().await;
            if state.users.values().any(|u| u.email == user.email) {
                return Err(ServiceError::Conflict(format!("email {} already registered", user.email)));
            }
            state.last_id += 1;
            let saved = User {
                id: state.last_id,
                email: user.email,
                nickname: user.nickname,
                credential: user.credential,
                created_at: chrono::Utc::now().into(),
            };
            state.users.insert(saved.id, saved.clone());
            Ok(saved)
        }

        async fn find_by_id(&self, id: UserId) -> Result<Option<User>, ServiceError> {
            Ok(self.state.lock().await.users.get(&id).cloned())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<User>, ServiceError> {
            let state = self.state.lock().await;
            Ok(state.users.values().find(|u| u.email == email).cloned())
        }
    }
}
