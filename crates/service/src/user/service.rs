use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{NewUser, RegisterUser, User, UserId};
use super::repository::UserRepository;
use crate::errors::ServiceError;

/// User business service independent of web framework
pub struct UserService<R: UserRepository> {
    repo: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Register a user under a normalized (trimmed, lowercase) email.
    ///
    /// # Examples
    /// ```
    /// use service::user::{UserService, repository::mock::MockUserRepository, domain::RegisterUser};
    /// use std::sync::Arc;
    /// let svc = UserService::new(Arc::new(MockUserRepository::default()));
    /// let input = RegisterUser { email: " Test@Test.com ".into(), nickname: "닉네임".into(), credential: "1234".into() };
    /// let user = tokio_test::block_on(svc.register(input)).unwrap();
    /// assert_eq!(user.email, "test@test.com");
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register(&self, input: RegisterUser) -> Result<User, ServiceError> {
        let email = input.email.trim().to_lowercase();
        if !email.contains('@') {
            return Err(ServiceError::Validation("invalid email".into()));
        }
        let nickname = input.nickname.trim();
        if nickname.is_empty() {
            return Err(ServiceError::Validation("nickname required".into()));
        }
        if input.credential.trim().is_empty() {
            return Err(ServiceError::Validation("credential required".into()));
        }
        if let Some(existing) = self.repo.find_by_email(&email).await? {
            debug!("user exists: {}", existing.id);
            return Err(ServiceError::Conflict(format!("email {email} already registered")));
        }

        let user = self.repo.save(NewUser::new(email, nickname, input.credential)).await?;
        info!(user_id = user.id, email = %user.email, "user_registered");
        Ok(user)
    }

    pub async fn get_user(&self, id: UserId) -> Result<User, ServiceError> {
        self.repo.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found("user"))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, ServiceError> {
        self.repo.find_by_email(&email.trim().to_lowercase()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use crate::user::repo::SeaOrmUserRepository;
    use crate::user::repository::mock::MockUserRepository;

    fn input(email: &str, nickname: &str, credential: &str) -> RegisterUser {
        RegisterUser { email: email.into(), nickname: nickname.into(), credential: credential.into() }
    }

    #[tokio::test]
    async fn register_and_lookup() -> Result<(), anyhow::Error> {
        let svc = UserService::new(Arc::new(MockUserRepository::default()));
        let user = svc.register(input("Test@Test.com", "닉네임", "1234")).await?;
        assert_eq!(user.email, "test@test.com");
        assert_eq!(user.nickname, "닉네임");

        assert_eq!(svc.get_user(user.id).await?.id, user.id);
        assert_eq!(svc.find_by_email("TEST@test.com").await?.map(|u| u.id), Some(user.id));
        assert!(matches!(svc.get_user(user.id + 1).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn register_rejects_bad_input() {
        let svc = UserService::new(Arc::new(MockUserRepository::default()));
        assert!(matches!(svc.register(input("nobody", "닉네임", "1234")).await, Err(ServiceError::Validation(_))));
        assert!(matches!(svc.register(input("a@b.c", " ", "1234")).await, Err(ServiceError::Validation(_))));
        assert!(matches!(svc.register(input("a@b.c", "닉네임", "")).await, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn duplicate_email_conflicts() -> Result<(), anyhow::Error> {
        let svc = UserService::new(Arc::new(MockUserRepository::default()));
        svc.register(input("test@test.com", "닉네임", "1234")).await?;
        let err = svc.register(input(" TEST@test.com", "다른", "5678")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        assert_eq!(err.code(), 2003);
        Ok(())
    }

    #[tokio::test]
    async fn seaorm_repository_roundtrip() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let repo = Arc::new(SeaOrmUserRepository::new(db));
        let svc = UserService::new(repo.clone());

        let user = svc.register(input("test@test.com", "닉네임", "1234")).await?;
        assert_eq!(svc.get_user(user.id).await?.email, "test@test.com");

        // the store itself reports the unique violation
        let err = repo.save(NewUser::new("test@test.com", "다른", "5678")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        Ok(())
    }
}
