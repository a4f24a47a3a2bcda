use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use crate::user::domain::{NewUser, User, UserId};
use crate::user::repository::UserRepository;

pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn save(&self, user: NewUser) -> Result<User, ServiceError> {
        let created = models::user::create(&self.db, &user.email, &user.nickname, &user.credential).await?;
        Ok(created.into())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, ServiceError> {
        Ok(models::user::find_by_id(&self.db, id).await?.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ServiceError> {
        Ok(models::user::find_by_email(&self.db, email).await?.map(User::from))
    }
}
