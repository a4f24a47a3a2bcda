use sea_orm::DatabaseConnection;
use migration::MigratorTrait;

/// Connection settings
pub mod db_tests;


/// Active, keyword and recency queries
pub mod query_tests;

/// Transaction handling
pub mod transaction_tests;

/// Fresh in-memory database with the schema applied.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let db = crate::db::connect_in_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub(crate) async fn seed_user(db: &DatabaseConnection) -> anyhow::Result<crate::user::Model> {
    Ok(crate::user::create(db, "test@test.com", "닉네임", "1234").await?)
}

pub(crate) fn fields(title: &str, content: &str, active: bool) -> crate::ad::AdFields {
    crate::ad::AdFields { title: title.to_string(), content: content.to_string(), img: None, active }
}
