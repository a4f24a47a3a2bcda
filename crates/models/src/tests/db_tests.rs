use crate::db::{connect_with_config, DatabaseConfig};
use anyhow::Result;
use migration::MigratorTrait;
use std::time::Duration;

#[test]
fn test_config_section_converts_to_pool_settings() {
    let section = configs::DatabaseConfig {
        url: "postgres://localhost/ads".into(),
        max_connections: 20,
        min_connections: 4,
        acquire_timeout_secs: 5,
        ..Default::default()
    };
    let cfg = DatabaseConfig::from(&section);
    assert_eq!(cfg.url, "postgres://localhost/ads");
    assert_eq!(cfg.max_connections, 20);
    assert_eq!(cfg.min_connections, 4);
    assert_eq!(cfg.acquire_timeout, Duration::from_secs(5));
    assert_eq!(cfg.connect_timeout, Duration::from_secs(30));
}

/// The path the migrate binary takes: config section -> pool -> migrations
#[tokio::test]
async fn test_connect_from_config_section() -> Result<()> {
    let section = configs::DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    };
    section.validate()?;
    let db = connect_with_config(&DatabaseConfig::from(&section)).await?;
    migration::Migrator::up(&db, None).await?;
    assert!(crate::user::find_by_email(&db, "test@test.com").await?.is_none());
    Ok(())
}
