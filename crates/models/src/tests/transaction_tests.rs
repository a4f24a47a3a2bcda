use super::{fields, seed_user, setup_test_db};
use crate::ad;
use anyhow::Result;
use sea_orm::TransactionTrait;

/// Test basic transaction commit
#[tokio::test]
async fn test_transaction_commit() -> Result<()> {
    let db = setup_test_db().await?;
    let owner = seed_user(&db).await?;

    let txn = db.begin().await?;
    let created = ad::create(&txn, owner.id, fields("트랜잭션 광고", "내용", true)).await?;
    txn.commit().await?;

    let found = ad::find_by_id(&db, created.id).await?;
    assert_eq!(found.map(|a| a.title), Some("트랜잭션 광고".to_string()));
    Ok(())
}

/// Test transaction rollback
#[tokio::test]
async fn test_transaction_rollback() -> Result<()> {
    let db = setup_test_db().await?;
    let owner = seed_user(&db).await?;

    let txn = db.begin().await?;
    let created = ad::create(&txn, owner.id, fields("롤백될 광고", "내용", true)).await?;
    ad::update(&txn, created.id, fields("롤백될 광고", "바뀐 내용", false)).await?;
    txn.rollback().await?;

    assert!(ad::find_by_id(&db, created.id).await?.is_none());
    assert!(ad::find_all_active(&db).await?.is_empty());
    Ok(())
}

/// Dropping an uncommitted transaction discards its writes
#[tokio::test]
async fn test_transaction_dropped_without_commit() -> Result<()> {
    let db = setup_test_db().await?;
    let owner = seed_user(&db).await?;
    let kept = ad::create(&db, owner.id, fields("광고 제목", "광고 내용", true)).await?;

    {
        let txn = db.begin().await?;
        ad::update(&txn, kept.id, fields("바뀐 제목", "바뀐 내용", false)).await?;
    }

    let found = ad::find_by_id(&db, kept.id).await?.expect("ad present");
    assert_eq!(found.title, "광고 제목");
    assert!(found.active);
    Ok(())
}
