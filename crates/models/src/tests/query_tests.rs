use super::{fields, seed_user, setup_test_db};
use crate::ad;
use anyhow::Result;

#[tokio::test]
async fn test_find_all_active_only() -> Result<()> {
    let db = setup_test_db().await?;
    let owner = seed_user(&db).await?;
    ad::create(&db, owner.id, fields("광고 제목", "광고 내용", true)).await?;
    ad::create(&db, owner.id, fields("활성 광고1", "내용1", true)).await?;
    ad::create(&db, owner.id, fields("비활성 광고", "내용2", false)).await?;

    let ads = ad::find_all_active(&db).await?;
    assert_eq!(ads.len(), 2);
    assert!(ads.iter().all(|a| a.active));
    assert_eq!(ads[0].title, "활성 광고1");
    Ok(())
}

#[tokio::test]
async fn test_find_by_title_containing_and_active() -> Result<()> {
    let db = setup_test_db().await?;
    let owner = seed_user(&db).await?;
    ad::create(&db, owner.id, fields("광고 제목", "광고 내용", true)).await?;
    ad::create(&db, owner.id, fields("광고 키워드 포함", "내용1", true)).await?;
    ad::create(&db, owner.id, fields("광고 키워드 포함 (비활성)", "내용2", false)).await?;
    ad::create(&db, owner.id, fields("다른 제목", "내용3", true)).await?;

    let ads = ad::find_by_title_containing_active(&db, "광고").await?;
    assert!(!ads.is_empty());
    assert!(ads.iter().all(|a| a.active && a.title.contains("광고")));
    let titles: Vec<_> = ads.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["광고 키워드 포함", "광고 제목"]);

    let narrow = ad::find_by_title_containing_active(&db, "키워드").await?;
    assert_eq!(narrow.len(), 1);
    assert_eq!(narrow[0].title, "광고 키워드 포함");
    Ok(())
}

#[tokio::test]
async fn test_title_search_treats_wildcards_literally() -> Result<()> {
    let db = setup_test_db().await?;
    let owner = seed_user(&db).await?;
    ad::create(&db, owner.id, fields("100% 할인", "내용", true)).await?;
    ad::create(&db, owner.id, fields("1000 할인", "내용", true)).await?;
    ad::create(&db, owner.id, fields("a_b 특가", "내용", true)).await?;
    ad::create(&db, owner.id, fields("axb 특가", "내용", true)).await?;

    let percent = ad::find_by_title_containing_active(&db, "0%").await?;
    assert_eq!(percent.len(), 1);
    assert_eq!(percent[0].title, "100% 할인");

    let underscore = ad::find_by_title_containing_active(&db, "a_b").await?;
    assert_eq!(underscore.len(), 1);
    assert_eq!(underscore[0].title, "a_b 특가");
    Ok(())
}

#[test]
fn test_contains_pattern_escapes() {
    assert_eq!(ad::contains_pattern("광고"), "%광고%");
    assert_eq!(ad::contains_pattern("50%_off\\"), "%50\\%\\_off\\\\%");
}

#[tokio::test]
async fn test_find_page_by_recency() -> Result<()> {
    let db = setup_test_db().await?;
    let owner = seed_user(&db).await?;
    ad::create(&db, owner.id, fields("광고 제목", "광고 내용", true)).await?;
    for i in 1..=15 {
        ad::create(&db, owner.id, fields(&format!("광고 {i}"), &format!("내용 {i}"), i % 4 != 0)).await?;
    }

    let first = ad::find_page_by_recency(&db, 0, 5).await?;
    assert_eq!(first.len(), 5);
    let titles: Vec<_> = first.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["광고 15", "광고 14", "광고 13", "광고 12", "광고 11"]);
    // inactive ads are included
    assert!(first.iter().any(|a| !a.active));
    for pair in first.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }

    let last = ad::find_page_by_recency(&db, 3, 5).await?;
    assert_eq!(last.len(), 1);
    assert_eq!(last[0].title, "광고 제목");

    assert!(ad::find_page_by_recency(&db, 4, 5).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_find_active_page_counts_only_active() -> Result<()> {
    let db = setup_test_db().await?;
    let owner = seed_user(&db).await?;
    ad::create(&db, owner.id, fields("첫 번째 광고", "내용1", true)).await?;
    ad::create(&db, owner.id, fields("숨긴 광고", "내용", false)).await?;
    ad::create(&db, owner.id, fields("두 번째 광고", "내용2", true)).await?;

    let (items, total) = ad::find_active_page(&db, 0, 5).await?;
    assert_eq!(total, 2);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "두 번째 광고");
    Ok(())
}

#[tokio::test]
async fn test_find_all_by_user() -> Result<()> {
    let db = setup_test_db().await?;
    let owner = seed_user(&db).await?;
    let other = crate::user::create(&db, "other@test.com", "다른 사람", "abcd").await?;
    ad::create(&db, owner.id, fields("광고 제목", "광고 내용", true)).await?;
    ad::create(&db, other.id, fields("남의 광고", "내용", true)).await?;
    ad::create(&db, owner.id, fields("비활성 광고", "내용", false)).await?;

    let mine = ad::find_all_by_user(&db, owner.id).await?;
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|a| a.user_id == owner.id));
    assert_eq!(mine[0].title, "비활성 광고");
    Ok(())
}
