mod common;

use chrono::{Duration, Utc};
use linksnip::domain::entities::NewLink;
use linksnip::domain::repositories::LinkRepository;
use linksnip::error::AppError;
use linksnip::infrastructure::persistence::PgLinkRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn repo(pool: PgPool) -> PgLinkRepository {
    PgLinkRepository::new(Arc::new(pool))
}

#[sqlx::test]
async fn test_insert_and_find(pool: PgPool) {
    let repo = repo(pool);

    let created = repo
        .insert(NewLink {
            code: "abc123".to_string(),
            target_url: "https://example.com".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(created.code, "abc123");
    assert_eq!(created.target_url, "https://example.com");
    assert_eq!(created.clicks, 0);
    assert!(created.last_clicked.is_none());

    let found = repo.find_by_code("abc123").await.unwrap().unwrap();
    assert_eq!(found.code, created.code);
    assert_eq!(found.created_at, created.created_at);
}

#[sqlx::test]
async fn test_find_missing_returns_none(pool: PgPool) {
    let repo = repo(pool);

    assert!(repo.find_by_code("ghost1").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_insert_duplicate_code_is_conflict(pool: PgPool) {
    let repo = repo(pool);

    repo.insert(NewLink {
        code: "dupe12".to_string(),
        target_url: "https://first.example.com".to_string(),
    })
    .await
    .unwrap();

    // The primary key is the backstop for the check-then-insert race.
    let result = repo
        .insert(NewLink {
            code: "dupe12".to_string(),
            target_url: "https://second.example.com".to_string(),
        })
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
}

#[sqlx::test]
async fn test_list_all_ordered_by_created_at(pool: PgPool) {
    let now = Utc::now();
    common::create_link_created_at(&pool, "newer1", "https://b.example.com", now).await;
    common::create_link_created_at(&pool, "older1", "https://a.example.com", now - Duration::hours(1)).await;

    let repo = repo(pool);
    let links = repo.list_all().await.unwrap();

    let codes: Vec<&str> = links.iter().map(|l| l.code.as_str()).collect();
    assert_eq!(codes, vec!["older1", "newer1"]);
}

#[sqlx::test]
async fn test_delete(pool: PgPool) {
    common::create_test_link(&pool, "gone12", "https://example.com").await;

    let repo = repo(pool);

    assert!(repo.delete("gone12").await.unwrap());
    assert!(repo.find_by_code("gone12").await.unwrap().is_none());

    // Second delete finds nothing.
    assert!(!repo.delete("gone12").await.unwrap());
}

#[sqlx::test]
async fn test_record_click_increments_and_stamps(pool: PgPool) {
    common::create_test_link(&pool, "click1", "https://example.com/target").await;

    let repo = repo(pool.clone());

    let target = repo.record_click("click1").await.unwrap().unwrap();
    assert_eq!(target, "https://example.com/target");

    let (clicks, last_clicked) = common::fetch_counters(&pool, "click1").await;
    assert_eq!(clicks, 1);
    assert!(last_clicked.is_some());

    let first_stamp = last_clicked.unwrap();

    repo.record_click("click1").await.unwrap().unwrap();

    let (clicks, last_clicked) = common::fetch_counters(&pool, "click1").await;
    assert_eq!(clicks, 2);
    assert!(last_clicked.unwrap() >= first_stamp);
}

#[sqlx::test]
async fn test_record_click_unknown_code_mutates_nothing(pool: PgPool) {
    common::create_test_link(&pool, "other1", "https://example.com").await;

    let repo = repo(pool.clone());

    assert!(repo.record_click("ghost1").await.unwrap().is_none());

    let (clicks, last_clicked) = common::fetch_counters(&pool, "other1").await;
    assert_eq!(clicks, 0);
    assert!(last_clicked.is_none());
}

#[sqlx::test]
async fn test_concurrent_clicks_increment_exactly(pool: PgPool) {
    const CLICKS: usize = 20;

    common::create_test_link(&pool, "storm1", "https://example.com").await;

    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));

    // The increment is a single UPDATE expression in the store, so parallel
    // clicks must not lose updates.
    let mut handles = Vec::with_capacity(CLICKS);
    for _ in 0..CLICKS {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            repo.record_click("storm1").await.unwrap().unwrap()
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), "https://example.com");
    }

    let (clicks, _) = common::fetch_counters(&pool, "storm1").await;
    assert_eq!(clicks, CLICKS as i32);
}
