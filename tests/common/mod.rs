#![allow(dead_code)]

use chrono::{DateTime, Utc};
use linksnip::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool))
}

pub async fn create_test_link(pool: &PgPool, code: &str, url: &str) {
    sqlx::query("INSERT INTO links (code, target_url) VALUES ($1, $2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_link_created_at(
    pool: &PgPool,
    code: &str,
    url: &str,
    created_at: DateTime<Utc>,
) {
    sqlx::query("INSERT INTO links (code, target_url, created_at) VALUES ($1, $2, $3)")
        .bind(code)
        .bind(url)
        .bind(created_at)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_clicked_link(pool: &PgPool, code: &str, url: &str, clicks: i32) {
    sqlx::query("INSERT INTO links (code, target_url, clicks, last_clicked) VALUES ($1, $2, $3, NOW())")
        .bind(code)
        .bind(url)
        .bind(clicks)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn fetch_counters(pool: &PgPool, code: &str) -> (i32, Option<DateTime<Utc>>) {
    sqlx::query_as::<_, (i32, Option<DateTime<Utc>>)>(
        "SELECT clicks, last_clicked FROM links WHERE code = $1",
    )
    .bind(code)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_links(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}
