#![allow(dead_code)]

use alias_shortener::infrastructure::persistence::PgAliasRepository;
use alias_shortener::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub async fn create_test_mapping(pool: &PgPool, alias: &str, url: &str, user: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        r#"INSERT INTO url (alias, url, "user") VALUES ($1, $2, $3) RETURNING id"#,
    )
    .bind(alias)
    .bind(url)
    .bind(user)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn mapping_exists(pool: &PgPool, alias: &str) -> bool {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM url WHERE alias = $1)")
        .bind(alias)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn stored_url(pool: &PgPool, alias: &str) -> Option<String> {
    sqlx::query_scalar::<_, String>("SELECT url FROM url WHERE alias = $1")
        .bind(alias)
        .fetch_optional(pool)
        .await
        .unwrap()
}

pub fn create_test_repository(pool: PgPool) -> Arc<PgAliasRepository> {
    Arc::new(PgAliasRepository::new(Arc::new(pool)))
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(create_test_repository(pool))
}
