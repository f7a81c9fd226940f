//! `PgLogStore` against a live PostgreSQL.
//!
//! Set `DATABASE_URL` to run these; without it each test returns early.
//! Every test works in its own schema, dropped at the end.

use chrono::{Duration, Utc};
use maclog::db::{LogStore, PgLogStore, SearchQuery};
use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions},
};
use std::{str::FromStr, time::SystemTime};

const LEGACY_SCHEMA_SQL: &str = r#"CREATE TABLE logs (
    id SERIAL PRIMARY KEY,
    cpf VARCHAR(14),
    mac_address VARCHAR(17),
    horario TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)"#;

struct TestDb {
    pool: PgPool,
    store: PgLogStore,
    schema: String,
}

impl TestDb {
    async fn drop_schema(self) {
        sqlx::query(&format!("DROP SCHEMA IF EXISTS {} CASCADE", self.schema))
            .execute(&self.pool)
            .await
            .ok();
        self.store.close().await;
    }

    async fn insert_at(&self, cpf: &str, mac: &str, minutes_ago: i64) {
        sqlx::query(
            "INSERT INTO logs (cpf, mac_address, horario) VALUES ($1, $2, NOW() - make_interval(mins => $3::int))",
        )
        .bind(cpf)
        .bind(mac)
        .bind(minutes_ago)
        .execute(&self.pool)
        .await
        .expect("seed row");
    }
}

/// Connect to `DATABASE_URL` inside a fresh schema. `None` when unset.
async fn setup_test_db(name: &str) -> Option<TestDb> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping {name}");
        return None;
    };
    let nanos = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let schema = format!("maclog_{}_{}_{}", name, std::process::id(), nanos);

    let options = PgConnectOptions::from_str(&database_url)
        .expect("parse DATABASE_URL")
        .options([("search_path", schema.as_str())]);
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect_with(options)
        .await
        .expect("connect to DATABASE_URL");
    sqlx::query(&format!("CREATE SCHEMA {schema}"))
        .execute(&pool)
        .await
        .expect("create schema");

    let store = PgLogStore::from_pool(pool.clone());
    Some(TestDb {
        pool,
        store,
        schema,
    })
}

#[tokio::test]
async fn insert_then_list_newest_first() {
    let Some(db) = setup_test_db("list").await else {
        return;
    };
    db.store.ensure_schema().await.unwrap();

    let first = db
        .store
        .insert_log("123.456.789-01", "AA:BB:CC:DD:EE:FF")
        .await
        .unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let second = db
        .store
        .insert_log("98765432101", "11:22:33:44:55:66")
        .await
        .unwrap();
    assert_eq!(first.cpf, "123.456.789-01");
    assert_eq!(first.mac_address, "AA:BB:CC:DD:EE:FF");
    assert!(second.id > first.id);
    assert!(second.horario >= first.horario);
    assert!((Utc::now() - first.horario).num_minutes().abs() < 5);

    let (rows, total) = db.store.list_logs(50, 0).await.unwrap();
    assert_eq!(total, 2);
    assert_eq!(rows, vec![second.clone(), first.clone()]);

    let (rows, total) = db.store.list_logs(1, 1).await.unwrap();
    assert_eq!(total, 2);
    assert_eq!(rows, vec![first]);

    let (rows, total) = db.store.list_logs(10, i64::MAX).await.unwrap();
    assert!(rows.is_empty());
    assert_eq!(total, 2);

    db.drop_schema().await;
}

#[tokio::test]
async fn stats_count_distinct_and_last_24h() {
    let Some(db) = setup_test_db("stats").await else {
        return;
    };
    db.store.ensure_schema().await.unwrap();

    let empty = db.store.compute_stats().await.unwrap();
    assert_eq!(empty.totals.total_logs, 0);
    assert!(empty.totals.primeiro_registro.is_none());
    assert!(empty.totals.ultimo_registro.is_none());
    assert_eq!(empty.logs_ultimas_24h, 0);

    db.insert_at("11111111111", "AA:AA:AA:AA:AA:AA", 3 * 24 * 60).await;
    db.insert_at("11111111111", "BB:BB:BB:BB:BB:BB", 120).await;
    db.insert_at("22222222222", "BB:BB:BB:BB:BB:BB", 5).await;

    let stats = db.store.compute_stats().await.unwrap();
    assert_eq!(stats.totals.total_logs, 3);
    assert_eq!(stats.totals.cpfs_unicos, 2);
    assert_eq!(stats.totals.macs_unicos, 2);
    assert_eq!(stats.logs_ultimas_24h, 2);
    let first = stats.totals.primeiro_registro.unwrap();
    let last = stats.totals.ultimo_registro.unwrap();
    assert!(last - first > Duration::days(2));

    db.drop_schema().await;
}

#[tokio::test]
async fn search_binds_fragments_and_caps_rows() {
    let Some(db) = setup_test_db("search").await else {
        return;
    };
    db.store.ensure_schema().await.unwrap();

    db.store
        .insert_log("12345678901", "AA:BB:CC:DD:EE:FF")
        .await
        .unwrap();
    db.store
        .insert_log("98765432101", "11:22:33:44:55:66")
        .await
        .unwrap();

    let rows = db
        .store
        .search_logs(&SearchQuery::new(None, Some("aa:bb")))
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].cpf, "12345678901");

    let rows = db
        .store
        .search_logs(&SearchQuery::new(Some("987"), Some("11:22")))
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].mac_address, "11:22:33:44:55:66");

    let rows = db
        .store
        .search_logs(&SearchQuery::new(Some("' OR 1=1 --"), None))
        .await
        .unwrap();
    assert!(rows.is_empty());

    sqlx::query(
        "INSERT INTO logs (cpf, mac_address) SELECT '55555555555', 'CC:CC:CC:CC:CC:CC' FROM generate_series(1, 120)",
    )
    .execute(&db.pool)
    .await
    .unwrap();
    let rows = db
        .store
        .search_logs(&SearchQuery::new(Some("55555"), None))
        .await
        .unwrap();
    assert_eq!(rows.len(), 100);

    db.drop_schema().await;
}

#[tokio::test]
async fn reads_a_serial_timestamp_table() {
    let Some(db) = setup_test_db("legacy").await else {
        return;
    };
    sqlx::query(LEGACY_SCHEMA_SQL).execute(&db.pool).await.unwrap();
    // Leaves the existing table untouched.
    db.store.ensure_schema().await.unwrap();

    let created = db
        .store
        .insert_log("12345678901", "AA:BB:CC:DD:EE:FF")
        .await
        .unwrap();
    assert_eq!(created.id, 1);
    db.insert_at("98765432101", "11:22:33:44:55:66", 60).await;

    let (rows, total) = db.store.list_logs(50, 0).await.unwrap();
    assert_eq!(total, 2);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, created.id);

    let stats = db.store.compute_stats().await.unwrap();
    assert_eq!(stats.totals.total_logs, 2);
    assert!(stats.totals.primeiro_registro.is_some());
    assert_eq!(stats.logs_ultimas_24h, 2);

    let rows = db
        .store
        .search_logs(&SearchQuery::new(Some("123"), None))
        .await
        .unwrap();
    assert_eq!(rows, vec![created]);

    db.drop_schema().await;
}

#[tokio::test]
async fn health_check_follows_pool_state() {
    let Some(db) = setup_test_db("health").await else {
        return;
    };
    db.store.health_check().await.unwrap();

    let detached = PgLogStore::from_pool(db.pool.clone());
    detached.close().await;
    assert!(detached.health_check().await.is_err());

    // `detached` shares the pool, so the schema goes over a fresh connection.
    let database_url = std::env::var("DATABASE_URL").unwrap();
    let admin = PgPool::connect(&database_url).await.unwrap();
    sqlx::query(&format!("DROP SCHEMA IF EXISTS {} CASCADE", db.schema))
        .execute(&admin)
        .await
        .ok();
    admin.close().await;
}
