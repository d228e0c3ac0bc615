//! Behavior of the serial registry against an in-memory database.

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use unlock_bot::database::devices::{self, Device, InsertOutcome};
use unlock_bot::database::init;

// A single connection keeps every query on the same in-memory database.
async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");
    init::init_schema(&pool).await.expect("schema");
    pool
}

fn sample(serial: &str) -> Device {
    Device {
        serial: serial.to_string(),
        marca: "Samsung".to_string(),
        modelo: "A14".to_string(),
        estado: "Liberado".to_string(),
    }
}

#[tokio::test]
async fn insert_then_find_returns_exact_record() {
    let pool = test_pool().await;
    let device = sample("111111111");

    let outcome = devices::insert_device(&pool, &device).await.expect("insert");
    assert_eq!(outcome, InsertOutcome::Inserted);

    let found = devices::find_by_serial(&pool, "111111111")
        .await
        .expect("find")
        .expect("record should exist");
    assert_eq!(found, device);
}

#[tokio::test]
async fn duplicate_insert_is_rejected_without_overwrite() {
    let pool = test_pool().await;
    let first = sample("222222222");
    devices::insert_device(&pool, &first).await.expect("insert");

    let second = Device {
        serial: "222222222".to_string(),
        marca: "Xiaomi".to_string(),
        modelo: "Redmi 12".to_string(),
        estado: "Bloqueado".to_string(),
    };
    let outcome = devices::insert_device(&pool, &second)
        .await
        .expect("duplicate insert should not be an error");
    assert_eq!(outcome, InsertOutcome::Duplicate);

    // The stored record keeps the first call's values.
    let found = devices::find_by_serial(&pool, "222222222")
        .await
        .expect("find")
        .expect("record should exist");
    assert_eq!(found, first);
}

#[tokio::test]
async fn find_missing_serial_returns_none() {
    let pool = test_pool().await;
    let found = devices::find_by_serial(&pool, "999999999")
        .await
        .expect("find");
    assert!(found.is_none());
}

#[tokio::test]
async fn list_all_returns_every_inserted_record() {
    let pool = test_pool().await;
    assert!(devices::list_all(&pool).await.expect("list").is_empty());

    for serial in ["111111111", "222222222", "333333333"] {
        devices::insert_device(&pool, &sample(serial))
            .await
            .expect("insert");
    }

    let all = devices::list_all(&pool).await.expect("list");
    assert_eq!(all.len(), 3);
    for serial in ["111111111", "222222222", "333333333"] {
        assert!(all.iter().any(|d| d.serial == serial), "missing {}", serial);
    }
}
