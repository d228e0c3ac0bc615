//! Local-first, remote-fallback resolution of the `check` command.

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use unlock_bot::commands::check::logic::check_serial;
use unlock_bot::database::devices::{self, Device};
use unlock_bot::database::init;
use unlock_bot::services::lookup::SerialApi;

async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");
    init::init_schema(&pool).await.expect("schema");
    pool
}

// An endpoint nothing listens on. If a handler reaches for it the reply turns
// into a connection failure, which makes remote access observable in asserts.
fn unreachable_api() -> SerialApi {
    SerialApi::new("http://127.0.0.1:1/api/check")
}

#[tokio::test]
async fn local_hit_never_contacts_remote() {
    let pool = test_pool().await;
    devices::insert_device(
        &pool,
        &Device {
            serial: "111111111".to_string(),
            marca: "Samsung".to_string(),
            modelo: "A14".to_string(),
            estado: "Liberado".to_string(),
        },
    )
    .await
    .expect("insert");

    let reply = check_serial(&pool, &unreachable_api(), "111111111").await;
    assert!(reply.contains("`111111111`"));
    assert!(reply.contains("- Marca: Samsung"));
    assert!(!reply.contains("Error al conectar"));
}

#[tokio::test]
async fn local_miss_with_unreachable_api_reports_connection_failure() {
    let pool = test_pool().await;

    let reply = check_serial(&pool, &unreachable_api(), "999999999").await;
    assert!(
        reply.starts_with("❌ Error al conectar con la API:"),
        "unexpected reply: {}",
        reply
    );
}
