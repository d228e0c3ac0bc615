//! Client for the external serial lookup API, consulted when a serial is not
//! registered locally.
//!
//! The service answers `GET {base}?serial={serial}` with a JSON body that is
//! either the record fields or `{"error": ...}` for logical failures such as
//! an unknown serial. Both shapes arrive with a success status, so the reply
//! is decoded by field presence rather than by status code.

use serde::Deserialize;
use tracing::instrument;

/// The two body shapes the lookup API can answer with.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RemoteReply {
    /// Logical failure reported by the service, surfaced to the user as a
    /// notice rather than an exception.
    Error { error: String },
    /// A known serial with its record fields.
    Found {
        marca: String,
        modelo: String,
        estado: String,
    },
}

/// HTTP client bound to the lookup endpoint. No timeout, no retry, no auth;
/// every local miss re-queries the service.
#[derive(Debug, Clone)]
pub struct SerialApi {
    http: reqwest::Client,
    base_url: String,
}

impl SerialApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Queries the API for a serial. Transport failures and bodies matching
    /// neither reply shape surface as `Err`; callers render those as a
    /// connection-failure notice instead of crashing.
    #[instrument(level = "debug", skip(self))]
    pub async fn lookup(&self, serial: &str) -> Result<RemoteReply, reqwest::Error> {
        self.http
            .get(&self.base_url)
            .query(&[("serial", serial)])
            .send()
            .await?
            .json::<RemoteReply>()
            .await
    }
}
