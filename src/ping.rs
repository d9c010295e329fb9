use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::BackendConfig;

pub const PING_MESSAGE: &str = "Portfolio API is running!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingResponse {
    pub message: String,
}

impl Default for PingResponse {
    fn default() -> Self {
        Self {
            message: PING_MESSAGE.to_string(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PingError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("backend answered with status {0}")]
    Status(u16),
    #[error("couldn't decode response: {0}")]
    Decode(String),
}

#[cfg(feature = "hydrate")]
pub async fn ping(url: &str) -> Result<PingResponse, PingError> {
    use gloo_net::http::Request;

    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| PingError::Request(e.to_string()))?;
    if !resp.ok() {
        return Err(PingError::Status(resp.status()));
    }
    resp.json::<PingResponse>()
        .await
        .map_err(|e| PingError::Decode(e.to_string()))
}

/// Fires the diagnostic ping in the background. The outcome only ever reaches the log.
///
/// Returns whether a request was actually scheduled.
pub fn spawn_ping(config: &BackendConfig) -> bool {
    let Some(url) = config.ping_url() else {
        log::debug!("no backend origin configured, skipping ping");
        return false;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match ping(&url).await {
            Ok(res) => log::info!("{}", res.message),
            Err(e) => log::error!("ping to {url} failed: {e}"),
        }
    });

    #[cfg(not(feature = "hydrate"))]
    log::debug!("ping to {url} only runs in the browser");

    cfg!(feature = "hydrate")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_shape() {
        let res: PingResponse =
            serde_json::from_str(r#"{"message": "Portfolio API is running!"}"#).unwrap();
        assert_eq!(res, PingResponse::default());
        assert_eq!(
            serde_json::to_string(&res).unwrap(),
            r#"{"message":"Portfolio API is running!"}"#
        );
    }

    #[test]
    fn test_spawn_without_backend_schedules_nothing() {
        assert!(!spawn_ping(&BackendConfig::default()));
        let blank = BackendConfig::from_value(Some("  ")).unwrap();
        assert!(!spawn_ping(&blank));
    }

    #[cfg(not(feature = "hydrate"))]
    #[test]
    fn test_spawn_outside_browser_schedules_nothing() {
        let config = BackendConfig::from_value(Some("http://localhost:8001")).unwrap();
        assert!(config.ping_url().is_some());
        assert!(!spawn_ping(&config));
    }
}
