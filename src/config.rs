use thiserror::Error;

/// Environment variable naming the backend origin, e.g. `https://api.example.com`.
pub const BACKEND_URL_VAR: &str = "PORTFOLIO_BACKEND_URL";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{BACKEND_URL_VAR} must start with http:// or https://, got {0:?}")]
    BadOrigin(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendConfig {
    origin: Option<String>,
}

impl BackendConfig {
    /// Reads the origin baked in at compile time, as the WASM bundle has no process env.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_value(option_env!("PORTFOLIO_BACKEND_URL"))
    }

    /// Missing or blank values give a config with no origin.
    pub fn from_value(value: Option<&str>) -> Result<Self, ConfigError> {
        let origin = match value.map(str::trim) {
            None | Some("") => None,
            Some(v) if v.starts_with("http://") || v.starts_with("https://") => {
                Some(v.trim_end_matches('/').to_string())
            }
            Some(v) => return Err(ConfigError::BadOrigin(v.to_string())),
        };
        Ok(Self { origin })
    }

    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// URL of the diagnostic ping, if a backend is configured.
    pub fn ping_url(&self) -> Option<String> {
        self.origin.as_ref().map(|o| format!("{o}/api/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_origin_skips_ping() {
        let config = BackendConfig::from_value(None).unwrap();
        assert_eq!(config.origin(), None);
        assert_eq!(config.ping_url(), None);

        let config = BackendConfig::from_value(Some("  ")).unwrap();
        assert_eq!(config.ping_url(), None);
    }

    #[test]
    fn test_ping_url() {
        let config = BackendConfig::from_value(Some("https://api.example.com")).unwrap();
        assert_eq!(
            config.ping_url().as_deref(),
            Some("https://api.example.com/api/")
        );
    }

    #[test]
    fn test_trailing_slash_tolerated() {
        let config = BackendConfig::from_value(Some("http://localhost:8001/")).unwrap();
        assert_eq!(config.origin(), Some("http://localhost:8001"));
        assert_eq!(
            config.ping_url().as_deref(),
            Some("http://localhost:8001/api/")
        );
    }

    #[test]
    fn test_bad_origin() {
        assert_eq!(
            BackendConfig::from_value(Some("localhost:8001")),
            Err(ConfigError::BadOrigin("localhost:8001".to_string()))
        );
    }
}
