use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const BACKEND_URL_VAR: &str = "SNAPCODE_BACKEND_URL";

pub struct Config {
    /// Base URL of the grading backend, e.g. `http://localhost:8000`.
    pub backend_url: Url,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let value = std::env::var(BACKEND_URL_VAR)
            .map_err(|_| ConfigError::MissingEnvVar(BACKEND_URL_VAR.to_string()))?;

        Ok(Self {
            backend_url: parse_backend_url(&value)?,
        })
    }
}

fn parse_backend_url(value: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        var: BACKEND_URL_VAR.to_string(),
        reason,
    };

    let url = Url::parse(value.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_urls() {
        let url = parse_backend_url(" http://localhost:8000 ").unwrap();
        assert_eq!(url.host_str(), Some("localhost"));
        assert_eq!(url.port(), Some(8000));
    }

    #[test]
    fn rejects_relative_and_non_http_urls() {
        assert!(matches!(
            parse_backend_url("localhost:8000/api"),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            parse_backend_url("/api/v1"),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            parse_backend_url("ftp://backend"),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }
}
