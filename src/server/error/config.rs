use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// See `.env.example` for the variables the server reads.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but is not an absolute http(s) URL.
    #[error("Invalid URL in {var}: {reason}")]
    InvalidUrl { var: String, reason: String },
}
