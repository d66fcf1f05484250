use thiserror::Error;

/// Why a CSS root-margin string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarginParseError {
    #[error("root margin needs 1 to 4 lengths, found {0}")]
    Arity(usize),
    #[error("`{0}` is not a pixel length (expected e.g. `-100px` or `0`)")]
    NotPixels(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("landing config is not valid JSON: {0}")]
    Json(String),
    #[error("brand shade {shade} has invalid color `{value}`")]
    InvalidColor { shade: u16, value: String },
    #[error("{field} must be greater than zero")]
    ZeroPeriod { field: &'static str },
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("no window available")]
    NoWindow,
    #[error("IntersectionObserver unavailable: {0}")]
    Observer(String),
}
