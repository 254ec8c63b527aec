use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Unknown section: {0}")]
    UnknownSection(String),

    #[error("Element not mounted: #{0}")]
    ElementNotMounted(String),

    #[error("Invalid theme value: {0:?}")]
    InvalidTheme(String),

    #[error("Content error: {0}")]
    Content(#[from] serde_json::Error),
}

impl From<PortfolioError> for String {
    fn from(err: PortfolioError) -> Self {
        err.to_string()
    }
}
