#[derive(Debug, thiserror::Error)]
pub enum NabuError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to parse HTML: {0}")]
    Parse(String),
}
