#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Unknown state: {0}")]
    UnknownState(String),
    #[error("Unknown direction: {0}")]
    UnknownDirection(String),
}
