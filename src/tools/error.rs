use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("{0}")]
    RequestError(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    StatusError(u16),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

impl ToolError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ToolError::StatusError(404))
    }
}
