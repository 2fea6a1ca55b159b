use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("report {0} not found")]
    NotFound(i64),

    /// Constraint violation or a request the backend refused.
    #[error("store rejected the request: {0}")]
    Rejected(String),

    #[error("store backend failure: {0}")]
    Backend(String),

    #[error("store unreachable: {0}")]
    Transport(String),

    #[error("unexpected store response: {0}")]
    Decode(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}

impl From<anyhow::Error> for StoreError {
    fn from(e: anyhow::Error) -> Self {
        match e.downcast_ref::<rusqlite::Error>() {
            Some(rusqlite::Error::SqliteFailure(code, _))
                if code.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Self::Rejected(e.to_string())
            }
            _ => Self::Backend(e.to_string()),
        }
    }
}
