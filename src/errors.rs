// errors.rs
use thiserror::Error;

/// Errors a request handler can fail with. Seed catalog problems are
/// startup failures and never reach a handler.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::InternalError => 500,
        }
    }
}

/// Problems found while loading the seed data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid seed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("property ids must be positive")]
    InvalidId,

    #[error("duplicate property id {0}")]
    DuplicateId(u32),

    #[error("property {0} has an empty title")]
    EmptyTitle(u32),

    #[error("detail refers to unknown property {0}")]
    OrphanDetail(u32),
}
