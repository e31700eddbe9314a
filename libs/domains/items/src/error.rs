use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

pub const NOT_FOUND: &str = "Item not found";
pub const NOT_FOUND_FOR_UPDATE: &str = "Item not found for update";
pub const NOT_FOUND_FOR_DELETION: &str = "Item not found for deletion";

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type ItemResult<T> = Result<T, ItemError>;

impl ItemError {
    /// Turn the store's "no such row" signals into `NotFound(message)`;
    /// everything else stays a database error.
    pub fn from_missing_record(err: DbErr, message: &str) -> Self {
        match err {
            DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => {
                ItemError::NotFound(message.to_string())
            }
            other => ItemError::Database(other),
        }
    }
}

impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::NotFound(message) => AppError::NotFound(message),
            ItemError::Database(e) => AppError::unclassified(e),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
