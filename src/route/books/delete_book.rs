use axum::http::StatusCode;

use crate::{
    error::{ResourceError, ResourceErrorProvider, RouteError},
    state::ApiState,
    store::StoreError,
};

use super::BookJson;

#[derive(Debug)]
pub enum DeleteBookErrorType {
    DoesNotExist,
    Other,
}

impl From<StoreError> for DeleteBookErrorType {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DoesNotExist => DeleteBookErrorType::DoesNotExist,
            StoreError::AlreadyExists | StoreError::MissingField => DeleteBookErrorType::Other,
        }
    }
}

impl ResourceErrorProvider for DeleteBookErrorType {
    fn status_code(&self) -> StatusCode {
        StatusCode::CONFLICT
    }

    fn message(&self) -> &'static str {
        match self {
            DeleteBookErrorType::DoesNotExist => "Item does not exist",
            DeleteBookErrorType::Other => "There was an error deleting the item",
        }
    }
}

/// Deletes the book at `isbn` and responds with the deleted book.
pub fn delete_book(
    state: &ApiState,
    isbn: &str,
) -> Result<BookJson, RouteError<DeleteBookErrorType>> {
    let book = state.books().delete(isbn).map_err(|err| {
        tracing::warn!(%err, "Failed to delete book");

        ResourceError(DeleteBookErrorType::from(err))
    })?;

    Ok(BookJson::encode(state, &book)?)
}
