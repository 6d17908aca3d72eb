use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
};

use crate::{
    book::Book,
    error::{ResourceError, ResourceErrorProvider, RouteError},
    extractor::json::ApiJson,
    state::ApiState,
    store::StoreError,
};

use super::BookJson;

#[derive(Debug)]
pub enum UpdateBookErrorType {
    DoesNotExist,
    MissingField,
    Other,
}

impl From<StoreError> for UpdateBookErrorType {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DoesNotExist => UpdateBookErrorType::DoesNotExist,
            StoreError::MissingField => UpdateBookErrorType::MissingField,
            StoreError::AlreadyExists => UpdateBookErrorType::Other,
        }
    }
}

impl ResourceErrorProvider for UpdateBookErrorType {
    // Missing books are a conflict here, not a 404.
    fn status_code(&self) -> StatusCode {
        StatusCode::CONFLICT
    }

    fn message(&self) -> &'static str {
        match self {
            UpdateBookErrorType::DoesNotExist => "Item does not exist",
            UpdateBookErrorType::MissingField => "Item is missing a required field",
            UpdateBookErrorType::Other => "There was an error modifying the item",
        }
    }
}

/// Replaces the book at `isbn` with the request body.
///
/// The body's `isbn` becomes the new key, see [`crate::store::BookStore::update`].
pub async fn update_book(
    state: &ApiState,
    isbn: &str,
    req: Request,
) -> Result<BookJson, RouteError<UpdateBookErrorType>> {
    let ApiJson(book) = ApiJson::<Book>::from_request(req, state).await?;

    let book = state.books().update(isbn, book).map_err(|err| {
        tracing::warn!(%err, "Failed to update book");

        ResourceError(UpdateBookErrorType::from(err))
    })?;

    Ok(BookJson::encode(state, &book)?)
}
