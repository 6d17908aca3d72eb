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
pub enum CreateBookErrorType {
    AlreadyExists,
    MissingField,
    Other,
}

impl From<StoreError> for CreateBookErrorType {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::AlreadyExists => CreateBookErrorType::AlreadyExists,
            StoreError::MissingField => CreateBookErrorType::MissingField,
            StoreError::DoesNotExist => CreateBookErrorType::Other,
        }
    }
}

impl ResourceErrorProvider for CreateBookErrorType {
    fn status_code(&self) -> StatusCode {
        StatusCode::CONFLICT
    }

    fn message(&self) -> &'static str {
        match self {
            CreateBookErrorType::AlreadyExists => "Item already exists",
            CreateBookErrorType::MissingField => "Item is missing a required field",
            CreateBookErrorType::Other => "There was an error creating the item",
        }
    }
}

pub async fn create_book(
    state: &ApiState,
    req: Request,
) -> Result<BookJson, RouteError<CreateBookErrorType>> {
    let ApiJson(book) = ApiJson::<Book>::from_request(req, state).await?;

    let book = state.books().create(book).map_err(|err| {
        tracing::warn!(%err, "Failed to create book");

        ResourceError(CreateBookErrorType::from(err))
    })?;

    Ok(BookJson::encode(state, &book)?)
}
