use axum::{
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{
    error::{ApiError, ResourceErrorProvider},
    server_error,
    state::ApiState,
};

pub mod app;
pub mod collection;
pub mod create_book;
pub mod delete_book;
pub mod get_book;
pub mod item;
pub mod list_books;
pub mod update_book;

/// Content type of every response carrying books.
///
/// `charset-utf-8` is not a typo, existing clients match on this exact value.
pub const BOOK_CONTENT_TYPE: &str = "application/json; charset-utf-8";

/// A JSON encoded book (or list of books) sent with [`BOOK_CONTENT_TYPE`].
#[derive(Debug)]
pub struct BookJson(Vec<u8>);

impl BookJson {
    pub fn encode<T: Serialize>(state: &ApiState, value: &T) -> Result<Self, ApiError> {
        let bytes = serde_json::to_vec(value).map_err(server_error!(state))?;

        Ok(BookJson(bytes))
    }
}

impl IntoResponse for BookJson {
    fn into_response(self) -> Response {
        (StatusCode::OK, [(CONTENT_TYPE, BOOK_CONTENT_TYPE)], self.0).into_response()
    }
}

#[derive(Debug)]
pub struct UnsupportedMethod;

impl ResourceErrorProvider for UnsupportedMethod {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn message(&self) -> &'static str {
        "Unsupported request method."
    }
}
