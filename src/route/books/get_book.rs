use axum::http::StatusCode;

use crate::{
    error::{ResourceError, ResourceErrorProvider, RouteError},
    state::ApiState,
};

use super::BookJson;

#[derive(Debug)]
pub enum GetBookErrorType {
    NotFound,
}

impl ResourceErrorProvider for GetBookErrorType {
    fn status_code(&self) -> StatusCode {
        match self {
            GetBookErrorType::NotFound => StatusCode::NOT_FOUND,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            GetBookErrorType::NotFound => "Item was not found.",
        }
    }
}

pub fn get_book(state: &ApiState, isbn: &str) -> Result<BookJson, RouteError<GetBookErrorType>> {
    let book = state
        .books()
        .get(isbn)
        .ok_or(ResourceError(GetBookErrorType::NotFound))?;

    Ok(BookJson::encode(state, &book)?)
}
