use crate::{error::ApiError, state::ApiState};

use super::BookJson;

pub fn list_books(state: &ApiState) -> Result<BookJson, ApiError> {
    let books = state.books().list();

    tracing::debug!(count = books.len(), "Listing books");

    BookJson::encode(state, &books)
}
