use axum::{
    extract::{OriginalUri, Request, State},
    http::Method,
    response::{IntoResponse, Response},
};

use crate::{error::ResourceError, state::ApiState};

use super::{
    delete_book::delete_book, get_book::get_book, update_book::update_book, UnsupportedMethod,
};

pub const ITEM_PATH_PREFIX: &str = "/api/books/";

/// The ISBN is whatever follows [`ITEM_PATH_PREFIX`], taken verbatim without percent-decoding.
fn isbn_from_path(path: &str) -> &str {
    path.strip_prefix(ITEM_PATH_PREFIX).unwrap_or_default()
}

/// `/api/books/{isbn}`: reads, replaces or deletes a single book.
#[tracing::instrument(name = "book", skip_all, fields(method = %method, isbn))]
pub async fn book(
    State(state): State<ApiState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    req: Request,
) -> Response {
    let isbn = isbn_from_path(uri.path());
    tracing::Span::current().record("isbn", isbn);

    match method {
        Method::GET => get_book(&state, isbn).into_response(),
        Method::PUT => update_book(&state, isbn, req).await.into_response(),
        Method::DELETE => delete_book(&state, isbn).into_response(),
        _ => {
            tracing::warn!("Unsupported method");

            ResourceError(UnsupportedMethod).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isbn_is_the_raw_path_suffix() {
        assert_eq!(isbn_from_path("/api/books/0123456789"), "0123456789");
        assert_eq!(isbn_from_path("/api/books/"), "");
        assert_eq!(isbn_from_path("/api/books/a%20b"), "a%20b");
        assert_eq!(isbn_from_path("/api/books/a/b"), "a/b");
    }
}
