use axum::{
    extract::{Request, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};

use crate::{error::ResourceError, state::ApiState};

use super::{create_book::create_book, list_books::list_books, UnsupportedMethod};

/// `/api/books`: lists books, creates a book or answers a CORS preflight.
#[tracing::instrument(name = "books", skip_all, fields(method = %method))]
pub async fn books(State(state): State<ApiState>, method: Method, req: Request) -> Response {
    match method {
        Method::OPTIONS => StatusCode::OK.into_response(),
        Method::GET => list_books(&state).into_response(),
        Method::POST => create_book(&state, req).await.into_response(),
        _ => {
            tracing::warn!("Unsupported method");

            ResourceError(UnsupportedMethod).into_response()
        }
    }
}
