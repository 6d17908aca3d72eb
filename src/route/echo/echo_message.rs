use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::{error::ApiError, extractor::query::ApiQuery, state::ApiState};

/// Raw query pairs, kept in order so repeated keys can be resolved by position.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct EchoQuery(Vec<(String, String)>);

impl EchoQuery {
    /// The first `message` value.
    pub fn message(self) -> Option<String> {
        self.0
            .into_iter()
            .find_map(|(key, value)| (key == "message").then_some(value))
    }
}

#[derive(Debug)]
pub struct EchoResponse {
    message: String,
}

impl IntoResponse for EchoResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, [(CONTENT_TYPE, "text/plain")], self.message).into_response()
    }
}

/// Sends back the `message` query parameter as plain text.
pub async fn echo_message(
    State(state): State<ApiState>,
    ApiQuery(query): ApiQuery<EchoQuery>,
) -> Result<EchoResponse, ApiError> {
    let message = query.message().ok_or_else(|| {
        tracing::warn!("Missing message");

        ApiQuery::<EchoQuery>::reject(&state, "missing `message` query parameter".to_string())
    })?;

    Ok(EchoResponse { message })
}
