use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use http_body_util::BodyExt;

use crate::{error::ApiError, server_error, state::ApiState};

/// Logs every response body at trace level, tagged with the request it answers.
///
/// The body is buffered only while trace is enabled for this module,
/// otherwise the response streams through untouched.
pub async fn trace_response_body(
    State(state): State<ApiState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !tracing::enabled!(tracing::Level::TRACE) {
        return Ok(next.run(req).await);
    }

    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let (parts, body) = next.run(req).await.into_parts();

    let bytes = body
        .collect()
        .await
        .map_err(server_error!(state))?
        .to_bytes();

    let status = parts.status;
    let len = bytes.len();

    match std::str::from_utf8(&bytes) {
        Ok(body) => tracing::trace!(%method, %path, %status, len, %body, "Response body"),
        Err(_) => tracing::trace!(%method, %path, %status, len, "Binary response body"),
    }

    Ok(Response::from_parts(parts, Body::from(bytes)))
}
