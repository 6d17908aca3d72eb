use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;
use std::fmt::Debug;

use crate::error::{
    ApiError, BodyError, ErrorVerbosityProvider, InternalServerError, PayloadTooLargeError,
};

/// Extracts the request body as JSON consuming the request, rejecting with an [`ApiError`].
///
/// Unlike [`axum::extract::Json`] the `Content-Type` header is not checked.
/// The body is read through [`Bytes`], so [`axum::extract::DefaultBodyLimit`] applies.
/// A body over the limit is a [`PayloadTooLargeError`], any other read failure is an
/// [`InternalServerError`] and a body that cannot be parsed is a [`BodyError`].
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned + JsonSchema + Debug + Send,
    S: Send + Sync + ErrorVerbosityProvider,
{
    type Rejection = ApiError;

    #[tracing::instrument(name = "json_extractor", skip_all)]
    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let verbosity = state.error_verbosity();

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|bytes_rejection| -> ApiError {
                tracing::warn!(rejection=?bytes_rejection, "Rejection");

                match bytes_rejection.status() {
                    StatusCode::PAYLOAD_TOO_LARGE => PayloadTooLargeError::new(verbosity).into(),
                    _ => InternalServerError::from_generic_error(verbosity, bytes_rejection).into(),
                }
            })?;

        match serde_json::from_slice::<T>(&bytes) {
            Ok(json) => {
                tracing::trace!(?json, "Extracted");

                Ok(ApiJson(json))
            }
            Err(err) => {
                tracing::warn!(%err, "Rejection");

                let body_expected_schema = serde_yaml::to_string(&schema_for!(T))
                    .map_err(|err| InternalServerError::from_generic_error(verbosity, err))?;

                Err(BodyError::new(verbosity, err.to_string(), body_expected_schema).into())
            }
        }
    }
}
