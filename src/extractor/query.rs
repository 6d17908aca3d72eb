use axum::{
    async_trait,
    extract::{FromRequestParts, Query as AxumQuery},
    http::request::Parts,
};
use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;
use std::fmt::Debug;

use crate::error::{ApiError, ErrorVerbosityProvider, InternalServerError, QueryError};

/// A Wrapper around [`axum::extract::Query`] that rejects with an [`ApiError`].
///
/// Extracts query parameters from the request.
pub struct ApiQuery<T>(pub T);

impl<T: JsonSchema> ApiQuery<T> {
    /// Builds the rejection for a query that parsed but is missing something `T` needs.
    pub fn reject<S: ErrorVerbosityProvider>(state: &S, reason: String) -> ApiError {
        let verbosity = state.error_verbosity();

        match serde_yaml::to_string(&schema_for!(T)) {
            Ok(schema) => QueryError::new(verbosity, reason, schema).into(),
            Err(err) => InternalServerError::from_generic_error(verbosity, err).into(),
        }
    }
}

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned + JsonSchema + Debug + Send,
    S: Send + Sync + ErrorVerbosityProvider,
{
    type Rejection = ApiError;

    #[tracing::instrument(name = "query_extractor", skip_all)]
    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let query = AxumQuery::<T>::from_request_parts(parts, state).await;

        match query {
            Ok(query) => {
                tracing::trace!(query=?query.0, "Extracted");

                Ok(ApiQuery(query.0))
            }
            Err(query_rejection) => {
                tracing::warn!(rejection=?query_rejection, "Rejection");

                Err(Self::reject(state, query_rejection.body_text()))
            }
        }
    }
}
