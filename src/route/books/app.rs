use axum::{routing::any, Router};
use http::{
    header::{
        ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    },
    HeaderValue,
};
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::state::ApiState;

pub const ALLOW_METHODS: &str = "POST, GET, OPTIONS, PUT, DELETE";
pub const ALLOW_HEADERS: &str =
    "Accept, Content-Type, Content-Length, Accept-Encoding, X-CSRF-Token, Authorization";

/// The collection gets the full CORS header set, single books only `Access-Control-Allow-Origin`.
pub fn app() -> Router<ApiState> {
    let allow_any_origin = SetResponseHeaderLayer::overriding(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );

    let cors = ServiceBuilder::new()
        .layer(allow_any_origin.clone())
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        ));

    Router::<ApiState>::new()
        .route("/api/books", any(super::collection::books).layer(cors))
        .route(
            "/api/books/",
            any(super::item::book).layer(allow_any_origin.clone()),
        )
        .route(
            "/api/books/*isbn",
            any(super::item::book).layer(allow_any_origin),
        )
}
