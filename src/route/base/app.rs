use axum::{routing::any, Router};

use crate::state::ApiState;

pub const WELCOME: &str = "Welcome To Cloud Native Go!";

/// Answers `/` and every path no other route claims, whatever the method.
pub async fn welcome() -> &'static str {
    tracing::trace!("Welcome");

    WELCOME
}

pub fn app() -> Router<ApiState> {
    Router::<ApiState>::new().route("/", any(welcome))
}
