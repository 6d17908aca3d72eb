use axum::{routing::any, Router};

use crate::state::ApiState;

pub fn app() -> Router<ApiState> {
    Router::<ApiState>::new().route("/api/echo", any(super::echo_message::echo_message))
}
