use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::Method;
use axum::response::{IntoResponse, Response};

use crate::application::ports::LlmClient;
use crate::application::services::ProxyReplyBody;
use crate::presentation::state::AppState;

/// Accepts every method so that the service, not the router, answers
/// non-POST requests with its own 405 body.
#[tracing::instrument(skip(state, method, body), fields(method = %method))]
pub async fn proxy_handler<L>(
    State(state): State<AppState<L>>,
    method: Method,
    body: Bytes,
) -> Response
where
    L: LlmClient + 'static,
{
    let reply = state.proxy_service.handle(&method, &body).await;

    match reply.body {
        ProxyReplyBody::Json(payload) => (reply.status, Json(payload)).into_response(),
        ProxyReplyBody::Text(text) => (reply.status, text).into_response(),
    }
}
