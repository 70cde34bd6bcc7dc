use axum::{
    Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    routing::post,
};
use log::{error, info, warn};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::alert::AlertBatch;
use crate::format::format_message;
use crate::forward::DiscordForwarder;

pub struct AppState {
    pub auth_token: String,
    pub forwarder: DiscordForwarder,
}

/// Build the application router. The only real route is the webhook
/// receiver; everything else is deliberately indistinguishable from a
/// missing endpoint.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/webhooks/:webhook_id/:webhook_token",
            post(receive_alerts).fallback(method_not_allowed),
        )
        .fallback(not_found)
        .layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
        .with_state(state)
}

async fn receive_alerts(
    State(state): State<Arc<AppState>>,
    Path((webhook_id, webhook_token)): Path<(String, String)>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    // Report auth failures as 404 so probers cannot tell the endpoint exists.
    if !authorized(&headers, &state.auth_token) {
        warn!("Rejected request with missing or wrong bearer token");
        return (StatusCode::NOT_FOUND, "Not found".to_string());
    }

    let batch: AlertBatch = match serde_json::from_str(&body) {
        Ok(batch) => batch,
        Err(e) => {
            warn!("Rejected malformed alert payload: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                format!("Invalid alert payload: {}", e),
            );
        }
    };

    if !batch.has_status() {
        return (StatusCode::BAD_REQUEST, "No status found".to_string());
    }

    info!(
        "Forwarding {} alert(s) to webhook {}",
        batch.alerts.len(),
        webhook_id
    );

    let message = format_message(&batch);
    let url = state.forwarder.webhook_url(&webhook_id, &webhook_token);

    // Fire and forget: delivery failures are logged, never reported back.
    if let Err(e) = state.forwarder.forward(&url, message).await {
        error!("Failed to forward alerts to Discord: {}", e);
    }

    (StatusCode::OK, "OK".to_string())
}

fn authorized(headers: &HeaderMap, token: &str) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == format!("Bearer {}", token))
}

async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}
