use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use tracing::warn;

use crate::errors::AppError;
use crate::models::{RelayRequest, RelayResponse};
use crate::service::relay_service::RelayService;

/// POST `/api/gemini` — JSON `{ prompt, conversation? }` in, `{ response }` out
pub async fn relay_handler(
    State(svc): State<RelayService>,
    body: Result<Json<RelayRequest>, JsonRejection>,
) -> Result<Json<RelayResponse>, AppError> {
    let Json(request) = body.map_err(|rejection| {
        warn!("Rejected relay request body: {rejection}");
        AppError::InvalidBody { message: rejection.body_text() }
    })?;

    svc.relay(request).await.map(Json)
}

/// Any other method on `/api/gemini`, whatever the body
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// POST `/api/seed/invalidate` — drop the cached seed history
pub async fn invalidate_seed_handler(State(svc): State<RelayService>) -> StatusCode {
    svc.seeds().invalidate().await;
    StatusCode::NO_CONTENT
}

/// GET `/api/health`
pub async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
