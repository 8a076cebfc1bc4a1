//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Storage**: Loads the root page
/// 2. **Registry**: At least one snippet kind is registered
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "storage": {"status": "ok", "message": "Root page: /"},
///     "registry": {"status": "ok", "message": "10 snippet kinds"}
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let storage = check_storage(&state).await;
    let registry = check_registry(&state);

    let all_healthy = storage.is_ok() && registry.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { storage, registry },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_storage(state: &AppState) -> CheckStatus {
    match state.page_service.root().await {
        Ok(root) => CheckStatus::ok(format!("Root page: {}", root.url_path)),
        Err(e) => CheckStatus::error(format!("Storage error: {}", e)),
    }
}

fn check_registry(state: &AppState) -> CheckStatus {
    let registry = state.snippet_service.registry();
    if registry.is_empty() {
        CheckStatus::error("No snippet kinds registered")
    } else {
        CheckStatus::ok(format!("{} snippet kinds", registry.len()))
    }
}
