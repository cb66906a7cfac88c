//! Auto-responder settings endpoint
//!
//! GET/POST /api/admin/auto-responder for the Dialog admin UI. The route
//! sits behind the session auth middleware; by the time these handlers run
//! the caller is a verified admin.

use axum::{
    body::Bytes,
    extract::State,
    routing::get,
    Json, Router,
};
use dialog_common::AutoResponderSettings;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::db;
use crate::{ApiError, ApiResult, AppState};

/// Response payload for reading auto-responder settings
#[derive(Debug, Serialize)]
pub struct AutoResponderResponse {
    /// Whether the operation succeeded
    pub success: bool,
    /// Current auto-responder configuration
    pub settings: AutoResponderSettings,
}

/// Response payload for saving auto-responder settings
#[derive(Debug, Serialize)]
pub struct SaveSettingsResponse {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable status message
    pub message: String,
}

/// GET /api/admin/auto-responder handler
///
/// **Response:** `{"success": true, "settings": {"enabled": bool, "text": "..."}}`
///
/// Absent keys decode to their defaults (`enabled: false`, `text: ""`).
pub async fn get_auto_responder(
    State(state): State<AppState>,
) -> ApiResult<Json<AutoResponderResponse>> {
    let settings = db::settings::get_auto_responder(&state.db).await?;

    Ok(Json(AutoResponderResponse {
        success: true,
        settings,
    }))
}

/// POST /api/admin/auto-responder handler
///
/// **Request:** `{"enabled": true, "text": "Back soon"}`
/// **Response:** `{"success": true, "message": "Settings saved successfully"}`
///
/// **Errors:**
/// - 400 Bad Request: `enabled` is not exactly a JSON boolean, or `text` is
///   not exactly a JSON string (checked before any write)
/// - 500 Internal Server Error: unparseable body or database failure
pub async fn save_auto_responder(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<SaveSettingsResponse>> {
    let payload: Value = serde_json::from_slice(&body)
        .map_err(|e| ApiError::Internal(format!("Failed to parse request body: {}", e)))?;

    let enabled = match payload.get("enabled") {
        Some(Value::Bool(enabled)) => *enabled,
        _ => return Err(ApiError::BadRequest("Invalid enabled value".to_string())),
    };

    let text = match payload.get("text") {
        Some(Value::String(text)) => text.clone(),
        _ => return Err(ApiError::BadRequest("Invalid text value".to_string())),
    };

    let settings = AutoResponderSettings { enabled, text };
    db::settings::set_auto_responder(&state.db, &settings).await?;

    info!(enabled = settings.enabled, "Auto-responder settings saved");

    Ok(Json(SaveSettingsResponse {
        success: true,
        message: "Settings saved successfully".to_string(),
    }))
}

/// Build auto-responder routes
pub fn auto_responder_routes() -> Router<AppState> {
    Router::new().route(
        "/api/admin/auto-responder",
        get(get_auto_responder).post(save_auto_responder),
    )
}
