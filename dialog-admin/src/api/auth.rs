//! Session authentication middleware for dialog-admin
//!
//! Sessions are issued by the main Dialog application; this service only
//! validates them. The session token arrives either in the `dialog_session`
//! cookie or as an `Authorization: Bearer` header. Admin routes additionally
//! require the caller's role to equal [`ADMIN_ROLE`].
//!
//! Auth and role failures are rejected before any settings access.

use axum::{
    extract::{Request, State},
    http::header::{HeaderMap, AUTHORIZATION, COOKIE},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::db::sessions;
use crate::{ApiError, AppState};

/// Role value required to access the admin interface
pub const ADMIN_ROLE: &str = "dialog_admin";

/// Name of the session cookie set by the main Dialog application
pub const SESSION_COOKIE_NAME: &str = "dialog_session";

/// Authentication middleware
///
/// Returns 401 when no valid session accompanies the request and 403 when
/// the session's user lacks the admin role.
pub async fn auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = session_token(request.headers()).ok_or(ApiError::Unauthorized)?;

    let identity = sessions::find_identity(&state.db, &token)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    if identity.role != ADMIN_ROLE {
        warn!(
            username = %identity.username,
            role = %identity.role,
            "Admin interface access denied"
        );
        return Err(ApiError::Forbidden);
    }

    Ok(next.run(request).await)
}

/// Extract the session token from cookie or bearer header
fn session_token(headers: &HeaderMap) -> Option<String> {
    extract_cookie_value(headers, SESSION_COOKIE_NAME).or_else(|| bearer_token(headers))
}

fn extract_cookie_value(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let raw = headers.get(COOKIE)?.to_str().ok()?;
    for part in raw.split(';') {
        let mut pieces = part.trim().splitn(2, '=');
        let key = pieces.next()?.trim();
        let value = pieces.next()?.trim();

        if key == cookie_name && !value.is_empty() {
            return Some(value.to_string());
        }
    }

    None
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = raw.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
