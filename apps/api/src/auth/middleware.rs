use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use crate::auth::token::verify_token;
use crate::errors::AppError;
use crate::state::AppState;

/// Route layer for create/update/delete routes: a valid bearer token whose
/// claims carry `isAdmin: true`. Verified claims go into request extensions
/// for the mutation handlers' audit log lines.
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers()).ok_or(AppError::Unauthorized)?;
    let claims = verify_token(token, &state.config.secret_key).map_err(|e| {
        debug!("Rejected bearer token: {e}");
        AppError::Unauthorized
    })?;

    if !claims.is_admin {
        warn!(
            "User {} attempted {} {} without admin rights",
            claims.username,
            request.method(),
            request.uri().path()
        );
        return Err(AppError::Forbidden);
    }

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
