use axum::{extract::Request, middleware::Next, response::Response};
use axum_extra::extract::cookie::CookieJar;

use fraudwatch_core::session::SessionGate;

use crate::error::ApiError;
use crate::markers::CookieMarkers;

/// Let the request through only when the session marker cookie is present.
pub async fn require_admin(jar: CookieJar, req: Request, next: Next) -> Result<Response, ApiError> {
    let gate = SessionGate::resolved(CookieMarkers::new(jar));
    if !gate.is_authenticated() {
        return Err(ApiError::Unauthorized);
    }

    Ok(next.run(req).await)
}
