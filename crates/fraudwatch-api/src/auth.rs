use axum::Json;
use axum_extra::extract::cookie::CookieJar;

use fraudwatch_core::messages;
use fraudwatch_core::session::SessionGate;
use fraudwatch_types::api::{LoginRequest, SessionResponse, SessionState};

use crate::error::ApiError;
use crate::markers::CookieMarkers;

pub async fn login(
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<SessionResponse>), ApiError> {
    let mut gate = SessionGate::resolved(CookieMarkers::new(jar));
    gate.login(&req.password)?;

    Ok((
        gate.into_markers().into_jar(),
        Json(SessionResponse {
            state: SessionState::Authenticated,
            message: Some(messages::LOGIN_OK.to_string()),
        }),
    ))
}

pub async fn logout(jar: CookieJar) -> (CookieJar, Json<SessionResponse>) {
    let mut gate = SessionGate::resolved(CookieMarkers::new(jar));
    gate.logout();

    (
        gate.into_markers().into_jar(),
        Json(SessionResponse {
            state: SessionState::Anonymous,
            message: Some(messages::LOGOUT_OK.to_string()),
        }),
    )
}

pub async fn session(jar: CookieJar) -> Json<SessionResponse> {
    let gate = SessionGate::resolved(CookieMarkers::new(jar));

    Json(SessionResponse {
        state: gate.session_state().unwrap_or(SessionState::Anonymous),
        message: None,
    })
}
