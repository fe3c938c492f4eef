use shared_types::{AppError, SessionUser};

fn session_url(api_base_url: &str) -> String {
    format!("{}/api/session", api_base_url.trim_end_matches('/'))
}

/// Ask the backend who is signed in.
///
/// `Ok(None)` means the visitor is signed out. Transport failures and
/// unexpected statuses are errors; callers leave the session unloaded so
/// gated pages stay closed.
pub async fn fetch_session(api_base_url: &str) -> Result<Option<SessionUser>, AppError> {
    let url = session_url(api_base_url);
    let request = reqwest::Client::new().get(&url);
    #[cfg(target_arch = "wasm32")]
    let request = request.fetch_credentials_include();

    let response = request
        .send()
        .await
        .map_err(|e| AppError::session(format!("GET {url}: {e}")))?;
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| AppError::session(format!("reading session body: {e}")))?;

    parse_session_response(status, &body)
}

/// Interpret a session endpoint response by status code.
pub fn parse_session_response(status: u16, body: &str) -> Result<Option<SessionUser>, AppError> {
    match status {
        200 => serde_json::from_str::<Option<SessionUser>>(body)
            .map_err(|e| AppError::session(format!("malformed session payload: {e}"))),
        204 | 401 => Ok(None),
        _ => Err(AppError::session(format!(
            "session endpoint returned {status}: {}",
            AppError::friendly_message(body)
        ))),
    }
}
