use async_session::SessionStore;
use axum::{
    extract::{Request, State},
    http::{
        HeaderMap, HeaderValue, StatusCode,
        header::{COOKIE, SET_COOKIE},
    },
    middleware::Next,
    response::Response,
};
use log::{debug, error, warn};

use crate::app::AppState;
use crate::models::session::create_session;

const SESSION_COOKIE_NAME: &str = "session";

/// Validated session cookie value, inserted into request extensions by
/// [`extract_session`].
#[derive(Clone)]
pub struct SessionToken(pub String);

fn get_session_token(headers: &HeaderMap<HeaderValue>) -> Option<&str> {
    let Ok(cookies) = headers.get(COOKIE)?.to_str() else {
        warn!("Could not parse cookie header as string");
        return None;
    };
    cookies
        .split(";")
        .map(|kv_string| {
            let mut kv = kv_string.splitn(2, "=");
            Some((
                kv.next().expect("cookie should have key").trim_start(),
                kv.next()?,
            ))
        })
        .find_map(|kv| match kv {
            Some((SESSION_COOKIE_NAME, value)) => Some(value),
            _ => None,
        })
}

/// Guarantees every routed request carries a valid session. Unknown or
/// missing cookies get a fresh session and a Set-Cookie on the way out.
pub async fn extract_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let valid = match get_session_token(request.headers()).map(str::to_string) {
        Some(token) => state
            .store
            .load_session(token.clone())
            .await
            .ok()
            .flatten()
            .map(|_| token),
        None => None,
    };
    let mut fresh_cookie = None;
    let token = match valid {
        Some(token) => token,
        None => {
            debug!("starting new session");
            let token = create_session(&state.store).await.map_err(|err| {
                error!("Failed to create session: {}", err.message);
                StatusCode::INTERNAL_SERVER_ERROR
            })?;
            fresh_cookie = Some(token.clone());
            token
        }
    };
    request.extensions_mut().insert(SessionToken(token));
    let mut response = next.run(request).await;
    if let Some(token) = fresh_cookie {
        let cookie = format!("{SESSION_COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Lax");
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().insert(SET_COOKIE, value);
            }
            Err(err) => warn!("Could not encode session cookie: {err}"),
        }
    }
    Ok(response)
}

#[cfg(test)]
mod test {
    use super::*;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn session_token_is_read_from_cookie_header() {
        let headers = headers_with_cookie("session=abc123");
        assert_eq!(get_session_token(&headers), Some("abc123"));
    }

    #[test]
    fn session_token_is_found_among_other_cookies() {
        let headers = headers_with_cookie("theme=dark; session=abc123; lang=en");
        assert_eq!(get_session_token(&headers), Some("abc123"));
    }

    #[test]
    fn token_value_may_contain_equals_signs() {
        let headers = headers_with_cookie("session=abc==");
        assert_eq!(get_session_token(&headers), Some("abc=="));
    }

    #[test]
    fn missing_cookie_header_yields_no_token() {
        assert_eq!(get_session_token(&HeaderMap::new()), None);
    }
}
