use axum::{
    Form, Router,
    extract::State,
    http::{HeaderMap, HeaderValue, header},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use cookie::{Cookie, SameSite};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use types::{ErrorKind, Result, SESSION_COOKIE_NAME, encode_session, err};

use crate::{Config, HrClient};

#[derive(Clone, Copy)]
pub struct AuthState {
    pub config: &'static Config,
    pub client: &'static HrClient,
}

pub fn auth_router(state: AuthState) -> Router {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", get(logout))
        .with_state(state)
}

#[derive(Deserialize)]
struct LoginForm {
    username: String,
    password: SecretString,
}

async fn login(State(state): State<AuthState>, Form(form): Form<LoginForm>) -> Response {
    match login_inner(state, &form).await {
        Ok(response) => response,
        Err(error) => {
            tracing::warn!(username = %form.username, %error, "login failed");
            let code = match error.kind {
                ErrorKind::Unauthorized | ErrorKind::Forbidden => "invalid-credentials",
                ErrorKind::Fetch | ErrorKind::Internal => "unavailable",
            };
            Redirect::to(&format!("/login?error={code}")).into_response()
        }
    }
}

async fn login_inner(state: AuthState, form: &LoginForm) -> Result<Response> {
    let session = state.client.sign_in(&form.username, &form.password).await?;
    tracing::info!(username = %session.username, role = ?session.role, "signed in");

    let value = encode_session(&session, state.config.session_secret.expose_secret().as_bytes())?;

    let cookie = Cookie::build((SESSION_COOKIE_NAME, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.config.secure_cookies)
        .build();

    with_cookie(Redirect::to("/"), &cookie)
}

async fn logout(State(state): State<AuthState>, headers: HeaderMap) -> Response {
    if let Ok(session) = crate::session_from_headers(&headers, state.config) {
        tracing::info!(username = %session.username, "signed out");
    }

    // Clear the session cookie
    let cookie = Cookie::build((SESSION_COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(cookie::time::Duration::ZERO)
        .build();

    with_cookie(Redirect::to("/login"), &cookie)
        .unwrap_or_else(|_| Redirect::to("/login").into_response())
}

fn with_cookie(redirect: Redirect, cookie: &Cookie<'_>) -> Result<Response> {
    let value = HeaderValue::from_str(&cookie.to_string())
        .map_err(|error| err!("invalid cookie header: {error}"))?;

    let mut response = redirect.into_response();
    response.headers_mut().insert(header::SET_COOKIE, value);
    Ok(response)
}
