mod auth_routes;
mod config;
mod credentials;
mod hr_api;

use axum::Router;
use axum::http::{HeaderMap, header};
use dioxus::fullstack::FullstackContext;
use secrecy::ExposeSecret;
use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;
use types::{
    DepartmentShare, EmployeeMetrics, EmployeeRecord, Error, Result, Role, SESSION_COOKIE_NAME,
    UserSession, decode_session, err, metrics,
};

use crate::auth_routes::{AuthState, auth_router};
pub use crate::config::Config;
pub use crate::credentials::CredentialProvider;
pub use crate::hr_api::{HrClient, Profile};

static CONFIG: OnceLock<Config> = OnceLock::new();
static HR_CLIENT: OnceLock<HrClient> = OnceLock::new();

/// Install the fmt subscriber, filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // The dioxus runtime may have installed one already.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Load configuration, build the HR client and return the auth routes.
pub fn init() -> Result<Router> {
    let config = CONFIG.get_or_init_result(Config::load)?;
    let client = HR_CLIENT.get_or_init_result(|| HrClient::new(config))?;

    tracing::info!(
        hr_api_url = %config.hr_api_url,
        follow_next_pages = config.follow_next_pages,
        missing_department = ?config.missing_department,
        "staffdesk server initialized"
    );

    Ok(auth_router(AuthState { config, client }))
}

trait OnceLockExt<T> {
    fn get_or_init_result(&self, f: impl FnOnce() -> Result<T>) -> Result<&T>;
}

impl<T> OnceLockExt<T> for OnceLock<T> {
    fn get_or_init_result(&self, f: impl FnOnce() -> Result<T>) -> Result<&T> {
        if let Some(value) = self.get() {
            return Ok(value);
        }
        let value = f()?;
        Ok(self.get_or_init(|| value))
    }
}

pub fn config() -> Result<&'static Config> {
    CONFIG.get().ok_or_else(|| err!("server::init has not been called"))
}

pub fn hr_client() -> Result<&'static HrClient> {
    HR_CLIENT
        .get()
        .ok_or_else(|| err!("server::init has not been called"))
}

/// Find and verify the session cookie among the request headers.
pub fn session_from_headers(headers: &HeaderMap, config: &Config) -> Result<UserSession> {
    let cookie_header = headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| Error::unauthorized("no cookies in request"))?;

    for cookie_str in cookie_header.split(';') {
        let cookie_str = cookie_str.trim();
        if let Some(value) = cookie_str.strip_prefix(&format!("{}=", SESSION_COOKIE_NAME)) {
            let secret = config.session_secret.expose_secret().as_bytes();
            return decode_session(value, secret).map_err(|error| {
                tracing::debug!(%error, "rejected session cookie");
                Error::unauthorized("invalid session")
            });
        }
    }

    Err(Error::unauthorized("session cookie not found"))
}

/// Extract the user session from the request cookie.
pub async fn get_session_from_cookie() -> Result<UserSession> {
    let headers: HeaderMap = FullstackContext::extract()
        .await
        .map_err(|error| err!("failed to read request headers: {error}"))?;

    session_from_headers(&headers, config()?)
}

/// Fail with `Forbidden` unless the session's role is one of `allowed`.
pub fn check_role(session: &UserSession, allowed: &[Role]) -> Result<()> {
    if !allowed.contains(&session.role) {
        return Err(Error::forbidden(format!(
            "access denied: '{}' is a {}",
            session.username,
            session.role.label()
        )));
    }

    Ok(())
}

/// Require a session whose role is one of `allowed`.
pub async fn require_role(allowed: &[Role]) -> Result<UserSession> {
    let session = get_session_from_cookie().await?;
    check_role(&session, allowed)?;
    Ok(session)
}

const STAFF: &[Role] = &[Role::Admin, Role::HrManager];

async fn fetch_employees(session: &UserSession) -> Result<Vec<EmployeeRecord>> {
    hr_client()?
        .list_employees(session)
        .await
        .inspect_err(|error| tracing::warn!(user = %session.username, %error, "employee fetch failed"))
}

pub async fn list_employees() -> Result<Vec<EmployeeRecord>> {
    let session = get_session_from_cookie().await?;
    fetch_employees(&session).await
}

pub async fn employee_metrics() -> Result<EmployeeMetrics> {
    let session = require_role(STAFF).await?;
    let records = fetch_employees(&session).await?;
    Ok(metrics::aggregate(&records, config()?.missing_department))
}

pub async fn department_distribution() -> Result<Vec<DepartmentShare>> {
    let session = require_role(STAFF).await?;
    let records = fetch_employees(&session).await?;
    Ok(metrics::distribution(&records, config()?.missing_department))
}
