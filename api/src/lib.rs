//! Server functions called from the browser.
//!
//! Domain failures (no session, HR API down) travel inside the `Ok` value as
//! [`types::Error`] so the page can pick the right render state. A
//! `ServerFnError` only means the call itself did not go through.

use dioxus::prelude::*;
use types::{CurrentUser, DepartmentShare, EmployeeMetrics, EmployeeRecord};

#[post("/api/current-user")]
pub async fn get_current_user() -> ServerFnResult<Option<CurrentUser>> {
    match server::get_session_from_cookie().await {
        Ok(session) => Ok(Some(session.current_user())),
        Err(error) => {
            tracing::debug!(%error, "no current user");
            Ok(None)
        }
    }
}

#[post("/api/employees")]
pub async fn list_employees() -> ServerFnResult<types::Result<Vec<EmployeeRecord>>> {
    Ok(server::list_employees().await)
}

#[post("/api/employees/metrics")]
pub async fn employee_metrics() -> ServerFnResult<types::Result<EmployeeMetrics>> {
    Ok(server::employee_metrics().await)
}

#[post("/api/departments/distribution")]
pub async fn department_distribution() -> ServerFnResult<types::Result<Vec<DepartmentShare>>> {
    Ok(server::department_distribution().await)
}
