mod employee;
mod error;
pub mod metrics;
pub mod payload;
mod session;
mod view;

pub use employee::{DepartmentKey, EmployeeRecord};
pub use error::{Error, ErrorKind, Result};
pub use metrics::{DepartmentShare, EmployeeMetrics, MissingDepartment};
pub use payload::EmployeesPayload;
pub use session::{
    CurrentUser, Role, SESSION_COOKIE_NAME, UserSession, decode_session, encode_session, greeting,
};
pub use view::{FETCH_FAILED_MESSAGE, ViewState};

#[doc(hidden)]
pub use anyhow::anyhow as internal_anyhow_dont_use;
