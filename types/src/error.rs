use serde::{Deserialize, Serialize};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// What went wrong, coarse enough for the browser to decide how to react.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// No session, or the HR API rejected our credentials.
    Unauthorized,
    /// Signed in, but not allowed to see this.
    Forbidden,
    /// The HR API could not be reached or answered with something unusable.
    Fetch,
    Internal,
}

/// A serializable error for client rendering.
///
/// When `RUST_BACKTRACE=1` is set, internal errors include the full backtrace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

impl Error {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Unauthorized,
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Forbidden,
            message: message.into(),
        }
    }

    pub fn fetch(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Fetch,
            message: message.into(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind == ErrorKind::Unauthorized
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

impl From<anyhow::Error> for Error {
    fn from(report: anyhow::Error) -> Self {
        // The Debug representation includes the error chain and backtrace
        Self {
            kind: ErrorKind::Internal,
            message: format!("{:?}", report),
        }
    }
}

macro_rules! internal_from {
    ($($source:ty),* $(,)?) => {
        $(
            impl From<$source> for Error {
                fn from(error: $source) -> Self {
                    anyhow::Error::from(error).into()
                }
            }
        )*
    };
}

internal_from!(
    serde_json::Error,
    url::ParseError,
    base64::DecodeError,
    hmac::digest::InvalidLength,
    hmac::digest::MacError,
);

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        s.to_string().into()
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self {
            kind: ErrorKind::Internal,
            message: s,
        }
    }
}

/// Build an internal [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from($crate::internal_anyhow_dont_use!($($arg)*))
    };
}
