use base64::{Engine, prelude::BASE64_URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::{Result, err};

pub const SESSION_COOKIE_NAME: &str = "staffdesk_session";

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    HrManager,
    Employee,
}

impl Role {
    pub fn from_flags(is_superuser: bool, is_hr_manager: bool) -> Self {
        if is_superuser {
            Role::Admin
        } else if is_hr_manager {
            Role::HrManager
        } else {
            Role::Employee
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::HrManager => "HR Manager",
            Role::Employee => "Employee",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSession {
    pub user_id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    #[serde(with = "secret_string")]
    pub access_token: SecretString,
}

impl UserSession {
    /// The part of the session that is safe to hand to the browser.
    pub fn current_user(&self) -> CurrentUser {
        CurrentUser {
            user_id: self.user_id.clone(),
            username: self.username.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            role: self.role,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub user_id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

impl CurrentUser {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn initial(&self) -> String {
        self.first_name
            .chars()
            .chain(self.username.chars())
            .next()
            .unwrap_or('?')
            .to_uppercase()
            .to_string()
    }
}

/// Salutation for the given hour of the day (0-23).
pub fn greeting(hour: i8) -> &'static str {
    match hour {
        5..=11 => "Good Morning",
        12..=17 => "Good Afternoon",
        _ => "Good Evening",
    }
}

mod secret_string {
    use secrecy::SecretString;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use secrecy::ExposeSecret;
        serializer.serialize_str(secret.expose_secret())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.into())
    }
}

/// Serialize and sign a session for the session cookie.
///
/// The cookie value is `payload.signature`, both base64url without padding.
pub fn encode_session(session: &UserSession, secret: &[u8]) -> Result<String> {
    let json = serde_json::to_string(session)?;
    let payload = BASE64_URL_SAFE_NO_PAD.encode(json.as_bytes());

    let mut mac = HmacSha256::new_from_slice(secret)?;
    mac.update(payload.as_bytes());
    let signature = BASE64_URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

    Ok(format!("{payload}.{signature}"))
}

pub fn decode_session(encoded: &str, secret: &[u8]) -> Result<UserSession> {
    let (payload, signature_b64) = encoded
        .split_once('.')
        .ok_or_else(|| err!("invalid session format"))?;

    let mut mac = HmacSha256::new_from_slice(secret)?;
    mac.update(payload.as_bytes());
    let signature = BASE64_URL_SAFE_NO_PAD.decode(signature_b64)?;
    mac.verify_slice(&signature)?;

    let bytes = BASE64_URL_SAFE_NO_PAD.decode(payload)?;
    Ok(serde_json::from_slice(&bytes)?)
}
