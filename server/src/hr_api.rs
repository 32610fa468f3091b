use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::json;
use std::time::Duration;
use types::{EmployeeRecord, EmployeesPayload, Error, Result, Role, UserSession};

use crate::{Config, CredentialProvider};

trait ReqwestExt {
    async fn try_send<T: DeserializeOwned>(self) -> Result<T>;
}

impl ReqwestExt for RequestBuilder {
    async fn try_send<T: DeserializeOwned>(self) -> Result<T> {
        let response = self.send().await.map_err(transport_error)?;

        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED => {
                return Err(Error::unauthorized(format!(
                    "HR API rejected the credentials ({status})"
                )));
            }
            StatusCode::FORBIDDEN => {
                return Err(Error::forbidden(format!("HR API denied access ({status})")));
            }
            _ if !status.is_success() => {
                return Err(Error::fetch(format!("HR API answered {status}")));
            }
            _ => {}
        }

        let body = response.bytes().await.map_err(transport_error)?;

        serde_json::from_slice(&body).map_err(|error| {
            // NOTE: The body may hold personal data, so only its size is logged.
            tracing::debug!(%error, len = body.len(), "failed to parse HR API response");
            Error::fetch(format!("unexpected HR API response: {error}"))
        })
    }
}

fn transport_error(error: reqwest::Error) -> Error {
    Error::fetch(format!("HR API request failed: {error}"))
}

/// The signed-in user as the HR API describes them.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub id: serde_json::Value,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub is_hr_manager: bool,
}

impl Profile {
    pub fn role(&self) -> Role {
        Role::from_flags(self.is_superuser, self.is_hr_manager)
    }

    fn user_id(&self) -> String {
        match &self.id {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct HrClient {
    client: Client,
    base_url: Url,
    employees_path: String,
    token_path: String,
    profile_path: String,
    follow_next_pages: bool,
    max_pages: usize,
}

impl HrClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(transport_error)?;

        Ok(Self {
            client,
            base_url: config.hr_api_url.clone(),
            employees_path: config.employees_path.clone(),
            token_path: config.token_path.clone(),
            profile_path: config.profile_path.clone(),
            follow_next_pages: config.follow_next_pages,
            max_pages: config.max_pages,
        })
    }

    fn authorized(
        &self,
        method: Method,
        url: Url,
        credentials: &impl CredentialProvider,
    ) -> Result<RequestBuilder> {
        let token = credentials
            .bearer_token()
            .ok_or_else(|| Error::unauthorized("no access token available"))?;

        Ok(self
            .client
            .request(method, url)
            .bearer_auth(token.expose_secret()))
    }

    /// Fetch the employee listing and normalize it to plain records.
    ///
    /// A body that is neither a list nor an envelope with `results` yields no
    /// records. Only the first page is read unless `follow_next_pages` is set.
    pub async fn list_employees(
        &self,
        credentials: &impl CredentialProvider,
    ) -> Result<Vec<EmployeeRecord>> {
        let mut url = self.base_url.join(&self.employees_path)?;
        let mut records = Vec::new();

        for page in 1..=self.max_pages {
            let payload: EmployeesPayload = self
                .authorized(Method::GET, url.clone(), credentials)?
                .try_send()
                .await?;

            tracing::debug!(page, shape = payload.shape(), "fetched employee listing");
            if let EmployeesPayload::Unrecognized(_) = payload {
                tracing::warn!("employee listing has an unrecognized shape, treating it as empty");
            }

            let next = payload.next_page().map(|next| url.join(next)).transpose()?;
            records.extend(payload.into_records());

            match next {
                Some(next) if self.follow_next_pages => url = next,
                _ => return Ok(records),
            }
        }

        tracing::warn!(max_pages = self.max_pages, "stopped following employee pages");
        Ok(records)
    }

    /// Exchange a username and password for an access token.
    pub async fn obtain_token(&self, username: &str, password: &SecretString) -> Result<SecretString> {
        #[derive(Deserialize)]
        struct TokenResponse {
            access: SecretString,
        }

        let response: TokenResponse = self
            .client
            .post(self.base_url.join(&self.token_path)?)
            .json(&json!({
                "username": username,
                "password": password.expose_secret(),
            }))
            .try_send()
            .await?;

        Ok(response.access)
    }

    pub async fn fetch_profile(&self, credentials: &impl CredentialProvider) -> Result<Profile> {
        let url = self.base_url.join(&self.profile_path)?;
        self.authorized(Method::GET, url, credentials)?
            .try_send()
            .await
    }

    /// Log in against the HR API and build the session to keep in the cookie.
    pub async fn sign_in(&self, username: &str, password: &SecretString) -> Result<UserSession> {
        let access_token = self.obtain_token(username, password).await?;
        let profile = self.fetch_profile(&access_token).await?;

        Ok(UserSession {
            user_id: profile.user_id(),
            username: profile.username.clone(),
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            role: profile.role(),
            access_token,
        })
    }
}
