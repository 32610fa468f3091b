use secrecy::SecretString;
use types::UserSession;

/// Supplies the bearer token for outbound HR API requests.
pub trait CredentialProvider {
    fn bearer_token(&self) -> Option<&SecretString>;
}

impl CredentialProvider for UserSession {
    fn bearer_token(&self) -> Option<&SecretString> {
        Some(&self.access_token)
    }
}

impl CredentialProvider for SecretString {
    fn bearer_token(&self) -> Option<&SecretString> {
        Some(self)
    }
}

impl<T: CredentialProvider> CredentialProvider for Option<T> {
    fn bearer_token(&self) -> Option<&SecretString> {
        self.as_ref()?.bearer_token()
    }
}
