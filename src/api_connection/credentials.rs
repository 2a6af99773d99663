use chrono::{DateTime, Utc};
use dotenv::dotenv;
use std::env;

use super::connection::ApiConnectionError;

/// A bearer token that stops being usable at `expires_at`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BearerToken {
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

impl BearerToken {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Secret used to authenticate against one upstream service.
///
/// Clients receive their credential at construction time; nothing reads keys
/// from process-wide state after start-up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credential {
    ApiKey(String),
    Bearer(BearerToken),
}

impl Credential {
    /// Reads an API key from the environment (after loading `.env`).
    pub fn from_env(api_key_env_var_name: &str) -> Result<Self, ApiConnectionError> {
        dotenv().ok();
        match env::var(api_key_env_var_name) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::ApiKey(key.trim().to_string())),
            _ => Err(ApiConnectionError::MissingApiKey(api_key_env_var_name.to_string())),
        }
    }

    /// Returns the secret, or `ExpiredCredential` if a bearer token has run out.
    pub fn secret_at(&self, now: DateTime<Utc>) -> Result<&str, ApiConnectionError> {
        match self {
            Credential::ApiKey(key) => Ok(key.as_str()),
            Credential::Bearer(token) if token.is_expired_at(now) => Err(
                ApiConnectionError::ExpiredCredential(token.expires_at.to_rfc3339()),
            ),
            Credential::Bearer(token) => Ok(token.value.as_str()),
        }
    }
}

/// A credential slot that may be empty when the key was not configured.
///
/// The missing key is only reported when a call is attempted, so the server
/// can start with just one of its upstreams configured.
#[derive(Clone, Debug)]
pub struct CredentialSlot {
    env_var_name: String,
    credential: Option<Credential>,
}

impl CredentialSlot {
    pub fn new(env_var_name: &str, credential: Option<Credential>) -> Self {
        Self {
            env_var_name: env_var_name.to_string(),
            credential,
        }
    }

    pub fn from_env(env_var_name: &str) -> Self {
        Self::new(env_var_name, Credential::from_env(env_var_name).ok())
    }

    pub fn is_configured(&self) -> bool {
        self.credential.is_some()
    }

    pub fn secret_at(&self, now: DateTime<Utc>) -> Result<&str, ApiConnectionError> {
        self.credential
            .as_ref()
            .ok_or_else(|| ApiConnectionError::MissingApiKey(self.env_var_name.clone()))?
            .secret_at(now)
    }

    pub fn secret(&self) -> Result<&str, ApiConnectionError> {
        self.secret_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn bearer_token_expiry_is_checked_explicitly() {
        let now = Utc::now();
        let credential = Credential::Bearer(BearerToken {
            value: "tok".to_string(),
            expires_at: now + Duration::minutes(5),
        });

        assert_eq!(credential.secret_at(now).unwrap(), "tok");
        assert!(matches!(
            credential.secret_at(now + Duration::minutes(5)),
            Err(ApiConnectionError::ExpiredCredential(_))
        ));
    }

    #[test]
    fn api_keys_never_expire() {
        let credential = Credential::ApiKey("k".to_string());
        assert_eq!(credential.secret_at(Utc::now() + Duration::days(3650)).unwrap(), "k");
    }

    #[test]
    fn empty_slot_reports_the_variable_name() {
        let slot = CredentialSlot::new("SOME_RECIPE_KEY", None);
        assert!(!slot.is_configured());
        match slot.secret() {
            Err(ApiConnectionError::MissingApiKey(name)) => assert_eq!(name, "SOME_RECIPE_KEY"),
            other => panic!("expected MissingApiKey, got {:?}", other),
        }
    }

    #[test]
    fn from_env_rejects_unset_variable() {
        let result = Credential::from_env("THIS_KEY_SHOULD_NOT_EXIST_IN_ENV_PANTRY");
        assert!(matches!(result, Err(ApiConnectionError::MissingApiKey(_))));
    }
}
