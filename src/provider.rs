//! Provider credential specs and resolved provider entries

use crate::error::SpecError;
use serde::Serialize;
use std::str::FromStr;

/// Authentication type for an RPC provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuthType {
    /// No authentication
    #[serde(rename = "no-auth")]
    NoAuth,
    /// Token appended to the provider base URL
    #[serde(rename = "token-auth")]
    TokenAuth,
    /// HTTP Basic authentication
    #[serde(rename = "basic-auth")]
    BasicAuth,
}

/// Credential material carried by a provider spec
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderAuth {
    None,
    Token(String),
    Basic { login: String, password: String },
}

impl ProviderAuth {
    /// The wire-format auth type for this credential
    pub fn auth_type(&self) -> AuthType {
        match self {
            Self::None => AuthType::NoAuth,
            Self::Token(_) => AuthType::TokenAuth,
            Self::Basic { .. } => AuthType::BasicAuth,
        }
    }
}

/// A user-supplied provider credential spec
///
/// Parsed from `type`, `type:token`, or `type:login:password`. The split is
/// limited to three parts, so a password may itself contain `:`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSpec {
    /// Provider type identifier (e.g. "infura")
    pub provider_type: String,
    /// Credential material
    pub auth: ProviderAuth,
}

impl FromStr for ProviderSpec {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(SpecError::Empty);
        }

        let mut parts = s.splitn(3, ':');
        let provider_type = parts.next().unwrap_or_default().to_string();

        let auth = match (parts.next(), parts.next()) {
            (None, _) => ProviderAuth::None,
            (Some(token), None) => ProviderAuth::Token(token.to_string()),
            (Some(login), Some(password)) => ProviderAuth::Basic {
                login: login.to_string(),
                password: password.to_string(),
            },
        };

        Ok(Self {
            provider_type,
            auth,
        })
    }
}

/// A resolved provider endpoint in the output document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderEntry {
    /// Provider type identifier
    #[serde(rename = "type")]
    pub provider_type: String,
    /// Display name
    pub name: String,
    /// Provider base URL from the catalog
    pub url: String,
    #[serde(rename = "authType")]
    pub auth_type: AuthType,
    #[serde(rename = "authToken", skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
    #[serde(rename = "authLogin", skip_serializing_if = "Option::is_none")]
    pub auth_login: Option<String>,
    #[serde(rename = "authPassword", skip_serializing_if = "Option::is_none")]
    pub auth_password: Option<String>,
    #[serde(rename = "chainId")]
    pub chain_id: u64,
}

impl ProviderEntry {
    /// Build an entry from a spec and the catalog URL it resolved to
    pub fn new(spec: &ProviderSpec, name: String, url: String, chain_id: u64) -> Self {
        let (auth_token, auth_login, auth_password) = match &spec.auth {
            ProviderAuth::None => (None, None, None),
            ProviderAuth::Token(token) => (Some(token.clone()), None, None),
            ProviderAuth::Basic { login, password } => {
                (None, Some(login.clone()), Some(password.clone()))
            }
        };

        Self {
            provider_type: spec.provider_type.clone(),
            name,
            url,
            auth_type: spec.auth.auth_type(),
            auth_token,
            auth_login,
            auth_password,
            chain_id,
        }
    }
}
