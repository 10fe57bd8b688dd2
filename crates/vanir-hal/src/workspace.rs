//! Workspace identity and credentials.
//!
//! A workspace is the external identity/connection context (subscription,
//! resource group, workspace name, credentials) required to reach a remote
//! backend. The submission core treats it as an opaque constructed value;
//! this module only builds and carries it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{HalError, HalResult};

/// How the workspace authenticates to the service.
///
/// The two paths are mutually exclusive by construction: a workspace either
/// carries an explicit bearer token or falls back to the ambient identity of
/// the environment (cached login, managed identity). There is no "token and
/// ambient" state to misconfigure.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// Explicit bearer token supplied by the caller.
    Token(String),
    /// Ambient credential path (environment or interactive login).
    Ambient,
}

impl Default for Credential {
    fn default() -> Self {
        Credential::Ambient
    }
}

impl Credential {
    /// Build a credential from an optional token.
    pub fn from_token(token: Option<String>) -> Self {
        match token {
            Some(t) => Credential::Token(t),
            None => Credential::Ambient,
        }
    }

    /// The bearer token, if this is the explicit-token path.
    pub fn bearer(&self) -> Option<&str> {
        match self {
            Credential::Token(t) => Some(t.as_str()),
            Credential::Ambient => None,
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::Token(_) => write!(f, "Token([REDACTED])"),
            Credential::Ambient => write!(f, "Ambient"),
        }
    }
}

/// Connection context for a remote workspace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Subscription identifier.
    pub subscription: String,
    /// Resource group within the subscription.
    pub resource_group: String,
    /// Workspace name.
    pub workspace: String,
    /// Base endpoint URI. `None` uses the backend's default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_uri: Option<String>,
    /// Storage connection string for large program payloads.
    #[serde(skip_serializing)]
    pub storage: Option<String>,
    /// Authentication path. Never serialized; a round-tripped config comes
    /// back on the ambient path.
    #[serde(skip, default)]
    pub credential: Credential,
}

impl WorkspaceConfig {
    /// Assemble a workspace from its identifying parts.
    ///
    /// Fails with [`HalError::Configuration`] naming the first missing
    /// identifier, so the user sees which flag to supply.
    pub fn from_parts(
        subscription: Option<&str>,
        resource_group: Option<&str>,
        workspace: Option<&str>,
    ) -> HalResult<Self> {
        let require = |value: Option<&str>, name: &str| {
            value
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .ok_or_else(|| HalError::Configuration(format!("Missing {name} identifier")))
        };

        Ok(Self {
            subscription: require(subscription, "subscription")?,
            resource_group: require(resource_group, "resource group")?,
            workspace: require(workspace, "workspace")?,
            base_uri: None,
            storage: None,
            credential: Credential::Ambient,
        })
    }

    /// Set the base endpoint URI.
    pub fn with_base_uri(mut self, uri: impl Into<String>) -> Self {
        self.base_uri = Some(uri.into());
        self
    }

    /// Set the storage connection string.
    pub fn with_storage(mut self, storage: impl Into<String>) -> Self {
        self.storage = Some(storage.into());
        self
    }

    /// Set the credential.
    pub fn with_credential(mut self, credential: Credential) -> Self {
        self.credential = credential;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_complete() {
        let ws = WorkspaceConfig::from_parts(Some("sub-1"), Some("rg-1"), Some("ws-1")).unwrap();

        assert_eq!(ws.subscription, "sub-1");
        assert_eq!(ws.resource_group, "rg-1");
        assert_eq!(ws.workspace, "ws-1");
        assert_eq!(ws.credential, Credential::Ambient);
    }

    #[test]
    fn test_from_parts_missing_subscription() {
        let err = WorkspaceConfig::from_parts(None, Some("rg-1"), Some("ws-1")).unwrap_err();
        assert!(err.to_string().contains("subscription"));
    }

    #[test]
    fn test_from_parts_empty_string_is_missing() {
        assert!(WorkspaceConfig::from_parts(Some("sub"), Some(""), Some("ws")).is_err());
    }

    #[test]
    fn test_credential_from_token() {
        assert_eq!(
            Credential::from_token(Some("tok".into())).bearer(),
            Some("tok")
        );
        assert_eq!(Credential::from_token(None).bearer(), None);
    }

    #[test]
    fn test_credential_debug_redacts_token() {
        let debug = format!("{:?}", Credential::Token("secret".into()));
        assert!(!debug.contains("secret"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_serialization_never_carries_secrets() {
        let ws = WorkspaceConfig::from_parts(Some("sub-1"), Some("rg-1"), Some("ws-1"))
            .unwrap()
            .with_storage("AccountKey=storage-secret")
            .with_credential(Credential::Token("token-secret".into()));

        let json = serde_json::to_string(&ws).unwrap();
        assert!(!json.contains("token-secret"));
        assert!(!json.contains("storage-secret"));
        assert!(json.contains("sub-1"));
    }

    #[test]
    fn test_round_trip_lands_on_ambient_path() {
        let ws = WorkspaceConfig::from_parts(Some("sub-1"), Some("rg-1"), Some("ws-1"))
            .unwrap()
            .with_base_uri("https://eu.jobs.example.com")
            .with_storage("AccountKey=abc")
            .with_credential(Credential::Token("tok".into()));

        let json = serde_json::to_string(&ws).unwrap();
        let back: WorkspaceConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(back.subscription, "sub-1");
        assert_eq!(back.base_uri.as_deref(), Some("https://eu.jobs.example.com"));
        assert_eq!(back.credential, Credential::Ambient);
        assert!(back.storage.is_none());
    }
}
