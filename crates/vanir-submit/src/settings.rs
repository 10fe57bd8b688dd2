//! Submission settings and output modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use vanir_hal::{Credential, HalResult, WorkspaceConfig};

/// How the submitted job is reported on standard output.
///
/// A closed enumeration: there is no "unrecognized mode" state to reach at
/// run time, so reporting never needs an invalid-argument path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputMode {
    /// Print the job identifier, nothing else.
    #[default]
    Id,
    /// Print a human-navigable link to the job's status page.
    FriendlyUri,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "id" => Ok(OutputMode::Id),
            "friendly-uri" | "friendlyuri" => Ok(OutputMode::FriendlyUri),
            other => Err(format!(
                "Unknown output mode '{other}'. Available: id, friendly-uri"
            )),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::Id => write!(f, "id"),
            OutputMode::FriendlyUri => write!(f, "friendly-uri"),
        }
    }
}

/// Immutable configuration for one submission.
///
/// Read-only after construction; the driver never mutates it.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct SubmissionSettings {
    /// Target identifier (`provider.device`, or the `nothing` sentinel).
    pub target: Option<String>,
    /// Subscription identifier.
    pub subscription: Option<String>,
    /// Resource group within the subscription.
    pub resource_group: Option<String>,
    /// Workspace name.
    pub workspace: Option<String>,
    /// Storage connection string for large program payloads.
    #[serde(skip_serializing)]
    pub storage: Option<String>,
    /// Bearer token. Absent means the ambient credential path.
    #[serde(skip)]
    pub token: Option<String>,
    /// Base endpoint URI override.
    pub base_uri: Option<String>,
    /// Number of shots to execute.
    pub shots: u32,
    /// Output mode for the submitted job reference.
    pub output: OutputMode,
    /// Validate only; never create a job.
    pub dry_run: bool,
}

impl SubmissionSettings {
    /// Create settings for a target with default shot count.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: Some(target.into()),
            shots: 500,
            ..Self::default()
        }
    }

    /// Set the workspace identity parts.
    pub fn with_workspace(
        mut self,
        subscription: impl Into<String>,
        resource_group: impl Into<String>,
        workspace: impl Into<String>,
    ) -> Self {
        self.subscription = Some(subscription.into());
        self.resource_group = Some(resource_group.into());
        self.workspace = Some(workspace.into());
        self
    }

    /// Set the bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the storage connection string.
    pub fn with_storage(mut self, storage: impl Into<String>) -> Self {
        self.storage = Some(storage.into());
        self
    }

    /// Set the base endpoint URI.
    pub fn with_base_uri(mut self, uri: impl Into<String>) -> Self {
        self.base_uri = Some(uri.into());
        self
    }

    /// Set the shot count.
    pub fn with_shots(mut self, shots: u32) -> Self {
        self.shots = shots;
        self
    }

    /// Set the output mode.
    pub fn with_output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    /// Enable dry-run mode.
    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Credential derived from the token field: explicit token when present,
    /// the ambient path otherwise. The two are mutually exclusive by
    /// construction of [`Credential`].
    pub fn credential(&self) -> Credential {
        Credential::from_token(self.token.clone())
    }

    /// Assemble the workspace connection context from these settings.
    ///
    /// Fails with a configuration error naming the first missing identifier.
    pub fn workspace_config(&self) -> HalResult<WorkspaceConfig> {
        let mut config = WorkspaceConfig::from_parts(
            self.subscription.as_deref(),
            self.resource_group.as_deref(),
            self.workspace.as_deref(),
        )?
        .with_credential(self.credential());

        if let Some(uri) = &self.base_uri {
            config = config.with_base_uri(uri);
        }
        if let Some(storage) = &self.storage {
            config = config.with_storage(storage);
        }

        Ok(config)
    }
}

impl fmt::Debug for SubmissionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmissionSettings")
            .field("target", &self.target)
            .field("subscription", &self.subscription)
            .field("resource_group", &self.resource_group)
            .field("workspace", &self.workspace)
            .field("storage", &self.storage.as_ref().map(|_| "[REDACTED]"))
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("base_uri", &self.base_uri)
            .field("shots", &self.shots)
            .field("output", &self.output)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}
