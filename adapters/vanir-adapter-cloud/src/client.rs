//! HTTP client for the cloud job service.
//!
//! All job operations live under the workspace path
//! `/v1/subscriptions/{sub}/resourceGroups/{rg}/workspaces/{ws}`.
//! Requests carry a bearer token when the workspace uses the explicit
//! credential path; on the ambient path no `Authorization` header is sent
//! and identity is expected to come from the deployment environment
//! (gateway sidecar, ambient proxy).

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use vanir_hal::{Credential, WorkspaceConfig};

use crate::error::{CloudError, CloudResult};

/// Default service endpoint.
pub const DEFAULT_BASE_URI: &str = "https://jobs.vanir-q.dev";

/// HTTP connect timeout. Job calls themselves carry no timeout — the
/// service decides how long validation and submission may take.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client bound to one workspace.
pub struct CloudClient {
    http: reqwest::Client,
    workspace_root: String,
    credential: Credential,
}

impl CloudClient {
    /// Create a client for a workspace.
    pub fn new(workspace: &WorkspaceConfig) -> CloudResult<Self> {
        let base = workspace
            .base_uri
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URI)
            .trim_end_matches('/');

        let workspace_root = format!(
            "{}/v1/subscriptions/{}/resourceGroups/{}/workspaces/{}",
            base, workspace.subscription, workspace.resource_group, workspace.workspace
        );

        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            workspace_root,
            credential: workspace.credential.clone(),
        })
    }

    /// The workspace-rooted URL prefix for job resources.
    pub fn workspace_root(&self) -> &str {
        &self.workspace_root
    }

    /// POST a JSON body and decode a JSON response.
    async fn post<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> CloudResult<R> {
        let url = format!("{}/{}", self.workspace_root, path);
        debug!("POST {}", url);

        let mut request = self.http.post(&url).json(body);
        if let Some(token) = self.credential.bearer() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CloudError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }

    /// Validate a job definition without creating a job.
    pub async fn validate_job(&self, request: &JobRequest) -> CloudResult<ValidateResponse> {
        self.post("jobs:validate", request).await
    }

    /// Submit a job for execution.
    pub async fn submit_job(&self, request: &JobRequest) -> CloudResult<SubmitResponse> {
        self.post("jobs", request).await
    }
}

/// Job definition sent to the service, for both validation and submission.
#[derive(Debug, Clone, Serialize)]
pub struct JobRequest {
    /// Client-chosen job identifier.
    pub id: String,
    /// Human-readable job name (the program's entry-point name).
    pub name: String,
    /// Full target identifier (`provider.device`).
    pub target: String,
    /// Number of shots to execute.
    pub shots: u32,
    /// Opaque program payload.
    pub program: serde_json::Value,
    /// Bound input arguments.
    pub input: serde_json::Map<String, serde_json::Value>,
}

/// Response to a validation request.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidateResponse {
    /// Whether the target accepted the job definition.
    pub valid: bool,
    /// Diagnostic text for rejected definitions.
    #[serde(default)]
    pub message: Option<String>,
}

/// Response to a submission request.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponse {
    /// Identifier assigned to the job.
    pub id: String,
    /// Initial job state as reported by the service.
    #[serde(default)]
    pub status: Option<String>,
    /// Status-page link, when the service provides one.
    #[serde(default)]
    pub uri: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_root_layout() {
        let ws = WorkspaceConfig::from_parts(Some("sub-1"), Some("rg-1"), Some("ws-1")).unwrap();
        let client = CloudClient::new(&ws).unwrap();

        assert_eq!(
            client.workspace_root(),
            format!("{DEFAULT_BASE_URI}/v1/subscriptions/sub-1/resourceGroups/rg-1/workspaces/ws-1")
        );
    }

    #[test]
    fn test_custom_base_uri_trailing_slash() {
        let ws = WorkspaceConfig::from_parts(Some("s"), Some("r"), Some("w"))
            .unwrap()
            .with_base_uri("https://eu.jobs.example.com/");
        let client = CloudClient::new(&ws).unwrap();

        assert!(
            client
                .workspace_root()
                .starts_with("https://eu.jobs.example.com/v1/")
        );
    }

    #[test]
    fn test_validate_response_defaults() {
        let parsed: ValidateResponse = serde_json::from_str(r#"{"valid": true}"#).unwrap();
        assert!(parsed.valid);
        assert!(parsed.message.is_none());
    }
}
