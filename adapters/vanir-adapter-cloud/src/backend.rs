//! Cloud backend implementation.

use async_trait::async_trait;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use vanir_hal::{
    BackendFactory, ExecutionBackend, HalError, HalResult, JobHandle, ProgramInfo, ProgramInput,
    ValidationOutcome, WorkspaceConfig,
};

use crate::client::{CloudClient, JobRequest};
use crate::error::CloudError;

/// Remote backend bound to one workspace/target pair.
///
/// Stateless after construction: every call builds a fresh request from its
/// arguments. Transport and service failures are returned to the caller
/// untouched — no retries, no local timeout.
pub struct CloudBackend {
    client: CloudClient,
    target: String,
}

impl CloudBackend {
    /// Create a backend for `target` within `workspace`.
    pub fn new(workspace: WorkspaceConfig, target: impl Into<String>) -> HalResult<Self> {
        let client = CloudClient::new(&workspace).map_err(map_err)?;
        Ok(Self {
            client,
            target: target.into(),
        })
    }

    fn job_request(&self, program: &ProgramInfo, input: &ProgramInput, shots: u32) -> JobRequest {
        JobRequest {
            id: Uuid::new_v4().to_string(),
            name: program.name.clone(),
            target: self.target.clone(),
            shots,
            program: program.payload.clone(),
            input: input.0.clone(),
        }
    }
}

fn map_err(err: CloudError) -> HalError {
    match err {
        CloudError::Api { status: 401, message } | CloudError::Api { status: 403, message } => {
            HalError::AuthenticationFailed(message)
        }
        CloudError::Api { status, message } => {
            HalError::SubmissionFailed(format!("service returned {status}: {message}"))
        }
        CloudError::Http(e) => HalError::Network(e),
        CloudError::Serialization(e) => HalError::Serialization(e),
        CloudError::Configuration(msg) => HalError::Configuration(msg),
    }
}

#[async_trait]
impl ExecutionBackend for CloudBackend {
    fn name(&self) -> &str {
        &self.target
    }

    #[instrument(skip(self, program, input))]
    async fn validate(
        &self,
        program: &ProgramInfo,
        input: &ProgramInput,
    ) -> HalResult<ValidationOutcome> {
        debug!("Validating '{}' against {}", program.name, self.target);

        let request = self.job_request(program, input, 1);
        let response = self.client.validate_job(&request).await.map_err(map_err)?;

        Ok(ValidationOutcome {
            valid: response.valid,
            message: response.message,
        })
    }

    #[instrument(skip(self, program, input))]
    async fn submit(
        &self,
        program: &ProgramInfo,
        input: &ProgramInput,
        shots: u32,
    ) -> HalResult<JobHandle> {
        info!(
            "Submitting '{}' to {} ({} shots)",
            program.name, self.target, shots
        );

        let request = self.job_request(program, input, shots);
        let response = self.client.submit_job(&request).await.map_err(map_err)?;

        // Prefer the service-provided status link; otherwise the job
        // resource under the workspace is itself navigable.
        let friendly_uri = response
            .uri
            .unwrap_or_else(|| format!("{}/jobs/{}", self.client.workspace_root(), response.id));

        info!("Job accepted: {}", response.id);

        Ok(JobHandle::new(response.id, &self.target).with_friendly_uri(friendly_uri))
    }
}

impl BackendFactory for CloudBackend {
    fn from_workspace(workspace: WorkspaceConfig, target: &str) -> HalResult<Self> {
        Self::new(workspace, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workspace() -> WorkspaceConfig {
        WorkspaceConfig::from_parts(Some("sub"), Some("rg"), Some("ws")).unwrap()
    }

    #[test]
    fn test_backend_is_bound_to_target() {
        let backend = CloudBackend::new(workspace(), "ionq.simulator").unwrap();
        assert_eq!(backend.name(), "ionq.simulator");
    }

    #[test]
    fn test_job_request_carries_program_and_input() {
        let backend = CloudBackend::new(workspace(), "ionq.qpu").unwrap();

        let program = ProgramInfo::new("bell", serde_json::json!({"ir": "..." }));
        let input = ProgramInput::from_pairs(["n=2"]).unwrap();
        let request = backend.job_request(&program, &input, 500);

        assert_eq!(request.name, "bell");
        assert_eq!(request.target, "ionq.qpu");
        assert_eq!(request.shots, 500);
        assert_eq!(request.input["n"], serde_json::json!(2));
        assert!(!request.id.is_empty());
    }

    #[test]
    fn test_auth_errors_map_to_authentication_failed() {
        let err = map_err(CloudError::Api {
            status: 401,
            message: "bad token".into(),
        });
        assert!(matches!(err, HalError::AuthenticationFailed(_)));

        let err = map_err(CloudError::Api {
            status: 500,
            message: "boom".into(),
        });
        assert!(matches!(err, HalError::SubmissionFailed(_)));
    }
}
