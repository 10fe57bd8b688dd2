//! Target resolution.
//!
//! Maps a target identifier from the settings to a concrete backend.
//! An unknown target is a first-class [`Resolution::NotFound`] outcome the
//! driver handles as normal control flow, never an error or a null.

use tracing::debug;

use vanir_adapter_cloud::CloudBackend;
use vanir_adapter_noop::{NOOP_TARGET, NoopBackend};
use vanir_hal::{BackendRegistry, ExecutionBackend, HalResult};

use crate::settings::SubmissionSettings;

/// Outcome of resolving a target identifier.
pub enum Resolution {
    /// A backend bound to the requested workspace/target pair.
    Found(Box<dyn ExecutionBackend>),
    /// No backend is registered for the target (or no target was given).
    NotFound,
}

/// Resolves target identifiers against a provider registry.
pub struct TargetResolver {
    registry: BackendRegistry,
}

impl TargetResolver {
    /// Create a resolver with the built-in cloud providers registered.
    pub fn new() -> Self {
        let mut registry = BackendRegistry::new();
        registry.register::<CloudBackend>("ionq");
        registry.register::<CloudBackend>("quantinuum");
        registry.register::<CloudBackend>("rigetti");
        Self { registry }
    }

    /// Create a resolver over a caller-supplied registry.
    pub fn with_registry(registry: BackendRegistry) -> Self {
        Self { registry }
    }

    /// Resolve the settings' target to a backend.
    ///
    /// The `nothing` sentinel short-circuits to the no-op backend before any
    /// registry or workspace work. For registered providers the workspace
    /// context is assembled from the settings, and a missing workspace
    /// identifier is a configuration error — but only after the target is
    /// known, so unknown targets never demand workspace flags.
    pub fn resolve(&self, settings: &SubmissionSettings) -> HalResult<Resolution> {
        let Some(target) = settings.target.as_deref() else {
            debug!("No target specified");
            return Ok(Resolution::NotFound);
        };

        if target == NOOP_TARGET {
            debug!("Resolved sentinel target to the no-op backend");
            return Ok(Resolution::Found(Box::new(NoopBackend::new())));
        }

        if !self.registry.has_provider(target) {
            debug!("No provider registered for target '{}'", target);
            return Ok(Resolution::NotFound);
        }

        let workspace = settings.workspace_config()?;
        let backend = self.registry.create(target, workspace)?;
        debug!("Resolved target '{}'", target);
        Ok(Resolution::Found(backend))
    }

    /// Registered provider ids, sorted. Does not include the sentinel.
    pub fn available_providers(&self) -> Vec<String> {
        self.registry.available_providers()
    }
}

impl Default for TargetResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_resolves_without_workspace() {
        let resolver = TargetResolver::new();
        let settings = SubmissionSettings::new(NOOP_TARGET);

        match resolver.resolve(&settings).unwrap() {
            Resolution::Found(backend) => assert_eq!(backend.name(), NOOP_TARGET),
            Resolution::NotFound => panic!("sentinel must resolve"),
        }
    }

    #[test]
    fn test_unknown_target_is_not_found() {
        let resolver = TargetResolver::new();
        let settings = SubmissionSettings::new("unregistered-hardware-x");

        assert!(matches!(
            resolver.resolve(&settings).unwrap(),
            Resolution::NotFound
        ));
    }

    #[test]
    fn test_absent_target_is_not_found() {
        let resolver = TargetResolver::new();
        let settings = SubmissionSettings::default();

        assert!(matches!(
            resolver.resolve(&settings).unwrap(),
            Resolution::NotFound
        ));
    }

    #[test]
    fn test_known_provider_without_workspace_is_config_error() {
        let resolver = TargetResolver::new();
        let settings = SubmissionSettings::new("ionq.simulator");

        assert!(resolver.resolve(&settings).is_err());
    }

    #[test]
    fn test_known_provider_with_workspace_resolves() {
        let resolver = TargetResolver::new();
        let settings =
            SubmissionSettings::new("ionq.simulator").with_workspace("sub", "rg", "ws");

        match resolver.resolve(&settings).unwrap() {
            Resolution::Found(backend) => assert_eq!(backend.name(), "ionq.simulator"),
            Resolution::NotFound => panic!("registered provider must resolve"),
        }
    }

    #[test]
    fn test_builtin_providers_listed() {
        let resolver = TargetResolver::new();
        assert_eq!(
            resolver.available_providers(),
            vec!["ionq", "quantinuum", "rigetti"]
        );
    }
}
