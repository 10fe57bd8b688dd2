//! Backend registry keyed by provider.
//!
//! Target identifiers follow the `provider.device` convention
//! (`ionq.simulator`, `quantinuum.qpu.h1`). The registry maps the provider
//! segment to a factory that builds a backend bound to a workspace and the
//! full target string.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::backend::{BackendFactory, ExecutionBackend};
use crate::error::{HalError, HalResult};
use crate::workspace::WorkspaceConfig;

/// Factory function type for provider backends.
type ProviderFactory =
    Box<dyn Fn(WorkspaceConfig, &str) -> HalResult<Box<dyn ExecutionBackend>> + Send + Sync>;

/// Central registry of backend factories, keyed by provider id.
pub struct BackendRegistry {
    providers: FxHashMap<String, ProviderFactory>,
}

impl BackendRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            providers: FxHashMap::default(),
        }
    }

    /// Register a provider backed by a [`BackendFactory`] implementation.
    pub fn register<B>(&mut self, provider: impl Into<String>)
    where
        B: BackendFactory + 'static,
    {
        let provider = provider.into();
        debug!("Registering provider: {}", provider);
        self.providers.insert(
            provider,
            Box::new(|workspace, target| {
                let backend = B::from_workspace(workspace, target)?;
                Ok(Box::new(backend))
            }),
        );
    }

    /// Register a provider with a custom constructor.
    pub fn register_factory(
        &mut self,
        provider: impl Into<String>,
        factory: impl Fn(WorkspaceConfig, &str) -> HalResult<Box<dyn ExecutionBackend>>
        + Send
        + Sync
        + 'static,
    ) {
        let provider = provider.into();
        debug!("Registering factory provider: {}", provider);
        self.providers.insert(provider, Box::new(factory));
    }

    /// Create a backend for a full target identifier.
    ///
    /// The provider is the segment before the first `.`; a bare identifier
    /// with no `.` is treated as the provider itself.
    pub fn create(
        &self,
        target: &str,
        workspace: WorkspaceConfig,
    ) -> HalResult<Box<dyn ExecutionBackend>> {
        let provider = target.split('.').next().unwrap_or(target);

        match self.providers.get(provider) {
            Some(factory) => factory(workspace, target),
            None => Err(HalError::UnknownTarget(target.to_string())),
        }
    }

    /// Check whether a target's provider is registered.
    pub fn has_provider(&self, target: &str) -> bool {
        let provider = target.split('.').next().unwrap_or(target);
        self.providers.contains_key(provider)
    }

    /// List all registered provider ids, sorted.
    pub fn available_providers(&self) -> Vec<String> {
        let mut names: Vec<_> = self.providers.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::new()
    }
}
