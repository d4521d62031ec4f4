//! Main service entry point.
//!
//! The [`ExplorationService`] owns configuration, the page data source and the
//! renderer registry, and hands out runtimes that share them.

use std::path::PathBuf;
use std::sync::Arc;

use explora_core::ExplorationId;
use explora_io::{PageBackend, RestBackend, RestBackendOptions};
use tracing::debug;

use crate::config::ExploraConfig;
use crate::dispatcher::ExplorationPageDispatcher;
use crate::error::{Error, Result};
use crate::registry::PageRegistry;
use crate::runtime::ExplorationRuntime;
use crate::source::PageDataSource;

/// Coordinates everything an exploration front-end needs.
///
/// Every runtime created here shares one page cache, so moving back and forth
/// between explorations does not refetch within the staleness window.
///
/// # Example
///
/// ```ignore
/// let service = ExplorationService::new()?;
/// let runtime = service.runtime();
/// runtime.load(Some("E1")).await;
/// ```
pub struct ExplorationService {
    /// Cached page reads.
    source: Arc<PageDataSource>,

    /// Renderers by page type.
    registry: Arc<PageRegistry>,

    /// Application configuration.
    config: ExploraConfig,
}

impl ExplorationService {
    /// Create a service from `~/.explora/config.toml`.
    pub fn new() -> Result<Self> {
        ExplorationServiceBuilder::new().build()
    }

    /// Create a service reading through `backend`.
    pub fn with_backend(config: ExploraConfig, backend: Arc<dyn PageBackend>) -> Self {
        Self::with_parts(config, backend, PageRegistry::with_defaults())
    }

    fn with_parts(config: ExploraConfig, backend: Arc<dyn PageBackend>, registry: PageRegistry) -> Self {
        debug!(backend = backend.name(), "creating exploration service");
        let source = Arc::new(PageDataSource::new(backend, config.cache.stale_after()));
        Self {
            source,
            registry: Arc::new(registry),
            config,
        }
    }

    /// The shared page data source.
    pub fn source(&self) -> &Arc<PageDataSource> {
        &self.source
    }

    /// The renderer registry.
    pub fn registry(&self) -> &Arc<PageRegistry> {
        &self.registry
    }

    /// A fresh dispatcher over the shared source and registry.
    pub fn dispatcher(&self) -> ExplorationPageDispatcher {
        ExplorationPageDispatcher::new(Arc::clone(&self.source), Arc::clone(&self.registry))
    }

    /// A fresh runtime with the configured overlays.
    pub fn runtime(&self) -> ExplorationRuntime {
        let rules = Arc::new(self.config.runtime.floating_actions.clone());
        ExplorationRuntime::new(self.dispatcher(), rules)
    }

    /// Turn route input into an exploration id.
    ///
    /// With `is_slug`, the input is looked up through the backend; otherwise it
    /// is taken as an id. Blank input yields `None`.
    pub async fn resolve_route(&self, route: &str, is_slug: bool) -> Result<Option<ExplorationId>> {
        if !is_slug {
            return Ok(ExplorationId::parse(route));
        }
        let slug = route.trim();
        if slug.is_empty() {
            return Ok(None);
        }
        self.source.resolve_slug(slug).await
    }
}

/// Builder for configuring an [`ExplorationService`].
#[derive(Default)]
pub struct ExplorationServiceBuilder {
    config: Option<ExploraConfig>,
    config_path: Option<PathBuf>,
    backend: Option<Arc<dyn PageBackend>>,
    registry: Option<PageRegistry>,
}

impl ExplorationServiceBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific configuration.
    pub fn config(mut self, config: ExploraConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Load configuration from a specific path.
    pub fn config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Read pages through `backend` instead of the configured REST backend.
    pub fn backend(mut self, backend: Arc<dyn PageBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Use a custom registry.
    pub fn registry(mut self, registry: PageRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Build the service.
    pub fn build(self) -> Result<ExplorationService> {
        let config_path = self.config_path.clone();
        let config = if let Some(cfg) = self.config {
            cfg
        } else if let Some(path) = &config_path {
            ExploraConfig::load_from(path)?
        } else {
            ExploraConfig::load()?
        };

        let backend = match self.backend {
            Some(backend) => backend,
            None => {
                let url = config.backend.url.clone().ok_or_else(|| {
                    Error::NoBackend(
                        config_path
                            .or_else(ExploraConfig::config_path)
                            .unwrap_or_else(|| PathBuf::from("config.toml")),
                    )
                })?;
                let backend: Arc<dyn PageBackend> = Arc::new(RestBackend::new(RestBackendOptions {
                    url,
                    api_key: config.backend.api_key.clone(),
                    timeout: config.backend.timeout(),
                }));
                backend
            }
        };

        let registry = self.registry.unwrap_or_else(PageRegistry::with_defaults);
        Ok(ExplorationService::with_parts(config, backend, registry))
    }
}
