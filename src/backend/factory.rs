//! Backend factory for creating backend instances from configuration.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};

use super::{DummyJsonBackend, OfflineBackend, TaskBackend};
use crate::config::ApiConfig;

/// Create a backend instance from the `[api]` configuration section.
///
/// # Errors
/// Returns error if the backend type is unknown.
pub fn create_backend(api: &ApiConfig) -> Result<Arc<dyn TaskBackend>> {
    match api.backend.as_str() {
        "dummyjson" => Ok(Arc::new(DummyJsonBackend::new(
            api.base_url.clone(),
            Duration::from_secs(api.timeout_secs),
        ))),
        "offline" => Ok(Arc::new(OfflineBackend::new())),
        other => Err(anyhow!("Unknown backend type: {}", other)),
    }
}
