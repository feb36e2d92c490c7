//! Package version resolution
//!
//! A [`Registry`] turns a package name into its latest published version.
//! [`resolve_latest_versions`] resolves a batch concurrently and fails as a
//! whole as soon as one lookup fails, so no partial set of dependencies is
//! ever handed to the manifest updater.

mod npm;

pub use npm::{DEFAULT_REGISTRY, NpmRegistry};

use futures::future::try_join_all;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A package name with its resolved version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryPackage {
    pub name: String,
    pub version: String,
}

impl RegistryPackage {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// Source of "latest version" lookups
#[allow(async_fn_in_trait)]
pub trait Registry {
    /// Look up the latest published version of `name`
    ///
    /// Fails with `RegistryLookupFailed` on transport errors, non-success
    /// responses or malformed bodies.
    async fn latest_version(&self, name: &str) -> Result<RegistryPackage>;
}

impl<R: Registry> Registry for &R {
    async fn latest_version(&self, name: &str) -> Result<RegistryPackage> {
        (**self).latest_version(name).await
    }
}

/// Resolve every name concurrently, preserving input order
pub async fn resolve_latest_versions<R: Registry>(
    registry: &R,
    names: &[String],
) -> Result<Vec<RegistryPackage>> {
    try_join_all(names.iter().map(|name| registry.latest_version(name))).await
}

#[cfg(test)]
pub(crate) mod fake {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::{Registry, RegistryPackage};
    use crate::error::{self, Result};

    /// Registry answering from a fixed table
    #[derive(Debug, Default)]
    pub struct FakeRegistry {
        versions: HashMap<String, String>,
        pub lookups: Mutex<Vec<String>>,
    }

    impl FakeRegistry {
        pub fn with(mut self, name: &str, version: &str) -> Self {
            self.versions.insert(name.to_string(), version.to_string());
            self
        }
    }

    impl Registry for FakeRegistry {
        async fn latest_version(&self, name: &str) -> Result<RegistryPackage> {
            if let Ok(mut lookups) = self.lookups.lock() {
                lookups.push(name.to_string());
            }
            self.versions
                .get(name)
                .map(|version| RegistryPackage::new(name, version.clone()))
                .ok_or_else(|| error::registry_lookup_failed(name, "HTTP 404 Not Found"))
        }
    }
}
