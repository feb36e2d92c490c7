//! npm registry client

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use super::{Registry, RegistryPackage};
use crate::error::{self, Result};

/// Public npm registry
pub const DEFAULT_REGISTRY: &str = "https://registry.npmjs.org";

/// Registry client speaking the npm registry JSON API
#[derive(Debug, Clone)]
pub struct NpmRegistry {
    base_url: String,
    client: reqwest::Client,
}

/// The part of a package document we read
#[derive(Debug, Deserialize)]
struct Packument {
    #[serde(rename = "dist-tags", default)]
    dist_tags: DistTags,
}

#[derive(Debug, Default, Deserialize)]
struct DistTags {
    latest: Option<String>,
}

impl NpmRegistry {
    /// Create a client for `base_url` with a request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("coregen/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| error::io_error(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Document URL for a package; the scope separator is percent-encoded
    pub fn package_url(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, name.replace('/', "%2F"))
    }
}

impl Registry for NpmRegistry {
    async fn latest_version(&self, name: &str) -> Result<RegistryPackage> {
        let url = self.package_url(name);
        debug!(%url, "looking up latest version");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| error::registry_lookup_failed(name, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(error::registry_lookup_failed(name, format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| error::registry_lookup_failed(name, e.to_string()))?;

        parse_packument(name, &body)
    }
}

/// Extract `dist-tags.latest` from a package document
pub(crate) fn parse_packument(name: &str, body: &str) -> Result<RegistryPackage> {
    let packument: Packument = serde_json::from_str(body)
        .map_err(|e| error::registry_lookup_failed(name, format!("malformed response: {e}")))?;

    match packument.dist_tags.latest {
        Some(version) if !version.trim().is_empty() => Ok(RegistryPackage::new(name, version)),
        _ => Err(error::registry_lookup_failed(
            name,
            "response has no `dist-tags.latest` version",
        )),
    }
}
