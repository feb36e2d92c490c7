//! Spinner shown while registry lookups are in flight

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::error::Result;
use crate::registry::{Registry, RegistryPackage};

/// Registry wrapper that reports each lookup on a spinner
pub struct ProgressRegistry<R> {
    inner: R,
    spinner: ProgressBar,
}

impl<R: Registry> ProgressRegistry<R> {
    /// Wrap `inner`; a hidden spinner draws nothing
    pub fn new(inner: R, visible: bool) -> Self {
        let spinner = if visible {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            spinner.set_style(style);
        }
        spinner.enable_steady_tick(Duration::from_millis(80));
        Self { inner, spinner }
    }

    /// Stop the spinner and clear its line
    pub fn finish(&self) {
        self.spinner.finish_and_clear();
    }

    #[cfg(test)]
    fn completed(&self) -> u64 {
        self.spinner.position()
    }
}

impl<R: Registry> Registry for ProgressRegistry<R> {
    async fn latest_version(&self, name: &str) -> Result<RegistryPackage> {
        self.spinner.set_message(format!("Resolving {name}..."));
        let package = self.inner.latest_version(name).await;
        if let Ok(package) = &package {
            self.spinner.inc(1);
            self.spinner
                .set_message(format!("Resolved {}@{}", package.name, package.version));
        }
        package
    }
}

impl<R> Drop for ProgressRegistry<R> {
    fn drop(&mut self) {
        if !self.spinner.is_finished() {
            self.spinner.finish_and_clear();
        }
    }
}
