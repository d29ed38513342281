//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! The tool is deliberately configuration-free from the user's point of
//! view: behavior is fully determined by the ambient git remote. These
//! values are the fixed defaults the original bootstrap script hardcoded.

use serde::{Deserialize, Serialize};

use bucket_core::application::PublishOptions;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Source-control publish defaults.
    pub publish: PublishConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishConfig {
    pub remote: String,
    pub branch: String,
    pub commit_message: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            publish: PublishConfig {
                remote: "origin".into(),
                branch: "main".into(),
                commit_message: "Initial (automated) commit".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration.  Always the built-in defaults: there is no
    /// config-file surface by design.
    pub fn load() -> anyhow::Result<Self> {
        Ok(Self::default())
    }

    /// The publish options to hand to the core service.
    pub fn publish_options(&self) -> PublishOptions {
        PublishOptions {
            remote: self.publish.remote.clone(),
            branch: self.publish.branch.clone(),
            commit_message: self.publish.commit_message.clone(),
        }
    }
}
