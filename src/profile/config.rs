use std::path::Path;

use anyhow::Context as _;

use crate::{
    animation::sequencer::{MotionConfig, entrance_timeline},
    foundation::error::{PageError, PageResult},
    profile::content::ProfileContent,
};

/// Site configuration: page content plus entrance motion. Both sections are optional in JSON.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub profile: ProfileContent,
    pub motion: MotionConfig,
}

impl SiteConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(s: &str) -> PageResult<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    #[tracing::instrument]
    pub fn from_path(path: &Path) -> PageResult<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read site config '{}'", path.display()))?;
        let config = Self::from_json_str(&raw)?;
        tracing::debug!(name = %config.profile.name, "loaded site config");
        Ok(config)
    }

    pub fn validate(&self) -> PageResult<()> {
        entrance_timeline(&self.motion)
            .validate()
            .map_err(|e| PageError::validation(format!("motion: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/profile/config.rs"]
mod tests;
