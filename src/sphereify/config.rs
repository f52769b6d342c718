use std::path::Path;

use serde::Deserialize;

use crate::application::error::ApplicationError;
use crate::application::sphereify_service::DEFAULT_OUTPUT_PREFIX;
use crate::domain::sphereify_params::DEFAULT_SHRINK;

pub const PATH: &str = "sphereify.toml";

#[derive(Deserialize, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub sphereify: SphereifyConfig,
}

#[derive(Deserialize, Debug, PartialEq)]
pub struct SphereifyConfig {
    /// Strength of the spherical warp. Larger values push the bulge further out.
    #[serde(default = "default_shrink")]
    pub shrink: f64,
    /// Prepended to the input's file name to name the output.
    #[serde(default = "default_output_prefix")]
    pub output_prefix: String,
}

impl Default for SphereifyConfig {
    fn default() -> Self {
        Self {
            shrink: default_shrink(),
            output_prefix: default_output_prefix(),
        }
    }
}

fn default_shrink() -> f64 {
    DEFAULT_SHRINK
}

fn default_output_prefix() -> String {
    DEFAULT_OUTPUT_PREFIX.to_string()
}

pub fn parse(source: &str) -> Result<Config, ApplicationError> {
    toml::from_str(source).map_err(|e| ApplicationError::ConfigurationError(e.to_string()))
}

/// Loads the config at `path`, falling back to the defaults when the file does not exist.
pub fn load(path: &Path) -> Result<Config, ApplicationError> {
    match std::fs::read_to_string(path) {
        Ok(source) => parse(&source),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("{} not found, using defaults", path.display());
            Ok(Config::default())
        }
        Err(e) => Err(ApplicationError::ConfigurationError(format!(
            "cannot read {}: {e}",
            path.display()
        ))),
    }
}
