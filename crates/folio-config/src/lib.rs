//! # folio-config
//!
//! Layered configuration loading for Folio using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FOLIO_*` prefix, `__` as separator)
//! 2. Project-level `.folio/config.toml`
//! 3. User-level `~/.config/folio/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FOLIO_CONTENT__COLLECTION` -> `content.collection`,
//! `FOLIO_MOTION__PREFERS_REDUCED_MOTION` -> `motion.prefers_reduced_motion`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use folio_config::FolioConfig;
//!
//! let config = FolioConfig::load_with_dotenv().expect("config");
//! println!("collection: {}", config.content.collection);
//! ```

mod content;
mod error;
mod motion;
mod output;
mod reveal;
mod site;

pub use content::ContentConfig;
pub use error::ConfigError;
pub use motion::MotionConfig;
pub use output::OutputConfig;
pub use reveal::{RevealConfig, Rotate, ViewOffset};
pub use site::{NavLink, SiteConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config directory name.
pub const PROJECT_DIR: &str = ".folio";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl FolioConfig {
    /// Load configuration for the current directory.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_for(Path::new("."))
    }

    /// Load configuration for the project rooted at `project_root`.
    pub fn load_for(project_root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment_for(project_root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Loads `.env` from the current directory (if present) before building
    /// the figment.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain for the current directory.
    pub fn figment() -> Figment {
        Self::figment_for(Path::new("."))
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment_for(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = Self::project_config_path(project_root);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("FOLIO_").split("__"))
    }

    /// Path to the project-local config file.
    #[must_use]
    pub fn project_config_path(project_root: &Path) -> PathBuf {
        project_root.join(PROJECT_DIR).join("config.toml")
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("folio").join("config.toml"))
    }

    /// Reject values that would make the build meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content.collection.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "content.collection".into(),
                reason: "must not be empty".into(),
            });
        }
        if self
            .content
            .extensions
            .iter()
            .all(|ext| ext.trim().trim_start_matches('.').is_empty())
        {
            return Err(ConfigError::InvalidValue {
                field: "content.extensions".into(),
                reason: "at least one non-empty extension is required".into(),
            });
        }
        if !(0.0..=1.0).contains(&self.reveal.view_factor) {
            return Err(ConfigError::InvalidValue {
                field: "reveal.view_factor".into(),
                reason: format!("{} is outside 0.0..=1.0", self.reveal.view_factor),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = FolioConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.motion.prefers_reduced_motion);
        assert!(config.output.client_script);
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = FolioConfig::figment_for(Path::new("/nonexistent/folio-project"));
        let config: FolioConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config.content.collection, "certifications");
        assert_eq!(config.reveal.row_stagger, 10);
    }

    #[test]
    fn empty_collection_is_rejected() {
        let mut config = FolioConfig::default();
        config.content.collection = "  ".into();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "content.collection"
        ));
    }

    #[test]
    fn blank_extensions_are_rejected() {
        let mut config = FolioConfig::default();
        config.content.extensions = vec![".".into(), String::new()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn view_factor_out_of_range_is_rejected() {
        let mut config = FolioConfig::default();
        config.reveal.view_factor = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn project_config_path_is_under_dot_folio() {
        let path = FolioConfig::project_config_path(Path::new("/site"));
        assert_eq!(path, PathBuf::from("/site/.folio/config.toml"));
    }
}
