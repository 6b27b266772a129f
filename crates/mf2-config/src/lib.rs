//! # mf2-config
//!
//! Layered configuration loading for the mf2 toolchain using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`MF2_*` prefix, `__` as separator)
//! 2. An explicit file passed to [`Mf2Config::load_from`]
//! 3. Project-level `.mf2/config.toml`
//! 4. User-level `~/.config/mf2/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `MF2_PARSER__FORCE_VALID_URLS` -> `parser.force_valid_urls`,
//! `MF2_GENERAL__BUILTIN_VOCABULARIES` -> `general.builtin_vocabularies`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Legacy vocabularies
//!
//! Extra v1 vocabularies can be declared per target type:
//!
//! ```toml
//! [parser]
//! parse_v1_microformats = true
//!
//! [vocabularies.h-recipe]
//! root = ["hrecipe"]
//! properties = { fn = "p-name", ingredient = ["p", "ingredient"] }
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use mf2_config::Mf2Config;
//!
//! let config = Mf2Config::load_with_dotenv().expect("config");
//! let parser = config.parser().expect("parser");
//! let results = parser.parse_html("<a class=\"h-card\" href=\"/ben\">Ben</a>").expect("parse");
//! ```

mod error;
mod general;

pub use error::ConfigError;
pub use general::GeneralConfig;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use mf2_core::{LegacyVocabulary, ParserSettings};
use mf2_parser::{Parser, VocabularyRegistry};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Mf2Config {
    #[serde(default)]
    pub parser: ParserSettings,
    #[serde(default)]
    pub general: GeneralConfig,
    /// Additional legacy vocabularies, keyed by target `h-*` type.
    #[serde(default)]
    pub vocabularies: BTreeMap<String, LegacyVocabulary>,
}

impl Mf2Config {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::extract(Self::figment(None))
    }

    /// Load configuration with an extra TOML file layered above the project
    /// config and below the environment.
    ///
    /// # Errors
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::InvalidValue {
                field: "config".to_string(),
                reason: format!("file not found: {}", path.display()),
            });
        }
        Self::extract(Self::figment(Some(path)))
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment(extra: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".mf2/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit file
        if let Some(path) = extra {
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("MF2_").split("__"))
    }

    /// Reject values the parser cannot work with.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.parser.max_depth == 0 {
            return Err(ConfigError::InvalidValue {
                field: "parser.max_depth".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        for (target, vocab) in &self.vocabularies {
            if vocab.roots.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("vocabularies.{target}.root"),
                    reason: "at least one root class name is required".to_string(),
                });
            }
        }
        Ok(())
    }

    /// The vocabulary registry described by this configuration: the bundled
    /// vocabularies (unless disabled) plus every configured one.
    ///
    /// # Errors
    /// Returns `ConfigError::Vocabulary` if a configured vocabulary is rejected.
    pub fn registry(&self) -> Result<VocabularyRegistry, ConfigError> {
        let base = if self.general.builtin_vocabularies {
            VocabularyRegistry::builtin()
        } else {
            VocabularyRegistry::new()
        };
        self.vocabularies
            .iter()
            .try_fold(base, |registry, (target, vocab)| registry.define(target, vocab))
            .map_err(ConfigError::from)
    }

    /// A parser built from this configuration.
    ///
    /// # Errors
    /// Returns `ConfigError::Vocabulary` if a configured vocabulary is rejected.
    pub fn parser(&self) -> Result<Parser, ConfigError> {
        Ok(Parser::new(self.parser.clone(), self.registry()?))
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        tracing::debug!(
            vocabularies = config.vocabularies.len(),
            legacy = config.parser.parse_v1_microformats,
            "loaded configuration"
        );
        Ok(config)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mf2").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir looking
    /// for a `.env` file. Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use mf2_core::LegacyProperty;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_is_valid() {
        let config = Mf2Config::default();
        assert_eq!(config.parser, ParserSettings::default());
        assert!(config.vocabularies.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn figment_builds_without_files() {
        Jail::expect_with(|_jail| {
            let config: Mf2Config = Mf2Config::figment(None).extract()?;
            assert_eq!(config.parser.max_depth, 512);
            assert!(config.general.builtin_vocabularies);
            Ok(())
        });
    }

    #[test]
    fn project_file_and_env_are_layered() {
        Jail::expect_with(|jail| {
            std::fs::create_dir_all(jail.directory().join(".mf2"))
                .expect("create project config dir");
            jail.create_file(
                ".mf2/config.toml",
                r#"
                [parser]
                parse_v1_microformats = true
                force_valid_urls = true

                [general]
                builtin_vocabularies = false
                "#,
            )?;
            jail.set_env("MF2_PARSER__FORCE_VALID_URLS", "false");
            jail.set_env("MF2_PARSER__MAX_DEPTH", "64");

            let config = Mf2Config::load().expect("load config");
            assert!(config.parser.parse_v1_microformats);
            assert!(!config.parser.force_valid_urls);
            assert_eq!(config.parser.max_depth, 64);
            assert!(!config.general.builtin_vocabularies);
            Ok(())
        });
    }

    #[test]
    fn explicit_file_declares_vocabularies() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "recipes.toml",
                r#"
                [vocabularies.h-recipe]
                root = ["hrecipe"]
                properties = { fn = "p-name", ingredient = ["p", "ingredient"] }
                "#,
            )?;
            let config =
                Mf2Config::load_from(&jail.directory().join("recipes.toml")).expect("load config");
            let recipe = &config.vocabularies["h-recipe"];
            assert_eq!(recipe.roots, vec!["hrecipe"]);
            assert_eq!(
                recipe.properties.get("ingredient"),
                Some(&LegacyProperty::Pair("p".to_string(), "ingredient".to_string()))
            );

            let registry = config.registry().expect("registry");
            assert!(registry.vocabulary("h-recipe").is_some());
            assert!(registry.vocabulary("h-card").is_some());
            Ok(())
        });
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = Mf2Config::load_from(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn zero_max_depth_is_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("MF2_PARSER__MAX_DEPTH", "0");
            let result = Mf2Config::load();
            assert!(matches!(
                result,
                Err(ConfigError::InvalidValue { ref field, .. }) if field == "parser.max_depth"
            ));
            Ok(())
        });
    }

    #[test]
    fn invalid_vocabulary_surfaces_from_parser() {
        let mut config = Mf2Config::default();
        config.vocabularies.insert(
            "recipe".to_string(),
            LegacyVocabulary::new(["hrecipe"]).property("fn", "p-name"),
        );
        assert!(matches!(config.parser(), Err(ConfigError::Vocabulary(_))));
    }

    #[test]
    fn builtin_vocabularies_can_be_disabled() {
        let mut config = Mf2Config::default();
        config.general.builtin_vocabularies = false;
        assert!(config.registry().expect("registry").is_empty());
    }
}
