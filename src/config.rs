use crate::{Conversion, WordOptions};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const LOCAL_CONFIG_FILE: &str = ".wordcase.toml";

/// Fully resolved settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub conversion: Conversion,
    pub options: WordOptions,
}

/// One config file. Keys left out keep the value of the layer below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigLayer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion: Option<Conversion>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<WordOptions>,
}

impl Config {
    /// Load configuration with priority:
    /// CLI args > explicit file > local config > global config > defaults
    ///
    /// CLI option flags can only add to the configured options.
    pub fn load(
        conversion: Option<Conversion>,
        options: WordOptions,
        explicit_path: Option<&Path>,
    ) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config = config.merge(ConfigLayer::from_file(&global_path)?);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            config = config.merge(ConfigLayer::from_file(&local_path)?);
        }

        if let Some(path) = explicit_path {
            config = config.merge(ConfigLayer::from_file(path)?);
        }

        // Apply CLI overrides
        if let Some(conversion) = conversion {
            config.conversion = conversion;
        }
        config.options |= options;

        debug!(conversion = %config.conversion, options = %config.options, "resolved configuration");
        Ok(config)
    }

    fn merge(mut self, layer: ConfigLayer) -> Self {
        if let Some(conversion) = layer.conversion {
            self.conversion = conversion;
        }
        if let Some(options) = layer.options {
            self.options = options;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "wordcase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

impl ConfigLayer {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config file");
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CaseStyle;
    use std::io::Write;

    fn layer(text: &str) -> ConfigLayer {
        toml::from_str(text).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.conversion, Conversion::Words);
        assert!(config.options.is_empty());
    }

    #[test]
    fn test_later_layer_can_restore_defaults() {
        let global = layer(
            r#"conversion = "snake"
options = ["strip-hyphens"]"#,
        );
        let local = layer(
            r#"conversion = "words"
options = []"#,
        );

        let merged = Config::default().merge(global).merge(local);
        assert_eq!(merged.conversion, Conversion::Words);
        assert!(merged.options.is_empty());
    }

    #[test]
    fn test_missing_keys_keep_lower_layer() {
        let base = Config {
            conversion: Conversion::Acronym,
            options: WordOptions::STRIP_HYPHENS,
        };

        let merged = base.clone().merge(ConfigLayer::default());
        assert_eq!(merged, base);

        let merged = base.merge(layer(r#"options = ["strip-apostrophes"]"#));
        assert_eq!(merged.conversion, Conversion::Acronym);
        assert_eq!(merged.options, WordOptions::STRIP_APOSTROPHES);
    }

    #[test]
    fn test_parse_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"conversion = "snake"
options = ["distinguishHyphenatedWords", "strip-apostrophes"]"#
        )
        .unwrap();

        let layer = ConfigLayer::from_file(file.path()).unwrap();
        assert_eq!(layer.conversion, Some(Conversion::Case(CaseStyle::SnakeCase)));
        assert_eq!(
            layer.options,
            Some(WordOptions::DISTINGUISH_HYPHENATED_WORDS | WordOptions::STRIP_APOSTROPHES)
        );
    }

    #[test]
    fn test_unknown_option_names_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"options = ["strip-vowels"]"#).unwrap();

        let err = ConfigLayer::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
        assert!(format!("{:#}", err).contains("Unknown word option: strip-vowels"));
    }

    #[test]
    fn test_layer_serializes_names() {
        let layer = ConfigLayer {
            conversion: Some(Conversion::Case(CaseStyle::UpperCamelCase)),
            options: Some(WordOptions::STRIP_HYPHENS),
        };
        let text = toml::to_string(&layer).unwrap();
        assert_eq!(toml::from_str::<ConfigLayer>(&text).unwrap(), layer);
        assert!(text.contains(r#"conversion = "upper-camel-case""#));
    }
}
