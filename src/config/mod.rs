//! Configuration
//!
//! Optional `cvforge.config.json` in the working directory. Command-line
//! flags override whatever it sets.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ForgeError, Result};
use crate::templates::TemplateStore;

/// Default config file name
pub const CONFIG_FILE: &str = "cvforge.config.json";

fn default_output_dir() -> PathBuf {
    PathBuf::from(".build")
}

fn is_default_output_dir(p: &Path) -> bool {
    p == Path::new(".build")
}

/// Project configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Directory searched for templates before the built-in set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates_dir: Option<PathBuf>,

    /// Directory rendered documents are written into
    #[serde(default = "default_output_dir", skip_serializing_if = "is_default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates_dir: None,
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    /// Load config from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| ForgeError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Save config to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self).map_err(|e| ForgeError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content + "\n")?;
        Ok(())
    }

    /// Load `path` if it exists, defaults otherwise
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            tracing::debug!("Loading config from {}", path.display());
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply command-line overrides
    pub fn with_overrides(
        mut self,
        templates_dir: Option<PathBuf>,
        output_dir: Option<PathBuf>,
    ) -> Self {
        if templates_dir.is_some() {
            self.templates_dir = templates_dir;
        }
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        self
    }

    pub fn template_store(&self) -> TemplateStore {
        match &self.templates_dir {
            Some(dir) => TemplateStore::with_dir(dir),
            None => TemplateStore::builtin(),
        }
    }

    /// Where a document named `file_name` is written
    pub fn output_path<P: AsRef<Path>>(&self, file_name: P) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.output_dir, PathBuf::from(".build"));
        assert_eq!(config.output_path("cv.tex"), PathBuf::from(".build/cv.tex"));
        assert!(config.template_store().dir().is_none());
    }

    #[test]
    fn test_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let config = Config {
            templates_dir: Some(PathBuf::from("my-templates")),
            output_dir: PathBuf::from("out"),
        };
        config.save(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"templatesDir": "t"}"#).unwrap();
        assert_eq!(config.templates_dir, Some(PathBuf::from("t")));
        assert_eq!(config.output_dir, PathBuf::from(".build"));
    }

    #[test]
    fn test_unknown_field_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{"outputDirectory": "x"}"#).unwrap();
        assert_eq!(Config::load(&path).unwrap_err().kind(), "ConfigError");
    }

    #[test]
    fn test_overrides_win() {
        let config = Config::default()
            .with_overrides(Some(PathBuf::from("tpl")), Some(PathBuf::from("dist")));
        assert_eq!(config.templates_dir, Some(PathBuf::from("tpl")));
        assert_eq!(config.output_dir, PathBuf::from("dist"));

        let config = Config::default().with_overrides(None, None);
        assert_eq!(config, Config::default());
    }
}
