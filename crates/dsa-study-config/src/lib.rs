use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub topics_path: PathBuf,
    #[serde(default)]
    pub quiz: QuizConfig,
}

/// The `[quiz]` table. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// `all` or a category slug such as `algorithms`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Fixed shuffle seed, for repeatable decks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// TOML catalog replacing the built-in cards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    pub fn new(topics_path: PathBuf) -> Self {
        Self {
            topics_path,
            quiz: QuizConfig::default(),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in every configured path
        config.topics_path = Self::expand_path(&config.topics_path).unwrap_or(config.topics_path);
        config.quiz.catalog_path = config
            .quiz
            .catalog_path
            .map(|p| Self::expand_path(&p).unwrap_or(p));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/dsa-study");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/dsa-study/config.toml"));
    }

    #[test]
    fn test_minimal_config_has_default_quiz() {
        let config: Config = toml::from_str(r#"topics_path = "/srv/topics""#).unwrap();

        assert_eq!(config.topics_path, PathBuf::from("/srv/topics"));
        assert_eq!(config.quiz, QuizConfig::default());
    }

    #[test]
    fn test_full_quiz_table() {
        let config: Config = toml::from_str(
            r#"
topics_path = "/srv/topics"

[quiz]
filter = "algorithms"
seed = 42
catalog_path = "/srv/cards.toml"
"#,
        )
        .unwrap();

        assert_eq!(config.quiz.filter.as_deref(), Some("algorithms"));
        assert_eq!(config.quiz.seed, Some(42));
        assert_eq!(
            config.quiz.catalog_path,
            Some(PathBuf::from("/srv/cards.toml"))
        );
    }

    #[test]
    fn test_missing_topics_path_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[quiz]\nseed = 1\n").unwrap();

        let result = Config::load_from_path(&config_file);
        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("DSA_TEST_VAR", "/test/env/path");
        }

        let path = PathBuf::from("$DSA_TEST_VAR/subdir");
        let expanded = Config::expand_path(&path);

        assert_eq!(expanded, Some(PathBuf::from("/test/env/path/subdir")));

        unsafe {
            env::remove_var("DSA_TEST_VAR");
        }
    }

    #[test]
    fn test_expand_path_with_absolute_path() {
        let path = PathBuf::from("/absolute/path");
        assert_eq!(Config::expand_path(&path), Some(path));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let mut test_config = Config::new(PathBuf::from("/tmp/topics"));
        test_config.quiz.seed = Some(7);

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_saved_config_omits_unset_quiz_keys() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        Config::new(PathBuf::from("/tmp/topics"))
            .save_to_path(&config_file)
            .unwrap();

        let content = std::fs::read_to_string(&config_file).unwrap();
        assert!(content.contains("topics_path"));
        assert!(!content.contains("seed"));
    }

    #[test]
    fn test_load_expands_paths() {
        unsafe {
            env::set_var("DSA_TOPICS_ROOT", "/custom/topics");
        }

        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            "topics_path = \"$DSA_TOPICS_ROOT/dsa\"\n\n[quiz]\ncatalog_path = \"$DSA_TOPICS_ROOT/cards.toml\"\n",
        )
        .unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(config.topics_path, PathBuf::from("/custom/topics/dsa"));
        assert_eq!(
            config.quiz.catalog_path,
            Some(PathBuf::from("/custom/topics/cards.toml"))
        );

        unsafe {
            env::remove_var("DSA_TOPICS_ROOT");
        }
    }

    #[test]
    fn test_unreadable_config_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        // A directory exists but cannot be read as a file
        let result = Config::load_from_path(temp_dir.path());
        assert!(matches!(result, Err(ConfigError::ConfigReadError { .. })));
    }
}
