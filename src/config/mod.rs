use crate::models::AppSettings;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use config::{Config, Environment, File, FileFormat, Map};
use std::fs;

/// Name of the settings file inside the configuration directory.
pub const SETTINGS_FILE: &str = "gymtrain.yaml";

/// Prefix for environment overrides, e.g. `GYMTRAIN_SEED_DEMO_DATA=true`
/// or `GYMTRAIN_LOGGING__DEBUG=true` for nested keys.
pub const ENV_PREFIX: &str = "GYMTRAIN";

/// Configuration manager for loading and saving the YAML settings file.
///
/// Settings are layered: built-in defaults, then `gymtrain.yaml` (optional),
/// then `GYMTRAIN_*` environment variables.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: Utf8PathBuf,
    settings_path: Utf8PathBuf,
}

impl ConfigManager {
    /// Create a new ConfigManager with the specified configuration directory.
    ///
    /// # Arguments
    /// * `config_dir` - Directory containing the settings file (e.g., "GymTrain Data")
    pub fn new<P: AsRef<Utf8Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref().to_path_buf();

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {}", config_dir))?;
        }

        Ok(Self {
            settings_path: config_dir.join(SETTINGS_FILE),
            config_dir,
        })
    }

    /// Load settings from the file and the process environment.
    pub fn load_settings(&self) -> Result<AppSettings> {
        self.load_settings_with_env(None)
    }

    /// Load settings, reading overrides from `env` instead of the process
    /// environment when given.
    pub fn load_settings_with_env(&self, env: Option<Map<String, String>>) -> Result<AppSettings> {
        if !self.settings_path.exists() {
            tracing::warn!(
                "Settings file not found at {}, using defaults",
                self.settings_path
            );
        }

        let environment = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(env);

        let settings: AppSettings = Config::builder()
            .add_source(
                File::from(self.settings_path.as_std_path())
                    .format(FileFormat::Yaml)
                    .required(false),
            )
            .add_source(environment)
            .build()
            .with_context(|| format!("Failed to read settings: {}", self.settings_path))?
            .try_deserialize()
            .with_context(|| format!("Failed to parse settings: {}", self.settings_path))?;

        tracing::info!("Loaded settings from {}", self.settings_path);
        Ok(settings)
    }

    /// Save the settings file.
    ///
    /// # Arguments
    /// * `settings` - The AppSettings to save
    pub fn save_settings(&self, settings: &AppSettings) -> Result<()> {
        let yaml_string =
            serde_yaml_ng::to_string(settings).context("Failed to serialize settings to YAML")?;

        fs::write(&self.settings_path, yaml_string)
            .with_context(|| format!("Failed to write settings: {}", self.settings_path))?;

        tracing::info!("Saved settings to {}", self.settings_path);
        Ok(())
    }

    pub fn settings_path(&self) -> &Utf8Path {
        &self.settings_path
    }

    /// Get the configuration directory path.
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_config_manager() -> (ConfigManager, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config_path = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
        let manager = ConfigManager::new(&config_path).unwrap();
        (manager, temp_dir)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let (manager, _temp_dir) = create_test_config_manager();

        let settings = manager.load_settings_with_env(Some(Map::new())).unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_load_save_settings() {
        let (manager, _temp_dir) = create_test_config_manager();

        let mut settings = AppSettings::default();
        settings.seed_demo_data = true;
        settings.logging.json = true;
        manager.save_settings(&settings).unwrap();

        let loaded = manager.load_settings_with_env(Some(Map::new())).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_env_overrides_file() {
        let (manager, _temp_dir) = create_test_config_manager();
        manager.save_settings(&AppSettings::default()).unwrap();

        let mut env = Map::new();
        env.insert("GYMTRAIN_SEED_DEMO_DATA".to_string(), "true".to_string());
        env.insert("GYMTRAIN_LOGGING__DEBUG".to_string(), "true".to_string());

        let loaded = manager.load_settings_with_env(Some(env)).unwrap();
        assert!(loaded.seed_demo_data);
        assert!(loaded.logging.debug);
        assert_eq!(loaded.data_dir, "GymTrain Data");
    }

    #[test]
    fn test_new_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = Utf8PathBuf::try_from(temp_dir.path().join("a/b")).unwrap();

        let manager = ConfigManager::new(&nested).unwrap();
        assert!(nested.exists());
        assert_eq!(manager.settings_path(), nested.join(SETTINGS_FILE));
    }
}
