use config::{Config, ConfigError, Environment, File};
use serde_derive::Deserialize;
use std::path::{Path, PathBuf};

use crate::configuration::constants::settings::{
    DEFAULT_REPORTS_DIR, OVERWRITE_REPORTS_KEY, REPORTS_DIR_KEY,
};

/// Resolved report placement policy.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Settings {
    pub gauge_reports_dir: PathBuf,
    pub overwrite_reports: bool,
}

impl Settings {
    /// Layers defaults, the optional settings file, the process environment
    /// and finally the command line override, later sources winning.
    pub fn load(file: Option<&Path>, reports_dir: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Config::new();
        config.set_default(REPORTS_DIR_KEY, DEFAULT_REPORTS_DIR)?;
        config.set_default(OVERWRITE_REPORTS_KEY, true)?;
        if let Some(file) = file {
            config.merge(File::from(file))?;
        }
        config.merge(Environment::new())?;
        if let Some(dir) = reports_dir {
            config.set(REPORTS_DIR_KEY, dir.to_string_lossy().as_ref())?;
        }
        config.try_into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::writer::name_generator;
    use std::env;
    use std::fs;
    use std::sync::Mutex;

    // Every load reads the process environment.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_overwrite_flag_and_reports_dir_from_environment() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let previous: Vec<_> = [OVERWRITE_REPORTS_KEY, REPORTS_DIR_KEY]
            .iter()
            .map(|key| (*key, env::var_os(key)))
            .collect();
        env::set_var(OVERWRITE_REPORTS_KEY, "false");
        env::set_var(REPORTS_DIR_KEY, "from_env");

        let settings = Settings::load(None, None);

        for (key, value) in previous {
            match value {
                Some(value) => env::set_var(key, value),
                None => env::remove_var(key),
            }
        }
        let settings = settings.unwrap();
        assert!(!settings.overwrite_reports);
        assert_eq!(settings.gauge_reports_dir, PathBuf::from("from_env"));
        assert!(name_generator(settings.overwrite_reports).is_some());
    }

    #[test]
    fn test_settings_file_and_override() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("settings.yml");
        fs::write(&file, "overwrite_reports: false\n").unwrap();

        let settings = Settings::load(Some(&file), Some(Path::new("custom"))).unwrap();

        assert!(!settings.overwrite_reports);
        assert_eq!(settings.gauge_reports_dir, PathBuf::from("custom"));
    }

    #[test]
    fn test_missing_settings_file_is_an_error() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("absent.yml");

        assert!(Settings::load(Some(&file), None).is_err());
    }
}
