use crate::error::{CropcastError, Result};
use dialoguer::Input;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub farm: FarmConfig,
}

/// Default location used by `predict` when no coordinates are given on
/// the command line.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FarmConfig {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(CropcastError::Config(format!(
                "Config file not found at {:?}. Run `cropcast init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| CropcastError::Config(format!("Failed to read config: {}", e)))?;

        // Substitute environment variables
        let config_str = Self::substitute_env_vars(&config_str);

        let config: Config = serde_yaml::from_str(&config_str)
            .map_err(|e| CropcastError::Config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        // Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("cropcast").join("config.yaml");
            if xdg_config.exists() {
                return Ok(xdg_config);
            }
        }

        // Return XDG path as the default (will trigger "not found" in load)
        let default_path = dirs::config_dir()
            .ok_or_else(|| CropcastError::Config("Cannot determine config directory".into()))?
            .join("cropcast")
            .join("config.yaml");
        Ok(default_path)
    }

    /// Default path for writing new config files (~/.config/cropcast/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CropcastError::Config("Cannot determine config directory".into()))?
            .join("cropcast");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the loaded Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up your farm profile!");
        println!();

        let farm_name: String = Input::new()
            .with_prompt("  Farm name")
            .default("Main Farm".into())
            .interact_text()
            .map_err(|e| CropcastError::Config(format!("Input error: {}", e)))?;

        let latitude: f64 = Input::new()
            .with_prompt("  Latitude (decimal degrees)")
            .default(28.61)
            .interact_text()
            .map_err(|e| CropcastError::Config(format!("Input error: {}", e)))?;

        let longitude: f64 = Input::new()
            .with_prompt("  Longitude (decimal degrees)")
            .default(77.21)
            .interact_text()
            .map_err(|e| CropcastError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            farm: FarmConfig {
                name: farm_name,
                latitude,
                longitude,
            },
        };

        // Write to default config path
        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| CropcastError::Config(format!("Failed to serialize config: {}", e)))?;

        // Write with a header comment
        let content = format!(
            "# Cropcast Configuration\n# Generated by `cropcast init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            farm: FarmConfig {
                name: "Main Farm".into(),
                latitude: 28.61,
                longitude: 77.21,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_yaml() {
        let yaml = "farm:\n  name: Test Farm\n  latitude: 12.97\n  longitude: 77.59\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.farm.name, "Test Farm");
        assert_eq!(config.farm.latitude, 12.97);
        assert_eq!(config.farm.longitude, 77.59);
    }

    #[test]
    fn yaml_round_trip() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.farm.name, config.farm.name);
        assert_eq!(parsed.farm.latitude, config.farm.latitude);
    }

    #[test]
    fn substitute_env_vars_replaces_known_vars() {
        std::env::set_var("CROPCAST_TEST_FARM", "Envy Acres");
        let content = "farm:\n  name: ${CROPCAST_TEST_FARM}\n";
        let substituted = Config::substitute_env_vars(content);
        assert!(substituted.contains("Envy Acres"));
        std::env::remove_var("CROPCAST_TEST_FARM");
    }

    #[test]
    fn substitute_env_vars_leaves_unknown_vars() {
        let content = "name: ${DEFINITELY_NOT_SET_ANYWHERE_12345}";
        let substituted = Config::substitute_env_vars(content);
        assert_eq!(substituted, content);
    }
}
