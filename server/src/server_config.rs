use std::time::Duration;
use common::config::Validate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE_NAME: &str = "snake_score_server.yaml";
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    pub listen_address: String,
    pub database: DatabaseConfig,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub max_connections: u32,
    pub acquire_timeout_ms: u64,
    /// Encrypt the connection without verifying the server certificate.
    pub require_tls: bool,
    #[serde(default)]
    pub create_table_if_missing: bool,
}

impl DatabaseConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_millis(self.acquire_timeout_ms)
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.listen_address.is_empty() {
            return Err("listen_address must not be empty".to_string());
        }
        self.database.validate()
    }
}

impl Validate for DatabaseConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_connections == 0 {
            return Err("database.max_connections must be greater than 0".to_string());
        }
        if self.acquire_timeout_ms == 0 {
            return Err("database.acquire_timeout_ms must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: "0.0.0.0:3000".to_string(),
            database: DatabaseConfig {
                max_connections: 10,
                acquire_timeout_ms: 5000,
                require_tls: true,
                create_table_if_missing: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{
        ConfigContentProvider, ConfigManager, FileContentConfigProvider, YamlConfigSerializer,
    };

    fn get_temp_file_path() -> std::path::PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_snake_score_server_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ServerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_missing_file_returns_default_config() {
        let manager: ConfigManager<_, ServerConfig, _> =
            ConfigManager::from_yaml_file("this_file_does_not_exist.yaml");

        assert_eq!(manager.get_config().unwrap(), ServerConfig::default());
    }

    #[test]
    fn test_config_is_read_from_yaml_file() {
        let content = r#"
listen_address: "127.0.0.1:8080"
database:
  max_connections: 4
  acquire_timeout_ms: 1000
  require_tls: false
"#;
        let path = get_temp_file_path();
        FileContentConfigProvider::new(path.clone())
            .set_config_content(content)
            .unwrap();

        let manager: ConfigManager<_, ServerConfig, _> = ConfigManager::new(
            FileContentConfigProvider::new(path.clone()),
            YamlConfigSerializer::new(),
        );
        let config = manager.get_config().unwrap();
        let _ = std::fs::remove_file(path);

        assert_eq!(config.listen_address, "127.0.0.1:8080");
        assert_eq!(config.database.max_connections, 4);
        assert!(!config.database.require_tls);
        assert!(!config.database.create_table_if_missing);
    }

    #[test]
    fn test_zero_pool_size_is_rejected() {
        let mut config = ServerConfig::default();
        config.database.max_connections = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_config_round_trips_through_yaml() {
        let yaml = serde_yaml_ng::to_string(&ServerConfig::default()).unwrap();
        let parsed: ServerConfig = serde_yaml_ng::from_str(&yaml).unwrap();

        assert_eq!(parsed, ServerConfig::default());
    }
}
