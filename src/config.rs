use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub gateway: GatewayConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: "./logs".to_string(),
            log_file: "order_gateway.log".to_string(),
            use_json: false,
            rotation: "daily".to_string(),
            gateway: GatewayConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
        }
    }
}

impl AppConfig {
    /// Load `config/{env}.yaml`; falls back to defaults when the file
    /// is missing so the binary runs out of the box.
    pub fn load(env: &str) -> anyhow::Result<Self> {
        let config_path = format!("config/{}.yaml", env);
        match fs::read_to_string(&config_path) {
            Ok(content) => serde_yaml::from_str(&content)
                .map_err(|e| anyhow::anyhow!("failed to parse {}: {}", config_path, e)),
            Err(_) => {
                tracing::warn!("config file {} not found, using defaults", config_path);
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.gateway.port, 8080);
        assert_eq!(cfg.rotation, "daily");
    }

    #[test]
    fn config_parses_from_yaml() {
        let yaml = r#"
log_level: "debug"
log_dir: "./logs"
log_file: "gw.log"
use_json: true
rotation: "hourly"
gateway:
  host: "127.0.0.1"
  port: 9090
"#;
        let cfg: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.log_level, "debug");
        assert!(cfg.use_json);
        assert_eq!(cfg.gateway.host, "127.0.0.1");
        assert_eq!(cfg.gateway.port, 9090);
    }
}
