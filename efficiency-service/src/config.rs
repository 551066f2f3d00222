use serde::Deserialize;
use std::fs;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub http_bind_addr: String,
}

/// Inputs used when a request or scenario leaves them out.
///
/// Six hours a day at a rate of 7 per kWh unless configured otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AnalysisDefaults {
    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: f64,
    #[serde(default = "default_electricity_rate")]
    pub electricity_rate: f64,
}

fn default_hours_per_day() -> f64 {
    6.0
}

fn default_electricity_rate() -> f64 {
    7.0
}

impl Default for AnalysisDefaults {
    fn default() -> Self {
        Self {
            hours_per_day: default_hours_per_day(),
            electricity_rate: default_electricity_rate(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    pub bind_addr: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub defaults: AnalysisDefaults,
    pub metrics: Option<MetricsConfig>,
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        use std::env;

        let path = env::var("EFFICIENCY_CONFIG").unwrap_or_else(|_| "efficiency-config.toml".to_string());
        let contents = fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("failed to read config file '{path}': {e}"))?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let cfg: AppConfig = toml::from_str(contents)?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_config_parses() {
        let cfg = AppConfig::from_toml_str(
            r#"
            [server]
            http_bind_addr = "127.0.0.1:8080"

            [defaults]
            hours_per_day = 10
            electricity_rate = 4.5

            [metrics]
            bind_addr = "127.0.0.1:9100"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.server.http_bind_addr, "127.0.0.1:8080");
        assert_eq!(cfg.defaults.hours_per_day, 10.0);
        assert_eq!(cfg.defaults.electricity_rate, 4.5);
        assert_eq!(cfg.metrics.unwrap().bind_addr, "127.0.0.1:9100");
    }

    #[test]
    fn defaults_and_metrics_are_optional() {
        let cfg = AppConfig::from_toml_str(
            r#"
            [server]
            http_bind_addr = "0.0.0.0:8080"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.defaults, AnalysisDefaults::default());
        assert_eq!(cfg.defaults.hours_per_day, 6.0);
        assert_eq!(cfg.defaults.electricity_rate, 7.0);
        assert!(cfg.metrics.is_none());
    }

    #[test]
    fn partial_defaults_fill_the_rest() {
        let cfg = AppConfig::from_toml_str(
            r#"
            [server]
            http_bind_addr = "0.0.0.0:8080"

            [defaults]
            electricity_rate = 12.0
            "#,
        )
        .unwrap();

        assert_eq!(cfg.defaults.hours_per_day, 6.0);
        assert_eq!(cfg.defaults.electricity_rate, 12.0);
    }

    #[test]
    fn missing_server_section_is_an_error() {
        assert!(AppConfig::from_toml_str("").is_err());
    }
}
