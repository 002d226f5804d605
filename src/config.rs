use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub session: SessionConfig,
    pub limits: LimitsConfig,
    pub economy: EconomyConfig,
    pub energy: EnergyConfig,
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            static_dir: "static".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub secure: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "session".to_string(),
            secure: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LimitsConfig {
    pub max_body_bytes: usize,  // form posts only, 16KB
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self { max_body_bytes: 16 * 1024 }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EconomyConfig {
    pub order_cost: u64,
    pub subscribers_per_order: u32,
    pub coins_per_tap: u64,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            order_cost: 50,
            subscribers_per_order: 5,
            coins_per_tap: 1,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EnergyConfig {
    pub max: u32,
    pub per_second: u32,
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self { max: 100, per_second: 1 }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DashboardMode {
    #[default]
    Tasks,
    Energy,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct DashboardConfig {
    pub mode: DashboardMode,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_published_economy() {
        let config = Config::default();
        assert_eq!(config.economy.order_cost, 50);
        assert_eq!(config.economy.subscribers_per_order, 5);
        assert_eq!(config.energy.max, 100);
        assert_eq!(config.energy.per_second, 1);
        assert_eq!(config.dashboard.mode, DashboardMode::Tasks);
    }

    #[test]
    fn partial_sources_fill_in_defaults() {
        let config: Config = config::Config::builder()
            .set_override("server.port", 8080)
            .unwrap()
            .set_override("dashboard.mode", "energy")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.dashboard.mode, DashboardMode::Energy);
        assert_eq!(config.economy.order_cost, 50);
    }
}
