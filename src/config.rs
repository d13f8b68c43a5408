use crate::constants::{DEFAULT_HOST, DEFAULT_PORT};
use crate::services::route_validation::ValidationConfig;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub validation: ValidationConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        let defaults = ValidationConfig::default();

        let validation = ValidationConfig {
            max_deviation_km: env::var("MAX_DEVIATION_KM")
                .unwrap_or_else(|_| defaults.max_deviation_km.to_string())
                .parse()
                .map_err(|_| "Invalid MAX_DEVIATION_KM")?,

            direction_tolerance_deg: env::var("DIRECTION_TOLERANCE_DEG")
                .unwrap_or_else(|_| defaults.direction_tolerance_deg.to_string())
                .parse()
                .map_err(|_| "Invalid DIRECTION_TOLERANCE_DEG")?,

            min_overlap_pct: env::var("MIN_OVERLAP_PCT")
                .unwrap_or_else(|_| defaults.min_overlap_pct.to_string())
                .parse()
                .map_err(|_| "Invalid MIN_OVERLAP_PCT")?,
        };
        validation.validate()?;

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            validation,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "HOST",
            "PORT",
            "MAX_DEVIATION_KM",
            "DIRECTION_TOLERANCE_DEG",
            "MIN_OVERLAP_PCT",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_when_env_absent() {
        clear_env();

        let config = Config::from_env().unwrap();
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, 3000);
        assert_eq!(config.validation, ValidationConfig::default());
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        env::set_var("PORT", "8080");
        env::set_var("MAX_DEVIATION_KM", "5.0");
        env::set_var("DIRECTION_TOLERANCE_DEG", "30");

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.validation.max_deviation_km, 5.0);
        assert_eq!(config.validation.direction_tolerance_deg, 30.0);
        assert_eq!(config.server_address(), "0.0.0.0:8080");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_rejects_out_of_range_tunables() {
        clear_env();
        env::set_var("MIN_OVERLAP_PCT", "1.5");

        assert!(Config::from_env().is_err());

        clear_env();
    }
}
