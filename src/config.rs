use crate::adapters::outbound::DEFAULT_DISTANCE_MATRIX_URL;
use crate::domain::services::DEFAULT_MAPS_DIR_URL;
use crate::domain::value_objects::TravelMode;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    // HTTP API settings
    pub listen_addr: String,
    pub debug: bool,

    // Distance provider settings
    pub api_key: Option<String>,
    pub distance_matrix_url: String,
    pub travel_mode: TravelMode,
    pub request_timeout_secs: u64,

    // Route link settings
    pub maps_dir_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:5000".to_string(),
            debug: false,
            api_key: None,
            distance_matrix_url: DEFAULT_DISTANCE_MATRIX_URL.to_string(),
            travel_mode: TravelMode::Driving,
            request_timeout_secs: 15,
            maps_dir_url: DEFAULT_MAPS_DIR_URL.to_string(),
        }
    }
}

impl Config {
    /// Get the provider API key, failing when it is not configured.
    pub fn require_api_key(&self) -> anyhow::Result<&str> {
        match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => anyhow::bail!("GOOGLE_MAPS_API_KEY not set in environment or .env file"),
        }
    }
}

pub fn load_config() -> anyhow::Result<Config> {
    let listen_addr = std::env::var("ROUTE_RANKER_LISTEN_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:5000".to_string());

    let debug = std::env::var("DEBUG").is_ok();

    let api_key = std::env::var("GOOGLE_MAPS_API_KEY").ok();

    let distance_matrix_url = std::env::var("ROUTE_RANKER_DISTANCE_MATRIX_URL")
        .unwrap_or_else(|_| DEFAULT_DISTANCE_MATRIX_URL.to_string());

    let travel_mode = std::env::var("ROUTE_RANKER_TRAVEL_MODE")
        .map(|v| TravelMode::from_str(&v))
        .unwrap_or_default();

    let request_timeout_secs = std::env::var("ROUTE_RANKER_REQUEST_TIMEOUT_SECS")
        .unwrap_or_else(|_| "15".to_string())
        .parse()
        .unwrap_or(15);

    let maps_dir_url = std::env::var("ROUTE_RANKER_MAPS_DIR_URL")
        .unwrap_or_else(|_| DEFAULT_MAPS_DIR_URL.to_string());

    Ok(Config {
        listen_addr,
        debug,
        api_key,
        distance_matrix_url,
        travel_mode,
        request_timeout_secs,
        maps_dir_url,
    })
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    // Each test owns the variables it touches; tests run in parallel.

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.listen_addr, "0.0.0.0:5000");
        assert_eq!(cfg.travel_mode, TravelMode::Driving);
        assert_eq!(cfg.request_timeout_secs, 15);
        assert_eq!(
            cfg.distance_matrix_url,
            "https://maps.googleapis.com/maps/api/distancematrix/json"
        );
        assert_eq!(cfg.maps_dir_url, "https://www.google.com/maps/dir/");
        assert!(cfg.api_key.is_none());
        assert!(!cfg.debug);
    }

    #[test]
    fn test_config_clone() {
        let cfg = Config::default();
        let cloned = cfg.clone();
        assert_eq!(cfg.listen_addr, cloned.listen_addr);
        assert_eq!(cfg.maps_dir_url, cloned.maps_dir_url);
    }

    #[test]
    fn test_config_debug() {
        let cfg = Config::default();
        let debug_str = format!("{:?}", cfg);
        assert!(debug_str.contains("listen_addr"));
        assert!(debug_str.contains("0.0.0.0:5000"));
    }

    #[test]
    fn test_require_api_key() {
        let mut cfg = Config::default();
        assert!(cfg.require_api_key().is_err());

        cfg.api_key = Some("   ".to_string());
        assert!(cfg.require_api_key().is_err());

        cfg.api_key = Some("abc123".to_string());
        assert_eq!(cfg.require_api_key().unwrap(), "abc123");
    }

    #[test]
    fn test_missing_api_key_message() {
        let err = Config::default().require_api_key().unwrap_err();
        assert!(err.to_string().contains("GOOGLE_MAPS_API_KEY"));
    }

    #[test]
    fn test_load_config_with_custom_listen_addr() {
        std::env::set_var("ROUTE_RANKER_LISTEN_ADDR", "127.0.0.1:9000");
        let cfg = load_config().unwrap();
        assert_eq!(cfg.listen_addr, "127.0.0.1:9000");
        std::env::remove_var("ROUTE_RANKER_LISTEN_ADDR");
    }

    #[test]
    fn test_load_config_with_api_key() {
        std::env::set_var("GOOGLE_MAPS_API_KEY", "AIza-test");
        let cfg = load_config().unwrap();
        assert_eq!(cfg.api_key, Some("AIza-test".to_string()));
        std::env::remove_var("GOOGLE_MAPS_API_KEY");
    }

    #[test]
    fn test_load_config_with_travel_mode() {
        std::env::set_var("ROUTE_RANKER_TRAVEL_MODE", "Bicycling");
        let cfg = load_config().unwrap();
        assert_eq!(cfg.travel_mode, TravelMode::Bicycling);
        std::env::remove_var("ROUTE_RANKER_TRAVEL_MODE");
    }

    #[test]
    fn test_load_config_with_urls() {
        std::env::set_var("ROUTE_RANKER_DISTANCE_MATRIX_URL", "http://localhost:9999/matrix");
        std::env::set_var("ROUTE_RANKER_MAPS_DIR_URL", "https://maps.example/dir/");
        let cfg = load_config().unwrap();
        assert_eq!(cfg.distance_matrix_url, "http://localhost:9999/matrix");
        assert_eq!(cfg.maps_dir_url, "https://maps.example/dir/");
        std::env::remove_var("ROUTE_RANKER_DISTANCE_MATRIX_URL");
        std::env::remove_var("ROUTE_RANKER_MAPS_DIR_URL");
    }

    #[test]
    fn test_load_config_with_timeout() {
        std::env::set_var("ROUTE_RANKER_REQUEST_TIMEOUT_SECS", "30");
        let cfg = load_config().unwrap();
        assert_eq!(cfg.request_timeout_secs, 30);

        std::env::set_var("ROUTE_RANKER_REQUEST_TIMEOUT_SECS", "not_a_number");
        let cfg = load_config().unwrap();
        assert_eq!(cfg.request_timeout_secs, 15); // default
        std::env::remove_var("ROUTE_RANKER_REQUEST_TIMEOUT_SECS");
    }

    #[test]
    fn test_load_config_with_debug() {
        std::env::set_var("DEBUG", "1");
        let cfg = load_config().unwrap();
        assert!(cfg.debug);
        std::env::remove_var("DEBUG");
    }
}
