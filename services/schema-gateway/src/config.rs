use anyhow::{Context, Result};
use reqwest::Url;
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_REGISTRY_URL: &str = "http://localhost:8081";
pub const DEFAULT_REGISTRY_TIMEOUT_MS: u64 = 5_000;

// Gateway configuration sourced from environment variables, optionally
// overridden by a YAML file.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub bind_addr: SocketAddr,
    pub metrics_bind: SocketAddr,
    pub registry_url: Url,
    pub registry_timeout_ms: u64,
}

#[derive(Debug, Deserialize)]
struct GatewayConfigOverride {
    bind_addr: Option<String>,
    metrics_bind: Option<String>,
    registry_url: Option<String>,
    registry_timeout_ms: Option<u64>,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self> {
        let bind_addr = std::env::var("SCHEMA_GATEWAY_BIND")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .with_context(|| "parse SCHEMA_GATEWAY_BIND")?;
        let metrics_bind = std::env::var("SCHEMA_GATEWAY_METRICS_BIND")
            .unwrap_or_else(|_| "0.0.0.0:9090".to_string())
            .parse()
            .with_context(|| "parse SCHEMA_GATEWAY_METRICS_BIND")?;
        let registry_url = std::env::var("SCHEMA_GATEWAY_REGISTRY_URL")
            .unwrap_or_else(|_| DEFAULT_REGISTRY_URL.to_string())
            .parse()
            .with_context(|| "parse SCHEMA_GATEWAY_REGISTRY_URL")?;
        let registry_timeout_ms = match std::env::var("SCHEMA_GATEWAY_REGISTRY_TIMEOUT_MS") {
            Ok(value) => value
                .parse()
                .with_context(|| "parse SCHEMA_GATEWAY_REGISTRY_TIMEOUT_MS")?,
            Err(_) => DEFAULT_REGISTRY_TIMEOUT_MS,
        };
        Ok(Self {
            bind_addr,
            metrics_bind,
            registry_url,
            registry_timeout_ms,
        })
    }

    pub fn from_env_or_yaml() -> Result<Self> {
        let mut config = Self::from_env()?;
        if let Ok(path) = std::env::var("SCHEMA_GATEWAY_CONFIG") {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("read SCHEMA_GATEWAY_CONFIG: {path}"))?;
            config.apply_yaml(&contents)?;
        }
        Ok(config)
    }

    fn apply_yaml(&mut self, contents: &str) -> Result<()> {
        let override_cfg: GatewayConfigOverride =
            serde_yaml::from_str(contents).with_context(|| "parse gateway config yaml")?;
        if let Some(value) = override_cfg.bind_addr {
            self.bind_addr = value.parse().with_context(|| "parse bind_addr")?;
        }
        if let Some(value) = override_cfg.metrics_bind {
            self.metrics_bind = value.parse().with_context(|| "parse metrics_bind")?;
        }
        if let Some(value) = override_cfg.registry_url {
            self.registry_url = value.parse().with_context(|| "parse registry_url")?;
        }
        if let Some(value) = override_cfg.registry_timeout_ms {
            self.registry_timeout_ms = value;
        }
        Ok(())
    }

    pub fn registry_timeout(&self) -> Duration {
        Duration::from_millis(self.registry_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 5] = [
        "SCHEMA_GATEWAY_BIND",
        "SCHEMA_GATEWAY_METRICS_BIND",
        "SCHEMA_GATEWAY_REGISTRY_URL",
        "SCHEMA_GATEWAY_REGISTRY_TIMEOUT_MS",
        "SCHEMA_GATEWAY_CONFIG",
    ];

    fn clear_env() {
        for key in VARS {
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    #[test]
    #[serial]
    fn defaults_without_env() {
        clear_env();
        let config = GatewayConfig::from_env_or_yaml().expect("config");
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.metrics_bind, "0.0.0.0:9090".parse().unwrap());
        assert_eq!(config.registry_url.as_str(), "http://localhost:8081/");
        assert_eq!(config.registry_timeout(), Duration::from_secs(5));
    }

    #[test]
    #[serial]
    fn env_overrides_defaults() {
        clear_env();
        unsafe {
            std::env::set_var("SCHEMA_GATEWAY_BIND", "127.0.0.1:18080");
            std::env::set_var("SCHEMA_GATEWAY_REGISTRY_URL", "http://registry:8081");
            std::env::set_var("SCHEMA_GATEWAY_REGISTRY_TIMEOUT_MS", "250");
        }
        let config = GatewayConfig::from_env().expect("config");
        clear_env();
        assert_eq!(config.bind_addr, "127.0.0.1:18080".parse().unwrap());
        assert_eq!(config.registry_url.host_str(), Some("registry"));
        assert_eq!(config.registry_timeout_ms, 250);
    }

    #[test]
    #[serial]
    fn invalid_env_value_is_reported() {
        clear_env();
        unsafe {
            std::env::set_var("SCHEMA_GATEWAY_REGISTRY_TIMEOUT_MS", "soon");
        }
        let err = GatewayConfig::from_env().expect_err("invalid timeout");
        clear_env();
        assert!(err.to_string().contains("SCHEMA_GATEWAY_REGISTRY_TIMEOUT_MS"));
    }

    #[test]
    #[serial]
    fn yaml_overrides_env() {
        clear_env();
        let mut config = GatewayConfig::from_env().expect("config");
        config
            .apply_yaml(
                "bind_addr: 127.0.0.1:7000\nregistry_url: https://sr.internal/api\nregistry_timeout_ms: 1500\n",
            )
            .expect("yaml");
        assert_eq!(config.bind_addr, "127.0.0.1:7000".parse().unwrap());
        assert_eq!(config.metrics_bind, "0.0.0.0:9090".parse().unwrap());
        assert_eq!(config.registry_url.as_str(), "https://sr.internal/api");
        assert_eq!(config.registry_timeout_ms, 1500);
    }

    #[test]
    fn yaml_with_bad_address_fails() {
        let mut config = GatewayConfig {
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            metrics_bind: "127.0.0.1:0".parse().unwrap(),
            registry_url: DEFAULT_REGISTRY_URL.parse().unwrap(),
            registry_timeout_ms: DEFAULT_REGISTRY_TIMEOUT_MS,
        };
        let err = config
            .apply_yaml("metrics_bind: not-an-addr\n")
            .expect_err("bad addr");
        assert!(err.to_string().contains("metrics_bind"));
    }
}
