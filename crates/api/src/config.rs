//! Process configuration, read once at startup.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `API_KEY` | `dev-api-key` (with a warning) | Secret expected in `X-API-Key` |
//! | `BIND_ADDR` | `0.0.0.0:8080` | Listen address |
//! | `USE_PERSISTENT_STORES` | `false` | `true` selects Postgres |
//! | `DATABASE_URL` | — | Required when persistent |
//! | `AUTH_STRICT_DOCS_PATHS` | `false` | Disable the substring docs exemption |

use std::net::SocketAddr;

use anyhow::{Context, bail};

use productapi_auth::{ApiKey, PublicRoutes};

const DEV_API_KEY: &str = "dev-api-key";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Which product store backs the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    InMemory,
    Postgres { database_url: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: ApiKey,
    pub bind_addr: SocketAddr,
    pub store: StoreBackend,
    pub public_routes: PublicRoutes,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source (the environment in
    /// production, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let api_key = lookup("API_KEY").unwrap_or_else(|| {
            tracing::warn!("API_KEY not set; using insecure dev default");
            DEV_API_KEY.to_string()
        });
        let api_key = ApiKey::new(api_key).context("API_KEY is invalid")?;

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("BIND_ADDR must be a socket address like 0.0.0.0:8080")?;

        let store = if flag(&lookup, "USE_PERSISTENT_STORES") {
            match lookup("DATABASE_URL") {
                Some(database_url) => StoreBackend::Postgres { database_url },
                None => bail!("DATABASE_URL must be set when USE_PERSISTENT_STORES=true"),
            }
        } else {
            StoreBackend::InMemory
        };

        let public_routes = if flag(&lookup, "AUTH_STRICT_DOCS_PATHS") {
            PublicRoutes::strict()
        } else {
            PublicRoutes::loose()
        };

        Ok(Self {
            api_key,
            bind_addr,
            store,
            public_routes,
        })
    }

    /// In-memory config with the given key (dev/test).
    pub fn in_memory(api_key: &str) -> anyhow::Result<Self> {
        Ok(Self {
            api_key: ApiKey::new(api_key).context("api key is invalid")?,
            bind_addr: ([127, 0, 0, 1], 0).into(),
            store: StoreBackend::InMemory,
            public_routes: PublicRoutes::default(),
        })
    }
}

fn flag(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> bool {
    lookup(name)
        .map(|v| v.parse::<bool>().unwrap_or(false))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_to_in_memory_dev_setup() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert!(config.api_key.matches(Some(DEV_API_KEY)));
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(config.store, StoreBackend::InMemory);
        assert!(!config.public_routes.is_strict());
    }

    #[test]
    fn reads_every_variable() {
        let config = AppConfig::from_lookup(lookup(&[
            ("API_KEY", "prod-key"),
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("USE_PERSISTENT_STORES", "true"),
            ("DATABASE_URL", "postgres://localhost/products"),
            ("AUTH_STRICT_DOCS_PATHS", "true"),
        ]))
        .unwrap();

        assert!(config.api_key.matches(Some("prod-key")));
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(
            config.store,
            StoreBackend::Postgres {
                database_url: "postgres://localhost/products".to_string()
            }
        );
        assert!(config.public_routes.is_strict());
    }

    #[test]
    fn persistent_without_database_url_fails() {
        let err = AppConfig::from_lookup(lookup(&[("USE_PERSISTENT_STORES", "true")])).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn empty_api_key_fails() {
        assert!(AppConfig::from_lookup(lookup(&[("API_KEY", "")])).is_err());
    }

    #[test]
    fn unparsable_flags_are_false() {
        let config = AppConfig::from_lookup(lookup(&[("USE_PERSISTENT_STORES", "yes")])).unwrap();
        assert_eq!(config.store, StoreBackend::InMemory);
    }
}
