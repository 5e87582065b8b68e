use std::sync::Arc;

use anyhow::Context;

use productapi_infra::{InMemoryProductStore, PostgresProductStore, ProductCatalog, ProductStore};

use crate::config::{AppConfig, StoreBackend};

pub type SharedStore = Arc<dyn ProductStore>;

/// Everything handlers need, shared behind an `Arc` extension.
pub struct AppServices {
    pub catalog: ProductCatalog<SharedStore>,
}

impl AppServices {
    pub fn new(store: SharedStore) -> Self {
        Self {
            catalog: ProductCatalog::new(store),
        }
    }
}

/// Wire the configured store into the catalog.
pub async fn build_services(config: &AppConfig) -> anyhow::Result<AppServices> {
    let store: SharedStore = match &config.store {
        StoreBackend::InMemory => {
            tracing::info!("using in-memory product store");
            Arc::new(InMemoryProductStore::new())
        }
        StoreBackend::Postgres { database_url } => {
            tracing::info!("using postgres product store");
            let store = PostgresProductStore::connect(database_url)
                .await
                .context("failed to connect to DATABASE_URL")?;
            Arc::new(store)
        }
    };

    Ok(AppServices::new(store))
}
