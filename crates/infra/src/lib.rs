//! Infrastructure layer: product persistence and the catalog orchestration on top of it.

pub mod catalog;
pub mod store;

pub use catalog::{CatalogError, ProductCatalog};
pub use store::{InMemoryProductStore, PostgresProductStore, ProductStore, StoreError};
