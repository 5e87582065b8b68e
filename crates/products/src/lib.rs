//! Products domain module.
//!
//! This crate contains business rules for the product catalog, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod draft;
pub mod price;
pub mod product;

pub use draft::{MAX_DESCRIPTION_LEN, MAX_NAME_LEN, ProductDraft};
pub use price::Price;
pub use product::Product;
