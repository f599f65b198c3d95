//! Beer catalog domain module.
//!
//! This crate contains the business rules for the stock catalog: the `Beer`
//! record, the storage capability trait, and the validation/mutation service.
//! No IO and no HTTP live here; storage is injected through [`BeerStore`].

pub mod beer;
pub mod service;
pub mod store;

pub use beer::{Beer, BeerStyle, NewBeer};
pub use service::{StockError, StockResult, StockService};
pub use store::{BeerStore, StoreError};
