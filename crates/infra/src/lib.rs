//! Infrastructure: concrete storage backends for the catalog.

pub mod memory;

pub use memory::InMemoryBeerStore;

#[cfg(test)]
mod integration_tests;
