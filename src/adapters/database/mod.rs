//! Document store abstraction layer
//!
//! - [`traits`] - the [`DocumentStore`] trait
//! - [`factory`] - store creation from a connection string
//! - `memory` - in-memory implementation for tests (`test-util` feature)

pub mod factory;
#[cfg(any(test, feature = "test-util"))]
pub mod memory;
pub mod traits;

pub use factory::connect_store;
#[cfg(any(test, feature = "test-util"))]
pub use memory::InMemoryStore;
pub use traits::DocumentStore;
