//! MongoDB adapter
//!
//! Implements [`DocumentStore`](crate::adapters::database::DocumentStore) on
//! top of the official `mongodb` driver.

pub mod client;

pub use client::MongoStore;
