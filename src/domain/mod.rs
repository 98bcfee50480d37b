//! Domain error types and the crate-wide result alias.
//!
//! All fallible operations return [`Result<T, AnonymizerError>`]. Every
//! error aborts the run.

pub mod errors;
pub mod result;

pub use errors::{AnonymizerError, StoreError};
pub use result::Result;
