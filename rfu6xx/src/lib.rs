// rfu6xx/src/lib.rs

//! rfu6xx
//!
//! Client adapter for SICK RFU6xx RFID readers over OPC UA: resolves the
//! reader's node ids at start-up, encodes the vendor extension objects and
//! enforces the device-status preconditions of the scan methods.
#![warn(missing_docs)]

pub mod config;
pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod resolver;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the value types in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
