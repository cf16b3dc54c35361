//! Response types for the CryptoCompare REST API.
//!
//! Each submodule mirrors one endpoint group. All types deserialize
//! directly from the wire format, including the all-caps ticker keys
//! the aggregation endpoints use.

pub mod coin;
pub mod exchanges;
pub mod historic;
pub mod market;
pub mod mining;
pub mod news;
pub mod social;
