//! # CryptoCompare Client
//!
//! An async Rust client library for the CryptoCompare market data REST API.
//!
//! ## Features
//!
//! - Typed access to the coin, historic, market, exchange, mining, news and
//!   social endpoint groups
//! - Call admissibility checked against the server-reported remaining budget
//!   before every metered request
//! - Strong typing for all response payloads
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cryptocompare_api_client::CryptoCompare;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = CryptoCompare::new();
//!     let prices = api.market.get_price("BTC", "USD,EUR", None).await?;
//!     println!("BTC: {:?}", prices);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod endpoints;
pub mod error;
pub mod gateway;
pub mod models;

// Re-export commonly used types at crate root
pub use api::CryptoCompare;
pub use error::CryptoCompareError;
pub use gateway::{CallKind, RateGateway, TimeWindow};

/// Result type alias using CryptoCompareError
pub type Result<T> = std::result::Result<T, CryptoCompareError>;
