//! Error types for the CryptoCompare client library.

use thiserror::Error;

use crate::gateway::CallKind;

/// The main error type for all CryptoCompare client operations.
#[derive(Error, Debug)]
pub enum CryptoCompareError {
    /// A caller-supplied parameter exceeds its published length ceiling
    #[error("The max character length of {field} is {max_length}")]
    InvalidParameter {
        /// Query parameter the offending value was destined for
        field: &'static str,
        /// Published ceiling for the parameter, in characters
        max_length: usize,
    },

    /// The server-reported call budget for this kind is exhausted
    #[error("No more {kind} calls are left, please try later")]
    OutOfCalls {
        /// Budget category that was exhausted
        kind: CallKind,
    },

    /// An HTTP round trip could not be completed (timeouts included)
    #[error("Connection failed: {0}")]
    Connectivity(#[from] reqwest_middleware::Error),

    /// A fetched response body did not match the expected shape
    #[error("Invalid response: {0}")]
    Deserialization(String),
}

impl From<reqwest::Error> for CryptoCompareError {
    fn from(err: reqwest::Error) -> Self {
        CryptoCompareError::Connectivity(reqwest_middleware::Error::Reqwest(err))
    }
}
