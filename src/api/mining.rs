//! Mining contract and equipment endpoints.

use crate::Result;
use crate::api::read_json;
use crate::endpoints::mining;
use crate::gateway::{CallKind, RateGateway};
use crate::models::mining::{Contracts, Equipment};

/// Mining contract and equipment endpoints.
#[derive(Debug, Clone)]
pub struct Mining {
    gateway: RateGateway,
}

impl Mining {
    pub(crate) fn new(gateway: RateGateway) -> Self {
        Self { gateway }
    }

    /// Get all cloud mining contracts.
    pub async fn get_contracts(&self) -> Result<Contracts> {
        let url = format!("{}{}", self.gateway.site_api_url(), mining::CONTRACTS);
        let response = self.gateway.get_json(&url, CallKind::Other).await?;
        read_json(response).await
    }

    /// Get all mining hardware.
    pub async fn get_equipment(&self) -> Result<Equipment> {
        let url = format!("{}{}", self.gateway.site_api_url(), mining::EQUIPMENT);
        let response = self.gateway.get_json(&url, CallKind::Other).await?;
        read_json(response).await
    }
}
