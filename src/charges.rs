//! Charge operations
//!
//! # Examples
//!
//! ```no_run
//! use rust_commerce::{ChargeRequest, CommerceClient, Credentials, LocalPrice};
//!
//! # async fn example() -> rust_commerce::Result<()> {
//! let client = CommerceClient::new(Credentials::from_default_env()?)?;
//!
//! let charge = client
//!     .create_charge(&ChargeRequest::new(
//!         "fixed_price",
//!         LocalPrice::new("1.00", "USD"),
//!     ))
//!     .await?;
//! println!("pay at {}", charge.data.hosted_url);
//! # Ok(())
//! # }
//! ```

use reqwest::Method;

use crate::client::CommerceClient;
use crate::types::{ChargeRequest, ChargeResponse};
use crate::Result;

/// Path of the charges endpoint
pub(crate) const CHARGES_ENDPOINT: &str = "/charges";

impl CommerceClient {
    /// Create a charge
    ///
    /// `pricing_type` and `local_price` are validated locally; a missing
    /// required field fails with
    /// [`CommerceError::InvalidRequest`](crate::CommerceError::InvalidRequest)
    /// before any network activity.
    pub async fn create_charge(&self, charge: &ChargeRequest) -> Result<ChargeResponse> {
        charge.validate()?;

        let body = serde_json::to_vec(charge)?;
        let request = self.request(Method::POST, CHARGES_ENDPOINT).body(body);
        self.execute(request).await
    }

    /// Retrieve a charge by id or short code
    pub async fn get_charge(&self, charge_id: &str) -> Result<ChargeResponse> {
        let path = format!("{}/{}", CHARGES_ENDPOINT, charge_id);
        self.execute(self.request(Method::GET, &path)).await
    }
}
