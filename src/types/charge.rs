//! Charge request and response types
//!
//! These mirror the JSON shapes of the `/charges` endpoints. Response types
//! are purely structural: fields the API omits decode to their defaults, and
//! fields that can be null are `Option`s.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Outbound payload for creating a charge
///
/// `pricing_type` and `local_price` are required and validated locally before
/// any network activity; everything else is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeRequest {
    /// Buyer locale hint (e.g., "en")
    #[serde(rename = "Buyer_locale", skip_serializing_if = "Option::is_none")]
    pub buyer_locale: Option<String>,
    /// Pricing model, e.g. "fixed_price" or "no_price"
    pub pricing_type: String,
    /// Price in the merchant's local currency; required
    pub local_price: Option<LocalPrice>,
    /// Arbitrary merchant metadata echoed back on the charge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, Value>>,
    /// URL the buyer is sent to after a successful payment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    /// URL the buyer is sent to after cancelling checkout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
}

impl ChargeRequest {
    /// Create a charge request with the two required fields
    pub fn new(pricing_type: impl Into<String>, local_price: LocalPrice) -> Self {
        Self {
            buyer_locale: None,
            pricing_type: pricing_type.into(),
            local_price: Some(local_price),
            metadata: None,
            redirect_url: None,
            cancel_url: None,
        }
    }

    /// Set the buyer locale
    pub fn with_buyer_locale(mut self, locale: impl Into<String>) -> Self {
        self.buyer_locale = Some(locale.into());
        self
    }

    /// Attach merchant metadata
    pub fn with_metadata(mut self, metadata: HashMap<String, Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Set the post-payment redirect URL
    pub fn with_redirect_url(mut self, url: impl Into<String>) -> Self {
        self.redirect_url = Some(url.into());
        self
    }

    /// Set the checkout cancel URL
    pub fn with_cancel_url(mut self, url: impl Into<String>) -> Self {
        self.cancel_url = Some(url.into());
        self
    }

    /// Check the locally-verifiable required fields
    pub(crate) fn validate(&self) -> crate::Result<()> {
        if self.local_price.is_none() {
            return Err(crate::CommerceError::invalid_request(
                "LocalPrice is required for ChargeRequest",
            ));
        }
        if self.pricing_type.is_empty() {
            return Err(crate::CommerceError::invalid_request(
                "PricingType is required for ChargeRequest",
            ));
        }
        Ok(())
    }
}

/// An amount/currency pair in the merchant's local currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalPrice {
    /// Decimal amount as a string, e.g. "1.00"
    pub amount: String,
    /// ISO 4217 currency code, e.g. "USD"
    pub currency: String,
}

impl LocalPrice {
    /// Create a local price
    pub fn new(amount: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            currency: currency.into(),
        }
    }
}

/// Success envelope for charge operations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChargeResponse {
    /// The charge itself
    pub data: ChargeData,
}

/// A charge as returned by the API
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChargeData {
    pub brand_color: String,
    pub brand_logo_url: String,
    pub charge_kind: String,
    /// Short code usable in hosted checkout URLs
    pub code: String,
    /// Set once the payment is confirmed on chain
    pub confirmed_at: Option<String>,
    pub created_at: String,
    pub expires_at: String,
    /// Hosted checkout page for this charge
    pub hosted_url: String,
    pub id: String,
    pub organization_name: String,
    pub pricing: Pricing,
    pub pricing_type: String,
    pub redirects: Redirects,
    pub support_email: String,
    /// Status transitions, oldest first
    pub timeline: Vec<Timeline>,
    pub web3_data: Web3Data,
}

/// Local and settlement prices for a charge
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pricing {
    pub local: Price,
    pub settlement: Price,
}

/// An amount/currency pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Price {
    pub amount: String,
    pub currency: String,
}

/// Redirect configuration attached to a charge
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Redirects {
    pub cancel_url: String,
    pub success_url: String,
    pub will_redirect_after_success: bool,
}

/// One entry in a charge's status timeline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timeline {
    /// e.g. "NEW", "SIGNED", "COMPLETED"
    pub status: String,
    pub time: String,
}

/// On-chain payment details for a charge
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Web3Data {
    pub transfer_intent: TransferIntent,
    pub success_events: Vec<TransferEvent>,
    pub failure_events: Vec<Value>,
    /// Contract address per chain id
    pub contract_addresses: HashMap<String, String>,
}

/// Signed transfer intent for on-chain settlement
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferIntent {
    pub call_data: CallData,
    pub metadata: TransferMetadata,
}

/// Call data of a transfer intent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallData {
    pub deadline: String,
    pub fee_amount: String,
    pub id: String,
    pub operator: String,
    pub prefix: String,
    pub recipient: String,
    pub recipient_amount: String,
    pub recipient_currency: String,
    pub refund_destination: String,
    pub signature: String,
}

/// Chain metadata of a transfer intent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferMetadata {
    pub chain_id: i64,
    pub contract_address: String,
    pub sender: String,
}

/// A settled on-chain transfer observed for a charge
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferEvent {
    pub finalized: bool,
    pub input_token_address: String,
    pub input_token_amount: String,
    pub network_fee_paid: String,
    pub recipient: String,
    pub sender: String,
    pub timestamp: String,
    pub tx_hsh: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn charge_request_serializes_required_fields() {
        let request = ChargeRequest::new("fixed_price", LocalPrice::new("1.00", "USD"));
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["pricing_type"], "fixed_price");
        assert_eq!(body["local_price"]["amount"], "1.00");
        assert_eq!(body["local_price"]["currency"], "USD");
        // Unset optional fields stay off the wire
        assert!(body.get("metadata").is_none());
        assert!(body.get("redirect_url").is_none());
    }

    #[test]
    fn charge_request_builder_sets_optional_fields() {
        let request = ChargeRequest::new("fixed_price", LocalPrice::new("10.00", "EUR"))
            .with_redirect_url("https://example.com/thanks")
            .with_cancel_url("https://example.com/cancel");

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["redirect_url"], "https://example.com/thanks");
        assert_eq!(body["cancel_url"], "https://example.com/cancel");
    }

    #[test]
    fn charge_data_tolerates_sparse_bodies() {
        let body = json!({
            "id": "abc123",
            "hosted_url": "https://commerce.coinbase.com/charges/abc123"
        });

        let data: ChargeData = serde_json::from_value(body).unwrap();
        assert_eq!(data.id, "abc123");
        assert_eq!(
            data.hosted_url,
            "https://commerce.coinbase.com/charges/abc123"
        );
        assert!(data.confirmed_at.is_none());
        assert!(data.timeline.is_empty());
    }

    #[test]
    fn charge_data_decodes_nested_web3_data() {
        let body = json!({
            "id": "abc123",
            "web3_data": {
                "transfer_intent": {
                    "call_data": {
                        "recipient_amount": "1000000",
                        "recipient_currency": "USDC"
                    },
                    "metadata": {"chain_id": 8453, "sender": "0xsender"}
                },
                "contract_addresses": {"8453": "0xcontract"}
            }
        });

        let data: ChargeData = serde_json::from_value(body).unwrap();
        let intent = &data.web3_data.transfer_intent;
        assert_eq!(intent.call_data.recipient_amount, "1000000");
        assert_eq!(intent.metadata.chain_id, 8453);
        assert_eq!(
            data.web3_data.contract_addresses.get("8453").unwrap(),
            "0xcontract"
        );
    }
}
