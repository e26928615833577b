//! Core types for the Commerce API
//!
//! This module defines the data structures exchanged with the Commerce REST
//! API. All of them are plain serde-mapped records mirroring the remote JSON
//! schema; none carry behavior beyond serialization and the two required-field
//! checks on [`ChargeRequest`].
//!
//! # Organization
//!
//! - [`charge`] - Charge request/response payloads and the web3 payment tree
//! - [`event`] - Event listing/detail payloads and pagination cursors
//! - [`envelope`] - The structured error envelope returned on non-2xx
//!
//! # Examples
//!
//! ```
//! use rust_commerce::types::{ChargeRequest, LocalPrice};
//!
//! let request = ChargeRequest::new("fixed_price", LocalPrice::new("1.00", "USD"))
//!     .with_redirect_url("https://example.com/thanks");
//! assert_eq!(request.pricing_type, "fixed_price");
//! ```

pub mod charge;
pub mod envelope;
pub mod event;

// Re-export commonly used types
pub use charge::{
    CallData, ChargeData, ChargeRequest, ChargeResponse, LocalPrice, Price, Pricing, Redirects,
    Timeline, TransferEvent, TransferIntent, TransferMetadata, Web3Data,
};
pub use envelope::{ApiErrorDetail, ChargeError};
pub use event::{DetailedData, EventData, EventDetailResponse, EventResponse, Pagination};
