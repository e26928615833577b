//! # Coinbase Commerce Rust Client
//!
//! A **type-safe** Rust client for the Coinbase Commerce REST API: create and
//! retrieve charges, and list the events describing their lifecycle.
//!
//! ## Features
//!
//! - 💳 **Charges**: Create payable invoices and retrieve them by id or code
//! - 📡 **Events**: List and fetch charge lifecycle events with pagination cursors
//! - 🔒 **Type safety**: Strongly typed request/response models with comprehensive error handling
//! - 🧪 **Testable**: Per-instance base URL override for sandbox and mock endpoints
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rust_commerce::{ChargeRequest, CommerceClient, Credentials, LocalPrice};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads COMMERCE_API_KEY from the environment
//!     let credentials = Credentials::from_default_env()?;
//!     let client = CommerceClient::new(credentials)?;
//!
//!     let charge = client
//!         .create_charge(&ChargeRequest::new(
//!             "fixed_price",
//!             LocalPrice::new("1.00", "USD"),
//!         ))
//!         .await?;
//!
//!     println!("charge created");
//!     println!("  id: {}", charge.data.id);
//!     println!("  hosted_url: {}", charge.data.hosted_url);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T>`]. Server-side rejections carry the
//! decoded error envelope in [`CommerceError::Api`]; local failures
//! (validation, transport, JSON decoding, missing credentials) use the other
//! variants, so the two are never conflated:
//!
//! ```rust,no_run
//! # use rust_commerce::{CommerceClient, CommerceError};
//! # async fn example(client: CommerceClient) {
//! match client.get_charge("abc123").await {
//!     Ok(charge) => println!("status: {:?}", charge.data.timeline.last()),
//!     Err(CommerceError::Api(envelope)) => {
//!         eprintln!("rejected by the API: {}", envelope)
//!     }
//!     Err(other) => eprintln!("local failure: {}", other),
//! }
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **`types`**: Request/response data structures and the error envelope
//! - **`client`**: HTTP transport, header injection, and response classification
//! - **`charges`**: Charge create/get operations
//! - **`events`**: Event list/get operations
//! - **`credentials`**: API key loading from the environment
//! - **`error`**: The two-family error type
//!
//! ## Cancellation and Timeouts
//!
//! Calls are plain futures issuing a single request each, with no internal
//! retries. Configure a per-client deadline with
//! [`ClientConfig::with_timeout`], or race an individual call against
//! `tokio::time::timeout`; dropping the future aborts the in-flight request.

pub mod charges;
pub mod client;
pub mod credentials;
pub mod error;
pub mod events;
pub mod types;

// Re-exports for convenience
pub use client::{ClientConfig, CommerceClient, API_VERSION, DEFAULT_BASE_URL};
pub use credentials::{Credentials, API_KEY_ENV};
pub use error::{CommerceError, Result};
pub use types::*;

/// Current version of this library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
