//! Create a fixed-price charge and print its hosted checkout URL
//!
//! ```sh
//! COMMERCE_API_KEY=... cargo run --example create_charge
//! ```

use std::time::Duration;

use rust_commerce::{ChargeRequest, ClientConfig, CommerceClient, Credentials, LocalPrice};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let credentials = Credentials::from_default_env()?;
    let client = CommerceClient::with_config(
        credentials,
        ClientConfig::new().with_timeout(Duration::from_secs(5)),
    )?;

    let charge = client
        .create_charge(&ChargeRequest::new(
            "fixed_price",
            LocalPrice::new("1.00", "USD"),
        ))
        .await?;

    println!("charge created");
    println!("  id: {}", charge.data.id);
    println!("  hosted_url: {}", charge.data.hosted_url);

    Ok(())
}
