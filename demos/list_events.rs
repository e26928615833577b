//! List recent charge events
//!
//! ```sh
//! COMMERCE_API_KEY=... cargo run --example list_events
//! ```

use std::time::Duration;

use rust_commerce::{ClientConfig, CommerceClient, Credentials};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let credentials = Credentials::from_default_env()?;
    let client = CommerceClient::with_config(
        credentials,
        ClientConfig::new().with_timeout(Duration::from_secs(5)),
    )?;

    let events = client.list_events().await?;
    println!(
        "{} of {} events (order: {})",
        events.pagination.yielded, events.pagination.total, events.pagination.order
    );

    for event in &events.data {
        println!("{}  {:25} charge {}", event.created_at, event.r#type, event.data.id);
    }

    if let Some(cursor) = &events.pagination.ending_before {
        println!("next page cursor: {}", cursor);
    }

    Ok(())
}
