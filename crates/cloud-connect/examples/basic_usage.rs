//! Basic usage example for the Cloud Connect SDK
//!
//! This example demonstrates:
//! - Creating a client with a user token
//! - Listing configurations and campaigns
//! - Error handling

use cloud_connect::{CloudConnectClient, Credentials};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let token = std::env::var("CLOUD_CONNECT_TOKEN")?;
    let client = CloudConnectClient::new(Credentials::from_user_token(token));

    println!("=== Configurations ===");
    match client.get_configurations().await {
        Ok(response) => println!("{}", response.body),
        Err(e) => eprintln!("Error fetching configurations: {e}"),
    }

    println!("\n=== Campaigns ===");
    let campaigns = client.get_campaigns().await?;
    println!("{}", campaigns.body);

    Ok(())
}
