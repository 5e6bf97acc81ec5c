//! Client SDK for the Munic Cloud Connect web API
//!
//! Covers device configurations, assets, asset groups and update campaigns.
//! Each operation builds an immutable request against the dashboard API,
//! attaches `Basic` authorization from the stored user token and returns a
//! normalized response or error.
//!
//! # Example
//!
//! ```no_run
//! use cloud_connect::{CloudConnectClient, Credentials};
//!
//! # async fn example() -> cloud_connect::Result<()> {
//! let client = CloudConnectClient::new(Credentials::from_user_token(
//!     "653638dc733afce75130303fe6e6010f63768af0",
//! ));
//!
//! let configurations = client.get_configurations().await?;
//! println!("{}", configurations.body);
//! # Ok(())
//! # }
//! ```

mod auth;
mod client;
mod credentials;
mod error;
pub mod request;

pub use auth::{BasicAuth, TokenEncoding};
pub use client::CloudConnectClient;
pub use cloud_connect_http::{
    ApiRequest, ApiRequestBuilder, ApiResponse, HttpClient, HttpError, Params, Verb,
};
pub use credentials::{Credentials, USER_TOKEN};
pub use error::{Error, Result};
