//! HTTP layer for the Cloud Connect Web API client
//!
//! This crate provides the building blocks the SDK crate drives: an immutable
//! request descriptor ([`ApiRequest`]) with a chainable builder, and an
//! [`HttpClient`] that dispatches a descriptor through `reqwest` and
//! normalizes every outcome into either an [`ApiResponse`] or an
//! [`HttpError`].
//!
//! # Example
//!
//! ```no_run
//! use cloud_connect_http::{ApiRequestBuilder, HttpClient, Verb};
//!
//! async fn example() -> cloud_connect_http::Result<()> {
//!     let request = ApiRequestBuilder::new()
//!         .scheme("https")
//!         .host("api.example.com")
//!         .port(443)
//!         .version("v2")
//!         .path("/configurations")
//!         .build();
//!
//!     let response = HttpClient::new().dispatch(Verb::Get, &request).await?;
//!     println!("{}", response.status);
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod request;
mod response;

pub use client::{HttpClient, Verb};
pub use error::{HttpError, Result};
pub use request::{ApiRequest, ApiRequestBuilder, Params};
pub use response::ApiResponse;
