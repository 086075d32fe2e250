//! Cardkey Client SDK.
//!
//! This crate provides a client library for services and tools that talk to
//! the cardkey API.
//!
//! # Example
//!
//! ```no_run
//! use cardkey_client::{CardKeyClient, IssueRequest};
//!
//! # async fn example() -> Result<(), cardkey_client::ClientError> {
//! let client = CardKeyClient::new("http://cardkey.internal:8000")?;
//!
//! let issued = client.issue_cards(&IssueRequest::new(10, "VIP", Some(30))).await?;
//!
//! let check = client.validate(&issued.keys[0]).await?;
//! if check.valid {
//!     let redeemed = client.submit_token(&issued.keys[0], "user-token-0001").await?;
//!     println!("Recorded at {}", redeemed.record.recorded_at);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod error;
mod types;

pub use client::{CardKeyClient, ClientOptions};
pub use error::ClientError;
pub use types::*;
