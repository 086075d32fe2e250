//! Cardkey HTTP API Service.
//!
//! This crate provides the HTTP API over the card service, including:
//!
//! - Card key validation
//! - Token redemption
//! - Batch card issuance and listing
//! - Static front-end and liveness probe
//!
//! The API performs no authentication; deploy it behind whatever gateway
//! controls who may issue cards.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Handlers call the synchronous card service

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use extract::ApiJson;
pub use routes::create_router;
pub use state::{AppState, Cards};
