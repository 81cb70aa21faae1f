//! # heroku-core
//!
//! Request dispatcher for the Heroku Platform API.
//!
//! This crate holds the plumbing every resource call goes through: request
//! construction, body encoding, the `Range` pagination header, and response
//! decoding. Resource types and per-endpoint methods live in `heroku-api`.
//!
//! ## Modules
//!
//! - [`error`] - Error taxonomy for every stage of a call
//! - [`config`] - Dispatcher configuration
//! - [`client`] - Transport seam and the default `reqwest` transport
//! - [`body`] - Request body shapes
//! - [`decode`] - Response decode targets
//! - [`range`] - `Range` header encoding for list calls
//! - [`service`] - The dispatcher

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod body;
pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod range;
pub mod service;

// Re-export commonly used types
pub use body::Body;
pub use client::Transport;
pub use config::{ServiceConfig, StatusPolicy};
pub use decode::{Decode, JsonSlot};
pub use error::{Error, Result};
pub use range::ListRange;
pub use reqwest::Method;
pub use service::{Service, ServiceBuilder};
