//! Heroku Platform API resources and client.
//!
//! Provides typed records for every supported resource and an asynchronous
//! client with one method per endpoint, built on the `heroku-core`
//! dispatcher.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::{HerokuClient, HerokuClientBuilder};
pub use heroku_core::{Error, ListRange, StatusPolicy};

/// Convenient result alias that reuses the shared dispatcher error type.
pub type Result<T> = heroku_core::Result<T>;
