//! HTTP access to the bike-share backend.
//!
//! The [`Transport`] trait is the seam: [`ApiClient`] talks to the real
//! backend over reqwest, [`MockTransport`] serves canned files. Both return
//! raw body bytes and leave decoding to the caller.

mod client;
mod error;
#[cfg(test)]
pub(crate) mod fake;
mod mock;

pub use client::{ApiClient, ApiClientConfig, Transport};
pub use error::HttpError;
pub use mock::MockTransport;
