//! Outbound event delivery client for the Solhem integration Hub.
//!
//! This crate is the platform's at-least-once notifier: after a route
//! handler commits its primary database write, it hands the matching
//! payload to [`HubClient`] and moves on. Delivery runs with bounded
//! retries and exponential backoff, every outcome is returned as a value,
//! and a failing or unconfigured Hub never surfaces into the caller's
//! request cycle.
//!
//! - [`event`] — the closed event taxonomy, one payload shape per kind.
//! - [`envelope`] — the wire envelope wrapped around every payload.
//! - [`transport`] — a single HTTP POST attempt with a bounded timeout.
//! - [`retry`] — the bounded retry / exponential backoff controller.
//! - [`result`] — the uniform [`DeliveryResult`] value and its logging.
//! - [`config`] — environment-driven configuration and the unconfigured
//!   short-circuit.
//! - [`client`] — the send paths: generic, batch, fire-and-forget, and one
//!   typed helper per event kind.

pub mod client;
pub mod config;
pub mod envelope;
pub mod event;
pub mod result;
pub mod retry;
pub mod transport;

pub use client::HubClient;
pub use config::HubConfig;
pub use envelope::{Envelope, SOURCE_TAG};
pub use event::EventKind;
pub use result::DeliveryResult;
pub use retry::RetryPolicy;
pub use transport::{EventTransport, HttpTransport, TransportError};
