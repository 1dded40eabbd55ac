//! Client types and client instances.
//!
//! A [`ClientType`] is what registration produces: the canonical model plus
//! a dispatch table of operations. A [`Client`] is a configured instance of
//! it that sends calls through a [`Transport`].

mod client_type;
mod instance;
mod params;
mod transport;

pub use client_type::{build_client, ClientType, CLIENT_CAPABILITY};
pub use instance::Client;
pub use transport::{OperationRequest, Transport, UnconfiguredTransport};
