//! Configuration defaults, client options and the construction gate.
//!
//! Defaults live in an explicit [`ConfigStore`]. The environment is only
//! consulted through [`ConfigStore::from_env`], which
//! [`Stratus::global`](crate::Stratus::global) uses on first access. Every
//! client merges the defaults with its [`ClientOptions`] through [`resolve`].

mod credentials;
mod gate;
mod options;
mod store;

pub use credentials::Credentials;
pub use gate::{resolve, EffectiveConfig};
pub use options::{ClientOptions, ConfigKey};
pub use store::ConfigStore;
