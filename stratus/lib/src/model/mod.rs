//! Canonical API models and the normalizer that produces them.
//!
//! - [`ApiDescription`] - every accepted input form
//! - [`normalize`] - turns any description into an [`ApiModel`]
//! - [`ApiModel`] - the shared, immutable, deep-comparable canonical form
//! - [`OperationDescriptor`] - one operation extracted from a model

mod api_model;
mod normalize;
mod operation;

pub use api_model::ApiModel;
pub use normalize::{normalize, ApiDescription};
pub use operation::{HttpBinding, HttpMethod, OperationDescriptor};
