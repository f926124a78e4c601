//! Looking Glass domain module.
//!
//! The query layer behind the network-diagnostics tools: city-to-city latency,
//! eyeball coverage, acceleration tests, router diagnostics and city-code
//! resolution.
//!
//! ## Architecture
//!
//! - `validate.rs` - Input checks run before any network call
//! - `client.rs` - Backend trait and the blocking HTTP implementation
//! - `normalize.rs` - Raw JSON to typed results
//! - `error.rs` - Closed error taxonomy and the failure classifier
//! - `service.rs` - Dispatcher sequencing the steps above
//!
//! A call goes validate -> fetch -> normalize, and any failure along the way
//! comes back as exactly one [`LookingGlassError`].

pub mod client;
mod error;
pub mod model;
pub mod normalize;
pub mod query;
mod service;
pub mod validate;

pub use client::{Backend, FetchError, HttpBackend};
pub use error::LookingGlassError;
pub use model::*;
pub use query::{DelayQuery, Endpoint, Query, QueryOutput, QueryRequest, RouterExploreQuery};
pub use service::LookingGlassService;
pub use validate::{validate, validate_delay_query};
