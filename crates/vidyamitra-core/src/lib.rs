//! vidyamitra-core — data model, session state, and workflow controllers.
//!
//! This crate defines the wire types for the Vidyamitra career-assistant API,
//! the `CareerApi` transport trait, and the stateful quiz and mock-interview
//! workflows built on top of it. It contains no HTTP code; see
//! `vidyamitra-client` for the reqwest implementation of `CareerApi`.

pub mod assess;
pub mod error;
pub mod interview;
pub mod model;
pub mod quiz;
pub mod session;
pub mod traits;

pub use error::CoachError;
pub use traits::CareerApi;
