//! API exposure layers
//!
//! The core service is transport-agnostic; exposures bind it to a protocol.

pub mod rest;

pub use rest::RestExposure;
