//! API Layer
//!
//! HTTP client for the MedGraph backend.

pub mod client;

pub use client::*;
