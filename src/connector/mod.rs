//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Completion API client (OpenRouter over reqwest)
//! - Offline mock client
//! - CLI wiring and controllers

pub mod adapter;
pub mod api;

pub use adapter::*;
