//! # wicket-core
//!
//! Typed provider request model for the Wicket gateway.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

/// Provider request types
pub mod provider;
