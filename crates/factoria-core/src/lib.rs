//! Factoria Core — capability contracts and the options resolver.
//!
//! This crate provides the foundational types used across all Factoria
//! crates. It has no internal Factoria dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`options`]: Variadic argument/options resolver
//! - [`capability`]: Capability identities used as registry keys
//! - [`provider`]: The provider capability contract
//! - [`factory`]: The factory contract and dispatch-table factory

#![doc = include_str!("../README.md")]

pub mod capability;
pub mod error;
pub mod factory;
pub mod options;
pub mod provider;

// Re-export key types at crate root for convenience
pub use capability::Capability;
pub use error::{Error, Result};
pub use factory::{Constructor, Factory, VariantFactory};
pub use options::{Arguments, Options, value_text};
pub use provider::Provider;
