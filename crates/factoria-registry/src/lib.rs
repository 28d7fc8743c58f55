//! Factoria Registry — resolves capabilities to providers.
//!
//! This crate builds on `factoria-core` (dependency level 1) and provides
//! the caller-owned [`Registry`] that wires one factory per capability.
//!
//! # Modules
//!
//! - [`registry`]: The abstract factory registry
//! - [`config`]: Registry configuration (default variants per capability)
//! - [`mock`]: Mock capability families for tests and examples

#![doc = include_str!("../README.md")]

pub mod config;
pub mod mock;
pub mod registry;

pub use config::RegistryConfig;
pub use registry::Registry;

// Re-export the core contracts so callers need a single dependency.
pub use factoria_core::{
    Arguments, Capability, Error, Factory, Options, Provider, Result, VariantFactory,
};
