//! Error types for Factoria operations.
//!
//! This module provides the common `Error` type and `Result<T>` alias used
//! across all Factoria crates. Uses `thiserror` for derive macros.
//!
//! The four registry failures keep fixed, caller-visible messages; the
//! context that produced them (capability, hint, provider) is carried in
//! the variant fields instead of the message.

use thiserror::Error;

/// Errors that can occur in Factoria operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A provider was invoked through the base contract without overriding it.
    #[error("Execute is not implemented")]
    NotImplemented {
        /// Name of the provider variant that was invoked.
        provider: String,
    },

    /// A factory was registered without a usable capability identity.
    #[error("Factory requires provider/interface type")]
    MalformedFactory,

    /// No factory is registered for the requested capability.
    #[error("Factory not registered")]
    FactoryNotRegistered {
        /// The capability that was requested.
        capability: String,
    },

    /// A factory was asked for a variant it does not recognise.
    #[error("Invalid provider")]
    InvalidProvider {
        /// The capability the factory serves.
        capability: String,
        /// The (lower-cased) variant name that was requested.
        hint: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a not-implemented error for the named provider.
    pub fn not_implemented(provider: impl Into<String>) -> Self {
        Self::NotImplemented {
            provider: provider.into(),
        }
    }

    /// Create a factory-not-registered error.
    pub fn factory_not_registered(capability: impl Into<String>) -> Self {
        Self::FactoryNotRegistered {
            capability: capability.into(),
        }
    }

    /// Create an invalid-provider error.
    pub fn invalid_provider(capability: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::InvalidProvider {
            capability: capability.into(),
            hint: hint.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns true if a provider did not implement `execute`.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented { .. })
    }

    /// Returns true if a factory lacked a capability identity.
    pub fn is_malformed_factory(&self) -> bool {
        matches!(self, Self::MalformedFactory)
    }

    /// Returns true if no factory was registered for a capability.
    pub fn is_factory_not_registered(&self) -> bool {
        matches!(self, Self::FactoryNotRegistered { .. })
    }

    /// Returns true if a factory rejected the requested variant.
    pub fn is_invalid_provider(&self) -> bool {
        matches!(self, Self::InvalidProvider { .. })
    }
}

/// Result type alias using Factoria's Error type.
pub type Result<T> = std::result::Result<T, Error>;
