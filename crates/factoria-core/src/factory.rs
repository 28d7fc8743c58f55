//! Factory contract and the closed dispatch-table factory.
//!
//! A [`Factory`] serves exactly one [`Capability`] and turns a hint (the
//! variant name) plus trailing options into a fresh [`Provider`].
//!
//! Most factories are a fixed table of named constructors with a default
//! entry; [`VariantFactory`] implements that shape so capability families
//! only declare their table:
//!
//! ```
//! use factoria_core::{Arguments, Capability, Factory, Provider, Result, VariantFactory};
//! use serde_json::Value;
//!
//! struct Plain;
//!
//! impl Provider for Plain {
//!     fn name(&self) -> &str { "plain" }
//!     fn execute(&self, _call: &Arguments) -> Result<Value> {
//!         Ok(Value::from("plain provider"))
//!     }
//! }
//!
//! let factory = VariantFactory::new(Capability::from_static("IPlainProvider"), "plain")
//!     .variant("plain", |_| Box::new(Plain));
//!
//! let provider = factory.create(None, &Default::default()).unwrap();
//! assert_eq!(provider.execute(&Arguments::new()).unwrap(), "plain provider");
//! assert!(factory.create(Some("other"), &Default::default()).is_err());
//! ```

use std::collections::BTreeMap;
use std::fmt;

use crate::capability::Capability;
use crate::options::{Arguments, Options};
use crate::provider::Provider;
use crate::{Error, Result};

/// Per-capability provider creator.
pub trait Factory: Send + Sync {
    /// The capability this factory serves.
    ///
    /// Defaults to `None`; a factory that does not name a capability cannot
    /// be registered.
    fn interface_type(&self) -> Option<&Capability> {
        None
    }

    /// Creates the provider variant selected by `hint`.
    ///
    /// A missing hint selects the factory's default variant. `options` are
    /// construction-scope configuration for the new provider.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProvider`] if the hint names no known variant.
    fn create(&self, hint: Option<&str>, options: &Options) -> Result<Box<dyn Provider>>;

    /// Creates a provider from a variadic call.
    ///
    /// A leading string argument is the hint (see [`Arguments::hint`]); the
    /// merged options are passed on as construction-scope configuration.
    fn create_from(&self, call: &Arguments) -> Result<Box<dyn Provider>> {
        self.create(call.hint(), call.options())
    }

    /// Names of the variants this factory recognises.
    fn variants(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Constructor stored in a [`VariantFactory`] table.
pub type Constructor = Box<dyn Fn(&Options) -> Box<dyn Provider> + Send + Sync>;

/// A factory backed by a closed table of named constructors.
///
/// Variant names are matched case-insensitively. An empty or missing hint
/// selects the default variant; anything not in the table is rejected with
/// [`Error::InvalidProvider`].
pub struct VariantFactory {
    capability: Capability,
    default_variant: String,
    table: BTreeMap<String, Constructor>,
}

impl VariantFactory {
    /// Creates an empty table for `capability` with the given default variant.
    pub fn new(capability: Capability, default_variant: impl Into<String>) -> Self {
        Self {
            capability,
            default_variant: default_variant.into().to_lowercase(),
            table: BTreeMap::new(),
        }
    }

    /// Adds (or replaces) a variant constructor.
    pub fn variant<F>(mut self, name: impl Into<String>, constructor: F) -> Self
    where
        F: Fn(&Options) -> Box<dyn Provider> + Send + Sync + 'static,
    {
        self.table
            .insert(name.into().to_lowercase(), Box::new(constructor));
        self
    }

    /// The variant used when no hint is given.
    pub fn default_variant(&self) -> &str {
        &self.default_variant
    }

    /// Resolves the lower-cased variant name for `hint`.
    pub fn variant_name(&self, hint: Option<&str>) -> String {
        match hint {
            Some(h) if !h.is_empty() => h.to_lowercase(),
            _ => self.default_variant.clone(),
        }
    }
}

impl Factory for VariantFactory {
    fn interface_type(&self) -> Option<&Capability> {
        Some(&self.capability)
    }

    fn create(&self, hint: Option<&str>, options: &Options) -> Result<Box<dyn Provider>> {
        let name = self.variant_name(hint);
        let constructor = self
            .table
            .get(&name)
            .ok_or_else(|| Error::invalid_provider(self.capability.as_str(), name.as_str()))?;

        log::trace!("creating '{}' provider for {}", name, self.capability);
        Ok(constructor(options))
    }

    fn variants(&self) -> Vec<String> {
        self.table.keys().cloned().collect()
    }
}

impl fmt::Debug for VariantFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantFactory")
            .field("capability", &self.capability)
            .field("default_variant", &self.default_variant)
            .field("variants", &self.table.keys().collect::<Vec<_>>())
            .finish()
    }
}
