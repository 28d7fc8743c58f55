//! The abstract factory registry.
//!
//! A [`Registry`] maps each [`Capability`] to the one [`Factory`] currently
//! serving it. Callers construct the registry themselves, register a factory
//! per capability, and later resolve capabilities to fresh providers:
//!
//! ```
//! use factoria_registry::mock::{MOCK_CAPABILITY, MockProviderFactory};
//! use factoria_registry::{Arguments, Registry};
//!
//! let registry = Registry::new();
//! registry.register_type::<MockProviderFactory>().unwrap();
//!
//! let provider = registry.resolve_default(&MOCK_CAPABILITY).unwrap();
//! let result = provider.execute(&Arguments::new().with_arg("hello")).unwrap();
//! assert_eq!(result, "hellomock provider");
//! ```
//!
//! # Thread Safety
//!
//! The factory table sits behind a single `RwLock`: registration and removal
//! take the write lock, resolution and the read-only views take the read
//! lock. Factories are held in an `Arc` so that `resolve` releases the lock
//! before the factory builds the provider.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use factoria_core::{Arguments, Capability, Error, Factory, Options, Provider, Result};

use crate::config::RegistryConfig;

type FactoryTable = HashMap<Capability, Arc<dyn Factory>>;

/// Process-scoped table of capability factories.
#[derive(Default)]
pub struct Registry {
    factories: RwLock<FactoryTable>,
    config: RegistryConfig,
}

impl Registry {
    /// Create an empty registry with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry that consults `config` for default variants.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            factories: RwLock::default(),
            config,
        }
    }

    /// The registry configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Register a factory instance under its capability.
    ///
    /// Replaces any factory already registered for the same capability.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedFactory`] if the factory exposes no usable
    /// capability; the registry is left unchanged.
    pub fn register<F>(&self, factory: F) -> Result<()>
    where
        F: Factory + 'static,
    {
        self.register_shared(Arc::new(factory))
    }

    /// Instantiate `F` and register it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedFactory`] if `F` exposes no usable
    /// capability; the registry is left unchanged.
    pub fn register_type<F>(&self) -> Result<()>
    where
        F: Factory + Default + 'static,
    {
        self.register(F::default())
    }

    /// Register an already shared factory.
    pub fn register_shared(&self, factory: Arc<dyn Factory>) -> Result<()> {
        let capability = factory
            .interface_type()
            .filter(|c| c.is_valid())
            .cloned()
            .ok_or(Error::MalformedFactory)?;

        let previous = self.write().insert(capability.clone(), factory);
        if previous.is_some() {
            log::debug!("replaced factory for {capability}");
        } else {
            log::debug!("registered factory for {capability}");
        }
        Ok(())
    }

    /// Remove the entry for the capability `factory` serves.
    ///
    /// Does nothing if that capability is not registered or the factory
    /// names no capability.
    pub fn unregister(&self, factory: &dyn Factory) {
        if let Some(capability) = factory.interface_type() {
            self.remove(capability);
        }
    }

    /// Remove the entry for the capability a default `F` serves.
    pub fn unregister_type<F>(&self)
    where
        F: Factory + Default,
    {
        self.unregister(&F::default());
    }

    /// Remove the entry for `capability`; returns whether one was present.
    pub fn remove(&self, capability: &Capability) -> bool {
        let removed = self.write().remove(capability).is_some();
        if removed {
            log::debug!("unregistered factory for {capability}");
        }
        removed
    }

    /// Resolve `capability` to a new provider.
    ///
    /// Without a hint, the configured default variant for the capability is
    /// used, falling back to the factory's own default.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FactoryNotRegistered`] if no factory serves
    /// `capability`, or whatever the factory's `create` returns.
    pub fn resolve(
        &self,
        capability: &Capability,
        hint: Option<&str>,
        options: &Options,
    ) -> Result<Box<dyn Provider>> {
        let factory = self
            .factory(capability)
            .ok_or_else(|| Error::factory_not_registered(capability.as_str()))?;

        let hint = hint
            .filter(|h| !h.is_empty())
            .or_else(|| self.config.default_variant(capability));

        log::debug!(
            "resolving {capability} (hint: {})",
            hint.unwrap_or("<default>")
        );
        factory.create(hint, options)
    }

    /// Resolve `capability` to its default variant without options.
    pub fn resolve_default(&self, capability: &Capability) -> Result<Box<dyn Provider>> {
        self.resolve(capability, None, &Options::new())
    }

    /// Resolve `capability` from a variadic call.
    ///
    /// A leading string argument is the hint; any other leading value falls
    /// back to the configured or factory default. The merged options become
    /// the provider's construction-scope configuration.
    pub fn resolve_with(
        &self,
        capability: &Capability,
        call: &Arguments,
    ) -> Result<Box<dyn Provider>> {
        self.resolve(capability, call.hint(), call.options())
    }

    /// The factory registered for `capability`, if any.
    pub fn factory(&self, capability: &Capability) -> Option<Arc<dyn Factory>> {
        self.read().get(capability).cloned()
    }

    /// Registered capabilities, sorted by name.
    pub fn capabilities(&self) -> Vec<Capability> {
        let mut capabilities: Vec<Capability> = self.read().keys().cloned().collect();
        capabilities.sort();
        capabilities
    }

    /// Whether a factory is registered for `capability`.
    pub fn contains(&self, capability: &Capability) -> bool {
        self.read().contains_key(capability)
    }

    /// Number of registered capabilities.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// True when no factory is registered.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Table mutations are single inserts/removes, so a poisoned lock never
    // guards a half-updated table.
    fn read(&self) -> RwLockReadGuard<'_, FactoryTable> {
        self.factories.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, FactoryTable> {
        self.factories.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("capabilities", &self.capabilities())
            .field("config", &self.config)
            .finish()
    }
}
