//! Capability identities.
//!
//! A [`Capability`] names a provider interface ("which contract does this
//! serve?") and is the key the registry stores factories under. Identities
//! are declared explicitly, usually as constants next to the provider trait
//! family they name:
//!
//! ```
//! use factoria_core::Capability;
//!
//! pub const STORAGE: Capability = Capability::from_static("IStorageProvider");
//!
//! assert_eq!(STORAGE.as_str(), "IStorageProvider");
//! assert!(STORAGE.is_valid());
//! ```

use std::borrow::{Borrow, Cow};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable name identifying a provider interface.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capability(Cow<'static, str>);

impl Capability {
    /// Creates a capability from a static name; usable in `const` items.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Creates a capability from an owned or borrowed name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// The capability name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A capability is usable as a registry key only if its name is not blank.
    pub fn is_valid(&self) -> bool {
        !self.0.trim().is_empty()
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Capability {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Capability {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for Capability {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for Capability {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
