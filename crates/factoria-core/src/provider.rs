//! Provider capability contract.
//!
//! Every concrete implementation of a capability implements [`Provider`].
//! The contract has a single operation, [`Provider::execute`], whose default
//! body fails with [`Error::NotImplemented`]; a provider that forgets to
//! override it is therefore detectable simply by calling it.
//!
//! Providers can draw configuration from two independent scopes:
//!
//! - construction scope: options captured by the factory when the provider
//!   was created, fixed for the provider's lifetime;
//! - call scope: the options inside the [`Arguments`] of each `execute` call.
//!
//! The scopes are never merged automatically; each provider decides which
//! scope a given key comes from.
//!
//! # Example
//!
//! ```
//! use factoria_core::{Arguments, Options, Provider, Result};
//! use serde_json::Value;
//!
//! struct Greeter {
//!     init: Options,
//! }
//!
//! impl Provider for Greeter {
//!     fn name(&self) -> &str {
//!         "greeter"
//!     }
//!
//!     fn execute(&self, call: &Arguments) -> Result<Value> {
//!         let greeting = factoria_core::options::get_option("greeting", &self.init);
//!         let name = call.arg_text(0);
//!         Ok(Value::String(format!("{} {}", factoria_core::value_text(&greeting), name)))
//!     }
//! }
//! ```

use serde_json::Value;

use crate::options::Arguments;
use crate::{Error, Result};

/// A capability instance produced by a [`Factory`](crate::Factory).
///
/// Providers are created fresh on every resolution and owned by the caller.
pub trait Provider: Send + Sync {
    /// Variant name, used in diagnostics.
    fn name(&self) -> &str;

    /// Runs the capability with the given call-scope arguments.
    ///
    /// # Errors
    ///
    /// The default implementation always returns [`Error::NotImplemented`].
    fn execute(&self, call: &Arguments) -> Result<Value> {
        let _ = call;
        Err(Error::not_implemented(self.name()))
    }
}

impl std::fmt::Debug for dyn Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Provider").field("name", &self.name()).finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Incomplete;

    impl Provider for Incomplete {
        fn name(&self) -> &str {
            "incomplete"
        }
    }

    struct Echo;

    impl Provider for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        fn execute(&self, call: &Arguments) -> Result<Value> {
            Ok(Value::String(call.arg_text(0)))
        }
    }

    #[test]
    fn test_default_execute_fails() {
        let err = Incomplete.execute(&Arguments::new()).unwrap_err();
        assert!(err.is_not_implemented());
        assert_eq!(err.to_string(), "Execute is not implemented");
        assert!(matches!(err, Error::NotImplemented { provider } if provider == "incomplete"));
    }

    #[test]
    fn test_override_is_used() {
        let call = Arguments::new().with_arg("hello");
        assert_eq!(Echo.execute(&call).unwrap(), json!("hello"));
    }

    #[test]
    fn test_boxed_provider_debug() {
        let boxed: Box<dyn Provider> = Box::new(Echo);
        assert_eq!(format!("{boxed:?}"), "Provider { name: \"echo\" }");
    }

    #[test]
    fn test_provider_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn Provider>();
    }
}
