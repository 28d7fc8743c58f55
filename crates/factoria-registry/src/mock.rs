//! Mock providers for testing.
//!
//! Two small capability families used to exercise a [`Registry`](crate::Registry)
//! without real backends:
//!
//! - `IMockProvider`, served by [`MockProviderFactory`], with the variants
//!   `mock` (default), `alt`, `nooptions`, and `bad`;
//! - `IZProvider`, served by [`ZProviderFactory`], with the single variant `a`.

use factoria_core::options::get_option;
use factoria_core::{
    Arguments, Capability, Factory, Options, Provider, Result, VariantFactory, value_text,
};
use serde_json::Value;

/// Implements [`Factory`] for a wrapper by forwarding to its `inner` table.
macro_rules! delegate_factory {
    ($ty:ty) => {
        impl Factory for $ty {
            fn interface_type(&self) -> Option<&Capability> {
                self.inner.interface_type()
            }

            fn create(&self, hint: Option<&str>, options: &Options) -> Result<Box<dyn Provider>> {
                self.inner.create(hint, options)
            }

            fn variants(&self) -> Vec<String> {
                self.inner.variants()
            }
        }
    };
}

/// Capability served by [`MockProviderFactory`].
pub const MOCK_CAPABILITY: Capability = Capability::from_static("IMockProvider");

/// Capability served by [`ZProviderFactory`].
pub const IZ_CAPABILITY: Capability = Capability::from_static("IZProvider");

/// Default variant: echoes its first argument before `"mock provider"`.
#[derive(Debug, Default)]
pub struct CoreMockProvider;

impl Provider for CoreMockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn execute(&self, call: &Arguments) -> Result<Value> {
        Ok(Value::String(format!("{}mock provider", call.arg_text(0))))
    }
}

/// Variant that ignores call options entirely.
#[derive(Debug, Default)]
pub struct NoOptionsMockProvider;

impl Provider for NoOptionsMockProvider {
    fn name(&self) -> &str {
        "nooptions"
    }

    fn execute(&self, call: &Arguments) -> Result<Value> {
        Ok(Value::String(format!(
            "no options{} mock provider",
            call.arg_text(0)
        )))
    }
}

/// Variant reading `taco` from construction scope and `burrito` from call scope.
#[derive(Debug, Default)]
pub struct MockAlternativeProvider {
    init_options: Options,
}

impl MockAlternativeProvider {
    /// Creates the provider with construction-scope options.
    pub fn new(init_options: Options) -> Self {
        Self { init_options }
    }
}

impl Provider for MockAlternativeProvider {
    fn name(&self) -> &str {
        "alt"
    }

    fn execute(&self, call: &Arguments) -> Result<Value> {
        let taco = value_text(&get_option("taco", &self.init_options));
        let burrito = call.option_text("burrito");
        Ok(Value::String(format!(
            "{}{}alternative mock provider{}",
            call.arg_text(0),
            taco,
            burrito
        )))
    }
}

/// Variant that never overrides `execute`.
#[derive(Debug, Default)]
pub struct BadMockProvider;

impl Provider for BadMockProvider {
    fn name(&self) -> &str {
        "bad"
    }
}

/// Factory for the `IMockProvider` family.
#[derive(Debug)]
pub struct MockProviderFactory {
    inner: VariantFactory,
}

impl Default for MockProviderFactory {
    fn default() -> Self {
        let inner = VariantFactory::new(MOCK_CAPABILITY, "mock")
            .variant("mock", |_| Box::new(CoreMockProvider))
            .variant("alt", |opts| {
                Box::new(MockAlternativeProvider::new(opts.clone()))
            })
            .variant("nooptions", |_| Box::new(NoOptionsMockProvider))
            .variant("bad", |_| Box::new(BadMockProvider));
        Self { inner }
    }
}

delegate_factory!(MockProviderFactory);

/// The only `IZProvider` variant.
#[derive(Debug, Default)]
pub struct ProviderA;

impl Provider for ProviderA {
    fn name(&self) -> &str {
        "a"
    }

    fn execute(&self, _call: &Arguments) -> Result<Value> {
        Ok(Value::from("a provider"))
    }
}

/// Factory for the `IZProvider` family.
#[derive(Debug)]
pub struct ZProviderFactory {
    inner: VariantFactory,
}

impl Default for ZProviderFactory {
    fn default() -> Self {
        Self {
            inner: VariantFactory::new(IZ_CAPABILITY, "a").variant("a", |_| Box::new(ProviderA)),
        }
    }
}

delegate_factory!(ZProviderFactory);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mock(hint: Option<&str>) -> Box<dyn Provider> {
        MockProviderFactory::default()
            .create(hint, &Options::new())
            .unwrap()
    }

    #[test]
    fn test_execute_no_parameter() {
        assert_eq!(mock(None).execute(&Arguments::new()).unwrap(), "mock provider");
    }

    #[test]
    fn test_execute_with_parameter() {
        let call = Arguments::new().with_arg("hello");
        assert_eq!(mock(None).execute(&call).unwrap(), "hellomock provider");
    }

    #[test]
    fn test_execute_no_options_provider() {
        let provider = mock(Some("nooptions"));
        assert_eq!(
            provider.execute(&Arguments::new()).unwrap(),
            "no options mock provider"
        );
    }

    #[test]
    fn test_override_without_parameter() {
        assert_eq!(
            mock(Some("alt")).execute(&Arguments::new()).unwrap(),
            "alternative mock provider"
        );
    }

    #[test]
    fn test_override_and_parameter() {
        let call = Arguments::new().with_arg("hi");
        assert_eq!(
            mock(Some("alt")).execute(&call).unwrap(),
            "hialternative mock provider"
        );
    }

    #[test]
    fn test_override_and_options() {
        let options = json!({"taco": "keyword param"}).as_object().cloned().unwrap();
        let provider = MockProviderFactory::default()
            .create(Some("alt"), &options)
            .unwrap();

        let call = Arguments::new().with_arg("hi");
        assert_eq!(
            provider.execute(&call).unwrap(),
            "hikeyword paramalternative mock provider"
        );
    }

    #[test]
    fn test_bad_provider_is_not_implemented() {
        let err = mock(Some("bad"))
            .execute(&Arguments::new().with_arg("nope"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Execute is not implemented");
    }

    #[test]
    fn test_factory_metadata() {
        let factory = MockProviderFactory::default();
        assert_eq!(factory.interface_type(), Some(&MOCK_CAPABILITY));
        assert_eq!(factory.variants(), vec!["alt", "bad", "mock", "nooptions"]);

        let z = ZProviderFactory::default();
        assert_eq!(z.interface_type(), Some(&IZ_CAPABILITY));
        assert_eq!(z.variants(), vec!["a"]);
    }

    #[test]
    fn test_z_factory_rejects_other_variants() {
        let err = ZProviderFactory::default()
            .create(Some("b"), &Options::new())
            .unwrap_err();
        assert!(err.is_invalid_provider());
    }
}
