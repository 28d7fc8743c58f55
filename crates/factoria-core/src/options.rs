//! Options resolver for variadic provider calls.
//!
//! Providers and factories accept a single heterogeneous argument list in
//! which ordered data and named configuration are mixed freely. [`parse`]
//! splits such a list into:
//!
//! - the positional arguments: every value that is not a JSON object, in
//!   their original order;
//! - the options: every JSON object, shallow-merged left to right so that a
//!   key in a later fragment overrides the same key in an earlier one.
//!
//! [`Arguments`] holds the resulting pair and is what providers receive on
//! each call.
//!
//! # Example
//!
//! ```
//! use factoria_core::options::{parse, get_arg, get_option};
//! use serde_json::json;
//!
//! let (args, options) = parse(vec![json!("x"), json!({"a": 1}), json!({"a": 2, "b": 3})]);
//!
//! assert_eq!(args, vec![json!("x")]);
//! assert_eq!(get_option("a", &options), json!(2));
//! assert_eq!(get_arg(5, &args), json!(""));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Merged keyword configuration.
pub type Options = Map<String, Value>;

/// Splits `values` into positional arguments and merged options.
///
/// A value is an options fragment if and only if it is a JSON object. Lists,
/// primitives, and `null` are positional.
pub fn parse<I>(values: I) -> (Vec<Value>, Options)
where
    I: IntoIterator<Item = Value>,
{
    let mut args = Vec::new();
    let mut options = Options::new();

    for value in values {
        match value {
            Value::Object(fragment) => merge_options(&mut options, fragment),
            other => args.push(other),
        }
    }

    (args, options)
}

/// Shallow-merges `fragment` into `into`; keys in `fragment` win.
pub fn merge_options(into: &mut Options, fragment: Options) {
    for (key, value) in fragment {
        into.insert(key, value);
    }
}

/// Returns the positional argument at `index`, or an empty string.
pub fn get_arg(index: usize, args: &[Value]) -> Value {
    args.get(index).cloned().unwrap_or_else(empty)
}

/// Returns the option stored under `key`, or an empty string.
pub fn get_option(key: &str, options: &Options) -> Value {
    options.get(key).cloned().unwrap_or_else(empty)
}

/// Renders a value for string composition.
///
/// Strings are returned verbatim, `null` becomes the empty string, and
/// everything else uses its JSON form.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn empty() -> Value {
    Value::String(String::new())
}

/// A resolved call: ordered positional arguments plus merged options.
///
/// Built either from a variadic value list ([`Arguments::from_values`]) or
/// explicitly with the builder methods.
///
/// ```
/// use factoria_core::options::Arguments;
/// use serde_json::json;
///
/// let call = Arguments::new()
///     .with_arg("hi")
///     .with_options(json!({"burrito": "Y"}).as_object().cloned().unwrap_or_default());
///
/// assert_eq!(call.arg_text(0), "hi");
/// assert_eq!(call.option_text("burrito"), "Y");
/// assert_eq!(call.option_text("taco"), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Arguments {
    args: Vec<Value>,
    options: Options,
}

impl Arguments {
    /// Creates an empty call.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a variadic value list with [`parse`].
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        let (args, options) = parse(values);
        Self { args, options }
    }

    /// Appends a positional argument.
    ///
    /// An object is treated as an options fragment, exactly as [`parse`]
    /// would treat it.
    pub fn with_arg(mut self, value: impl Into<Value>) -> Self {
        match value.into() {
            Value::Object(fragment) => merge_options(&mut self.options, fragment),
            other => self.args.push(other),
        }
        self
    }

    /// Merges an options fragment; its keys override existing ones.
    pub fn with_options(mut self, fragment: Options) -> Self {
        merge_options(&mut self.options, fragment);
        self
    }

    /// Sets a single option.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Positional arguments, in call order.
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Merged options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Positional argument at `index`, or an empty string.
    pub fn arg(&self, index: usize) -> Value {
        get_arg(index, &self.args)
    }

    /// Option under `key`, or an empty string.
    pub fn option(&self, key: &str) -> Value {
        get_option(key, &self.options)
    }

    /// [`Arguments::arg`] rendered with [`value_text`].
    pub fn arg_text(&self, index: usize) -> String {
        value_text(&self.arg(index))
    }

    /// [`Arguments::option`] rendered with [`value_text`].
    pub fn option_text(&self, key: &str) -> String {
        value_text(&self.option(key))
    }

    /// Number of positional arguments.
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    /// The hint carried by a variadic factory call.
    ///
    /// Only a non-empty string in first position counts; any other leading
    /// value (number, boolean, `null`, list) means "no hint".
    pub fn hint(&self) -> Option<&str> {
        match self.args.first() {
            Some(Value::String(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    /// True when there are neither positional arguments nor options.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty() && self.options.is_empty()
    }

    /// Splits the call back into its two parts.
    pub fn into_parts(self) -> (Vec<Value>, Options) {
        (self.args, self.options)
    }
}

impl From<Vec<Value>> for Arguments {
    fn from(values: Vec<Value>) -> Self {
        Self::from_values(values)
    }
}

impl From<Options> for Arguments {
    fn from(options: Options) -> Self {
        Self {
            args: Vec::new(),
            options,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn obj(value: Value) -> Options {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_parse_empty() {
        let (args, options) = parse(Vec::new());
        assert!(args.is_empty());
        assert!(options.is_empty());
    }

    #[test]
    fn test_parse_later_fragment_overrides() {
        let (args, options) = parse(vec![json!("x"), json!({"a": 1}), json!({"a": 2, "b": 3})]);
        assert_eq!(args, vec![json!("x")]);
        assert_eq!(options, obj(json!({"a": 2, "b": 3})));
    }

    #[test]
    fn test_parse_lists_and_null_are_positional() {
        let (args, options) = parse(vec![json!([1, 2]), Value::Null, json!(7), json!(true)]);
        assert_eq!(args, vec![json!([1, 2]), Value::Null, json!(7), json!(true)]);
        assert!(options.is_empty());
    }

    #[test]
    fn test_parse_merge_is_shallow() {
        let (_, options) = parse(vec![
            json!({"nested": {"a": 1, "b": 2}}),
            json!({"nested": {"c": 3}}),
        ]);
        assert_eq!(options.get("nested"), Some(&json!({"c": 3})));
    }

    #[test]
    fn test_get_arg_defaults_to_empty_string() {
        let args = vec![json!("hello")];
        assert_eq!(get_arg(0, &args), json!("hello"));
        assert_eq!(get_arg(1, &args), json!(""));
        assert_eq!(get_arg(usize::MAX, &[]), json!(""));
    }

    #[test]
    fn test_get_option_defaults_to_empty_string() {
        let options = obj(json!({"taco": "X"}));
        assert_eq!(get_option("taco", &options), json!("X"));
        assert_eq!(get_option("burrito", &options), json!(""));
    }

    #[test]
    fn test_value_text() {
        assert_eq!(value_text(&json!("plain")), "plain");
        assert_eq!(value_text(&Value::Null), "");
        assert_eq!(value_text(&json!(42)), "42");
        assert_eq!(value_text(&json!([1, "a"])), "[1,\"a\"]");
    }

    #[test]
    fn test_arguments_builder() {
        let call = Arguments::new()
            .with_arg("hi")
            .with_arg(json!({"a": 1}))
            .with_option("b", 2)
            .with_options(obj(json!({"a": 3})));

        assert_eq!(call.args(), &[json!("hi")]);
        assert_eq!(call.option("a"), json!(3));
        assert_eq!(call.option("b"), json!(2));
        assert_eq!(call.arg_count(), 1);
        assert!(!call.is_empty());
    }

    #[test]
    fn test_arguments_from_values_matches_parse() {
        let values = vec![json!("x"), json!({"k": "v"}), json!(1)];
        let call = Arguments::from(values.clone());
        let (args, options) = parse(values);
        assert_eq!(call.clone().into_parts(), (args, options));
        assert_eq!(call.arg_text(1), "1");
        assert_eq!(call.option_text("k"), "v");
    }

    #[test]
    fn test_arguments_from_options() {
        let call = Arguments::from(obj(json!({"taco": "X"})));
        assert_eq!(call.arg_count(), 0);
        assert!(!call.is_empty());
        assert_eq!(call.option_text("taco"), "X");
        assert!(Arguments::new().is_empty());
    }

    #[test]
    fn test_hint_is_leading_string_only() {
        assert_eq!(Arguments::new().with_arg("Alt").hint(), Some("Alt"));
        assert_eq!(Arguments::new().hint(), None);
        assert_eq!(Arguments::new().with_arg("").hint(), None);

        for leading in [json!(0), json!(false), Value::Null, json!([1])] {
            let call = Arguments::from(vec![leading, json!("alt")]);
            assert_eq!(call.hint(), None);
        }
    }

    fn scalar() -> impl Strategy<Value = Value> {
        prop_oneof![
            any::<i64>().prop_map(Value::from),
            "[a-z]{0,6}".prop_map(Value::from),
            any::<bool>().prop_map(Value::from),
            Just(Value::Null),
        ]
    }

    fn fragment() -> impl Strategy<Value = Value> {
        prop::collection::btree_map("[a-c]", any::<i64>(), 0..3)
            .prop_map(|m| Value::Object(m.into_iter().map(|(k, v)| (k, Value::from(v))).collect()))
    }

    proptest! {
        #[test]
        fn prop_positional_order_preserved(values in prop::collection::vec(prop_oneof![scalar(), fragment()], 0..12)) {
            let expected: Vec<Value> = values.iter().filter(|v| !v.is_object()).cloned().collect();
            let (args, _) = parse(values);
            prop_assert!(args.iter().all(|v| !v.is_object()));
            prop_assert_eq!(args, expected);
        }

        #[test]
        fn prop_last_fragment_wins(values in prop::collection::vec(prop_oneof![scalar(), fragment()], 0..12)) {
            let (_, options) = parse(values.clone());
            for (key, value) in &options {
                let last = values
                    .iter()
                    .rev()
                    .filter_map(|v| v.as_object())
                    .find_map(|m| m.get(key));
                prop_assert_eq!(Some(value), last);
            }
        }
    }
}
