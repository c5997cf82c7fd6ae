//! Query-string and form-body parameter mapping.
//!
//! Every endpoint method turns its arguments into a [`Params`] list. Values
//! are rendered the way the SonarQube Web API expects them: lists become a
//! single comma-joined string, booleans become `"true"` / `"false"`, and
//! absent optional values are recorded as absent so the transport can drop
//! them before the request leaves the process.

use crate::models::Visibility;

/// Conversion of an argument into its wire representation.
///
/// `None` means "absent": the parameter is omitted from the request.
pub trait ParamValue {
    fn to_param(&self) -> Option<String>;
}

impl ParamValue for str {
    fn to_param(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl ParamValue for String {
    fn to_param(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl ParamValue for bool {
    fn to_param(&self) -> Option<String> {
        Some(if *self { "true" } else { "false" }.to_string())
    }
}

macro_rules! int_param {
    ($($t:ty),*) => {
        $(
            impl ParamValue for $t {
                fn to_param(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

int_param!(i32, i64, u32, u64, usize);

impl ParamValue for [String] {
    fn to_param(&self) -> Option<String> {
        Some(self.join(","))
    }
}

impl ParamValue for Vec<String> {
    fn to_param(&self) -> Option<String> {
        self.as_slice().to_param()
    }
}

impl ParamValue for [&str] {
    fn to_param(&self) -> Option<String> {
        Some(self.join(","))
    }
}

impl ParamValue for Vec<&str> {
    fn to_param(&self) -> Option<String> {
        self.as_slice().to_param()
    }
}

impl ParamValue for Visibility {
    fn to_param(&self) -> Option<String> {
        Some(self.as_str().to_string())
    }
}

impl<T: ParamValue> ParamValue for Option<T> {
    fn to_param(&self) -> Option<String> {
        self.as_ref().and_then(|v| v.to_param())
    }
}

impl<T: ParamValue + ?Sized> ParamValue for &T {
    fn to_param(&self) -> Option<String> {
        (**self).to_param()
    }
}

/// Ordered key/value parameters for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, Option<String>)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter; absent values are kept as absent.
    pub fn with(mut self, key: &str, value: impl ParamValue) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: &str, value: impl ParamValue) {
        self.entries.push((key.to_string(), value.to_param()));
    }

    /// Add one `key` entry per value, for fields the server reads as
    /// repeated parameters. `None` adds nothing.
    pub fn with_each<S: AsRef<str>>(mut self, key: &str, values: Option<&[S]>) -> Self {
        for value in values.unwrap_or_default() {
            self.push(key, value.as_ref());
        }
        self
    }

    /// Parameters that will actually be sent.
    pub fn present(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (k.as_str(), v)))
            .collect()
    }

    /// Rendered value of `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Every rendered value of a repeated `key`, in order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(k, _)| k == key)
            .filter_map(|(_, v)| v.as_deref())
            .collect()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// True when no parameter would be sent.
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|(_, v)| v.is_none())
    }
}
