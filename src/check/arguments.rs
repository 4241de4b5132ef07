//! Check arguments and their normalization for dispatch.
//!
//! A descriptor carries its arguments either positionally or as a bag of
//! named options. Before a check is invoked the arguments are normalized
//! into the calling convention every check function accepts: a slice of
//! [`Param`]s.

use std::fmt;

use crate::error::{MedicError, Result};

/// Insertion-ordered mapping from option name to value.
///
/// Order is significant: skip-marker names join the values in the order
/// the options were declared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options(Vec<(String, String)>);

impl Options {
    /// Create an empty options bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option, replacing an existing value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up an option value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Option values in declaration order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(_, v)| v.as_str())
    }

    /// Key/value pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Options::new();
        for (k, v) in iter {
            options.insert(k, v);
        }
        options
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
        write!(f, "{}", pairs.join(", "))
    }
}

/// Arguments declared on a check descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arguments {
    /// Ordered positional values.
    Positional(Vec<String>),
    /// A single bag of named options.
    Options(Options),
}

impl Default for Arguments {
    fn default() -> Self {
        Self::Positional(Vec::new())
    }
}

impl Arguments {
    /// No arguments.
    pub fn none() -> Self {
        Self::default()
    }

    /// Positional arguments from any list of strings.
    pub fn positional<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Positional(values.into_iter().map(Into::into).collect())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Positional(values) => values.is_empty(),
            Self::Options(options) => options.is_empty(),
        }
    }

    /// The argument values joined with `+`, keys dropped.
    pub fn token(&self) -> String {
        match self {
            Self::Positional(values) => values.join("+"),
            Self::Options(options) => options.values().collect::<Vec<_>>().join("+"),
        }
    }
}

impl From<Options> for Arguments {
    fn from(options: Options) -> Self {
        Self::Options(options)
    }
}

impl From<Vec<String>> for Arguments {
    fn from(values: Vec<String>) -> Self {
        Self::Positional(values)
    }
}

impl fmt::Display for Arguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positional(values) => write!(f, "{}", values.join(", ")),
            Self::Options(options) => write!(f, "{}", options),
        }
    }
}

/// One normalized parameter passed to a check function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    Value(String),
    Options(Options),
}

impl Param {
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Self::Value(value) => Some(value),
            Self::Options(_) => None,
        }
    }

    pub fn as_options(&self) -> Option<&Options> {
        match self {
            Self::Options(options) => Some(options),
            Self::Value(_) => None,
        }
    }
}

/// Convert arguments into the calling convention of a check function.
///
/// A non-empty options bag becomes a single [`Param::Options`]. Positional
/// values pass through one parameter each, and an empty bag yields no
/// parameters at all.
pub fn normalize(arguments: &Arguments) -> Vec<Param> {
    match arguments {
        Arguments::Options(options) if !options.is_empty() => {
            vec![Param::Options(options.clone())]
        }
        Arguments::Options(_) => Vec::new(),
        Arguments::Positional(values) => values.iter().cloned().map(Param::Value).collect(),
    }
}

/// Borrow every parameter as a positional value.
///
/// Fails with [`MedicError::InvalidArguments`] naming `check` when an
/// options bag is present.
pub fn values<'a>(check: &str, params: &'a [Param]) -> Result<Vec<&'a str>> {
    params
        .iter()
        .map(|p| {
            p.as_value().ok_or_else(|| MedicError::InvalidArguments {
                check: check.to_string(),
                message: "expected positional arguments, got options".to_string(),
            })
        })
        .collect()
}
