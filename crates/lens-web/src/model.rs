//! View input types
//!
//! Every value here is an immutable shape handed to a view by copy. Text is
//! either a `&'static str` literal or, for the login form, an owned `String`
//! read out of the input signals.

use crate::error::{Field, LoginError, ViewError, ViewResult};
use crate::icon::Icon;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

/// A percentage guaranteed to lie in `0..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percent(u8);

impl Percent {
    pub const ZERO: Percent = Percent(0);
    pub const FULL: Percent = Percent(100);

    /// Saturating constructor
    pub const fn clamped(value: i64) -> Self {
        if value < 0 {
            Percent(0)
        } else if value > 100 {
            Percent(100)
        } else {
            Percent(value as u8)
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Progress bar palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarColor {
    Green,
    Blue,
}

impl BarColor {
    /// Class applied to the percentage caption
    pub fn text_class(self) -> &'static str {
        match self {
            BarColor::Green => "text-green-600",
            BarColor::Blue => "text-blue-600",
        }
    }

    /// Class applied to the filled part of the bar
    pub fn fill_class(self) -> &'static str {
        match self {
            BarColor::Green => "bg-green-500",
            BarColor::Blue => "bg-blue-500",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressMetric {
    pub label: &'static str,
    pub value: Percent,
    pub color: BarColor,
}

impl ProgressMetric {
    pub const fn new(label: &'static str, value: i64, color: BarColor) -> Self {
        Self {
            label,
            value: Percent::clamped(value),
            color,
        }
    }
}

/// A labelled, pre-formatted figure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatDatum {
    pub icon: Icon,
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureDatum {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

/// Checks that `key` yields a distinct value for every item.
pub fn ensure_unique_keys<T, K, F>(items: &[T], key: F) -> ViewResult<()>
where
    K: Eq + Hash + fmt::Display,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        let k = key(item);
        if seen.contains(&k) {
            return Err(ViewError::DuplicateKey(k.to_string()));
        }
        seen.insert(k);
    }
    Ok(())
}

/// Contents of the login form at submission time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// What the authentication collaborator receives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Required-field check. Email is reported first when both are empty.
    pub fn submit(&self) -> Result<Credentials, LoginError> {
        if self.email.is_empty() {
            return Err(LoginError::MissingField(Field::Email));
        }
        if self.password.is_empty() {
            return Err(LoginError::MissingField(Field::Password));
        }
        Ok(Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}
