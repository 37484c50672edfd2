// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key-value context attached to a handle.
//!
//! Values are anything with a [`Display`] implementation; they are rendered to
//! text when inserted. A [`Stat`](crate::Stat) renders its fields exactly once, at
//! construction, into a suffix of the form ` key1[value1], key2[value2]`.
//!
//! Keys are kept in lexical order so the suffix is deterministic.
//!
//! ```rust
//! use statlog::style::PlainStyler;
//!
//! let fields = statlog::fields! { "user" => "alice", "attempt" => 2 };
//! assert_eq!(fields.render(&PlainStyler), " attempt[2], user[alice]");
//! ```

use crate::style::{Style, Styler};
use std::collections::BTreeMap;
use std::fmt::Display;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Fields {
    entries: BTreeMap<String, String>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, replacing any previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Display) {
        self.entries.insert(key.into(), value.to_string());
    }

    /// Builder form of [`Fields::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.insert(key, value);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /**
    Renders the fields as a line suffix.

    Each entry becomes `key[value]`, entries are joined by `, ` and the result is
    prefixed with one space. No fields render as the empty string.
    */
    pub fn render(&self, styler: &dyn Styler) -> String {
        if self.entries.is_empty() {
            return String::new();
        }
        let rendered: Vec<String> = self
            .entries
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}[{}]",
                    styler.paint(Style::Key, key),
                    styler.paint(Style::Value, value)
                )
            })
            .collect();
        format!(" {}", rendered.join(", "))
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Fields::new();
        for (key, value) in iter {
            fields.insert(key, value);
        }
        fields
    }
}

/// Builds [`Fields`] from `key => value` pairs.
#[macro_export]
macro_rules! fields {
    () => {
        $crate::Fields::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut fields = $crate::Fields::new();
        $(fields.insert($key, $value);)+
        fields
    }};
}
