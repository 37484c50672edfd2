// SPDX-License-Identifier: MIT OR Apache-2.0

//! Source locations and caller names.
//!
//! A line's `<file>:<line>` comes from [`CallSite`], captured through
//! `#[track_caller]` so that it names the code that called into the handle and not
//! the handle itself. A function that wants to report its own caller's location
//! marks itself `#[track_caller]` too, or captures a [`CallSite`] and hands it to
//! [`Stat::error_at`](crate::Stat::error_at).
//!
//! The caller name attached to a handle is resolved at compile time by
//! [`function_name!`](crate::function_name).

use std::panic::Location;

/// A source location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    file: &'static str,
    line: u32,
    column: u32,
}

impl CallSite {
    /// Captures the location of the nearest caller not marked `#[track_caller]`.
    #[track_caller]
    pub fn caller() -> Self {
        Self::from_location(Location::caller())
    }

    pub fn from_location(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }

    pub const fn new(file: &'static str, line: u32, column: u32) -> Self {
        Self { file, line, column }
    }

    /// Full path as the compiler reported it.
    pub fn path(&self) -> &'static str {
        self.file
    }

    /// The last component of [`CallSite::path`].
    pub fn file_name(&self) -> &'static str {
        match self.file.rfind(['/', '\\']) {
            Some(idx) if idx > 0 && idx < self.file.len() - 1 => &self.file[idx + 1..],
            _ => self.file,
        }
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }
}

impl std::fmt::Display for CallSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.file_name(), self.line)
    }
}

#[doc(hidden)]
pub const MARKER: &str = "__statlog_marker";

/// Turns the type name of a marker fn into the path of the function that declared it.
#[doc(hidden)]
pub fn enclosing_function(marker_path: &'static str) -> &'static str {
    let mut name = marker_path
        .strip_suffix(MARKER)
        .and_then(|n| n.strip_suffix("::"))
        .unwrap_or(marker_path);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name
}

/**
Expands to the path of the enclosing function, e.g. `my_app::server::accept`.

Closures report the function they are written in.

The path is read from [`std::any::type_name_of_val`] of a marker fn. The standard
library does not guarantee that format across compiler releases, so treat the
result as a diagnostic label rather than something to parse or match exactly.

```rust
fn handler() -> &'static str {
    statlog::function_name!()
}
assert!(handler().ends_with("handler"));
```
*/
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __statlog_marker() {}
        $crate::hidden::enclosing_function(::std::any::type_name_of_val(&__statlog_marker))
    }};
}
