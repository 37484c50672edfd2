// SPDX-License-Identifier: MIT OR Apache-2.0

//! The unit handed to a [`Sink`](crate::Sink).
//!
//! A [`LogLine`] is built up from parts while a handle formats an event, then
//! submitted whole. It keeps the [`Category`] and the [`CallSite`] that produced it
//! so a sink can route or annotate lines without parsing them.
//!
//! ```rust
//! use statlog::{CallSite, Category, LogLine};
//!
//! let mut line = LogLine::new(Category::Info, CallSite::caller());
//! line.log("main.rs:3 : ");
//! line.log_owned(format!("{} info", "app::main"));
//! assert_eq!(line.to_string(), "main.rs:3 : app::main info");
//! ```

use crate::{CallSite, Category};
use std::fmt::{Debug, Display};

/**
One formatted line.

The text is stored as the parts it was written in and only joined on display.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogLine {
    pub(crate) parts: Vec<String>,
    category: Category,
    site: CallSite,
}

impl LogLine {
    pub fn new(category: Category, site: CallSite) -> Self {
        Self {
            parts: Vec::new(),
            category,
            site,
        }
    }

    /// Appends borrowed text.
    pub fn log(&mut self, message: &str) {
        self.parts.push(message.to_string());
    }

    /// Appends text the caller already owns.
    pub fn log_owned(&mut self, message: String) {
        self.parts.push(message);
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Where the event was raised.
    pub fn site(&self) -> CallSite {
        self.site
    }
}

impl Display for LogLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for part in &self.parts {
            f.write_str(part)?;
        }
        Ok(())
    }
}
/*
Boilerplate notes for LogLine:

- Clone: sinks that fan out to several destinations need copies
- PartialEq/Eq/Hash: derived, useful for deduplication in tests
- Default: NOT implemented - a line without a call site is meaningless
- Ord: no meaningful ordering
*/
