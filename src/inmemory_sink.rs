// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Sink
//!
//! [`InMemorySink`] keeps every line it receives in memory instead of writing it
//! anywhere. It is meant for:
//!
//! - Unit tests that assert on what a handle wrote
//! - Environments where stdout is unavailable or swallowed, flushed later with
//!   [`InMemorySink::drain_to_console`]
//!
//! Lines are stored as display strings behind a `Mutex`, so one sink can be
//! shared by handles on many threads.

use crate::log_line::LogLine;
use crate::sink::Sink;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A sink that stores lines in a `Vec<String>`.
///
/// # Example
///
/// ```rust
/// use statlog::{Factory, InMemorySink};
/// use std::sync::Arc;
///
/// let sink = Arc::new(InMemorySink::new());
/// let factory = Factory::new(sink.clone());
///
/// let stat = statlog::stat!(in factory);
/// statlog::info!(stat, "loaded {} rows", 3);
///
/// let logs = sink.drain_logs();
/// assert!(logs.contains("start"));
/// assert!(logs.contains("loaded 3 rows"));
/// ```
#[derive(Debug, Default)]
pub struct InMemorySink {
    lines: Mutex<Vec<String>>,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug: Derived, required by Sink
// - Default: Derived, empty buffer
// - Clone: NOT implemented - two copies would silently diverge; share through Arc
// - PartialEq/Eq/Hash: NOT implemented - comparing mutex contents is racy
// - Send/Sync: Automatically implemented via Mutex

impl InMemorySink {
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
        }
    }

    fn buffer(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a copy of the stored lines, oldest first, without clearing them.
    pub fn lines(&self) -> Vec<String> {
        self.buffer().clone()
    }

    /// Takes the stored lines, oldest first, clearing the buffer.
    pub fn take_lines(&self) -> Vec<String> {
        std::mem::take(&mut *self.buffer())
    }

    /// Joins all stored lines with newlines and clears the buffer.
    ///
    /// ```rust
    /// use statlog::InMemorySink;
    ///
    /// let sink = InMemorySink::new();
    /// assert_eq!(sink.drain_logs(), "");
    /// ```
    pub fn drain_logs(&self) -> String {
        self.take_lines().join("\n")
    }

    /// Writes all stored lines to stderr (the browser console on wasm32) and clears the buffer.
    pub fn drain_to_console(&self) {
        for line in self.take_lines() {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::log_1(&line.into());
            #[cfg(not(target_arch = "wasm32"))]
            eprintln!("{}", line);
        }
    }
}

impl Sink for InMemorySink {
    fn finish_line(&self, line: LogLine) {
        let text = line.to_string();
        self.buffer().push(text);
    }
}
