// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::log_line::LogLine;
use crate::sink::Sink;

/// Which standard stream a [`ConsoleSink`] writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stream {
    #[default]
    Stdout,
    Stderr,
}

/**
A sink that writes to stdout or stderr.

With timestamps on, each line is prefixed with the local wall-clock time down to
the microsecond, e.g. `2024/05/01 09:30:12.048213 `.

Write errors are ignored.  On wasm32, lines go to the browser console instead.
 */
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSink {
    stream: Stream,
    timestamps: bool,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Copy: two small fields, no heap
// - PartialEq/Eq/Hash: sinks configured alike are interchangeable
// - Default: timestamped stdout, the process-wide default
// - Display: NOT implemented - no meaningful string representation

impl PartialEq for ConsoleSink {
    fn eq(&self, other: &Self) -> bool {
        self.stream == other.stream && self.timestamps == other.timestamps
    }
}

impl Eq for ConsoleSink {}

impl std::hash::Hash for ConsoleSink {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.stream.hash(state);
        self.timestamps.hash(state);
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl ConsoleSink {
    pub const fn new(stream: Stream, timestamps: bool) -> Self {
        Self { stream, timestamps }
    }

    /// Timestamped stdout.
    pub const fn stdout() -> Self {
        Self::new(Stream::Stdout, true)
    }

    /// Timestamped stderr.
    pub const fn stderr() -> Self {
        Self::new(Stream::Stderr, true)
    }

    /// Returns a copy with the timestamp prefix switched on or off.
    pub const fn with_timestamps(self, timestamps: bool) -> Self {
        Self::new(self.stream, timestamps)
    }

    pub fn stream(&self) -> Stream {
        self.stream
    }

    fn render(&self, line: &LogLine) -> String {
        if self.timestamps {
            let now = chrono::Local::now();
            format!("{} {}", now.format("%Y/%m/%d %H:%M:%S%.6f"), line)
        } else {
            line.to_string()
        }
    }
}

impl Sink for ConsoleSink {
    fn finish_line(&self, line: LogLine) {
        let text = self.render(&line);
        #[cfg(not(target_arch = "wasm32"))]
        {
            use std::io::Write;
            let _ = match self.stream {
                Stream::Stdout => writeln!(std::io::stdout().lock(), "{text}"),
                Stream::Stderr => writeln!(std::io::stderr().lock(), "{text}"),
            };
        }
        #[cfg(target_arch = "wasm32")]
        {
            use crate::Category;
            match line.category() {
                Category::Error => web_sys::console::error_1(&text.into()),
                Category::Warn => web_sys::console::warn_1(&text.into()),
                Category::Info => web_sys::console::info_1(&text.into()),
                Category::Debug | Category::Detail => web_sys::console::debug_1(&text.into()),
                _ => web_sys::console::log_1(&text.into()),
            }
        }
    }
}
