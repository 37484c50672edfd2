// SPDX-License-Identifier: MIT OR Apache-2.0

//! Switches that decide which events a [`Stat`](crate::Stat) actually writes.
//!
//! An [`OutputConfig`] holds one flag per [`Category`]. Every emitting operation
//! consults its flag before doing any formatting, so a disabled category costs a
//! single atomic load.
//!
//! # The debug-mode bypass
//!
//! Handles created in debug mode ignore their normal category flags and are
//! governed solely by [`Category::Debug`]. Handles created in normal mode ignore
//! the debug flag. [`OutputConfig::allows`] encodes this rule.
//!
//! # Process-wide configuration
//!
//! [`output_config`] returns the configuration shared by every handle created
//! through [`Factory::global`](crate::Factory::global) and the `stat!` macros. An
//! application that wants isolation can give a [`Factory`](crate::Factory) its
//! own instance instead.
//!
//! ```rust
//! use statlog::{Category, output_config};
//!
//! output_config().set(Category::Info, false);
//! assert!(!output_config().is_enabled(Category::Info));
//! output_config().set(Category::Info, true);
//! ```

use crate::Category;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

static GLOBAL_OUTPUT_CONFIG: OnceLock<Arc<OutputConfig>> = OnceLock::new();

/// Returns the process-wide configuration.
///
/// Every flag starts enabled.
pub fn output_config() -> Arc<OutputConfig> {
    GLOBAL_OUTPUT_CONFIG
        .get_or_init(|| Arc::new(OutputConfig::new()))
        .clone()
}

/// Seven independent on/off switches, one per [`Category`].
///
/// Flags are atomics, so reconfiguring while other threads log is sound. A line
/// that is already past its gate when a flag flips is still written.
pub struct OutputConfig {
    starts: AtomicBool,
    dones: AtomicBool,
    infos: AtomicBool,
    warns: AtomicBool,
    errors: AtomicBool,
    details: AtomicBool,
    debug: AtomicBool,
}

impl OutputConfig {
    /// Creates a configuration with every category enabled.
    #[inline]
    pub const fn new() -> Self {
        Self::with_all(true)
    }

    /// Creates a configuration with every category set to `enabled`.
    pub const fn with_all(enabled: bool) -> Self {
        Self {
            starts: AtomicBool::new(enabled),
            dones: AtomicBool::new(enabled),
            infos: AtomicBool::new(enabled),
            warns: AtomicBool::new(enabled),
            errors: AtomicBool::new(enabled),
            details: AtomicBool::new(enabled),
            debug: AtomicBool::new(enabled),
        }
    }

    fn flag(&self, category: Category) -> &AtomicBool {
        match category {
            Category::Start => &self.starts,
            Category::Done => &self.dones,
            Category::Info => &self.infos,
            Category::Warn => &self.warns,
            Category::Error => &self.errors,
            Category::Detail => &self.details,
            Category::Debug => &self.debug,
        }
    }

    /// Returns whether `category` is switched on.
    #[inline]
    pub fn is_enabled(&self, category: Category) -> bool {
        self.flag(category).load(Ordering::Relaxed)
    }

    /// Switches `category` on or off.
    #[inline]
    pub fn set(&self, category: Category, enabled: bool) {
        self.flag(category).store(enabled, Ordering::Relaxed);
    }

    pub fn enable_all(&self) {
        for category in Category::ALL {
            self.set(category, true);
        }
    }

    pub fn disable_all(&self) {
        for category in Category::ALL {
            self.set(category, false);
        }
    }

    /**
    Returns whether a handle should emit an event of `category`.

    A debug-mode handle is governed only by [`Category::Debug`]; any other handle
    only by `category` itself.

    ```rust
    use statlog::{Category, OutputConfig};

    let config = OutputConfig::with_all(false);
    config.set(Category::Debug, true);
    assert!(config.allows(true, Category::Info));
    assert!(!config.allows(false, Category::Info));
    ```
    */
    #[inline]
    pub fn allows(&self, debug_mode: bool, category: Category) -> bool {
        if debug_mode {
            self.is_enabled(Category::Debug)
        } else {
            self.is_enabled(category)
        }
    }
}

// ============================================================================
// Boilerplate trait implementations for OutputConfig
// ============================================================================
//
// - Clone: NOT implemented - a copy would silently detach from the instance
//   handles are reading; share it through Arc instead
// - PartialEq/Eq/Hash: NOT implemented - values change underneath the caller
// - Send/Sync: Automatically implemented via AtomicBool

impl Default for OutputConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for OutputConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputConfig")
            .field("starts", &self.is_enabled(Category::Start))
            .field("dones", &self.is_enabled(Category::Done))
            .field("infos", &self.is_enabled(Category::Info))
            .field("warns", &self.is_enabled(Category::Warn))
            .field("errors", &self.is_enabled(Category::Error))
            .field("details", &self.is_enabled(Category::Detail))
            .field("debug", &self.is_enabled(Category::Debug))
            .finish()
    }
}
