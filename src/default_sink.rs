// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide default sink.
//!
//! Handles created through [`Factory::global`](crate::Factory::global) or the
//! `stat!` macros bind to whatever sink is registered here at the moment they are
//! created. Out of the box that is a timestamped stdout [`ConsoleSink`].
//!
//! # Sink lifecycle
//!
//! Sinks are reference-counted. Replacing the default does not affect handles that
//! already hold the previous sink; they keep writing to it until they are dropped.
//!
//! # Examples
//!
//! ```
//! use statlog::default_sink::{default_sink, set_default_sink};
//! use statlog::InMemorySink;
//! use std::sync::Arc;
//!
//! let capture = Arc::new(InMemorySink::new());
//! let previous = default_sink();
//! set_default_sink(capture.clone());
//!
//! let stat = statlog::stat!();
//! stat.done();
//! assert_eq!(capture.lines().len(), 2);
//!
//! set_default_sink(previous);
//! ```

use crate::console_sink::ConsoleSink;
use crate::sink::Sink;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

/// Lock held only long enough to clone or replace the `Arc`.
static DEFAULT_SINK: OnceLock<RwLock<Arc<dyn Sink>>> = OnceLock::new();

fn slot() -> &'static RwLock<Arc<dyn Sink>> {
    DEFAULT_SINK.get_or_init(|| RwLock::new(Arc::new(ConsoleSink::stdout())))
}

/// Returns the current default sink.
pub fn default_sink() -> Arc<dyn Sink> {
    slot().read().unwrap_or_else(PoisonError::into_inner).clone()
}

/// Replaces the default sink for handles created from now on.
pub fn set_default_sink(sink: Arc<dyn Sink>) {
    *slot().write().unwrap_or_else(PoisonError::into_inner) = sink;
}
