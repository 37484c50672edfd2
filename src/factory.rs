// SPDX-License-Identifier: MIT OR Apache-2.0

//! Construction of [`Stat`] handles.
//!
//! A [`Factory`] bundles what a handle is bound to: a sink, an [`OutputConfig`],
//! and optionally a styler. [`Factory::global`] uses the process-wide instances,
//! which is what [`stat!`](crate::stat) and [`stat_dbg!`](crate::stat_dbg) do
//! when no factory is named.
//!
//! An application that prefers explicit wiring builds one factory at startup and
//! passes it around:
//!
//! ```rust
//! use statlog::{ConsoleSink, Factory, OutputConfig, Category};
//! use statlog::console_sink::Stream;
//! use std::sync::Arc;
//!
//! let config = Arc::new(OutputConfig::new());
//! config.set(Category::Start, false);
//!
//! let factory = Factory::new(Arc::new(ConsoleSink::new(Stream::Stderr, false)))
//!     .with_config(config);
//! let stat = statlog::stat!(in factory, statlog::fields! { "job" => 12 });
//! stat.done();
//! ```

use crate::default_sink::default_sink;
use crate::output_config::output_config;
use crate::sink::Sink;
use crate::style::Styler;
use crate::{Fields, OutputConfig, Stat};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Factory {
    sink: Arc<dyn Sink>,
    config: Arc<OutputConfig>,
    styler: Option<Arc<dyn Styler>>,
}

impl Factory {
    /// The default sink, the process-wide configuration and the process-wide styler.
    pub fn global() -> Self {
        Self::new(default_sink())
    }

    /// Binds to `sink`, with the process-wide configuration and styler.
    pub fn new(sink: Arc<dyn Sink>) -> Self {
        Self {
            sink,
            config: output_config(),
            styler: None,
        }
    }

    pub fn with_config(mut self, config: Arc<OutputConfig>) -> Self {
        self.config = config;
        self
    }

    /// Paints with `styler` instead of following the process-wide one.
    pub fn with_styler(mut self, styler: Arc<dyn Styler>) -> Self {
        self.styler = Some(styler);
        self
    }

    pub fn sink(&self) -> &Arc<dyn Sink> {
        &self.sink
    }

    pub fn config(&self) -> &Arc<OutputConfig> {
        &self.config
    }

    /**
    Creates a handle and writes its `start` line.

    `caller` should name the function asking for the handle; the macros pass
    [`function_name!`](crate::function_name). The start line is attributed to the
    caller of this method.
    */
    #[track_caller]
    pub fn create(&self, caller: impl Into<String>, fields: Option<&Fields>) -> Stat {
        self.open(caller.into(), fields, false)
    }

    /// Like [`Factory::create`], but the handle is governed only by [`Category::Debug`](crate::Category::Debug).
    #[track_caller]
    pub fn create_debug(&self, caller: impl Into<String>, fields: Option<&Fields>) -> Stat {
        self.open(caller.into(), fields, true)
    }

    #[track_caller]
    fn open(&self, caller: String, fields: Option<&Fields>, debug: bool) -> Stat {
        Stat::open(
            self.sink.clone(),
            self.config.clone(),
            self.styler.clone(),
            caller,
            fields,
            debug,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemorySink;
    use crate::default_sink::set_default_sink;
    use crate::style::PlainStyler;
    use crate::test_support::GLOBALS_GUARD;
    use std::sync::PoisonError;

    #[test]
    fn global_factory_uses_current_default_sink() {
        let _guard = GLOBALS_GUARD.lock().unwrap_or_else(PoisonError::into_inner);
        let previous = default_sink();
        let capture = Arc::new(InMemorySink::new());
        set_default_sink(capture.clone());

        let factory = Factory::global().with_styler(Arc::new(PlainStyler));
        set_default_sink(previous);

        let stat = factory.create("setup", None);
        stat.done();
        assert_eq!(capture.take_lines().len(), 2);
    }

    #[test]
    fn macro_names_the_calling_function() {
        let sink = Arc::new(InMemorySink::new());
        let factory = Factory::new(sink.clone())
            .with_config(Arc::new(OutputConfig::new()))
            .with_styler(Arc::new(PlainStyler));
        let line = line!() + 1;
        let stat = crate::stat!(in factory);
        assert_eq!(
            stat.caller(),
            "statlog::factory::tests::macro_names_the_calling_function"
        );
        assert_eq!(
            sink.take_lines(),
            vec![format!("factory.rs:{line} : {} start", stat.caller())]
        );
    }
}
