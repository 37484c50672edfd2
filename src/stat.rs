// SPDX-License-Identifier: MIT OR Apache-2.0

//! The logging handle.
//!
//! A [`Stat`] is bound to a sink, remembers when and by whom it was created, and
//! carries a context suffix rendered once from its [`Fields`]. Every line it
//! writes has the shape
//!
//! ```text
//! <file>:<line> : <caller> <label><context>
//! <file>:<line> : <caller> <label><context>: <payload>
//! ```
//!
//! where `<file>:<line>` is the call site of the operation that produced the line.
//!
//! # Lifecycle
//!
//! Creation writes a `start` line. [`Stat::done`] writes a `done` line with the
//! time elapsed since creation, preceded by one `error` line per failure handed to
//! [`Stat::done_with`]. `done` is a report, not a teardown: the handle stays usable
//! and a second `done` measures from the same begin time again.
//!
//! # Gating
//!
//! Each operation checks its [`Category`] on the handle's [`OutputConfig`] before
//! formatting anything. Debug-mode handles check [`Category::Debug`] instead, with
//! one exception: [`Stat::error_at`] always checks [`Category::Error`]. Failures
//! handed to `done_with` pass both the done gate and the Error flag.
//!
//! ```rust
//! use statlog::{Factory, InMemorySink};
//! use statlog::style::PlainStyler;
//! use std::sync::Arc;
//!
//! let sink = Arc::new(InMemorySink::new());
//! let factory = Factory::new(sink.clone()).with_styler(Arc::new(PlainStyler));
//!
//! let stat = factory.create("app::load", Some(&statlog::fields! { "user" => "alice" }));
//! statlog::error!(stat, "failed: {}", 42);
//! stat.done();
//!
//! let lines = sink.take_lines();
//! assert_eq!(lines.len(), 3);
//! assert!(lines[0].ends_with(": app::load start user[alice]"));
//! assert!(lines[1].ends_with("error user[alice]: failed: 42"));
//! assert!(lines[2].contains("done user[alice]: time["));
//! ```

use crate::call_site::CallSite;
use crate::log_line::LogLine;
use crate::sink::Sink;
use crate::style::{Style, Styler, global_styler};
use crate::sys::{Duration, Instant};
use crate::{Category, Fields, OutputConfig};
use serde::Serialize;
use std::fmt::{self, Display};
use std::sync::Arc;

/// A failure that may or may not be present, as handed to [`Stat::done_with`].
pub trait Failure {
    fn failure(&self) -> Option<&dyn Display>;
}

impl<E: Display> Failure for Option<E> {
    fn failure(&self) -> Option<&dyn Display> {
        self.as_ref().map(|e| e as &dyn Display)
    }
}

impl<T, E: Display> Failure for Result<T, E> {
    fn failure(&self) -> Option<&dyn Display> {
        self.as_ref().err().map(|e| e as &dyn Display)
    }
}

impl<F: Failure + ?Sized> Failure for &F {
    fn failure(&self) -> Option<&dyn Display> {
        (**self).failure()
    }
}

/// A context-carrying logging handle.
///
/// Created by a [`Factory`](crate::Factory), usually through
/// [`stat!`](crate::stat) or [`stat_dbg!`](crate::stat_dbg).
#[derive(Debug)]
pub struct Stat {
    sink: Arc<dyn Sink>,
    config: Arc<OutputConfig>,
    /// `None` paints through the process-wide styler at each line.
    styler: Option<Arc<dyn Styler>>,
    begin_time: Instant,
    caller: String,
    context: String,
    debug: bool,
}

impl Stat {
    #[track_caller]
    pub(crate) fn open(
        sink: Arc<dyn Sink>,
        config: Arc<OutputConfig>,
        styler: Option<Arc<dyn Styler>>,
        caller: String,
        fields: Option<&Fields>,
        debug: bool,
    ) -> Self {
        let begin_time = Instant::now();
        let context = match fields {
            Some(fields) => {
                let painter = styler.clone().unwrap_or_else(global_styler);
                fields.render(painter.as_ref())
            }
            None => String::new(),
        };
        let stat = Self {
            sink,
            config,
            styler,
            begin_time,
            caller,
            context,
            debug,
        };
        if stat.allows(Category::Start) {
            stat.write(
                CallSite::caller(),
                Category::Start,
                Style::Start,
                format_args!(""),
            );
        }
        stat
    }

    fn styler(&self) -> Arc<dyn Styler> {
        self.styler.clone().unwrap_or_else(global_styler)
    }

    fn allows(&self, category: Category) -> bool {
        self.config.allows(self.debug, category)
    }

    fn write(&self, site: CallSite, category: Category, label: Style, args: fmt::Arguments<'_>) {
        let styler = self.styler();
        let mut line = LogLine::new(category, site);
        line.log_owned(format!("{} : {} ", site, self.caller));
        line.log_owned(styler.label(label));
        line.log(&self.context);
        //an empty format string means a bare event
        if args.as_str() != Some("") {
            line.log(": ");
            line.log_owned(fmt::format(args));
        }
        self.sink.finish_line(line);
    }

    /// Name of the function that created this handle, with `(name)` appended per [`Stat::sub`] level.
    pub fn caller(&self) -> &str {
        &self.caller
    }

    /// The rendered context suffix, possibly empty.
    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn begin_time(&self) -> Instant {
        self.begin_time
    }

    pub fn elapsed(&self) -> Duration {
        self.begin_time.elapsed()
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Writes an `info` line. Use [`info!`](crate::info) for `format!`-style arguments.
    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        if self.allows(Category::Info) {
            self.write(CallSite::caller(), Category::Info, Style::Info, args);
        }
    }

    /// Writes a `warn` line. Use [`warn!`](crate::warn) for `format!`-style arguments.
    #[track_caller]
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        if self.allows(Category::Warn) {
            self.write(CallSite::caller(), Category::Warn, Style::Warn, args);
        }
    }

    /// Writes an `error` line. Use [`error!`](crate::error) for `format!`-style arguments.
    #[track_caller]
    pub fn error(&self, args: fmt::Arguments<'_>) {
        if self.allows(Category::Error) {
            self.write(CallSite::caller(), Category::Error, Style::Error, args);
        }
    }

    /**
    Writes an `error` line attributed to `site` instead of the immediate caller.

    Helpers use this to report their own caller's location. Gated by
    [`Category::Error`] alone, even on a debug-mode handle.

    ```rust
    use statlog::{CallSite, Factory, InMemorySink};
    use std::sync::Arc;

    #[track_caller]
    fn reject(stat: &statlog::Stat, reason: &str) {
        stat.error_at(CallSite::caller(), format_args!("rejected: {reason}"));
    }

    let sink = Arc::new(InMemorySink::new());
    let factory = Factory::new(sink.clone()).with_styler(Arc::new(statlog::style::PlainStyler));
    let stat = statlog::stat!(in factory);
    reject(&stat, "quota");
    assert!(sink.drain_logs().contains("error: rejected: quota"));
    ```
    */
    pub fn error_at(&self, site: CallSite, args: fmt::Arguments<'_>) {
        if self.config.is_enabled(Category::Error) {
            self.write(site, Category::Error, Style::Error, args);
        }
    }

    /**
    Writes `value` as tab-indented JSON under `label`, introduced by `head`.

    The payload is `<head> -> ` followed by a newline and the JSON. If `value`
    fails to serialize the JSON part is left empty.
    */
    #[track_caller]
    pub fn detail<T: Serialize + ?Sized>(&self, label: Style, head: &str, value: &T) {
        if self.allows(Category::Detail) {
            let body = pretty_json(value).unwrap_or_default();
            self.write(
                CallSite::caller(),
                Category::Detail,
                label,
                format_args!("{head} -> \n{body}"),
            );
        }
    }

    /**
    Derives a handle named `<caller>(<name>)`.

    The child shares this handle's sink, configuration, styler and debug mode, but
    has its own context and begin time, and writes its own `start` line. This handle
    is not affected.
    */
    #[track_caller]
    pub fn sub(&self, name: &str, fields: Option<&Fields>) -> Stat {
        Stat::open(
            self.sink.clone(),
            self.config.clone(),
            self.styler.clone(),
            format!("{}({})", self.caller, name),
            fields,
            self.debug,
        )
    }

    /// Writes the elapsed time since creation.
    #[track_caller]
    pub fn done(&self) {
        self.finish(CallSite::caller(), std::iter::empty::<Option<&str>>());
    }

    /**
    Writes one `failure` error line per present failure, then the elapsed time.

    Nothing is written unless the handle's done gate is open ([`Category::Done`],
    or [`Category::Debug`] for debug handles). Past that gate, failure lines are
    attributed to the caller of `done_with` and also need [`Category::Error`].

    ```rust
    use statlog::{Factory, InMemorySink};
    use std::sync::Arc;

    let sink = Arc::new(InMemorySink::new());
    let stat = statlog::stat!(in Factory::new(sink.clone()));
    let parsed: Result<u8, _> = "x".parse::<u8>();
    stat.done_with([&parsed]);
    let lines = sink.take_lines();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains("invalid digit"));
    ```
    */
    #[track_caller]
    pub fn done_with<I>(&self, failures: I)
    where
        I: IntoIterator,
        I::Item: Failure,
    {
        self.finish(CallSite::caller(), failures);
    }

    fn finish<I>(&self, site: CallSite, failures: I)
    where
        I: IntoIterator,
        I::Item: Failure,
    {
        if !self.allows(Category::Done) {
            return;
        }
        let styler = self.styler();
        for failure in failures {
            if let Some(err) = failure.failure() {
                self.error_at(
                    site,
                    format_args!("{}: {}", styler.label(Style::Failure), err),
                );
            }
        }
        let elapsed = format!("{:?}", self.elapsed());
        self.write(
            site,
            Category::Done,
            Style::Done,
            format_args!("time[{}]", styler.paint(Style::Time, &elapsed)),
        );
    }
}

fn pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::PlainStyler;
    use crate::{Factory, InMemorySink};
    use std::collections::BTreeMap;

    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::*;

    fn harness() -> (Arc<InMemorySink>, Factory) {
        let sink = Arc::new(InMemorySink::new());
        let factory = Factory::new(sink.clone())
            .with_config(Arc::new(OutputConfig::new()))
            .with_styler(Arc::new(PlainStyler));
        (sink, factory)
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn start_line_format() {
        let (sink, factory) = harness();
        let line = line!() + 1;
        let _stat = factory.create("app::main", Some(&crate::fields! { "a" => 1, "b" => "x" }));
        assert_eq!(
            sink.take_lines(),
            vec![format!("stat.rs:{line} : app::main start a[1], b[x]")]
        );
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn empty_format_has_no_payload() {
        let (sink, factory) = harness();
        let stat = factory.create("app::main", None);
        sink.take_lines();
        stat.info(format_args!(""));
        let lines = sink.take_lines();
        assert!(lines[0].ends_with(" : app::main info"), "{lines:?}");
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn payload_follows_context() {
        let (sink, factory) = harness();
        let stat = factory.create("app::main", Some(&crate::fields! { "k" => "v" }));
        sink.take_lines();
        stat.warn(format_args!("disk at {}%", 91));
        assert!(sink.take_lines()[0].ends_with("app::main warn k[v]: disk at 91%"));
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn detail_is_tab_indented_json() {
        let (sink, factory) = harness();
        let stat = factory.create("app::main", None);
        sink.take_lines();
        let mut value = BTreeMap::new();
        value.insert("id", 7);
        stat.detail(Style::Info, "request", &value);
        let lines = sink.take_lines();
        assert!(lines[0].ends_with("app::main info: request -> \n{\n\t\"id\": 7\n}"), "{lines:?}");
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("nope"))
        }
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn detail_survives_serialization_failure() {
        let (sink, factory) = harness();
        let stat = factory.create("app::main", None);
        sink.take_lines();
        stat.detail(Style::Warn, "broken", &Unserializable);
        let lines = sink.take_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("warn: broken -> \n"));
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn failures_come_before_elapsed_time() {
        let (sink, factory) = harness();
        let stat = factory.create("app::main", None);
        sink.take_lines();
        stat.done_with([Some("boom"), None]);
        let lines = sink.take_lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("app::main error: failure: boom"));
        assert!(lines[1].contains("app::main done: time["));
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn absent_failures_only_report_time() {
        let (sink, factory) = harness();
        let stat = factory.create("app::main", None);
        sink.take_lines();
        stat.done_with([None::<&str>, None]);
        let ok: Result<(), String> = Ok(());
        stat.done_with([&ok]);
        let lines = sink.take_lines();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.contains(" done: time[")));
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn done_reports_from_the_same_begin_time() {
        let (sink, factory) = harness();
        let stat = factory.create("app::main", None);
        let begin = stat.begin_time();
        let first = stat.elapsed();
        stat.done();
        stat.done();
        let second = stat.elapsed();
        assert_eq!(stat.begin_time(), begin);
        assert!(second >= first);
        assert_eq!(sink.take_lines().len(), 3);
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn sub_appends_name_and_keeps_parent() {
        let (sink, factory) = harness();
        let parent = factory.create_debug("main", Some(&crate::fields! { "p" => 1 }));
        let child = parent.sub("worker", None);
        assert_eq!(child.caller(), "main(worker)");
        assert_eq!(child.context(), "");
        assert!(child.is_debug());
        assert_eq!(parent.caller(), "main");
        assert_eq!(parent.context(), " p[1]");
        let lines = sink.take_lines();
        assert!(lines[1].ends_with(" : main(worker) start"));
    }
}
