// SPDX-License-Identifier: MIT OR Apache-2.0

//! Painting of labels, keys and values.
//!
//! The handle never builds escape sequences itself. It asks a [`Styler`] to paint
//! a piece of text in a semantic [`Style`] and writes whatever comes back.
//!
//! Two stylers ship with the crate:
//!
//! - [`AnsiStyler`] colours text with the [`colored`] crate. It is the process-wide
//!   default. `colored` already turns itself off for `NO_COLOR`, `CLICOLOR=0` and
//!   non-terminal output.
//! - [`PlainStyler`] returns text unchanged.
//!
//! [`remove_format`] swaps the process-wide styler for [`PlainStyler`]. Handles that
//! paint through the global registry pick this up on their next line; context
//! suffixes that were already rendered keep their colours.

use colored::Colorize;
use std::fmt::Debug;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

/// Semantic styles the handle asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Info,
    Warn,
    Error,
    Start,
    Done,
    /// Elapsed time in a `done` line
    Time,
    /// The marker in front of a failure passed to `done`
    Failure,
    /// Context key
    Key,
    /// Context value
    Value,
}

impl Style {
    /// The text written for this style when it is used as a label.
    pub const fn label(self) -> &'static str {
        match self {
            Style::Info => "info",
            Style::Warn => "warn",
            Style::Error => "error",
            Style::Start => "start",
            Style::Done => "done",
            Style::Time => "time",
            Style::Failure => "failure",
            Style::Key => "key",
            Style::Value => "value",
        }
    }
}

/// Maps a [`Style`] and some text to displayable text.
pub trait Styler: Debug + Send + Sync {
    fn paint(&self, style: Style, text: &str) -> String;

    /// Paints the style's own label, e.g. `info`.
    fn label(&self, style: Style) -> String {
        self.paint(style, style.label())
    }
}

/// Leaves text untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn paint(&self, _style: Style, text: &str) -> String {
        text.to_string()
    }
}

/// Colours text with terminal escape codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AnsiStyler;

impl Styler for AnsiStyler {
    fn paint(&self, style: Style, text: &str) -> String {
        let painted = match style {
            Style::Info => text.green(),
            Style::Warn => text.yellow(),
            Style::Error => text.red(),
            Style::Start | Style::Done => text.bright_blue(),
            Style::Time => text.bright_magenta(),
            Style::Failure => text.bright_red(),
            Style::Key => text.cyan(),
            Style::Value => text.white().bold(),
        };
        painted.to_string()
    }
}

static GLOBAL_STYLER: OnceLock<RwLock<Arc<dyn Styler>>> = OnceLock::new();

fn registry() -> &'static RwLock<Arc<dyn Styler>> {
    GLOBAL_STYLER.get_or_init(|| RwLock::new(Arc::new(AnsiStyler)))
}

/// Returns the process-wide styler.
pub fn global_styler() -> Arc<dyn Styler> {
    registry()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Replaces the process-wide styler.
pub fn set_global_styler(styler: Arc<dyn Styler>) {
    *registry().write().unwrap_or_else(PoisonError::into_inner) = styler;
}

/**
Disables styling process-wide.

Every handle that paints through the global registry writes plain labels from now on.

```rust
use statlog::style::{global_styler, remove_format, Style, Styler};

remove_format();
assert_eq!(global_styler().label(Style::Warn), "warn");
```
*/
pub fn remove_format() {
    set_global_styler(Arc::new(PlainStyler));
}
