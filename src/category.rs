//SPDX-License-Identifier: MIT OR Apache-2.0

/**
The classes of event a [crate::Stat] can emit.

Each category has its own switch on [crate::OutputConfig].
*/
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// A handle was created
    Start,
    /// A handle reported its elapsed time
    Done,
    /// Informational message
    Info,
    /// Suspicious condition
    Warn,
    /// Runtime error, including failures passed to `done`
    Error,
    /// Pretty-printed structured value
    Detail,
    /// Master switch for every handle created in debug mode
    Debug,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 7] = [
        Category::Start,
        Category::Done,
        Category::Info,
        Category::Warn,
        Category::Error,
        Category::Detail,
        Category::Debug,
    ];

    /// Lowercase name of the category.
    pub const fn name(self) -> &'static str {
        match self {
            Category::Start => "start",
            Category::Done => "done",
            Category::Info => "info",
            Category::Warn => "warn",
            Category::Error => "error",
            Category::Detail => "detail",
            Category::Debug => "debug",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
