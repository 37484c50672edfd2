// SPDX-License-Identifier: MIT OR Apache-2.0

//! Macros that capture the caller for you.
//!
//! [`stat!`](crate::stat) and [`stat_dbg!`](crate::stat_dbg) name the enclosing
//! function via [`function_name!`](crate::function_name) and record the
//! invocation's source location. [`info!`](crate::info), [`warn!`](crate::warn)
//! and [`error!`](crate::error) forward `format!`-style arguments to the handle.
//!
//! # Forms
//!
//! ```rust
//! # use statlog::{Factory, InMemorySink};
//! # use std::sync::Arc;
//! # let factory = Factory::new(Arc::new(InMemorySink::new()));
//! let a = statlog::stat!();                                           // global factory, no context
//! let b = statlog::stat!(statlog::fields! { "id" => 1 });             // global factory, context
//! let c = statlog::stat!(in factory);                                 // named factory
//! let d = statlog::stat_dbg!(in factory, statlog::fields! { "id" => 1 });
//!
//! statlog::info!(c);                       // bare event, no payload
//! statlog::warn!(c, "retry {} of {}", 2, 5);
//! ```

/// Creates a [`Stat`](crate::Stat) named after the enclosing function.
#[macro_export]
macro_rules! stat {
    (in $factory:expr, $fields:expr) => {
        ($factory).create($crate::function_name!(), ::core::option::Option::Some(&$fields))
    };
    (in $factory:expr) => {
        ($factory).create($crate::function_name!(), ::core::option::Option::None)
    };
    () => {
        $crate::Factory::global().create($crate::function_name!(), ::core::option::Option::None)
    };
    ($fields:expr) => {
        $crate::Factory::global()
            .create($crate::function_name!(), ::core::option::Option::Some(&$fields))
    };
}

/// Creates a debug-mode [`Stat`](crate::Stat) named after the enclosing function.
#[macro_export]
macro_rules! stat_dbg {
    (in $factory:expr, $fields:expr) => {
        ($factory).create_debug($crate::function_name!(), ::core::option::Option::Some(&$fields))
    };
    (in $factory:expr) => {
        ($factory).create_debug($crate::function_name!(), ::core::option::Option::None)
    };
    () => {
        $crate::Factory::global()
            .create_debug($crate::function_name!(), ::core::option::Option::None)
    };
    ($fields:expr) => {
        $crate::Factory::global()
            .create_debug($crate::function_name!(), ::core::option::Option::Some(&$fields))
    };
}

/// Writes an `info` line; with only a handle, writes a bare event.
#[macro_export]
macro_rules! info {
    ($stat:expr $(,)?) => {
        ($stat).info(::core::format_args!(""))
    };
    ($stat:expr, $($arg:tt)+) => {
        ($stat).info(::core::format_args!($($arg)+))
    };
}

/// Writes a `warn` line; with only a handle, writes a bare event.
#[macro_export]
macro_rules! warn {
    ($stat:expr $(,)?) => {
        ($stat).warn(::core::format_args!(""))
    };
    ($stat:expr, $($arg:tt)+) => {
        ($stat).warn(::core::format_args!($($arg)+))
    };
}

/// Writes an `error` line; with only a handle, writes a bare event.
#[macro_export]
macro_rules! error {
    ($stat:expr $(,)?) => {
        ($stat).error(::core::format_args!(""))
    };
    ($stat:expr, $($arg:tt)+) => {
        ($stat).error(::core::format_args!($($arg)+))
    };
}
