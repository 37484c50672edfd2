// SPDX-License-Identifier: MIT OR Apache-2.0

//! Clock types that work on native and WebAssembly targets.
//!
//! Handles measure their elapsed time with [`Instant`]. On native platforms it
//! comes from `std::time`; `std::time::Instant::now` panics on
//! `wasm32-unknown-unknown`, so there it comes from `web_time`.
//!
//! [`Duration`] is re-exported at the crate root for
//! [`Stat::elapsed`](crate::Stat::elapsed).

#[cfg(not(target_arch = "wasm32"))]
pub use std::time::{Duration, Instant};
#[cfg(target_arch = "wasm32")]
pub use web_time::{Duration, Instant};
