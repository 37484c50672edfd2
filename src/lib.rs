//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# statlog

statlog is a small logging handle for function-level tracing.

# The problem

Print-style tracing of a function usually ends up as the same three chores,
repeated everywhere: say which function is talking, say what it is working on,
and say how long it took. statlog folds all three into one value.

# The handle

A [`Stat`] is created at the top of a function. It records

* the name of the function that created it,
* a context of key-value pairs, rendered once as ` key[value], key[value]`,
* the time it was created,

and writes a `start` line. Every later line carries the same function name and
context, prefixed with the file and line that produced it:

```text
server.rs:41 : my_app::server::accept start peer[10.0.0.7]
server.rs:48 : my_app::server::accept warn peer[10.0.0.7]: slow handshake
server.rs:52 : my_app::server::accept done peer[10.0.0.7]: time[1.82ms]
```

```rust
fn accept(peer: &str) -> Result<(), std::io::Error> {
    let stat = statlog::stat!(statlog::fields! { "peer" => peer });
    statlog::warn!(stat, "slow handshake");
    let result: Result<(), std::io::Error> = Ok(());
    stat.done_with([&result]);
    result
}
# accept("10.0.0.7").unwrap();
```

# Categories

Lines fall into seven [`Category`] classes, each with its own switch on an
[`OutputConfig`]: `start`, `done`, `info`, `warn`, `error`, `detail` and `debug`.
Handles created with [`stat_dbg!`] ignore the first six and answer only to
`debug`, so a whole family of noisy handles can be silenced with one switch.

# Sinks and styles

Lines go to a [`Sink`]. By default that is a [`ConsoleSink`] on stdout with a
microsecond timestamp; [`InMemorySink`] captures lines for tests. Labels, keys and
values are painted by a [`style::Styler`]; [`style::remove_format`] turns colour off
process-wide.

# Explicit wiring

The macros without `in` use process-wide state: [`default_sink::default_sink`],
[`output_config`] and [`style::global_styler`]. A [`Factory`] lets you pass your own
instead.
*/

mod call_site;
mod category;
pub mod console_sink;
pub mod default_sink;
mod factory;
mod fields;
mod inmemory_sink;
mod log_line;
mod macros;
mod output_config;
mod sink;
mod stat;
pub mod style;
mod sys;

pub use call_site::CallSite;
pub use category::Category;
pub use console_sink::ConsoleSink;
pub use factory::Factory;
pub use fields::Fields;
pub use inmemory_sink::InMemorySink;
pub use log_line::LogLine;
pub use output_config::{OutputConfig, output_config};
pub use sink::Sink;
pub use stat::{Failure, Stat};

#[doc(hidden)]
pub mod hidden {
    pub use crate::call_site::enclosing_function;
}

pub use sys::Duration;
