//SPDX-License-Identifier: MIT OR Apache-2.0
use crate::log_line::LogLine;
use std::fmt::Debug;

/**
Destination for formatted lines.

A sink is shared by every handle bound to it, possibly across threads. Implementations
write each line atomically with respect to other lines.
*/
pub trait Sink: Debug + Send + Sync {
    /**
        Writes the line.

        Failures are the sink's business; this never reports them to the handle.
    */
    fn finish_line(&self, line: LogLine);
}

/*
Boilerplate notes.

# Sink

Clone doesn't make sense on the trait; sinks are shared through Arc.
PartialEq/Eq: data equality vs provenance is unclear, skip.
Default is not sensible since a sink may need a destination to write to.
Send/Sync are required because handles move between threads.
*/
