//! Application Layer
//!
//! Use cases that drive the calculator over a sequence of inputs and collect
//! the outcome into a [`RunReport`].

mod report;
mod run;

pub use report::{ExitStatus, MalformedLine, RunEntry, RunReport};
pub use run::{demo_requests, run_lines, run_requests};
