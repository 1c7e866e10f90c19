//! Lookup machinery used by the resolver.
//!
//! - `runner`: spawning lookup commands with an optional time limit
//! - `strategy`: the lookup strategies and their per-platform order
//! - `executable`: filesystem checks applied to every candidate

mod executable;
mod runner;
mod strategy;

pub(crate) use executable::is_executable;
pub use runner::{CommandRunner, Invocation, ProcessRunner};
pub use strategy::Strategy;

#[cfg(test)]
pub(crate) use executable::fixtures;
