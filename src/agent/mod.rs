//! Agent registry
//!
//! The fixed, ordered set of agents a user can switch between.

mod registry;

pub use registry::{AGENTS, Agent, all, find, position};
