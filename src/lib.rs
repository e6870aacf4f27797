//! Agent Selector - pick the active AI agent for a page
//!
//! The selected agent lives in the `assistantId` query parameter of the page
//! location. The selector shows the current agent on a trigger, opens a menu
//! of all registered agents, and switches agent by navigating to a new
//! location, dropping any `threadId` on the way.

pub mod agent;
pub mod app;
pub mod config;
pub mod location;
pub mod paths;
pub mod pointer;
pub mod selection;
pub mod selector;
pub mod tui;

pub use agent::Agent;
pub use app::App;
pub use config::Config;
pub use location::{Location, QueryStore};
pub use selector::AgentSelector;
