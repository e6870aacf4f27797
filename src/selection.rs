//! Current-agent resolution
//!
//! The current agent is never stored. It is derived from the location on
//! every call, so a location changed from elsewhere is picked up on the next
//! render.

use crate::agent::{self, AGENTS, Agent};
use crate::location::{ASSISTANT_PARAM, QueryStore};

/// Resolve a raw selection value to an agent.
///
/// Values that match no registered id (including no value at all) fall back
/// to the first agent in display order.
#[must_use]
pub fn resolve(value: Option<&str>) -> &'static Agent {
    value.and_then(agent::find).unwrap_or(&AGENTS[0])
}

/// The agent selected by `store`'s location.
#[must_use]
pub fn current_agent(store: &impl QueryStore) -> &'static Agent {
    resolve(store.query(ASSISTANT_PARAM).as_deref())
}
