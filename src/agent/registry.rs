//! Static agent definitions

use std::fmt;

/// A selectable agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Agent {
    /// Stable identifier stored in the `assistantId` query parameter
    pub id: &'static str,
    /// Label shown on the trigger and in the menu
    pub name: &'static str,
    /// One-line summary shown under the name in the menu
    pub description: &'static str,
}

/// Every agent, in display order. The first entry is the fallback.
pub const AGENTS: [Agent; 3] = [
    Agent {
        id: "compute-agent",
        name: "Compute Assistant",
        description: "Performs linear algebra computations",
    },
    Agent {
        id: "visual-agent",
        name: "Visualization Assistant",
        description: "Generates linear transformation images",
    },
    Agent {
        id: "socratic-agent",
        name: "Socratic Tutor",
        description: "Guides learning through questions",
    },
];

/// All agents in display order.
#[must_use]
pub const fn all() -> &'static [Agent] {
    &AGENTS
}

/// Look up an agent by id.
#[must_use]
pub fn find(id: &str) -> Option<&'static Agent> {
    AGENTS.iter().find(|agent| agent.id == id)
}

/// Row index of the agent with the given id.
#[must_use]
pub fn position(id: &str) -> Option<usize> {
    AGENTS.iter().position(|agent| agent.id == id)
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
