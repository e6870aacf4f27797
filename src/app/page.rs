//! One loaded page
//!
//! An [`App`] is everything derived from a single location. Navigating never
//! mutates an `App` in place: the runtime drops it and loads a new one from
//! the target URL.

use crate::agent::Agent;
use crate::config::Config;
use crate::location::{Location, Navigator, QueryStore};
use crate::pointer::{PointerEvents, Position};
use crate::selection;
use crate::selector::AgentSelector;
use tracing::debug;
use url::Url;

/// Navigation requested by the page, waiting for the runtime to perform it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PendingNavigation {
    target: Option<Url>,
}

impl PendingNavigation {
    /// Take the requested target, leaving nothing pending.
    pub const fn take(&mut self) -> Option<Url> {
        self.target.take()
    }

    /// Whether a navigation is waiting.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.target.is_some()
    }
}

impl Navigator for PendingNavigation {
    fn navigate(&mut self, target: Url) {
        debug!(%target, "navigation requested");
        self.target = Some(target);
    }
}

/// State of the currently loaded page
#[derive(Debug)]
pub struct App {
    /// Application configuration
    pub config: Config,
    /// Set when the user asks to quit
    pub should_quit: bool,
    location: Location,
    pointer: PointerEvents,
    selector: AgentSelector,
    navigation: PendingNavigation,
}

impl App {
    /// Load a fresh page for `location`.
    #[must_use]
    pub fn load(location: Location, config: Config) -> Self {
        let pointer = PointerEvents::new();
        let selector = AgentSelector::mount(&pointer);
        debug!(location = %location.href(), "page loaded");
        Self {
            config,
            should_quit: false,
            location,
            pointer,
            selector,
            navigation: PendingNavigation::default(),
        }
    }

    /// The page location.
    #[must_use]
    pub const fn location(&self) -> &Location {
        &self.location
    }

    /// The agent selected by the location, resolved on every call.
    #[must_use]
    pub fn current_agent(&self) -> &'static Agent {
        selection::current_agent(&self.location)
    }

    /// The selector widget.
    #[must_use]
    pub const fn selector(&self) -> &AgentSelector {
        &self.selector
    }

    /// Mutable access to the selector widget.
    pub const fn selector_mut(&mut self) -> &mut AgentSelector {
        &mut self.selector
    }

    /// The page's pointer-down stream.
    #[must_use]
    pub const fn pointer_events(&self) -> &PointerEvents {
        &self.pointer
    }

    /// Deliver a pointer press to page-wide listeners.
    pub fn dispatch_pointer_down(&self, position: Position) {
        self.pointer.dispatch(position);
    }

    /// Open or close the agent menu.
    pub fn toggle_menu(&mut self) {
        let current = self.current_agent();
        self.selector.toggle(current);
    }

    /// Choose an agent from the open menu.
    pub fn select_agent(&mut self, agent_id: &str) -> bool {
        self.selector
            .select(agent_id, &self.location, &mut self.navigation)
    }

    /// Choose the highlighted agent from the open menu.
    pub fn select_highlighted(&mut self) -> bool {
        self.selector
            .select_highlighted(&self.location, &mut self.navigation)
    }

    /// Whether the page has asked to be replaced.
    #[must_use]
    pub const fn has_pending_navigation(&self) -> bool {
        self.navigation.is_pending()
    }

    /// Take the pending navigation target, if any.
    pub const fn take_navigation(&mut self) -> Option<Url> {
        self.navigation.take()
    }
}
