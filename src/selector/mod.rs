//! Agent selector dropdown controller
//!
//! Owns the open/closed state of one mounted selector. While open, the
//! selector listens on the page's pointer stream and closes itself when a
//! press lands outside the area it last rendered into. Choosing an agent
//! closes the menu and hands a new location to a [`Navigator`].

use crate::agent::{self, Agent};
use crate::location::{Navigator, QueryStore, agent_switch_target};
use crate::pointer::{PointerEvents, Position, Subscription};
use crate::selection;
use ratatui::layout::Rect;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::{debug, info};

/// Tooltip text for the trigger.
pub const TRIGGER_TOOLTIP: &str = "Switch agent";

/// Screen regions a selector occupies after a render.
///
/// The trigger and the open menu are separate regions. Cells between them
/// belong to the page, not to the selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderedArea {
    /// The trigger control
    pub trigger: Rect,
    /// The open menu, if drawn
    pub menu: Option<Rect>,
}

impl RenderedArea {
    /// Regions for a trigger and, when open, its menu.
    #[must_use]
    pub const fn new(trigger: Rect, menu: Option<Rect>) -> Self {
        Self { trigger, menu }
    }

    /// Whether `position` lands on the trigger or the menu.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        position.is_within(self.trigger) || self.menu.is_some_and(|menu| position.is_within(menu))
    }
}

#[derive(Default)]
struct Shared {
    open: Cell<bool>,
    rendered: Cell<RenderedArea>,
    outside_click: RefCell<Option<Subscription>>,
}

impl Shared {
    fn close(&self) {
        if self.open.replace(false) {
            debug!("agent selector closed");
        }
        let subscription = self.outside_click.borrow_mut().take();
        drop(subscription);
    }
}

/// Dropdown state for one mounted selector.
///
/// Dropping the selector removes any outstanding outside-click listener.
pub struct AgentSelector {
    shared: Rc<Shared>,
    events: PointerEvents,
    highlighted: Cell<usize>,
    visible_rows: Cell<usize>,
    trigger_hovered: bool,
}

impl AgentSelector {
    /// Mount a closed selector on the given pointer stream.
    #[must_use]
    pub fn mount(events: &PointerEvents) -> Self {
        Self {
            shared: Rc::new(Shared::default()),
            events: events.clone(),
            highlighted: Cell::new(0),
            visible_rows: Cell::new(agent::all().len()),
            trigger_hovered: false,
        }
    }

    /// Whether the menu is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.shared.open.get()
    }

    /// Open the menu with the highlight on `current`.
    ///
    /// Does nothing if already open.
    pub fn open(&mut self, current: &Agent) {
        if self.is_open() {
            return;
        }
        self.highlighted.set(agent::position(current.id).unwrap_or(0));
        self.clamp_highlight();
        self.shared.open.set(true);

        let weak: Weak<Shared> = Rc::downgrade(&self.shared);
        let subscription = self.events.subscribe(move |position: Position| {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            if !shared.rendered.get().contains(position) {
                debug!(?position, "press outside agent selector");
                shared.close();
            }
        });
        *self.shared.outside_click.borrow_mut() = Some(subscription);
        debug!(highlighted = self.highlighted.get(), "agent selector opened");
    }

    /// Close the menu and release the outside-click listener.
    pub fn close(&mut self) {
        self.shared.close();
    }

    /// Flip between open and closed.
    pub fn toggle(&mut self, current: &Agent) {
        if self.is_open() {
            self.close();
        } else {
            self.open(current);
        }
    }

    /// Record where the trigger and menu were drawn.
    ///
    /// Presses on either region never count as outside clicks.
    pub fn set_rendered_area(&self, area: RenderedArea) {
        self.shared.rendered.set(area);
    }

    /// Regions recorded by the last [`Self::set_rendered_area`].
    #[must_use]
    pub fn rendered_area(&self) -> RenderedArea {
        self.shared.rendered.get()
    }

    /// Record how many menu rows fit on screen.
    ///
    /// The highlight stays on a drawn row, so it never points at an agent
    /// the user cannot see.
    pub fn set_visible_rows(&self, rows: usize) {
        self.visible_rows.set(rows.min(agent::all().len()));
        self.clamp_highlight();
    }

    /// Number of menu rows that fit on screen.
    #[must_use]
    pub fn visible_rows(&self) -> usize {
        self.visible_rows.get()
    }

    fn clamp_highlight(&self) {
        let last = self.visible_rows.get().saturating_sub(1);
        if self.highlighted.get() > last {
            self.highlighted.set(last);
        }
    }

    /// Whether an outside-click listener is currently registered.
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.shared.outside_click.borrow().is_some()
    }

    /// Row index of the keyboard highlight.
    #[must_use]
    pub fn highlighted(&self) -> usize {
        self.highlighted.get()
    }

    /// Move the keyboard highlight by `delta` rows, wrapping around the
    /// rows that fit on screen.
    pub fn move_highlight(&mut self, delta: isize) {
        let len = self.visible_rows.get();
        if len == 0 || !self.is_open() {
            return;
        }
        let len = isize::try_from(len).unwrap_or(isize::MAX);
        let current = isize::try_from(self.highlighted.get()).unwrap_or(0);
        let next = (current + delta).rem_euclid(len);
        self.highlighted.set(usize::try_from(next).unwrap_or(0));
    }

    /// Set whether the pointer is over the trigger.
    pub const fn set_trigger_hovered(&mut self, hovered: bool) {
        self.trigger_hovered = hovered;
    }

    /// Whether the pointer is over the trigger.
    #[must_use]
    pub const fn is_trigger_hovered(&self) -> bool {
        self.trigger_hovered
    }

    /// Choose `agent_id` and navigate to the location that selects it.
    ///
    /// Only acts while the menu is open and `agent_id` is registered.
    /// Returns whether a navigation was issued.
    pub fn select(
        &mut self,
        agent_id: &str,
        store: &impl QueryStore,
        navigator: &mut impl Navigator,
    ) -> bool {
        if !self.is_open() {
            debug!(agent_id, "ignoring selection while closed");
            return false;
        }
        let Some(agent) = agent::find(agent_id) else {
            debug!(agent_id, "ignoring selection of unregistered agent");
            return false;
        };

        self.close();
        let previous = selection::current_agent(store);
        let target = agent_switch_target(store.href(), agent.id);
        info!(from = previous.id, to = agent.id, %target, "switching agent");
        navigator.navigate(target);
        true
    }

    /// Select the highlighted row.
    pub fn select_highlighted(
        &mut self,
        store: &impl QueryStore,
        navigator: &mut impl Navigator,
    ) -> bool {
        let index = self.highlighted.get();
        if index >= self.visible_rows.get() {
            debug!(index, "highlighted row is not on screen");
            return false;
        }
        let Some(agent) = agent::all().get(index) else {
            return false;
        };
        self.select(agent.id, store, navigator)
    }
}

impl fmt::Debug for AgentSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentSelector")
            .field("open", &self.is_open())
            .field("rendered", &self.rendered_area())
            .field("listening", &self.is_listening())
            .field("highlighted", &self.highlighted.get())
            .field("visible_rows", &self.visible_rows.get())
            .field("trigger_hovered", &self.trigger_hovered)
            .finish_non_exhaustive()
    }
}
