//! Page-wide pointer-down listeners
//!
//! Mirrors a document-level `mousedown` stream: widgets subscribe while they
//! need to observe presses anywhere on screen and receive a [`Subscription`]
//! that removes the listener when dropped.

use ratatui::layout::Rect;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

/// A screen cell targeted by a pointer press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Zero-based column
    pub column: u16,
    /// Zero-based row
    pub row: u16,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(column: u16, row: u16) -> Self {
        Self { column, row }
    }

    /// Whether this position lies inside `area`.
    #[must_use]
    pub const fn is_within(self, area: Rect) -> bool {
        rect_contains(area, self.column, self.row)
    }
}

/// Hit test a cell against a rectangle.
#[must_use]
pub const fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    let within_x = x >= rect.x && x < rect.x.saturating_add(rect.width);
    let within_y = y >= rect.y && y < rect.y.saturating_add(rect.height);
    within_x && within_y
}

type Listener = Rc<dyn Fn(Position)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: BTreeMap<u64, Listener>,
}

/// Shared handle to the pointer-down stream of one page.
///
/// Cloning the handle shares the same listener set.
#[derive(Clone, Default)]
pub struct PointerEvents {
    registry: Rc<RefCell<Registry>>,
}

impl PointerEvents {
    /// Create an empty stream.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` for every subsequent pointer press.
    pub fn subscribe(&self, callback: impl Fn(Position) + 'static) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.insert(id, Rc::new(callback));
        tracing::debug!(id, "pointer listener registered");

        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Deliver a pointer press to every registered listener.
    ///
    /// Listeners may drop their own or other subscriptions while running;
    /// a listener removed mid-dispatch is not called afterwards.
    pub fn dispatch(&self, position: Position) {
        let ids: Vec<u64> = self.registry.borrow().listeners.keys().copied().collect();
        for id in ids {
            let listener = self.registry.borrow().listeners.get(&id).cloned();
            if let Some(listener) = listener {
                listener(position);
            }
        }
    }

    /// Number of live listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

impl fmt::Debug for PointerEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerEvents")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// A registered listener. Dropping it removes the listener.
#[must_use = "dropping a subscription removes the listener immediately"]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().listeners.remove(&self.id);
            tracing::debug!(id = self.id, "pointer listener removed");
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
