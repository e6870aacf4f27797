//! Screen geometry shared by rendering and mouse handling
//!
//! Input handlers recompute rectangles from the frame area with these
//! functions instead of storing layout state from the last draw.

use crate::agent::{self, Agent};
use crate::pointer::Position;
use crate::selector::{RenderedArea, TRIGGER_TOOLTIP};
use ratatui::layout::Rect;

/// Width of the open menu, borders included.
pub const MENU_WIDTH: u16 = 44;

/// Lines per agent row (name, description).
pub const ROW_HEIGHT: u16 = 2;

/// Text shown on the trigger.
#[must_use]
pub fn trigger_label(agent: &Agent, open: bool) -> String {
    let arrow = if open { "▴" } else { "▾" };
    format!(" {} {arrow} ", agent.name)
}

fn text_width(text: &str) -> u16 {
    u16::try_from(text.chars().count()).unwrap_or(u16::MAX)
}

/// Top line holding the title and the trigger.
#[must_use]
pub fn header_rect(area: Rect) -> Rect {
    Rect {
        height: area.height.min(1),
        ..area
    }
}

/// Bottom line holding key hints.
#[must_use]
pub fn status_rect(area: Rect) -> Rect {
    if area.height < 2 {
        return Rect { height: 0, ..area };
    }
    Rect {
        y: area.bottom().saturating_sub(1),
        height: 1,
        ..area
    }
}

/// Everything between header and status bar.
#[must_use]
pub fn body_rect(area: Rect) -> Rect {
    let top = header_rect(area).bottom();
    let bottom = status_rect(area).y.max(top);
    if area.height < 2 {
        return Rect {
            y: top,
            height: 0,
            ..area
        };
    }
    Rect {
        y: top,
        height: bottom.saturating_sub(top),
        ..area
    }
}

/// The trigger, right-aligned in the header with one cell of margin.
///
/// Its width does not depend on the open state.
#[must_use]
pub fn trigger_rect(area: Rect, current: &Agent) -> Rect {
    let header = header_rect(area);
    let width = text_width(&trigger_label(current, false)).min(header.width);
    let x = header
        .right()
        .saturating_sub(width.saturating_add(1))
        .max(header.x);
    Rect {
        x,
        y: header.y,
        width,
        height: header.height,
    }
}

/// The open menu, hanging below the trigger and aligned to its right edge.
#[must_use]
pub fn menu_rect(area: Rect, current: &Agent) -> Rect {
    let trigger = trigger_rect(area, current);
    let body = body_rect(area);
    let rows = u16::try_from(agent::all().len()).unwrap_or(u16::MAX);
    let width = MENU_WIDTH.min(area.width);
    let height = ROW_HEIGHT
        .saturating_mul(rows)
        .saturating_add(2)
        .min(body.height);
    let x = trigger.right().saturating_sub(width).max(area.x);
    Rect {
        x,
        y: body.y,
        width,
        height,
    }
}

/// Area of the `index`-th agent row inside `menu`, if it fits.
#[must_use]
pub fn row_rect(menu: Rect, index: usize) -> Option<Rect> {
    let index = u16::try_from(index).ok()?;
    let y = menu
        .y
        .checked_add(1)?
        .checked_add(ROW_HEIGHT.checked_mul(index)?)?;
    let inner_bottom = menu.bottom().saturating_sub(1);
    if y.checked_add(ROW_HEIGHT)? > inner_bottom || menu.width < 2 {
        return None;
    }
    Some(Rect {
        x: menu.x + 1,
        y,
        width: menu.width - 2,
        height: ROW_HEIGHT,
    })
}

/// Index of the agent row under `position` in the open menu.
#[must_use]
pub fn row_at(area: Rect, current: &Agent, position: Position) -> Option<usize> {
    let menu = menu_rect(area, current);
    (0..agent::all().len()).find(|&index| {
        row_rect(menu, index).is_some_and(|row| position.is_within(row))
    })
}

/// Tooltip shown below the trigger.
#[must_use]
pub fn tooltip_rect(area: Rect, current: &Agent) -> Rect {
    let trigger = trigger_rect(area, current);
    let body = body_rect(area);
    let width = text_width(TRIGGER_TOOLTIP)
        .saturating_add(2)
        .min(area.width);
    let x = trigger.right().saturating_sub(width).max(area.x);
    Rect {
        x,
        y: body.y,
        width,
        height: body.height.min(1),
    }
}

/// Number of agent rows that fit inside `menu`.
#[must_use]
pub fn visible_rows(menu: Rect) -> usize {
    (0..agent::all().len())
        .take_while(|&index| row_rect(menu, index).is_some())
        .count()
}

/// Regions the selector occupies: the trigger, plus the menu when open.
#[must_use]
pub fn rendered_area(area: Rect, current: &Agent, open: bool) -> RenderedArea {
    let menu = open.then(|| menu_rect(area, current));
    RenderedArea::new(trigger_rect(area, current), menu)
}
