//! Mouse input handling (click-to-select).

use crate::agent;
use crate::app::App;
use crate::pointer::Position;
use crate::tui::layout;
use ratatui::layout::Rect;

/// Handle a left button press.
///
/// Page-wide listeners see the press first, the way a document-level
/// `mousedown` handler runs before the target's click handler. The press is
/// then hit-tested against the trigger and, if the menu is still open, its rows.
pub fn handle_pointer_down(app: &mut App, position: Position, frame_area: Rect) {
    app.dispatch_pointer_down(position);

    let current = app.current_agent();
    if position.is_within(layout::trigger_rect(frame_area, current)) {
        app.toggle_menu();
        return;
    }

    if !app.selector().is_open() {
        return;
    }
    if let Some(agent) =
        layout::row_at(frame_area, current, position).and_then(|index| agent::all().get(index))
    {
        app.select_agent(agent.id);
    }
}

/// Track whether the pointer rests on the trigger.
pub fn handle_pointer_move(app: &mut App, position: Position, frame_area: Rect) {
    let hovered = position.is_within(layout::trigger_rect(frame_area, app.current_agent()));
    app.selector_mut().set_trigger_hovered(hovered);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::location::{Location, QueryStore};
    use pretty_assertions::assert_eq;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    const FRAME: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    fn create_test_app(url: &str) -> Result<App, Box<dyn std::error::Error>> {
        Ok(App::load(Location::parse(url)?, Config::default()))
    }

    /// Draw once so the selector knows where it was rendered.
    fn settle(app: &App) -> Result<(), Box<dyn std::error::Error>> {
        let mut terminal = Terminal::new(TestBackend::new(FRAME.width, FRAME.height))?;
        terminal.draw(|frame| crate::tui::render(frame, app))?;
        Ok(())
    }

    fn click_trigger(app: &mut App) -> Result<(), Box<dyn std::error::Error>> {
        let trigger = layout::trigger_rect(FRAME, app.current_agent());
        settle(app)?;
        handle_pointer_down(app, Position::new(trigger.x + 1, trigger.y), FRAME);
        Ok(())
    }

    #[test]
    fn click_trigger_toggles() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = create_test_app("http://localhost:3000/")?;

        click_trigger(&mut app)?;
        assert!(app.selector().is_open());

        click_trigger(&mut app)?;
        assert!(!app.selector().is_open());
        assert_eq!(app.pointer_events().listener_count(), 0);
        Ok(())
    }

    #[test]
    fn click_outside_closes() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = create_test_app("http://localhost:3000/")?;
        click_trigger(&mut app)?;
        settle(&app)?;

        handle_pointer_down(&mut app, Position::new(2, 15), FRAME);
        assert!(!app.selector().is_open());
        assert!(!app.has_pending_navigation());
        Ok(())
    }

    #[test]
    fn click_header_beside_trigger_closes() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = create_test_app("http://localhost:3000/")?;
        click_trigger(&mut app)?;
        settle(&app)?;

        let menu = layout::menu_rect(FRAME, app.current_agent());
        let trigger = layout::trigger_rect(FRAME, app.current_agent());
        assert!(menu.x < trigger.x);

        handle_pointer_down(&mut app, Position::new(menu.x, trigger.y), FRAME);
        assert!(!app.selector().is_open());
        assert_eq!(app.pointer_events().listener_count(), 0);
        assert!(!app.has_pending_navigation());
        Ok(())
    }

    #[test]
    fn click_menu_border_keeps_open() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = create_test_app("http://localhost:3000/")?;
        click_trigger(&mut app)?;
        settle(&app)?;

        let menu = layout::menu_rect(FRAME, app.current_agent());
        handle_pointer_down(&mut app, Position::new(menu.x, menu.y + 1), FRAME);
        assert!(app.selector().is_open());
        Ok(())
    }

    #[test]
    fn click_row_navigates() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = create_test_app("http://localhost:3000/?assistantId=visual-agent&threadId=42")?;
        click_trigger(&mut app)?;
        settle(&app)?;

        let menu = layout::menu_rect(FRAME, app.current_agent());
        let row = layout::row_rect(menu, 2).ok_or("row missing")?;
        handle_pointer_down(&mut app, Position::new(row.x + 1, row.y + 1), FRAME);

        assert!(!app.selector().is_open());
        let target = app.take_navigation().map(Location::new).ok_or("no navigation")?;
        assert_eq!(
            target.href().as_str(),
            "http://localhost:3000/?assistantId=socratic-agent"
        );
        Ok(())
    }

    #[test]
    fn click_where_rows_would_be_while_closed_does_nothing() -> Result<(), Box<dyn std::error::Error>>
    {
        let mut app = create_test_app("http://localhost:3000/")?;
        settle(&app)?;

        let menu = layout::menu_rect(FRAME, app.current_agent());
        let row = layout::row_rect(menu, 1).ok_or("row missing")?;
        handle_pointer_down(&mut app, Position::new(row.x + 1, row.y), FRAME);

        assert!(!app.selector().is_open());
        assert!(!app.has_pending_navigation());
        Ok(())
    }

    #[test]
    fn hover_tracks_trigger() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = create_test_app("http://localhost:3000/")?;
        let trigger = layout::trigger_rect(FRAME, app.current_agent());

        handle_pointer_move(&mut app, Position::new(trigger.x, trigger.y), FRAME);
        assert!(app.selector().is_trigger_hovered());

        handle_pointer_move(&mut app, Position::new(0, 10), FRAME);
        assert!(!app.selector().is_trigger_hovered());
        Ok(())
    }
}
