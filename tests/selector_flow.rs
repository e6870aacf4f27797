//! Library-level flow: mount a selector on a page, open it, pick an agent,
//! and reload the page from the navigation target.

use agent_selector::app::PendingNavigation;
use agent_selector::location::{ASSISTANT_PARAM, Location, Navigator, QueryStore};
use agent_selector::pointer::{PointerEvents, Position};
use agent_selector::selector::RenderedArea;
use agent_selector::{AgentSelector, App, Config, selection};
use pretty_assertions::assert_eq;
use ratatui::layout::Rect;
use url::Url;

struct Page {
    location: Location,
}

impl QueryStore for Page {
    fn href(&self) -> &Url {
        self.location.href()
    }
}

#[test]
fn test_selector_drives_navigation() -> Result<(), Box<dyn std::error::Error>> {
    let page = Page {
        location: Location::parse(
            "http://localhost:3000/?assistantId=visual-agent&threadId=42",
        )?,
    };
    let events = PointerEvents::new();
    let mut selector = AgentSelector::mount(&events);
    let mut navigation = PendingNavigation::default();

    let current = selection::current_agent(&page);
    assert_eq!(current.id, "visual-agent");

    selector.open(current);
    selector.set_rendered_area(RenderedArea::new(
        Rect::new(60, 0, 20, 1),
        Some(Rect::new(50, 1, 30, 9)),
    ));
    assert_eq!(events.listener_count(), 1);

    events.dispatch(Position::new(60, 5));
    assert!(selector.is_open());

    assert!(selector.select("socratic-agent", &page, &mut navigation));
    assert_eq!(events.listener_count(), 0);

    let target = navigation.take().ok_or("no navigation")?;
    assert_eq!(
        target.as_str(),
        "http://localhost:3000/?assistantId=socratic-agent"
    );

    let reloaded = App::load(Location::new(target), Config::default());
    assert_eq!(reloaded.current_agent().id, "socratic-agent");
    assert_eq!(reloaded.location().thread_id(), None);
    assert!(!reloaded.selector().is_open());
    Ok(())
}

#[test]
fn test_unmount_while_open_leaves_no_listener() -> Result<(), Box<dyn std::error::Error>> {
    let page = Page {
        location: Location::parse("http://localhost:3000/")?,
    };
    let events = PointerEvents::new();
    let mut selector = AgentSelector::mount(&events);
    selector.open(selection::current_agent(&page));
    assert_eq!(events.listener_count(), 1);

    drop(selector);
    assert_eq!(events.listener_count(), 0);

    // A later press has nothing left to reach.
    events.dispatch(Position::new(0, 0));
    assert_eq!(page.query(ASSISTANT_PARAM), None);
    Ok(())
}

#[test]
fn test_navigator_last_request_wins() -> Result<(), Box<dyn std::error::Error>> {
    let mut navigation = PendingNavigation::default();
    navigation.navigate(Url::parse("http://localhost:3000/?assistantId=compute-agent")?);
    navigation.navigate(Url::parse("http://localhost:3000/?assistantId=visual-agent")?);
    assert!(navigation.is_pending());
    assert_eq!(
        navigation.take().map(String::from).as_deref(),
        Some("http://localhost:3000/?assistantId=visual-agent")
    );
    assert!(!navigation.is_pending());
    Ok(())
}
