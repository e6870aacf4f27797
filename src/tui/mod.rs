//! Terminal User Interface
//!
//! Each location is shown as a page. Selecting an agent does not patch the
//! running page: the page is dropped and a new one is loaded from the target
//! URL, so nothing tied to the previous agent or thread survives.

mod input;
mod layout;
mod render;

pub use input::{handle_key_event, handle_pointer_down, handle_pointer_move};
pub use render::render;

use crate::app::{App, Event, Handler};
use crate::config::Config;
use crate::location::{Location, QueryStore};
use anyhow::Result;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use std::io;
use tracing::info;
use url::Url;

/// Source of page events
pub trait EventSource {
    /// Block until the next event.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source fails
    fn next_event(&mut self) -> Result<Event>;
}

impl EventSource for Handler {
    fn next_event(&mut self) -> Result<Event> {
        self.next()
    }
}

/// How a page stopped running
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageExit {
    /// The user quit
    Quit,
    /// The page asked to be replaced by this location
    Navigate(Url),
}

/// Run the TUI starting at `location`
///
/// Returns the location of the page that was showing when the user quit.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn to
pub fn run(location: Location, config: &Config) -> Result<Url> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut events = Handler::new(config.poll_interval_ms);
    let result = run_pages(&mut terminal, location, config, &mut events);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Load pages until the user quits, performing a full reload on navigation
///
/// # Errors
///
/// Returns an error if drawing or reading events fails
pub fn run_pages<B: Backend>(
    terminal: &mut Terminal<B>,
    mut location: Location,
    config: &Config,
    events: &mut impl EventSource,
) -> Result<Url> {
    loop {
        let mut app = App::load(location, config.clone());
        match run_page(terminal, &mut app, events)? {
            PageExit::Quit => return Ok(app.location().href().clone()),
            PageExit::Navigate(target) => {
                info!(%target, "reloading page");
                drop(app);
                location = Location::new(target);
            }
        }
    }
}

/// Drive one page until it quits or requests navigation
///
/// # Errors
///
/// Returns an error if drawing or reading events fails
pub fn run_page<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &mut impl EventSource,
) -> Result<PageExit> {
    loop {
        let frame_area = terminal.draw(|frame| render(frame, app))?.area;

        match events.next_event()? {
            Event::Key(key) => handle_key_event(app, key.code, key.modifiers),
            Event::PointerDown(position) => handle_pointer_down(app, position, frame_area),
            Event::PointerMove(position) => handle_pointer_move(app, position, frame_area),
            Event::Tick | Event::Resize(_, _) => {}
        }

        if let Some(target) = app.take_navigation() {
            return Ok(PageExit::Navigate(target));
        }
        if app.should_quit {
            return Ok(PageExit::Quit);
        }
    }
}
