//! TUI rendering
//!
//! - `colors`: Color palette definitions
//! - the header with the selector trigger, the page body, and the status bar
//! - the dropdown menu and trigger tooltip, drawn last so they overlay the body

mod colors;

use super::layout;
use crate::agent::{self, Agent};
use crate::app::App;
use crate::location::QueryStore;
use crate::selector::TRIGGER_TOOLTIP;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Render the full page
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let current = app.current_agent();
    let selector = app.selector();
    let open = selector.is_open();

    render_header(frame, app, current, area);
    render_body(frame, app, current, layout::body_rect(area));
    render_status_bar(frame, app, layout::status_rect(area));

    if open {
        let menu = layout::menu_rect(area, current);
        selector.set_visible_rows(layout::visible_rows(menu));
        render_menu(frame, app, current, menu);
    } else if selector.is_trigger_hovered() && app.config.show_tooltip {
        render_tooltip(frame, layout::tooltip_rect(area, current));
    }

    selector.set_rendered_area(layout::rendered_area(area, current, open));
}

fn render_header(frame: &mut Frame<'_>, app: &App, current: &Agent, area: Rect) {
    let header = layout::header_rect(area);
    let title = Paragraph::new(Line::from(Span::styled(
        " Agent Selector",
        Style::default()
            .fg(colors::TEXT_DIM)
            .add_modifier(Modifier::BOLD),
    )))
    .style(Style::default().bg(colors::SURFACE));
    frame.render_widget(title, header);

    let open = app.selector().is_open();
    let trigger_bg = if open || app.selector().is_trigger_hovered() {
        colors::SURFACE_HIGHLIGHT
    } else {
        colors::BORDER
    };
    let trigger = Paragraph::new(Line::from(Span::styled(
        layout::trigger_label(current, open),
        Style::default()
            .fg(colors::TEXT_PRIMARY)
            .bg(trigger_bg)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(trigger, layout::trigger_rect(area, current));
}

fn render_body(frame: &mut Frame<'_>, app: &App, current: &Agent, area: Rect) {
    let location = app.location();
    let thread = location.thread_id();

    let label = |text: &'static str| Span::styled(text, Style::default().fg(colors::TEXT_DIM));
    let value = |text: String| Span::styled(text, Style::default().fg(colors::TEXT_PRIMARY));

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            label("  Agent:     "),
            Span::styled(
                current.name,
                Style::default()
                    .fg(colors::ACCENT_POSITIVE)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![label("             "), label(current.description)]),
        Line::from(""),
        Line::from(vec![
            label("  Thread:    "),
            thread.map_or_else(
                || {
                    Span::styled(
                        "new thread",
                        Style::default()
                            .fg(colors::TEXT_MUTED)
                            .add_modifier(Modifier::ITALIC),
                    )
                },
                value,
            ),
        ]),
        Line::from(vec![label("  Location:  "), value(location.href().to_string())]),
    ];

    for (name, param) in location.extra_params() {
        lines.push(Line::from(vec![
            label("  "),
            Span::styled(format!("{name}="), Style::default().fg(colors::TEXT_MUTED)),
            value(param),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let hints = app.config.keys.status_hints(app.selector().is_open());
    let paragraph = Paragraph::new(Line::from(Span::styled(
        format!(" {hints} "),
        Style::default().fg(colors::TEXT_DIM),
    )))
    .style(Style::default().bg(colors::STATUS_BG));
    frame.render_widget(paragraph, area);
}

fn render_menu(frame: &mut Frame<'_>, app: &App, current: &Agent, area: Rect) {
    let block = Block::default()
        .title(" Agents ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
        .style(Style::default().bg(colors::MODAL_BG));

    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let highlighted = app.selector().highlighted();
    for (index, agent) in agent::all().iter().enumerate() {
        let Some(row) = layout::row_rect(area, index) else {
            break;
        };
        let is_current = agent.id == current.id;
        let check = if is_current { "✓ " } else { "  " };

        let mut name_style = Style::default().fg(colors::TEXT_PRIMARY);
        if is_current {
            name_style = name_style.add_modifier(Modifier::BOLD);
        }
        let row_style = if index == highlighted {
            Style::default().bg(colors::SURFACE_HIGHLIGHT)
        } else {
            Style::default()
        };

        let lines = vec![
            Line::from(Span::styled(format!("{check}{}", agent.name), name_style)),
            Line::from(Span::styled(
                format!("  {}", agent.description),
                Style::default().fg(colors::TEXT_MUTED),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).style(row_style), row);
    }
}

fn render_tooltip(frame: &mut Frame<'_>, area: Rect) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        format!(" {TRIGGER_TOOLTIP} "),
        Style::default().fg(colors::TEXT_PRIMARY),
    )))
    .style(Style::default().bg(colors::TOOLTIP_BG));
    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
