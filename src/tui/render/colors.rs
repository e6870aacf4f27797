//! Color palette for the TUI
//!
//! Muted colors with one accent for the current agent.

use ratatui::style::Color;

// UI Chrome
pub const BORDER: Color = Color::Rgb(100, 110, 130);
pub const SURFACE: Color = Color::Rgb(30, 32, 40);
pub const SURFACE_HIGHLIGHT: Color = Color::Rgb(50, 55, 70);
pub const STATUS_BG: Color = Color::Rgb(40, 42, 52);

// Text
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 230);
pub const TEXT_DIM: Color = Color::Rgb(130, 135, 150);
pub const TEXT_MUTED: Color = Color::Rgb(90, 95, 110);

// Overlays
pub const MODAL_BG: Color = Color::Rgb(25, 27, 35);
pub const TOOLTIP_BG: Color = Color::Rgb(60, 64, 80);

// Accent
pub const ACCENT_POSITIVE: Color = Color::Rgb(120, 180, 120);
