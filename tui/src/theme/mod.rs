//! Theme and Colors
//!
//! The board's soft pink palette. Cards, inputs and the header all draw from
//! these constants; completed tasks fade to greys and plum.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Palette
// ============================================================================

/// Screen background - lavender blush
pub const BACKGROUND: Color = Color::Rgb(255, 240, 245);

/// Header fill and idle outlines - light pink
pub const LIGHT_PINK: Color = Color::Rgb(255, 182, 193);

/// Accents, focused outlines, the add button - hot pink
pub const HOT_PINK: Color = Color::Rgb(255, 105, 180);

/// Delete icon and pressed/selected accents - deep pink
pub const DEEP_PINK: Color = Color::Rgb(255, 20, 147);

/// Completed card border, empty-state hint - plum
pub const PLUM: Color = Color::Rgb(221, 160, 221);

/// Completed card fill - misty rose
pub const MISTY_ROSE: Color = Color::Rgb(255, 228, 225);

/// Card and input fill
pub const WHITE: Color = Color::Rgb(255, 255, 255);

// ============================================================================
// Text Colors
// ============================================================================

/// Task titles
pub const TEXT_DARK: Color = Color::Rgb(51, 51, 51);

/// Descriptions and idle labels
pub const TEXT_SECONDARY: Color = Color::Rgb(102, 102, 102);

/// Completed titles
pub const TEXT_MUTED: Color = Color::Rgb(153, 153, 153);

/// Completed descriptions, placeholders
pub const TEXT_FAINT: Color = Color::Rgb(170, 170, 170);

// ============================================================================
// Styles
// ============================================================================

/// Outline for an input or card, brighter when focused
pub fn outline(focused: bool) -> Style {
    Style::default().fg(if focused { HOT_PINK } else { LIGHT_PINK })
}

/// Task title, struck through once completed
pub fn task_title(completed: bool) -> Style {
    if completed {
        Style::default()
            .fg(TEXT_MUTED)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(TEXT_DARK).add_modifier(Modifier::BOLD)
    }
}

/// Task description, struck through once completed
pub fn task_description(completed: bool) -> Style {
    if completed {
        Style::default()
            .fg(TEXT_FAINT)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(TEXT_SECONDARY)
    }
}

/// Card fill
pub fn card_fill(completed: bool) -> Style {
    Style::default().bg(if completed { MISTY_ROSE } else { WHITE })
}
