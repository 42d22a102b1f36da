//! Fallback shown by the recovery boundary.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::lookup::LookupError;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_TEXT, STATUS_ERROR};

pub const TRY_AGAIN_LABEL: &str = " Try again ";

/// Error message plus the "Try again" control that resets the boundary.
pub fn fallback_lines(error: &LookupError) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  There was an error:",
            Style::default().fg(STATUS_ERROR),
        )),
        Line::from(""),
    ];

    for message_line in error.message().lines() {
        lines.push(Line::from(Span::styled(
            format!("    {}", message_line),
            Style::default().fg(HEADER_TEXT),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(
            TRY_AGAIN_LABEL,
            Style::default()
                .fg(HEADER_TEXT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Ctrl+R", Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM)),
    ]));
    lines
}
