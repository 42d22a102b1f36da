use crate::lookup::LookupState;
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, POKEMON_YELLOW, STATUS_ERROR, STATUS_OK,
    STATUS_PENDING,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn widget(state: &LookupState, endpoint: &str) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let status_color = match state {
            LookupState::Idle => HEADER_SEPARATOR,
            LookupState::Pending { .. } => STATUS_PENDING,
            LookupState::Resolved { .. } => STATUS_OK,
            LookupState::Rejected { .. } => STATUS_ERROR,
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Pokémon Info",
                Style::default()
                    .fg(POKEMON_YELLOW)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled("●", Style::default().fg(status_color)),
            Span::styled(format!(" {}", state.status()), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(endpoint.to_string(), separator_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
