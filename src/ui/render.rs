use crate::ui::app::{App, BodyView};
use crate::ui::fallback::fallback_lines;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, POKEMON_YELLOW, STATUS_ERROR};
use crate::ui::views::{data_lines, loading_lines, prompt_lines};
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const FORM_TITLE: &str = " Which pokemon? ";

pub fn draw(frame: &mut Frame<'_>, app: &App, body: &BodyView) {
    let regions = layout_regions(frame.area());

    frame.render_widget(
        Header::widget(app.lookup_state(), app.endpoint()),
        regions.header,
    );
    draw_form(frame, app, regions.form);

    frame.render_widget(Clear, regions.body);
    let lines = match body {
        BodyView::Prompt => prompt_lines(),
        BodyView::Loading { name } => loading_lines(name, app.animation_tick()),
        BodyView::Data(pokemon) => data_lines(pokemon),
        BodyView::Fallback { error } => fallback_lines(error),
    };
    frame.render_widget(Paragraph::new(lines), regions.body);

    frame.render_widget(Footer::widget(regions.footer), regions.footer);
}

fn draw_form(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let form = app.form();

    let mut title = vec![Span::styled(
        FORM_TITLE,
        Style::default()
            .fg(POKEMON_YELLOW)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(err) = app.last_command_error() {
        title.push(Span::styled(
            format!(" {} ", err),
            Style::default().fg(STATUS_ERROR),
        ));
    }

    let content = if form.value().is_empty() {
        Line::from(Span::styled(
            format!(" {}", form.suggestions().join(", ")),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
        ))
    } else {
        Line::from(Span::styled(
            format!(" {}", form.value()),
            Style::default().fg(HEADER_TEXT),
        ))
    };

    frame.render_widget(
        Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER))
                .title(Line::from(title)),
        ),
        area,
    );

    if area.width > 3 && area.height > 2 {
        // Border plus the leading space
        let offset = u16::try_from(form.cursor_column())
            .unwrap_or(u16::MAX)
            .min(area.width.saturating_sub(3));
        frame.set_cursor_position(Position::new(area.x + 2 + offset, area.y + 1));
    }
}
