//! Presentation for each lookup outcome. Pure functions of their input.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::lookup::IDLE_PROMPT;
use crate::pokemon::Pokemon;
use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT, POKEMON_YELLOW, STATUS_PENDING};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const ABILITY_WIDTH: usize = 20;
const TYPE_WIDTH: usize = 12;

pub fn prompt_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", IDLE_PROMPT),
            Style::default().fg(MUTED_TEXT),
        )),
    ]
}

/// Loading placeholder: the requested name with stand-in values where the
/// record will go.
pub fn loading_lines(name: &str, animation_tick: u8) -> Vec<Line<'static>> {
    let spinner = SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()];
    let muted = Style::default().fg(MUTED_TEXT);

    vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("  {} ", spinner), Style::default().fg(STATUS_PENDING)),
            Span::styled(
                name.to_string(),
                Style::default()
                    .fg(HEADER_TEXT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" #XXX", muted),
        ]),
        Line::from(""),
        attack_header(),
        attack_row("Loading Ability...", "XXX", "XX", muted),
        attack_row("Loading Ability...", "XXX", "XX", muted),
        Line::from(""),
        Line::from(Span::styled("  loading...", muted)),
    ]
}

pub fn data_lines(pokemon: &Pokemon) -> Vec<Line<'static>> {
    let text = Style::default().fg(HEADER_TEXT);
    let muted = Style::default().fg(MUTED_TEXT);

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("  {}", pokemon.name),
                Style::default()
                    .fg(POKEMON_YELLOW)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" #{}", pokemon.number), muted),
        ]),
        Line::from(Span::styled(format!("  {}", pokemon.image), muted)),
        Line::from(""),
        attack_header(),
    ];

    if pokemon.attacks.special.is_empty() {
        lines.push(Line::from(Span::styled("  (no special attacks)", muted)));
    }
    for attack in &pokemon.attacks.special {
        lines.push(attack_row(
            &attack.name,
            &attack.kind,
            &attack.damage.to_string(),
            text,
        ));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  fetched at {}", pokemon.fetched_at),
        muted,
    )));
    lines
}

fn attack_header() -> Line<'static> {
    attack_row(
        "Ability",
        "Type",
        "Damage",
        Style::default()
            .fg(HEADER_TEXT)
            .add_modifier(Modifier::UNDERLINED),
    )
}

fn attack_row(ability: &str, kind: &str, damage: &str, style: Style) -> Line<'static> {
    Line::from(Span::styled(
        format!(
            "  {:<aw$} {:<tw$} {}",
            ability,
            kind,
            damage,
            aw = ABILITY_WIDTH,
            tw = TYPE_WIDTH
        ),
        style,
    ))
}

/// Concatenated text of `lines`, one string per line. Used to assert on
/// rendered content.
pub fn plain_text(lines: &[Line<'_>]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect::<String>())
        .collect()
}
