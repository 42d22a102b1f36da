use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // "Try again" on the fallback. Harmless when nothing is caught.
    if is_ctrl_char(key, 'r') {
        app.try_again();
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return;
    }

    if key.code == KeyCode::Enter {
        app.submit_form();
        return;
    }

    let form = app.form_mut();
    match key.code {
        KeyCode::Tab => form.cycle_suggestion(),
        KeyCode::Esc => form.set(""),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Delete => form.delete(),
        KeyCode::Left => form.move_left(),
        KeyCode::Right => form.move_right(),
        KeyCode::Home => form.move_home(),
        KeyCode::End => form.move_end(),
        KeyCode::Char(c) => form.insert_char(c),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn ctrl_q_quits() {
        let mut app = App::new(&Config::default(), "");
        handle_key(&mut app, ctrl('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn typing_goes_to_form() {
        let mut app = App::new(&Config::default(), "");
        for c in "mew".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        assert_eq!(app.form().value(), "mew");
        assert_eq!(app.current_name().as_str(), "");
    }

    #[test]
    fn ctrl_chars_are_not_typed() {
        let mut app = App::new(&Config::default(), "");
        handle_key(&mut app, ctrl('x'));
        assert_eq!(app.form().value(), "");
    }

    #[test]
    fn esc_clears_form_only() {
        let mut app = App::new(&Config::default(), "");
        app.submit("mew");
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.form().value(), "");
        assert_eq!(app.current_name().as_str(), "mew");
    }

    #[test]
    fn tab_fills_suggestion() {
        let mut app = App::new(&Config::default(), "");
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.form().value(), "pikachu");
    }
}
