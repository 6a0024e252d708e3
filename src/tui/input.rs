//! Key bindings for the interactive session.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::pass::{MAX_LENGTH, MIN_LENGTH, Options, Preset};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Upper,
    Lower,
    Numbers,
    Symbols,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Regenerate,
    Copy,
    ToggleVisible,
    Preset(Preset),
    Longer,
    Shorter,
    Toggle(Class),
    Quit,
    Ignore,
}

pub fn action_for(key: KeyEvent) -> Action {
    if key.kind == KeyEventKind::Release {
        return Action::Ignore;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Action::Quit,
            _ => Action::Ignore,
        };
    }

    match key.code {
        KeyCode::Char('r') | KeyCode::Enter => Action::Regenerate,
        KeyCode::Char('c') => Action::Copy,
        KeyCode::Char('v') => Action::ToggleVisible,
        KeyCode::Char('1') => Action::Preset(Preset::Weak),
        KeyCode::Char('2') => Action::Preset(Preset::Medium),
        KeyCode::Char('3') => Action::Preset(Preset::Strong),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => Action::Longer,
        KeyCode::Char('-') | KeyCode::Left => Action::Shorter,
        KeyCode::Char('u') => Action::Toggle(Class::Upper),
        KeyCode::Char('l') => Action::Toggle(Class::Lower),
        KeyCode::Char('n') => Action::Toggle(Class::Numbers),
        KeyCode::Char('s') => Action::Toggle(Class::Symbols),
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::Ignore,
    }
}

/// Options after `action`, or `None` when the action does not change them.
/// Length moves stay inside the slider bounds.
pub fn adjust(options: &Options, action: Action) -> Option<Options> {
    let mut next = *options;
    match action {
        Action::Longer if next.length < MAX_LENGTH => next.length += 1,
        Action::Shorter if next.length > MIN_LENGTH => next.length -= 1,
        Action::Toggle(Class::Upper) => next.include_uppercase ^= true,
        Action::Toggle(Class::Lower) => next.include_lowercase ^= true,
        Action::Toggle(Class::Numbers) => next.include_numbers ^= true,
        Action::Toggle(Class::Symbols) => next.include_symbols ^= true,
        Action::Preset(preset) => next = preset.options(),
        _ => return None,
    }
    Some(next)
}
