//! Interactive screen state and drawing.

use crate::entropy::{IndexSource, Source};
use crate::pass::{Error, HISTORY_CAPACITY, Label, MAX_LENGTH, MIN_LENGTH, Options, Session, charset};
use crate::terminal::{
    BLUE, BOLD, DIM, Frame, GREEN, RED, RESET, YELLOW, calculate_entropy,
};

use super::input::{Action, adjust};

/// What the screen shows on top of the engine session.
pub struct View {
    pub session: Session,
    pub source: Source,
    pub visible: bool,
    /// Set by a successful copy, cleared by the next key press.
    pub copied: bool,
    pub notice: Option<String>,
}

impl View {
    pub fn new<R: IndexSource + ?Sized>(options: Options, source: Source, rng: &mut R) -> Self {
        Self {
            session: Session::new(options).regenerate(rng),
            source,
            visible: true,
            copied: false,
            notice: None,
        }
    }

    /// Apply one key action. `copy` receives the password text.
    pub fn apply<R, C>(self, action: Action, rng: &mut R, copy: C) -> Self
    where
        R: IndexSource + ?Sized,
        C: FnOnce(&str) -> Result<(), String>,
    {
        let view = Self {
            copied: false,
            notice: None,
            ..self
        };

        if let Some(options) = adjust(view.session.options(), action) {
            return Self {
                session: view.session.with_options(options, rng),
                ..view
            };
        }

        match action {
            Action::Regenerate => Self {
                session: view.session.regenerate(rng),
                ..view
            },
            Action::ToggleVisible => Self {
                visible: !view.visible,
                ..view
            },
            Action::Copy => {
                let outcome = view.session.password().map(|p| copy(p.as_str()));
                match outcome {
                    Some(Ok(())) => Self {
                        copied: true,
                        ..view
                    },
                    Some(Err(e)) => Self {
                        notice: Some(format!("Clipboard error: {e}")),
                        ..view
                    },
                    None => view,
                }
            }
            _ => view,
        }
    }

    pub fn draw(&self) -> Frame {
        let mut frame = Frame::new();
        let options = self.session.options();

        frame.top("Generated Password");
        match self.session.current() {
            Some(Ok(generated)) => {
                let shown = if self.visible {
                    generated.password.to_string()
                } else {
                    generated.password.masked()
                };
                frame.line(&format!("{BOLD}{shown}{RESET}"));
                frame.rule();
                let s = &generated.strength;
                frame.bar(
                    s.score,
                    label_color(s.label),
                    &format!("{} {:.0}%", s.label, s.score),
                );
            }
            Some(Err(Error::EmptyAlphabet)) => {
                frame.line(&format!("{RED}Select at least one character type{RESET}"));
                frame.rule();
                frame.bar(0.0, RED, "");
            }
            Some(Err(e)) => {
                frame.line(&format!("{RED}{e}{RESET}"));
                frame.rule();
                frame.bar(0.0, RED, "");
            }
            None => {
                frame.line("");
            }
        }
        let size = charset::size(options);
        frame.line(&format!(
            "{DIM}{:.1} bits • {} chars • {}{RESET}",
            calculate_entropy(options.length, size),
            size,
            self.source.describe()
        ));
        frame.bottom();

        frame.top("Options");
        frame.line(&format!(
            "Length {:>2}  [{}]  (-/+)",
            options.length,
            slider(options.length)
        ));
        frame.line(&format!(
            "{} Uppercase (u)     {} Lowercase (l)",
            check(options.include_uppercase),
            check(options.include_lowercase)
        ));
        frame.line(&format!(
            "{} Numbers (n)       {} Symbols (s)",
            check(options.include_numbers),
            check(options.include_symbols)
        ));
        frame.line_center("Presets: 1 weak  2 medium  3 strong");
        frame.bottom();

        frame.top(&format!("History (last {HISTORY_CAPACITY})"));
        let history = self.session.history();
        if history.is_empty() {
            frame.line(&format!("{DIM}nothing yet{RESET}"));
        }
        for (i, pass) in history.iter().enumerate() {
            let shown = if self.visible {
                pass.to_string()
            } else {
                pass.masked()
            };
            frame.line(&format!("{}. {}", i + 1, shown));
        }
        frame.bottom();

        if self.copied {
            frame.text(&format!("{GREEN}Copied to clipboard{RESET}"));
        } else if let Some(notice) = &self.notice {
            frame.text(&format!("{RED}{notice}{RESET}"));
        } else {
            frame.blank();
        }
        frame.text(&format!(
            "{DIM}[r] regenerate • [c] copy • [v] {} • [q] quit{RESET}",
            if self.visible { "hide" } else { "show" }
        ));
        frame
    }
}

pub fn label_color(label: Label) -> &'static str {
    match label {
        Label::Weak => RED,
        Label::Fair => YELLOW,
        Label::Good => BLUE,
        Label::Strong => GREEN,
    }
}

fn check(on: bool) -> &'static str {
    if on { "[x]" } else { "[ ]" }
}

fn slider(length: usize) -> String {
    let pos = length.clamp(MIN_LENGTH, MAX_LENGTH) - MIN_LENGTH;
    let span = MAX_LENGTH - MIN_LENGTH;
    format!("{}●{}", "─".repeat(pos), "─".repeat(span - pos))
}
