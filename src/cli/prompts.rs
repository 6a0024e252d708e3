//! Warning and status messages for CLI output.

use super::quiet;
use crate::pass::Strength;
use crate::terminal::{RED, RESET, YELLOW};
use crate::tui::label_color;

/// Warning on stderr (yellow). Suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Error on stderr (red). Always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn clipboard_copied() {
    if !quiet::enabled() {
        eprintln!("*** -COPIED TO CLIPBOARD- ***");
    }
}

pub fn clipboard_error(err: &str) {
    eprintln!("Clipboard error: {err}");
}

pub fn settings_saved(path: &str) {
    if !quiet::enabled() {
        eprintln!("Settings saved \u{2192} {path}");
    }
}

pub fn weak_source() {
    warn("Warning: cycle counter source is fast but not cryptographically secure.");
}

pub fn seeded_output() {
    warn("Warning: seeded output is reproducible; do not use it for real passwords.");
}

/// `Strong  85.7/100 (6/7 checks)`, colored when stdout is a terminal.
pub fn format_strength(strength: &Strength, color: bool) -> String {
    let label = format!("{:<6}", strength.label);
    let label = if color {
        format!("{}{}{}", label_color(strength.label), label, RESET)
    } else {
        label
    };
    format!(
        "{} {:>5.1}/100 ({}/{} checks)",
        label,
        strength.score,
        strength.passed,
        crate::pass::strength::CHECKS
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::score;

    #[test]
    fn strength_line() {
        assert_eq!(
            format_strength(&score("aaaaaaaaaaaaaaaa"), false),
            "Fair    57.1/100 (4/7 checks)"
        );
        assert_eq!(
            format_strength(&score(""), false),
            "Weak     0.0/100 (0/7 checks)"
        );
    }
}
