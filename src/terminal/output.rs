//! Terminal output utilities.
//!
//! Box drawing, the strength bar and entropy helpers. Everything renders into
//! a [`Frame`] first so a whole screen goes out in one write, with `\r\n` line
//! endings that also behave in raw mode.

use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[38;5;9m";
pub const YELLOW: &str = "\x1b[38;5;11m";
pub const BLUE: &str = "\x1b[38;5;12m";
pub const GREEN: &str = "\x1b[38;5;10m";

pub const BOX_WIDTH: usize = 64;

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

// ============================================================================
// Frame
// ============================================================================

#[derive(Default)]
pub struct Frame {
    buf: String,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blank(&mut self) -> &mut Self {
        self.buf.push_str("\r\n");
        self
    }

    pub fn text(&mut self, content: &str) -> &mut Self {
        self.buf.push_str(content);
        self.buf.push_str("\r\n");
        self
    }

    /// ┌─ Title ──────┐
    pub fn top(&mut self, title: &str) -> &mut Self {
        if title.is_empty() {
            self.text(&format!("┌{}┐", "─".repeat(BOX_WIDTH - 2)))
        } else {
            let title_part = format!("─ {} ", title);
            let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
            self.text(&format!("┌{}{}┐", title_part, "─".repeat(remaining)))
        }
    }

    /// │ content      │
    pub fn line(&mut self, content: &str) -> &mut Self {
        let inner = BOX_WIDTH - 4;
        let padding = inner.saturating_sub(display_width(content));
        self.text(&format!("│ {}{} │", content, " ".repeat(padding)))
    }

    pub fn line_center(&mut self, content: &str) -> &mut Self {
        let inner = BOX_WIDTH - 4;
        let total = inner.saturating_sub(display_width(content));
        let left = total / 2;
        self.text(&format!(
            "│ {}{}{} │",
            " ".repeat(left),
            content,
            " ".repeat(total - left)
        ))
    }

    /// ├──────────────┤
    pub fn rule(&mut self) -> &mut Self {
        self.text(&format!("├{}┤", "─".repeat(BOX_WIDTH - 2)))
    }

    pub fn bottom(&mut self) -> &mut Self {
        self.text(&format!("└{}┘", "─".repeat(BOX_WIDTH - 2)))
    }

    /// Filled bar for a 0..=100 value with `label` centered inside it.
    pub fn bar(&mut self, percent: f64, color: &str, label: &str) -> &mut Self {
        let inner = BOX_WIDTH - 4;
        let filled = ((percent.clamp(0.0, 100.0) / 100.0) * inner as f64).round() as usize;

        let label_chars: Vec<char> = label.chars().collect();
        let start = inner.saturating_sub(label_chars.len()) / 2;
        let mut cells = vec![' '; inner];
        for (i, ch) in label_chars.into_iter().enumerate() {
            if start + i < inner {
                cells[start + i] = ch;
            }
        }

        let on: String = cells[..filled].iter().collect();
        let off: String = cells[filled..].iter().collect();
        self.text(&format!("│ {color}\x1b[7m{on}{RESET}{off} │"))
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Write the frame to stdout in one go.
    pub fn render(&self) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let _ = out.write_all(self.buf.as_bytes());
        let _ = out.flush();
    }
}

/// Width in columns, skipping ANSI escape sequences.
pub fn display_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Entropy
// ============================================================================

/// Password entropy in bits for a uniformly sampled password.
pub fn calculate_entropy(password_length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    password_length as f64 * (charset_size as f64).log2()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_have_no_width() {
        assert_eq!(display_width(&format!("{RED}abc{RESET}")), 3);
        assert_eq!(display_width("•••"), 3);
    }

    #[test]
    fn box_lines_share_width() {
        let mut frame = Frame::new();
        frame.top("Password").line("abc").line_center("x").bottom();
        let widths: Vec<usize> = frame
            .as_str()
            .split("\r\n")
            .filter(|l| !l.is_empty())
            .map(display_width)
            .collect();
        assert!(widths.iter().all(|&w| w == BOX_WIDTH));
    }

    #[test]
    fn bar_width_is_constant() {
        for pct in [0.0, 42.8, 100.0] {
            let mut frame = Frame::new();
            frame.bar(pct, GREEN, "Strong");
            assert_eq!(display_width(frame.as_str().trim_end()), BOX_WIDTH);
        }
    }

    #[test]
    fn entropy_bits() {
        assert_eq!(calculate_entropy(10, 0), 0.0);
        assert!((calculate_entropy(8, 2) - 8.0).abs() < 1e-9);
    }
}
