//! Terminal output helpers.
//!
//! Box drawing and widgets return strings so a whole frame can be built
//! and written at once; raw mode needs explicit `\r\n` line endings.

use std::io::{self, Write};

use crossterm::terminal::disable_raw_mode;

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const REVERSE: &str = "\x1b[7m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const YELLOW: &str = "\x1b[33m";

// ============================================================================
// Terminal Control
// ============================================================================

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues)
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

/// Escape sequence moving the cursor to a 0-based (col, row).
pub fn move_to(col: u16, row: u16) -> String {
    format!("\x1b[{};{}H", row + 1, col + 1)
}

// ============================================================================
// Frame
// ============================================================================

/// Lines of a full-screen redraw.
#[derive(Debug, Default)]
pub struct Frame {
    lines: Vec<String>,
    overlay: String,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    #[cfg(test)]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[cfg(test)]
    pub fn overlays(&self) -> &str {
        &self.overlay
    }

    /// Draw `text` at a fixed position on top of the lines.
    pub fn overlay(&mut self, col: u16, row: u16, text: &str) {
        self.overlay.push_str(&move_to(col, row));
        self.overlay.push_str(text);
        self.overlay.push_str(RESET);
    }

    /// Repaint in place: home, each line cleared to its end, rest of screen wiped.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut buf = String::from("\x1b[H");
        for line in &self.lines {
            buf.push_str(line);
            buf.push_str(RESET);
            buf.push_str("\x1b[K\r\n");
        }
        buf.push_str("\x1b[J");
        buf.push_str(&self.overlay);
        out.write_all(buf.as_bytes())?;
        out.flush()
    }
}

// ============================================================================
// Box Drawing
// ============================================================================

/// ┌─ Title ───────────────────┐
pub fn box_top(title: &str, width: usize) -> String {
    if title.is_empty() {
        format!("┌{}┐", "─".repeat(width - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (width - 2).saturating_sub(console_width(&title_part));
        format!("┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// │ content                   │
pub fn box_line(content: &str, width: usize) -> String {
    let inner_width = width - 4;
    let padding = inner_width.saturating_sub(console_width(content));
    format!("│ {}{} │", content, " ".repeat(padding))
}

/// │          content          │
pub fn box_line_center(content: &str, width: usize) -> String {
    let inner_width = width - 4;
    let total_padding = inner_width.saturating_sub(console_width(content));
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    format!("│ {}{}{} │", " ".repeat(left_pad), content, " ".repeat(right_pad))
}

/// └───────────────────────────┘
pub fn box_bottom(width: usize) -> String {
    format!("└{}┘", "─".repeat(width - 2))
}

/// Help option line(s): flag column plus word-wrapped description.
pub fn box_opt(flag: &str, desc: &str, width: usize) -> Vec<String> {
    let inner_width = width - 4;
    let flag_col = 27;
    let desc_col = inner_width - flag_col;

    let lines = wrap(desc, desc_col);
    let mut out = Vec::with_capacity(lines.len().max(1));
    let first = lines.first().map(String::as_str).unwrap_or("");
    out.push(box_line(&format!("{flag:<flag_col$}{first}"), width));
    for line in lines.iter().skip(1) {
        out.push(box_line(&format!("{:flag_col$}{line}", ""), width));
    }
    out
}

/// Print lines in cooked mode.
pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

// ============================================================================
// Widgets
// ============================================================================

/// Greedy word wrap. Words longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: String = word.to_string();
        while word.chars().count() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let at = word.char_indices().nth(width).map_or(word.len(), |(i, _)| i);
            let rest = word.split_off(at);
            lines.push(word);
            word = rest;
        }
        if current.is_empty() {
            current = word;
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::replace(&mut current, word));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Horizontal bar filled to `fraction` of `width` cells.
pub fn fill_bar(fraction: f32, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f32).round() as usize).min(width);
    format!("{}{}", "▄".repeat(filled), " ".repeat(width - filled))
}

/// Slider track with a knob at `value` within `min..=max`.
pub fn slider(value: usize, min: usize, max: usize, width: usize) -> String {
    let knob = slider_cell(value, min, max, width);
    (0..width)
        .map(|i| match i.cmp(&knob) {
            std::cmp::Ordering::Less => '━',
            std::cmp::Ordering::Equal => '●',
            std::cmp::Ordering::Greater => '─',
        })
        .collect()
}

/// Cell index of `value` on a slider track of `width` cells.
pub fn slider_cell(value: usize, min: usize, max: usize, width: usize) -> usize {
    if max <= min || width < 2 {
        return 0;
    }
    let value = value.clamp(min, max);
    ((value - min) * (width - 1) + (max - min) / 2) / (max - min)
}

/// Value at cell index `cell` of a slider track of `width` cells.
pub fn slider_value(cell: usize, min: usize, max: usize, width: usize) -> usize {
    if max <= min || width < 2 {
        return min;
    }
    let cell = cell.min(width - 1);
    min + (cell * (max - min) + (width - 1) / 2) / (width - 1)
}

/// Truncate to `width` visible cells. Escape sequences are kept so
/// trailing resets still apply.
pub fn clip(s: &str, width: usize) -> String {
    let mut out = String::with_capacity(s.len());
    let mut visible = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
            out.push(c);
        } else if in_escape {
            out.push(c);
            if c == 'm' {
                in_escape = false;
            }
        } else if visible < width {
            out.push(c);
            visible += 1;
        }
    }
    out
}

/// Calculate display width accounting for ANSI escape codes.
pub fn console_width(s: &str) -> usize {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_width_ignores_escapes() {
        assert_eq!(console_width(&format!("{BOLD}abc{RESET}")), 3);
        assert_eq!(console_width("┌─┐"), 3);
    }

    #[test]
    fn box_lines_share_width() {
        let width = 30;
        assert_eq!(console_width(&box_top("Title", width)), width);
        assert_eq!(console_width(&box_line("hi", width)), width);
        assert_eq!(console_width(&box_line_center("hi", width)), width);
        assert_eq!(console_width(&box_bottom(width)), width);
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("Clipboard unavailable: permission denied by the system", 20);
        assert!(lines.iter().all(|l| l.chars().count() <= 20));
        assert_eq!(lines.join(" "), "Clipboard unavailable: permission denied by the system");
    }

    #[test]
    fn wrap_splits_long_words() {
        let lines = wrap("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn clip_counts_visible_cells_only() {
        let line = format!("{GREEN}│{RESET} abc {GREEN}│{RESET}");
        let clipped = clip(&line, 3);
        assert_eq!(console_width(&clipped), 3);
        assert!(clipped.ends_with(RESET));
        assert_eq!(clip(&line, 99), line);
        assert_eq!(console_width(&clip(&line, 0)), 0);
    }

    #[test]
    fn fill_bar_bounds() {
        assert_eq!(fill_bar(0.0, 4), "    ");
        assert_eq!(fill_bar(1.0, 4), "▄▄▄▄");
        assert_eq!(fill_bar(0.5, 4), "▄▄  ");
    }

    #[test]
    fn slider_round_trips_ends() {
        assert_eq!(slider_cell(4, 4, 30, 27), 0);
        assert_eq!(slider_cell(30, 4, 30, 27), 26);
        assert_eq!(slider_value(0, 4, 30, 27), 4);
        assert_eq!(slider_value(26, 4, 30, 27), 30);
        assert_eq!(slider_value(99, 4, 30, 27), 30);
    }

    #[test]
    fn slider_draws_one_knob() {
        let track = slider(19, 4, 30, 27);
        assert_eq!(track.chars().count(), 27);
        assert_eq!(track.chars().filter(|c| *c == '●').count(), 1);
    }

    #[test]
    fn box_opt_wraps_description() {
        let lines = box_opt("  -p, --preset <NAME>", &"word ".repeat(20), 74);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| console_width(l) == 74));
    }
}
