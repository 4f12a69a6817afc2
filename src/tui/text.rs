use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top, print_lines};

const HELP_WIDTH: usize = 74;

pub fn help_lines() -> Vec<String> {
    let w = HELP_WIDTH;
    let mut lines = vec![
        box_top("Passforge", w),
        box_line_center("Password generator with strength presets", w),
        box_line("", w),
        box_line("MODES:", w),
        box_line("  1) Interactive: Run without arguments (or with -i). Opens a form", w),
        box_line("     to pick a preset, length and character classes.", w),
        box_line("  2) Client: Pass flags (e.g., -p good -n 3) to generate passwords", w),
        box_line("     without the form.", w),
        box_line("", w),
        box_line("PRESETS:", w),
        box_line("  average   8 characters, letters only", w),
        box_line("  good      12 characters, letters and numbers", w),
        box_line("  strong    19 characters, letters, numbers and symbols", w),
        box_line("  The preset is applied on every generation and overrides the", w),
        box_line("  length, numbers and symbols settings.", w),
        box_line("", w),
        box_line("USAGE:", w),
        box_line("  passforge [OPTIONS]", w),
        box_line("", w),
        box_line("OPTIONS:", w),
        box_line(" Password:", w),
    ];
    lines.extend(box_opt("  -p, --preset <NAME>", "average, good or strong (default: strong)", w));
    lines.extend(box_opt("      --no-upper", "Leave out uppercase letters", w));
    lines.extend(box_opt("      --no-lower", "Leave out lowercase letters", w));
    lines.extend(box_opt("  -n, --number <N>", "How many passwords to generate, at least 1 (default: 1)", w));
    lines.push(box_line("", w));
    lines.push(box_line(" Output:", w));
    lines.extend(box_opt("  -b, --board", "Copy to clipboard instead of printing", w));
    lines.extend(box_opt("  -q, --quiet", "Suppress all output except passwords", w));
    lines.extend(box_opt("  -i, --interactive", "Open the form with these settings", w));
    lines.push(box_line("", w));
    lines.push(box_line(" Info:", w));
    lines.extend(box_opt("  -h, --help", "Display this help message", w));
    lines.extend(box_opt("  -v, --version", "Display version", w));
    lines.push(box_line("", w));
    lines.push(box_line("FORM KEYS:", w));
    lines.push(box_line("  Up/Down/Tab move, Left/Right adjust, Space/Enter select,", w));
    lines.push(box_line("  g generate, c copy, q quit. Click a notification to close it,", w));
    lines.push(box_line("  drag it sideways to throw it away.", w));
    lines.push(box_line("", w));
    lines.push(box_line("EXAMPLES:", w));
    lines.push(box_line("  passforge                 Open the form", w));
    lines.push(box_line("  passforge -p good         One 12-character password", w));
    lines.push(box_line("  passforge -p strong -n 3  Three 19-character passwords", w));
    lines.push(box_line("  passforge -p average -b   Copy an 8-character password", w));
    lines.push(box_line("", w));
    lines.push(box_bottom(w));
    lines
}

pub fn print_help() {
    print_lines(&help_lines());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::console_width;

    #[test]
    fn help_is_boxed() {
        for line in help_lines() {
            assert_eq!(console_width(&line), HELP_WIDTH, "{line}");
        }
    }
}
