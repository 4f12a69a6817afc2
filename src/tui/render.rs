//! Form layout and drawing.
//!
//! The form has a fixed layout anchored at the top-left corner, so mouse
//! hit testing works from the same row/column constants used to draw it.

use std::time::Instant;

use super::app::{App, Field};
use crate::notify::{TOAST_WIDTH, Toast, ToastKind};
use crate::pass::{
    CharClass, MAX_LENGTH, MIN_LENGTH, Preset, effective_entropy, entropy_strength,
};
use crate::terminal::{
    BOLD, DIM, Frame, GREEN, RED, RESET, REVERSE, box_bottom, box_line, box_top, clip,
    console_width, fill_bar, slider, slider_value,
};

pub const FORM_WIDTH: usize = 62;
const LABEL_WIDTH: usize = 20;
const PASSWORD_WIDTH: usize = MAX_LENGTH;
const SLIDER_WIDTH: usize = 27;

const ROW_PASSWORD: u16 = 1;
const ROW_PRESET: u16 = 3;
const ROW_LENGTH: u16 = 4;
const ROW_CLASSES: u16 = 5;
const ROW_STRENGTH: u16 = 10;
const ROW_GENERATE: u16 = 12;

/// Column of the first slider cell: border, space, marker, label.
const SLIDER_COL: u16 = (2 + 2 + LABEL_WIDTH) as u16;

/// What a click at a screen position lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Field(Field),
    /// The slider track, with the length under the pointer.
    Slider(usize),
}

pub fn target_at(col: u16, row: u16) -> Option<Target> {
    if col as usize >= FORM_WIDTH {
        return None;
    }
    match row {
        ROW_PASSWORD => Some(Target::Field(Field::Copy)),
        ROW_PRESET => Some(Target::Field(Field::Preset)),
        ROW_LENGTH => {
            let track = SLIDER_COL..SLIDER_COL + SLIDER_WIDTH as u16;
            if track.contains(&col) {
                let cell = (col - SLIDER_COL) as usize;
                Some(Target::Slider(slider_value(
                    cell,
                    MIN_LENGTH,
                    MAX_LENGTH,
                    SLIDER_WIDTH,
                )))
            } else {
                Some(Target::Field(Field::Length))
            }
        }
        r if (ROW_CLASSES..ROW_CLASSES + 4).contains(&r) => Some(Target::Field(Field::Class(
            CharClass::ALL[(r - ROW_CLASSES) as usize],
        ))),
        ROW_GENERATE => Some(Target::Field(Field::Generate)),
        _ => None,
    }
}

/// Draw the whole screen: form, key hints, toasts on top.
pub fn render(app: &App, term_width: u16, term_height: u16, now: Instant) -> Frame {
    let mut frame = Frame::new();

    for row in 0..=ROW_GENERATE + 1 {
        frame.push(form_row(app, row));
    }
    frame.push(format!(
        "{DIM} ↑/↓ move  ←/→ adjust  Space/Enter select  g generate  c copy  q quit{RESET}"
    ));

    for (id, rect) in app.toasts.visible(term_width) {
        let Some(toast) = app.toasts.get(id) else {
            continue;
        };
        for (i, line) in toast_lines(toast, now).iter().enumerate() {
            let row = rect.row.saturating_add(i as u16);
            if row >= term_height {
                break;
            }
            frame.overlay(rect.col, row, &clip(line, rect.width as usize));
        }
    }

    frame
}

fn form_row(app: &App, row: u16) -> String {
    match row {
        0 => box_top("Password Generator", FORM_WIDTH),
        ROW_PASSWORD => {
            let shown = if app.password().is_empty() {
                format!("{DIM}{:<PASSWORD_WIDTH$}{RESET}", "press g to generate")
            } else {
                format!("{BOLD}{:<PASSWORD_WIDTH$}{RESET}", app.password())
            };
            let copy = control(app, Field::Copy, "[ COPY ]");
            line(app, Field::Copy, &format!("[{shown}] {copy}"))
        }
        ROW_PRESET => {
            let selector = format!(
                "◀ {:<7} ▶ {DIM}{}{RESET}",
                app.config.preset,
                preset_hint(app.config.preset)
            );
            let selector = control(app, Field::Preset, &selector);
            line(app, Field::Preset, &format!("{:<LABEL_WIDTH$}{selector}", "Password Strength"))
        }
        ROW_LENGTH => {
            let track = slider(app.config.length, MIN_LENGTH, MAX_LENGTH, SLIDER_WIDTH);
            let track = control(app, Field::Length, &track);
            line(
                app,
                Field::Length,
                &format!("{:<LABEL_WIDTH$}{track} {:>2}", "Character Length", app.config.length),
            )
        }
        r if (ROW_CLASSES..ROW_CLASSES + 4).contains(&r) => {
            let class = CharClass::ALL[(r - ROW_CLASSES) as usize];
            let mark = if app.config.includes(class) { "x" } else { " " };
            let checkbox = control(app, Field::Class(class), &format!("[{mark}]"));
            line(app, Field::Class(class), &format!("{checkbox} {}", class.label()))
        }
        ROW_STRENGTH => {
            let bits = effective_entropy(&app.config);
            box_line(
                &format!(
                    "  Strength: {BOLD}{:<7}{RESET}  Entropy: {:.1} bits ({})",
                    app.config.preset,
                    bits,
                    entropy_strength(bits)
                ),
                FORM_WIDTH,
            )
        }
        ROW_GENERATE => {
            let button = control(app, Field::Generate, "[ GENERATE PASSWORD ]");
            line(app, Field::Generate, &button)
        }
        r if r == ROW_GENERATE + 1 => box_bottom(FORM_WIDTH),
        _ => box_line("", FORM_WIDTH),
    }
}

/// Form line with the focus marker.
fn line(app: &App, field: Field, content: &str) -> String {
    let marker = if app.focus == field {
        format!("{BOLD}›{RESET} ")
    } else {
        "  ".to_string()
    };
    box_line(&format!("{marker}{content}"), FORM_WIDTH)
}

/// Control text, highlighted when focused.
fn control(app: &App, field: Field, text: &str) -> String {
    if app.focus == field {
        format!("{REVERSE}{text}{RESET}")
    } else {
        text.to_string()
    }
}

fn preset_hint(preset: Preset) -> String {
    let mut hint = format!("{} chars", preset.length());
    if preset.numbers() {
        hint.push_str(" +0-9");
    }
    if preset.symbols() {
        hint.push_str(" +!@#");
    }
    hint
}

fn toast_lines(toast: &Toast, now: Instant) -> Vec<String> {
    let width = TOAST_WIDTH as usize;
    let (color, icon) = match toast.kind {
        ToastKind::Success => (GREEN, "✔"),
        ToastKind::Error => (RED, "✖"),
    };

    let mut lines = vec![format!("{color}┌{}┐", "─".repeat(width - 2))];
    for (i, text) in toast.lines().iter().enumerate() {
        let lead = if i == 0 { icon } else { " " };
        let content = format!("{lead} {text}");
        let padding = (width - 4).saturating_sub(console_width(&content));
        lines.push(format!(
            "{color}│{RESET} {content}{} {color}│",
            " ".repeat(padding)
        ));
    }
    lines.push(format!(
        "{color}│{}│",
        fill_bar(toast.progress(now), width - 2)
    ));
    lines.push(format!("{color}└{}┘", "─".repeat(width - 2)));
    lines
}
