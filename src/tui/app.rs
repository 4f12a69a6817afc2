//! Form state and input handling.

use std::time::Instant;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::render::{Target, target_at};
use crate::clipboard::Clipboard;
use crate::notify::Toasts;
use crate::pass::{self, CharClass, Config, Password};

/// A focusable control of the form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Copy,
    Preset,
    Length,
    Class(CharClass),
    Generate,
}

impl Field {
    pub const ORDER: [Field; 8] = [
        Field::Copy,
        Field::Preset,
        Field::Length,
        Field::Class(CharClass::Uppercase),
        Field::Class(CharClass::Lowercase),
        Field::Class(CharClass::Numbers),
        Field::Class(CharClass::Symbols),
        Field::Generate,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

pub struct App {
    pub config: Config,
    pub password: Option<Password>,
    pub focus: Field,
    pub toasts: Toasts,
    pub quit: bool,
    clipboard: Box<dyn Clipboard>,
}

impl App {
    pub fn new(config: Config, clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            config,
            password: None,
            focus: Field::Generate,
            toasts: Toasts::new(),
            quit: false,
            clipboard,
        }
    }

    pub fn password(&self) -> &str {
        self.password.as_deref().map_or("", String::as_str)
    }

    /// Generate a new password, replacing the shown one on success.
    pub fn generate(&mut self, now: Instant) {
        match pass::generate(&mut self.config) {
            Ok(password) => {
                self.password = Some(password);
                self.toasts.success("New password generated!", now);
            }
            Err(e) => {
                log::debug!("generation refused: {e}");
                self.toasts.error(e.to_string(), now);
            }
        }
    }

    pub fn copy(&mut self, now: Instant) {
        let result = match self.password.as_deref() {
            Some(password) => self.clipboard.write(password),
            None => self.clipboard.write(""),
        };
        match result {
            Ok(()) => {
                self.toasts.success("Copied to clipboard!", now);
            }
            Err(e) => {
                log::debug!("copy failed: {e}");
                self.toasts.error(e.to_string(), now);
            }
        }
    }

    /// Press the focused control.
    pub fn activate(&mut self, now: Instant) {
        match self.focus {
            Field::Copy => self.copy(now),
            Field::Preset => self.config.preset = self.config.preset.cycle(),
            Field::Length => {}
            Field::Class(class) => self.config.toggle(class),
            Field::Generate => self.generate(now),
        }
    }

    /// Move the focused selector or slider one step.
    pub fn adjust(&mut self, forward: bool) {
        match self.focus {
            Field::Preset => {
                self.config.preset = if forward {
                    self.config.preset.next()
                } else {
                    self.config.preset.prev()
                }
            }
            Field::Length => {
                let length = if forward {
                    self.config.length + 1
                } else {
                    self.config.length.saturating_sub(1)
                };
                self.config.set_length(length);
            }
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit = true,
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char('g') => self.generate(now),
            KeyCode::Char('c') => self.copy(now),
            KeyCode::Up | KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Down | KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::Left => self.adjust(false),
            KeyCode::Right => self.adjust(true),
            KeyCode::Home if self.focus == Field::Length => self.config.set_length(pass::MIN_LENGTH),
            KeyCode::End if self.focus == Field::Length => self.config.set_length(pass::MAX_LENGTH),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(now),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, term_width: u16, now: Instant) {
        let (col, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(id) = self.toasts.hit(term_width, col, row) {
                    self.toasts.press(id, col, row, now);
                    return;
                }
                match target_at(col, row) {
                    Some(Target::Field(field)) => {
                        self.focus = field;
                        self.activate(now);
                    }
                    Some(Target::Slider(length)) => {
                        self.focus = Field::Length;
                        self.config.set_length(length);
                    }
                    None => {}
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.toasts.is_dragging() {
                    self.toasts.drag_to(col, row);
                } else if self.focus == Field::Length
                    && let Some(Target::Slider(length)) = target_at(col, row)
                {
                    self.config.set_length(length);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.toasts.release(now);
            }
            MouseEventKind::Moved => {
                let hovered = self.toasts.hit(term_width, col, row);
                self.toasts.hover(hovered, now);
            }
            _ => {}
        }
    }

    pub fn handle_focus(&mut self, gained: bool, now: Instant) {
        if gained {
            self.toasts.focus_gained(now);
        } else {
            self.toasts.focus_lost(now);
        }
    }
}
