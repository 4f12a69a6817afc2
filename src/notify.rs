//! Transient toast notifications.
//!
//! Toasts stack in the top-right corner, newest first, and close after
//! [`AUTO_CLOSE`] of running time. The timer pauses while the pointer
//! hovers a toast, while it is being dragged, and while the terminal has
//! lost focus. A click dismisses a toast; dragging it far enough
//! sideways throws it away, a shorter drag snaps it back.
//!
//! All timing takes an explicit `now` so the event loop owns the clock.

use std::time::{Duration, Instant};

use crate::terminal::wrap;

pub const AUTO_CLOSE: Duration = Duration::from_secs(3);
pub const TOAST_WIDTH: u16 = 36;
/// Share of the toast width a horizontal drag must cover to dismiss.
const DRAG_DISMISS_RATIO: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub col: u16,
    pub row: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.col
            && col < self.col.saturating_add(self.width)
            && row >= self.row
            && row < self.row.saturating_add(self.height)
    }
}

#[derive(Debug)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    remaining: Duration,
    running_since: Option<Instant>,
    offset: (i32, i32),
}

impl Toast {
    fn new(id: u64, kind: ToastKind, message: String, now: Instant) -> Self {
        Self {
            id,
            kind,
            message,
            remaining: AUTO_CLOSE,
            running_since: Some(now),
            offset: (0, 0),
        }
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        match self.running_since {
            Some(since) => self
                .remaining
                .saturating_sub(now.saturating_duration_since(since)),
            None => self.remaining,
        }
    }

    /// Fraction of the display time left, 1.0 when fresh.
    pub fn progress(&self, now: Instant) -> f32 {
        self.remaining(now).as_secs_f32() / AUTO_CLOSE.as_secs_f32()
    }

    #[cfg(test)]
    pub fn is_paused(&self) -> bool {
        self.running_since.is_none()
    }

    pub fn lines(&self) -> Vec<String> {
        wrap(&self.message, (TOAST_WIDTH - 6) as usize)
    }

    /// Rows: top border, message lines, progress bar, bottom border.
    pub fn height(&self) -> u16 {
        self.lines().len() as u16 + 3
    }

    fn pause(&mut self, now: Instant) {
        if let Some(since) = self.running_since.take() {
            self.remaining = self
                .remaining
                .saturating_sub(now.saturating_duration_since(since));
        }
    }

    fn resume(&mut self, now: Instant) {
        if self.running_since.is_none() {
            self.running_since = Some(now);
        }
    }

    fn expired(&self, now: Instant) -> bool {
        self.remaining(now).is_zero()
    }
}

#[derive(Debug)]
struct Drag {
    id: u64,
    origin: (u16, u16),
    moved: bool,
}

/// What a pointer release did to the toast under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    Dismissed,
    SnappedBack,
}

#[derive(Debug, Default)]
pub struct Toasts {
    items: Vec<Toast>,
    next_id: u64,
    hovered: Option<u64>,
    focus_lost: bool,
    drag: Option<Drag>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let mut toast = Toast::new(id, kind, message.into(), now);
        if self.focus_lost {
            toast.pause(now);
        }
        self.items.insert(0, toast);
        id
    }

    pub fn success(&mut self, message: impl Into<String>, now: Instant) -> u64 {
        self.push(ToastKind::Success, message, now)
    }

    pub fn error(&mut self, message: impl Into<String>, now: Instant) -> u64 {
        self.push(ToastKind::Error, message, now)
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Toast> {
        self.items.iter().find(|t| t.id == id)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
        if self.hovered == Some(id) {
            self.hovered = None;
        }
        if self.drag.as_ref().is_some_and(|d| d.id == id) {
            self.drag = None;
        }
    }

    /// Drop expired toasts. Returns true if anything was removed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let before = self.items.len();
        self.items.retain(|t| !t.expired(now));
        if let Some(id) = self.hovered
            && self.get(id).is_none()
        {
            self.hovered = None;
        }
        before != self.items.len()
    }

    pub fn focus_lost(&mut self, now: Instant) {
        self.focus_lost = true;
        for toast in &mut self.items {
            toast.pause(now);
        }
    }

    pub fn focus_gained(&mut self, now: Instant) {
        self.focus_lost = false;
        let held = self.held();
        for toast in self.items.iter_mut().filter(|t| !held.contains(&t.id)) {
            toast.resume(now);
        }
    }

    /// Pointer moved over `id` (or over nothing).
    pub fn hover(&mut self, id: Option<u64>, now: Instant) {
        if self.hovered == id {
            return;
        }
        let previous = std::mem::replace(&mut self.hovered, id);
        if let Some(id) = id
            && let Some(toast) = self.find_mut(id)
        {
            toast.pause(now);
        }
        if let Some(prev) = previous
            && !self.focus_lost
            && !self.held().contains(&prev)
            && let Some(toast) = self.find_mut(prev)
        {
            toast.resume(now);
        }
    }

    /// Pointer pressed on toast `id` at (`col`, `row`).
    pub fn press(&mut self, id: u64, col: u16, row: u16, now: Instant) {
        if let Some(toast) = self.find_mut(id) {
            toast.pause(now);
            self.drag = Some(Drag {
                id,
                origin: (col, row),
                moved: false,
            });
        }
    }

    /// Pointer dragged to (`col`, `row`) with the button held.
    pub fn drag_to(&mut self, col: u16, row: u16) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        let offset = (
            col as i32 - drag.origin.0 as i32,
            row as i32 - drag.origin.1 as i32,
        );
        if offset != (0, 0) {
            drag.moved = true;
        }
        let id = drag.id;
        if let Some(toast) = self.find_mut(id) {
            toast.offset = offset;
        }
    }

    /// Pointer released. `None` when no toast was pressed.
    pub fn release(&mut self, now: Instant) -> Option<Release> {
        let drag = self.drag.take()?;
        let stay_paused = self.focus_lost || self.hovered == Some(drag.id);
        let dx = self.get(drag.id)?.offset.0;

        let thrown = dx.unsigned_abs() as f32 >= TOAST_WIDTH as f32 * DRAG_DISMISS_RATIO;
        if !drag.moved || thrown {
            self.dismiss(drag.id);
            return Some(Release::Dismissed);
        }

        let toast = self.find_mut(drag.id)?;
        toast.offset = (0, 0);
        if !stay_paused {
            toast.resume(now);
        }
        Some(Release::SnappedBack)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Screen placement of each toast, newest at the top, drag offsets applied.
    pub fn layout(&self, term_width: u16) -> Vec<(u64, Rect)> {
        let base_col = term_width.saturating_sub(TOAST_WIDTH + 1);
        let mut row: u16 = 1;
        self.items
            .iter()
            .map(|toast| {
                let height = toast.height();
                let rect = Rect {
                    col: shift(base_col, toast.offset.0),
                    row: shift(row, toast.offset.1),
                    width: TOAST_WIDTH,
                    height,
                };
                row = row.saturating_add(height);
                (toast.id, rect)
            })
            .collect()
    }

    /// On-screen part of each toast. Toasts dragged past the right edge
    /// are cut at the edge, or left out once nothing of them remains.
    pub fn visible(&self, term_width: u16) -> Vec<(u64, Rect)> {
        self.layout(term_width)
            .into_iter()
            .filter(|(_, rect)| rect.col < term_width)
            .map(|(id, rect)| {
                let width = rect.width.min(term_width - rect.col);
                (id, Rect { width, ..rect })
            })
            .collect()
    }

    /// Topmost visible toast under (`col`, `row`).
    pub fn hit(&self, term_width: u16, col: u16, row: u16) -> Option<u64> {
        self.visible(term_width)
            .into_iter()
            .find(|(_, rect)| rect.contains(col, row))
            .map(|(id, _)| id)
    }

    fn held(&self) -> Vec<u64> {
        self.hovered
            .into_iter()
            .chain(self.drag.as_ref().map(|d| d.id))
            .collect()
    }

    fn find_mut(&mut self, id: u64) -> Option<&mut Toast> {
        self.items.iter_mut().find(|t| t.id == id)
    }
}

fn shift(base: u16, by: i32) -> u16 {
    (base as i32 + by).clamp(0, u16::MAX as i32) as u16
}
