//! Virtualized list window.
//!
//! The list controller never assumes how items reach the screen. It drives a
//! [`ListView`]: it tells the view how many rows exist, asks which rows are
//! visible, issues scroll commands and collects "end reached" notifications.
//!
//! [`Model`] is the terminal implementation. Every item occupies one row, the
//! window is `height` rows tall and a cursor marks the row that `enter` presses.
//! End-reached fires at most once per approach to the trailing edge: once it
//! has been taken, it is re-armed when the content length changes, when the
//! rows are replaced or when the window moves back out of the threshold zone.
//!
//! ```rust
//! use bubbletea_paged_list::viewport::{ListView, Model};
//!
//! let mut view = Model::new(5);
//! view.set_len(6);
//! assert!(view.take_end_reached()); // within half a page of the end
//! assert!(!view.take_end_reached()); // only once per approach
//! ```

use std::ops::Range;

/// The rendering surface a list controller drives.
pub trait ListView {
    /// Informs the view of the current number of rows.
    fn set_len(&mut self, len: usize);

    /// The number of rows the view currently holds.
    fn len(&self) -> usize;

    /// Whether the view holds no rows.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Scrolls so that `offset` is the first visible row.
    fn scroll_to_offset(&mut self, offset: usize, animated: bool);

    /// The first visible row.
    fn offset(&self) -> usize;

    /// Range of rows currently visible.
    fn window(&self) -> Range<usize>;

    /// Returns true once per approach to the trailing edge.
    fn take_end_reached(&mut self) -> bool;

    /// Re-arms end-reached after the rows were replaced wholesale, even when
    /// their number did not change.
    fn reset_end_reached(&mut self) {}

    /// Row under the cursor, for views that have one.
    fn cursor(&self) -> Option<usize> {
        None
    }

    /// Moves the cursor up one row.
    fn cursor_up(&mut self) {}

    /// Moves the cursor down one row.
    fn cursor_down(&mut self) {}
}

/// Terminal list window with a row cursor.
#[derive(Debug, Clone)]
pub struct Model {
    len: usize,
    height: usize,
    offset: usize,
    cursor: usize,
    threshold: f64,
    armed: bool,
    end_reached: bool,
}

impl Model {
    /// Creates a window `height` rows tall with an end-reached threshold of
    /// half a window.
    pub fn new(height: usize) -> Self {
        Self {
            len: 0,
            height: height.max(1),
            offset: 0,
            cursor: 0,
            threshold: 0.5,
            armed: true,
            end_reached: false,
        }
    }

    /// Sets the end-reached threshold as a fraction of the window height.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.max(0.0);
        self.check_end();
        self
    }

    /// Window height in rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Resizes the window.
    pub fn set_height(&mut self, height: usize) {
        self.height = height.max(1);
        self.clamp();
        self.check_end();
    }

    fn max_offset(&self) -> usize {
        self.len.saturating_sub(self.height)
    }

    fn clamp(&mut self) {
        self.offset = self.offset.min(self.max_offset());
        self.cursor = self.cursor.min(self.len.saturating_sub(1));
    }

    fn distance_from_end(&self) -> usize {
        self.len.saturating_sub(self.offset + self.height)
    }

    fn check_end(&mut self) {
        if self.len == 0 {
            return;
        }
        let zone = (self.threshold * self.height as f64).ceil() as usize;
        if self.distance_from_end() <= zone {
            if self.armed {
                self.armed = false;
                self.end_reached = true;
            }
        } else {
            self.armed = true;
        }
    }
}

impl ListView for Model {
    fn set_len(&mut self, len: usize) {
        if len == self.len {
            return;
        }
        self.len = len;
        self.armed = true;
        self.end_reached = false;
        self.clamp();
        self.check_end();
    }

    fn len(&self) -> usize {
        self.len
    }

    // The terminal has no scroll animation; the jump is immediate.
    fn scroll_to_offset(&mut self, offset: usize, _animated: bool) {
        self.offset = offset.min(self.max_offset());
        if self.cursor < self.offset || self.cursor >= self.offset + self.height {
            self.cursor = self.offset;
        }
        self.clamp();
        self.check_end();
    }

    fn offset(&self) -> usize {
        self.offset
    }

    fn window(&self) -> Range<usize> {
        self.offset..(self.offset + self.height).min(self.len)
    }

    fn take_end_reached(&mut self) -> bool {
        std::mem::take(&mut self.end_reached)
    }

    fn reset_end_reached(&mut self) {
        self.armed = true;
        self.end_reached = false;
        self.check_end();
    }

    fn cursor(&self) -> Option<usize> {
        (self.len > 0).then_some(self.cursor)
    }

    fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            if self.cursor < self.offset {
                self.offset = self.cursor;
            }
            self.check_end();
        }
    }

    // Scrolls when the cursor leaves the window.
    fn cursor_down(&mut self) {
        if self.cursor + 1 < self.len {
            self.cursor += 1;
            if self.cursor >= self.offset + self.height {
                self.offset = self.cursor + 1 - self.height;
            }
            self.check_end();
        }
    }
}
