//! Activity indicator used for the refresh header and the loading footer.
//!
//! The indicator animates by scheduling `TickMsg`s through bubbletea-rs. Each
//! model has a unique id and a tag; ticks addressed to another indicator, or
//! carrying a stale tag, are dropped so an indicator that was restarted does
//! not spin at double speed.
//!
//! ```rust
//! use bubbletea_paged_list::spinner::{Model, DOT};
//!
//! let spinner = Model::new().with_spinner(DOT.clone());
//! assert_eq!(spinner.view().trim_end(), "⣾");
//! ```

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use lipgloss_extras::prelude::*;
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Frames and frame delay for an indicator animation.
#[derive(Debug, Clone)]
pub struct Spinner {
    /// Animation frames to cycle through.
    pub frames: Vec<String>,
    /// Delay between frames.
    pub fps: Duration,
}

/// Basic line animation (`|`, `/`, `-`, `\`).
pub static LINE: Lazy<Spinner> = Lazy::new(|| Spinner {
    frames: ["|", "/", "-", "\\"].iter().map(|s| s.to_string()).collect(),
    fps: Duration::from_millis(100),
});

/// Braille dot animation.
pub static DOT: Lazy<Spinner> = Lazy::new(|| Spinner {
    frames: ["⣾ ", "⣽ ", "⣻ ", "⢿ ", "⡿ ", "⣟ ", "⣯ ", "⣷ "]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    fps: Duration::from_millis(100),
});

/// Text ellipsis animation, used for the "Loading" footer.
pub static ELLIPSIS: Lazy<Spinner> = Lazy::new(|| Spinner {
    frames: ["", ".", "..", "..."].iter().map(|s| s.to_string()).collect(),
    fps: Duration::from_millis(333),
});

/// Advances one indicator by a frame.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// Target indicator id.
    pub id: i64,
    tag: i64,
}

/// Indicator state: current frame plus routing id and tag.
#[derive(Debug, Clone)]
pub struct Model {
    /// Animation frames and timing.
    pub spinner: Spinner,
    /// Style applied to every frame.
    pub style: Style,
    frame: usize,
    id: i64,
    tag: i64,
    running: bool,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// Creates an idle indicator using the `LINE` animation.
    pub fn new() -> Self {
        Self {
            spinner: LINE.clone(),
            style: Style::new(),
            frame: 0,
            id: next_id(),
            tag: 0,
            running: false,
        }
    }

    /// Replaces the animation.
    pub fn with_spinner(mut self, spinner: Spinner) -> Self {
        self.spinner = spinner;
        self.frame = 0;
        self
    }

    /// Replaces the style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Unique id used to route tick messages.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Whether the indicator is animating.
    pub fn running(&self) -> bool {
        self.running
    }

    /// Starts animating and returns the first tick, or `None` if already running.
    pub fn start(&mut self) -> Option<Cmd> {
        if self.running {
            return None;
        }
        self.running = true;
        self.frame = 0;
        self.tag += 1;
        Some(self.tick())
    }

    /// Stops animating. Ticks already in flight are rejected by tag.
    pub fn stop(&mut self) {
        self.running = false;
        self.tag += 1;
    }

    fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(self.spinner.fps, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    /// Handles a tick addressed to this indicator and schedules the next one.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        let tick = msg.downcast_ref::<TickMsg>()?;
        if tick.id != self.id || tick.tag != self.tag || !self.running {
            return None;
        }
        self.frame = (self.frame + 1) % self.spinner.frames.len().max(1);
        Some(self.tick())
    }

    /// Renders the current frame.
    pub fn view(&self) -> String {
        match self.spinner.frames.get(self.frame) {
            Some(frame) => self.style.render(frame),
            None => String::new(),
        }
    }
}
