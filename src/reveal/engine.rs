//! The reveal engine ("printer").
//!
//! Owns the reveal cursor and advances it once per host frame. Each tick:
//!
//! 1. `x += speed * dt`, clamped to the panel width
//! 2. the clip region is rebuilt from `(x, y)`
//! 3. `ProgressChanged(x, y)` is delivered (hook first, then subscribers)
//! 4. if the row is full: emit `Ended` when the last row is done, otherwise
//!    wrap to the next row, discarding any overflow past the panel width

use super::clock::RevealClock;
use super::events::{Directive, ProgressHook, RevealEvent, Subscribers};
use crate::model::{ClipRegion, ConfigError, PanelMetrics};
use std::sync::mpsc::Receiver;
use tracing::{debug, trace};

/// Lifecycle of a reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    /// Never started, or cleared.
    #[default]
    Idle,
    /// Advancing on every tick.
    Running,
    /// Stopped by [`RevealEngine::pause`]; resume with `start(false)`.
    Paused,
    /// `Ended` was emitted. Terminal until the next `start(true)` or
    /// `force_complete()`.
    Completed,
}

/// Reveal cursor.
///
/// `x` is the revealed extent of the current row; `y` is that row's baseline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RevealState {
    /// Horizontal distance revealed in the current row, in `[0, width]`.
    pub x: f64,
    /// Baseline of the current row, a multiple of the row height.
    pub y: f64,
    /// Whether ticks currently advance the cursor.
    pub running: bool,
}

/// What a single [`RevealEngine::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The engine is not running; nothing changed.
    Stopped,
    /// The cursor moved within the current row.
    Advanced,
    /// The current row filled up and the cursor moved to the next row.
    Wrapped,
    /// The panel is fully revealed and `Ended` was emitted.
    Ended,
}

/// Time-driven reveal state machine.
///
/// # Examples
///
/// ```
/// use typewriter::model::PanelMetrics;
/// use typewriter::reveal::{NoHook, RevealEngine, TickOutcome};
///
/// let mut engine = RevealEngine::new(PanelMetrics::new(300.0, 120.0, 40.0, 1000.0));
/// engine.start(true).unwrap();
/// assert_eq!(engine.tick(0.05, &mut NoHook), TickOutcome::Advanced);
/// assert_eq!(engine.state().x, 50.0);
/// ```
#[derive(Debug)]
pub struct RevealEngine {
    panel: PanelMetrics,
    state: RevealState,
    phase: RevealPhase,
    clip: ClipRegion,
    subscribers: Subscribers,
}

impl RevealEngine {
    /// Create an idle engine with an empty clip region.
    pub fn new(panel: PanelMetrics) -> Self {
        Self {
            panel,
            state: RevealState::default(),
            phase: RevealPhase::Idle,
            clip: ClipRegion::empty(),
            subscribers: Subscribers::default(),
        }
    }

    /// Current panel metrics.
    pub fn panel(&self) -> PanelMetrics {
        self.panel
    }

    /// Resize the panel. Completion is always judged against the latest size.
    pub fn set_panel_size(&mut self, width: f64, height: f64) {
        self.panel.width = width;
        self.panel.height = height;
    }

    /// Row height used for wrapping and the clip region.
    pub fn row_height(&self) -> f64 {
        self.panel.row_height
    }

    /// Set the row height. Validated on the next [`start`](Self::start).
    pub fn set_row_height(&mut self, row_height: f64) {
        self.panel.row_height = row_height;
    }

    /// Reveal speed in panel units per second.
    pub fn speed(&self) -> f64 {
        self.panel.speed
    }

    /// Set the reveal speed. Validated on the next [`start`](Self::start).
    pub fn set_speed(&mut self, speed: f64) {
        self.panel.speed = speed;
    }

    /// Snapshot of the cursor.
    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Whether ticks currently advance the cursor.
    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// The region renderers should clip text to.
    pub fn clip_region(&self) -> &ClipRegion {
        &self.clip
    }

    /// Receive every `ProgressChanged`/`Ended` from now on.
    pub fn subscribe(&mut self) -> Receiver<RevealEvent> {
        self.subscribers.subscribe()
    }

    /// Start or resume revealing.
    ///
    /// With `reset`, the clip region is emptied and the cursor goes back to
    /// `(0, row_height)`. Without it, the reveal continues from where it
    /// stopped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the row height or speed is not a positive
    /// finite number. The engine is left stopped.
    pub fn start(&mut self, reset: bool) -> Result<(), ConfigError> {
        let PanelMetrics {
            row_height, speed, ..
        } = self.panel;
        if !(row_height.is_finite() && row_height > 0.0) {
            self.pause();
            return Err(ConfigError::InvalidRowHeight(row_height));
        }
        if !(speed.is_finite() && speed > 0.0) {
            self.pause();
            return Err(ConfigError::InvalidSpeed(speed));
        }

        if reset {
            self.clear();
            self.state.x = 0.0;
            self.state.y = row_height;
        }
        self.state.running = true;
        self.phase = RevealPhase::Running;
        debug!(reset, x = self.state.x, y = self.state.y, "reveal started");
        Ok(())
    }

    /// Stop advancing. No-op when not running.
    pub fn pause(&mut self) {
        if !self.state.running {
            return;
        }
        self.state.running = false;
        self.phase = RevealPhase::Paused;
        debug!(x = self.state.x, y = self.state.y, "reveal paused");
    }

    /// Whether the cursor has reached the bottom-right corner of the panel.
    pub fn is_complete(&self) -> bool {
        self.state.x >= self.panel.width && self.state.y >= self.panel.height
    }

    /// Jump to fully revealed.
    ///
    /// The engine is set running so the next tick draws the full region and
    /// emits `Ended` through the normal path. Calling this repeatedly before
    /// that tick still yields a single `Ended`.
    pub fn force_complete(&mut self) {
        self.state.x = self.panel.width;
        self.state.y = self.panel.height;
        self.state.running = true;
        self.phase = RevealPhase::Running;
        debug!("reveal forced to complete");
    }

    /// Hide everything and stop. The cursor is left untouched.
    pub fn clear(&mut self) {
        self.clip = ClipRegion::empty();
        self.state.running = false;
        self.phase = RevealPhase::Idle;
    }

    /// Advance by `dt` seconds.
    ///
    /// `hook` sees the new position before the wrap/completion check and may
    /// force completion, in which case `Ended` follows within this same tick.
    pub fn tick<H>(&mut self, dt: f64, hook: &mut H) -> TickOutcome
    where
        H: ProgressHook + ?Sized,
    {
        if !self.state.running {
            return TickOutcome::Stopped;
        }
        let PanelMetrics {
            width,
            height,
            row_height,
            speed,
        } = self.panel;

        self.state.x = RevealClock::new(speed).advance(self.state.x, dt, width);
        self.clip = ClipRegion::from_cursor(self.state.x, self.state.y, row_height, width, height);

        let (x, y) = (self.state.x, self.state.y);
        trace!(x, y, "reveal progress");
        let directive = hook.on_progress(x, y);
        self.subscribers.emit(RevealEvent::ProgressChanged { x, y });
        if directive == Directive::ForceComplete {
            self.force_complete();
            self.clip = ClipRegion::from_cursor(width, height, row_height, width, height);
        }

        if self.state.x < self.panel.width {
            return TickOutcome::Advanced;
        }
        if self.state.y >= self.panel.height {
            self.state.running = false;
            self.phase = RevealPhase::Completed;
            let (x, y) = (self.state.x, self.state.y);
            debug!(x, y, "reveal ended");
            self.subscribers.emit(RevealEvent::Ended { x, y });
            return TickOutcome::Ended;
        }

        self.state.x = 0.0;
        self.state.y += row_height;
        TickOutcome::Wrapped
    }
}

impl Default for RevealEngine {
    fn default() -> Self {
        Self::new(PanelMetrics::default())
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
