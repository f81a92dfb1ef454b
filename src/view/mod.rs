//! Terminal host for the typewriter panel.
//!
//! The top of the terminal is the panel; the bottom row is a status line that
//! shows key hints while typing, a next-page prompt when a page has been fully
//! revealed, and an end marker after the last page.

pub mod reveal_widget;

pub use reveal_widget::RevealWidget;

use crate::config::{KeyBindings, ResolvedConfig, TypewriterSettings};
use crate::layout::{TextLayout, Typewriter};
use crate::model::{ConfigError, KeyAction};
use crate::reveal::{RevealEvent, RevealPhase};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Reveal could not start
    #[error("Reveal error: {0}")]
    Config(#[from] ConfigError),
}

/// What the status line offers once typing stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Prompt {
    /// Still typing (or paused): show key hints.
    #[default]
    Typing,
    /// The page is revealed and another page follows.
    NextPage,
    /// The last page is revealed.
    End,
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    typewriter: Typewriter,
    events: Receiver<RevealEvent>,
    key_bindings: KeyBindings,
    prompt: Prompt,
    frame_interval: Duration,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    ///
    /// # Errors
    ///
    /// Fails on terminal I/O errors or when the configured pacing is invalid.
    pub fn new(content: String, config: &ResolvedConfig) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Self::with_terminal(terminal, content, &config.settings, config.frame_rate)
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits. Ticks the reveal once per frame with the
    /// real elapsed time since the previous frame.
    ///
    /// # Errors
    ///
    /// Propagates terminal I/O errors.
    pub fn run(&mut self) -> Result<(), TuiError> {
        let mut last_frame = Instant::now();
        self.draw()?;

        loop {
            let timeout = self.frame_interval.saturating_sub(last_frame.elapsed());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key)? {
                            return Ok(());
                        }
                    }
                    Event::Resize(width, height) => self.handle_resize(width, height)?,
                    _ => {}
                }
            }

            let now = Instant::now();
            let dt = now.duration_since(last_frame);
            if dt >= self.frame_interval {
                last_frame = now;
                self.tick(dt.as_secs_f64());
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Build the app around an existing terminal and start revealing `content`.
    ///
    /// # Errors
    ///
    /// Fails when the terminal size cannot be read or the settings cannot
    /// start a reveal.
    pub fn with_terminal(
        terminal: Terminal<B>,
        content: String,
        settings: &TypewriterSettings,
        frame_rate: u32,
    ) -> Result<Self, TuiError> {
        let size = terminal.size()?;
        let (width, height) = panel_size(settings, size.width, size.height);

        let mut typewriter = Typewriter::from_settings(settings, width, height);
        typewriter.text_mut().set_content(content);
        typewriter.commit_config();
        let events = typewriter.engine_mut().subscribe();
        typewriter.start(true)?;

        info!(
            width,
            height,
            lines = typewriter.text().lines().len(),
            "typewriter ready"
        );

        Ok(Self {
            terminal,
            typewriter,
            events,
            key_bindings: KeyBindings::default(),
            prompt: Prompt::Typing,
            frame_interval: Duration::from_secs(1) / frame_rate.max(1),
        })
    }

    /// The panel being displayed.
    pub fn typewriter(&self) -> &Typewriter {
        &self.typewriter
    }

    /// Current status-line prompt.
    pub fn prompt(&self) -> Prompt {
        self.prompt
    }

    /// Handle a key press. Returns `true` when the user asked to quit.
    ///
    /// # Errors
    ///
    /// Propagates reveal restart failures.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool, TuiError> {
        match self.key_bindings.get(key) {
            Some(action) => self.handle_action(action),
            None => Ok(false),
        }
    }

    /// Apply a host action. Returns `true` on quit.
    ///
    /// # Errors
    ///
    /// Propagates reveal restart failures.
    pub fn handle_action(&mut self, action: KeyAction) -> Result<bool, TuiError> {
        debug!(?action, "key action");
        match action {
            KeyAction::Advance => {
                if !self.typewriter.engine().is_complete() {
                    self.typewriter.engine_mut().force_complete();
                } else if self.typewriter.has_next_page() {
                    self.typewriter.scroll_to_next_page();
                    self.typewriter.start(true)?;
                    self.prompt = Prompt::Typing;
                }
            }
            KeyAction::TogglePause => match self.typewriter.engine().phase() {
                RevealPhase::Running => self.typewriter.engine_mut().pause(),
                RevealPhase::Paused => self.typewriter.start(false)?,
                RevealPhase::Idle | RevealPhase::Completed => {}
            },
            KeyAction::Restart => {
                self.typewriter.start(true)?;
                self.prompt = Prompt::Typing;
            }
            KeyAction::Quit => return Ok(true),
        }
        Ok(false)
    }

    /// Re-lay out for a new terminal size and retype the first page.
    ///
    /// # Errors
    ///
    /// Propagates reveal restart failures.
    pub fn handle_resize(&mut self, columns: u16, rows: u16) -> Result<(), TuiError> {
        let settings = TypewriterSettings {
            speed: self.typewriter.engine().speed(),
            row_height: self.typewriter.engine().row_height(),
            font_size: self.typewriter.text().font_size(),
            line_height: self.typewriter.text().line_height(),
        };
        let (width, height) = panel_size(&settings, columns, rows);
        self.typewriter.set_panel_size(width, height);
        self.typewriter.commit_config();
        self.typewriter.start(true)?;
        self.prompt = Prompt::Typing;
        Ok(())
    }

    /// Advance the reveal by `dt` seconds and react to its notifications.
    pub fn tick(&mut self, dt: f64) {
        self.typewriter.update(dt);
        for event in self.events.try_iter() {
            if let RevealEvent::Ended { .. } = event {
                self.prompt = if self.typewriter.has_next_page() {
                    Prompt::NextPage
                } else {
                    Prompt::End
                };
                debug!(prompt = ?self.prompt, "page revealed");
            }
        }
    }

    /// Render one frame.
    ///
    /// # Errors
    ///
    /// Propagates terminal I/O errors.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let typewriter = &self.typewriter;
        let prompt = self.prompt;
        self.terminal
            .draw(|frame| render(frame, typewriter, prompt))?;
        Ok(())
    }

    /// The terminal, for inspecting rendered output.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Panel size in panel units for a terminal of `columns` x `rows`, keeping
/// the bottom row for the status line.
fn panel_size(settings: &TypewriterSettings, columns: u16, rows: u16) -> (f64, f64) {
    let rows = rows.saturating_sub(1);
    (
        f64::from(columns) * settings.font_size,
        f64::from(rows) * settings.line_height,
    )
}

fn render(frame: &mut Frame, typewriter: &Typewriter, prompt: Prompt) {
    let [panel_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    frame.render_widget(RevealWidget::new(typewriter), panel_area);

    let status = match prompt {
        Prompt::Typing if typewriter.engine().phase() == RevealPhase::Paused => {
            "paused  p: resume  q: quit"
        }
        Prompt::Typing => "space: skip  p: pause  r: restart  q: quit",
        Prompt::NextPage => "▼ space: next page",
        Prompt::End => "— end —  r: read again  q: quit",
    };
    frame.render_widget(
        Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM)),
        status_area,
    );
}

/// Initialize and run the TUI application.
///
/// Handles terminal setup, runs the event loop, and restores the terminal on
/// exit. Logging must be initialized by the caller.
///
/// # Errors
///
/// Propagates terminal and reveal errors after restoring the terminal.
pub fn run(content: String, config: &ResolvedConfig) -> Result<(), TuiError> {
    let result = TuiApp::new(content, config).and_then(|mut app| app.run());

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
