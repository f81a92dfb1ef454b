//! Host-level actions independent of key bindings.

/// What the user asked the demo host to do.
///
/// The mapping from `crossterm::event::KeyEvent` to `KeyAction` is handled by
/// [`KeyBindings`](crate::config::KeyBindings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Skip typing if the page is still revealing, otherwise turn the page.
    /// Default: Space/Enter
    Advance,
    /// Pause or resume the reveal. Default: p
    TogglePause,
    /// Restart the current page from its top. Default: r
    Restart,
    /// Leave the application. Default: q/Esc/Ctrl+C
    Quit,
}
