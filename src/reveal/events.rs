//! Typed notifications emitted by the reveal engine.
//!
//! Two delivery paths exist:
//!
//! - [`ProgressHook`]: called synchronously inside a tick, after the clip region
//!   is rebuilt and before the row-wrap check. It may ask the engine to
//!   force-complete.
//! - [`Subscribers`]: `std::sync::mpsc` channels for hosts that only need to
//!   observe. A dropped receiver is pruned on the next emit.

use std::sync::mpsc::{self, Receiver, Sender};

/// A notification from the reveal engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealEvent {
    /// The cursor moved; the clip region now ends at `(x, y)`.
    ProgressChanged {
        /// Revealed extent of the current row.
        x: f64,
        /// Baseline of the current row.
        y: f64,
    },
    /// The whole panel is revealed.
    Ended {
        /// Final horizontal cursor (the panel width).
        x: f64,
        /// Final baseline (the panel height).
        y: f64,
    },
}

/// What a [`ProgressHook`] wants the engine to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Directive {
    /// Keep revealing.
    #[default]
    Continue,
    /// Jump to fully revealed; `Ended` is emitted within the same tick.
    ForceComplete,
}

/// Synchronous observer of in-tick progress.
pub trait ProgressHook {
    /// Called once per tick with the position that produced the new clip region.
    fn on_progress(&mut self, x: f64, y: f64) -> Directive;
}

/// Hook that never intervenes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHook;

impl ProgressHook for NoHook {
    fn on_progress(&mut self, _x: f64, _y: f64) -> Directive {
        Directive::Continue
    }
}

impl<F> ProgressHook for F
where
    F: FnMut(f64, f64) -> Directive,
{
    fn on_progress(&mut self, x: f64, y: f64) -> Directive {
        self(x, y)
    }
}

/// Channel-backed subscriber list.
#[derive(Debug, Default)]
pub struct Subscribers {
    senders: Vec<Sender<RevealEvent>>,
}

impl Subscribers {
    /// Register a new subscriber and return its receiving end.
    pub fn subscribe(&mut self) -> Receiver<RevealEvent> {
        let (tx, rx) = mpsc::channel();
        self.senders.push(tx);
        rx
    }

    /// Deliver `event` to every live subscriber, dropping disconnected ones.
    pub fn emit(&mut self, event: RevealEvent) {
        self.senders.retain(|tx| tx.send(event).is_ok());
    }

    /// Number of live subscribers as of the last emit.
    pub fn len(&self) -> usize {
        self.senders.len()
    }

    /// Whether nobody is listening.
    pub fn is_empty(&self) -> bool {
        self.senders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_reaches_every_subscriber() {
        let mut subs = Subscribers::default();
        let a = subs.subscribe();
        let b = subs.subscribe();

        subs.emit(RevealEvent::ProgressChanged { x: 1.0, y: 40.0 });

        assert_eq!(a.try_recv(), Ok(RevealEvent::ProgressChanged { x: 1.0, y: 40.0 }));
        assert_eq!(b.try_recv(), Ok(RevealEvent::ProgressChanged { x: 1.0, y: 40.0 }));
    }

    #[test]
    fn dropped_receiver_is_pruned_without_panicking() {
        let mut subs = Subscribers::default();
        let kept = subs.subscribe();
        drop(subs.subscribe());

        subs.emit(RevealEvent::Ended { x: 3.0, y: 4.0 });

        assert_eq!(subs.len(), 1);
        assert_eq!(kept.try_recv(), Ok(RevealEvent::Ended { x: 3.0, y: 4.0 }));
    }

    #[test]
    fn closure_hook_forwards_position() {
        let mut seen = Vec::new();
        let mut hook = |x: f64, y: f64| {
            seen.push((x, y));
            Directive::Continue
        };
        assert_eq!(hook.on_progress(2.0, 3.0), Directive::Continue);
        assert_eq!(seen, vec![(2.0, 3.0)]);
    }

    #[test]
    fn no_hook_always_continues() {
        assert_eq!(NoHook.on_progress(100.0, 100.0), Directive::Continue);
    }
}
