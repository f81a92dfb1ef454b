//! Incremental reveal: clock, events and the engine that ties them together.

pub mod clock;
pub mod engine;
pub mod events;

pub use clock::RevealClock;
pub use engine::{RevealEngine, RevealPhase, RevealState, TickOutcome};
pub use events::{Directive, NoHook, ProgressHook, RevealEvent, Subscribers};
