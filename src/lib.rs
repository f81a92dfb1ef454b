//! Typewriter-style progressive text reveal.
//!
//! A [`reveal::RevealEngine`] sweeps a cursor across a panel row by row and
//! exposes the revealed area as a [`model::ClipRegion`]. A
//! [`layout::Typewriter`] ties the engine to wrapped text and a scroll
//! container so a reveal ends as soon as the last line of the page is typed,
//! and pages can be turned one viewport at a time.
//!
//! The `view` module hosts the panel in a terminal.

pub mod config;
pub mod layout;
pub mod logging;
pub mod model;
pub mod reveal;
pub mod view;
