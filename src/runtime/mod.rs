//! Single-owner scheduling of placement and morphing against an injected clock.

pub mod backdrop;
pub mod timer;
