//! Entrance-animation state machines.
//!
//! Everything here is pure state driven by the caller's clock: the TUI
//! feeds visibility fractions and tick instants, the structs answer which
//! items should currently be drawn as revealed.

mod reveal;
mod typewriter;

pub use reveal::{intersection_ratio, Reveal, SequentialReveal, StaggeredReveal};
pub use typewriter::Typewriter;
