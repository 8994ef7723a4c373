//! Presentational effects for the rendered page.
//!
//! The original behavior (role-cycling typewriter, count-up statistics,
//! reveal-on-scroll) is modeled as pure, tick-driven state machines. The
//! build compiles their schedules into a small runtime script; the browser
//! side only replays precomputed frames.

pub mod counter;
pub mod reveal;
pub mod script;
pub mod typewriter;

pub use counter::{Counter, COUNTER_INTERVAL_MS, COUNTER_STEPS};
pub use reveal::RevealConfig;
pub use script::{effects_script, CounterPlan, EffectsPlan, TypewriterPlan};
pub use typewriter::{Frame, Typewriter, DEFAULT_ROLES};
