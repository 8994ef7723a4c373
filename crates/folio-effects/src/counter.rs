//! Count-up statistic animation.
//!
//! Each counter climbs from 0 to its target in 50 steps at 50 ms intervals,
//! flooring the displayed value each tick and landing exactly on the target.

/// Number of ticks in a full count-up.
pub const COUNTER_STEPS: u32 = 50;

/// Milliseconds between ticks.
pub const COUNTER_INTERVAL_MS: u64 = 50;

/// A single count-up animation.
#[derive(Debug, Clone)]
pub struct Counter {
    target: u32,
    step: u32,
}

impl Counter {
    pub fn new(target: u32) -> Self {
        Self { target, step: 0 }
    }

    /// Advance one tick; `None` once the target has been displayed.
    pub fn tick(&mut self) -> Option<u32> {
        if self.step == COUNTER_STEPS {
            return None;
        }
        self.step += 1;
        Some(value_at(self.target, self.step))
    }

    /// All displayed values, in order. The last one is the target.
    pub fn schedule(target: u32) -> Vec<u32> {
        (1..=COUNTER_STEPS).map(|s| value_at(target, s)).collect()
    }
}

fn value_at(target: u32, step: u32) -> u32 {
    // Widened to avoid overflow near u32::MAX targets.
    (u64::from(target) * u64::from(step) / u64::from(COUNTER_STEPS)) as u32
}
