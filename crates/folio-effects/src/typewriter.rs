//! Role-cycling typewriter state machine.
//!
//! Types one character per tick (100 ms), pauses at the full string
//! (2000 ms), deletes one character per tick (50 ms), then advances to the
//! next role, wrapping. For a role of length `n` the span from selection to
//! the empty string is exactly `n*100 + 2000 + n*50` ms.

use serde::Serialize;

/// Delay before the next typed character, in milliseconds.
pub const TYPE_MS: u64 = 100;

/// Delay before the next deleted character, in milliseconds.
pub const DELETE_MS: u64 = 50;

/// Pause at the fully typed string, in milliseconds.
pub const PAUSE_MS: u64 = 2000;

/// Roles used when the data document carries none.
pub const DEFAULT_ROLES: [&str; 3] = ["Developer", "Programmer", "Problem Solver"];

/// One displayed frame: the text to show and how long to show it before the
/// next tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub text: String,
    pub delay_ms: u64,
}

/// The typewriter loop. Owns its own counters; never terminates on its own.
#[derive(Debug, Clone)]
pub struct Typewriter {
    roles: Vec<Vec<char>>,
    role: usize,
    chars: usize,
    deleting: bool,
}

impl Typewriter {
    /// Create a typewriter over `roles`. Empty strings are skipped; an empty
    /// list falls back to [`DEFAULT_ROLES`].
    pub fn new(roles: &[String]) -> Self {
        let mut roles: Vec<Vec<char>> = roles
            .iter()
            .filter(|r| !r.is_empty())
            .map(|r| r.chars().collect())
            .collect();

        if roles.is_empty() {
            roles = DEFAULT_ROLES.iter().map(|r| r.chars().collect()).collect();
        }

        Self {
            roles,
            role: 0,
            chars: 0,
            deleting: false,
        }
    }

    /// Index of the currently selected role.
    pub fn active_role(&self) -> usize {
        self.role
    }

    pub fn role_count(&self) -> usize {
        self.roles.len()
    }

    /// Advance one step and return the frame to display.
    ///
    /// The frame's delay already accounts for what the next step will do:
    /// the tick that completes a role carries the pause, and the tick that
    /// empties it advances the role and carries a full typing delay.
    pub fn tick(&mut self) -> Frame {
        let current = &self.roles[self.role];

        if self.deleting {
            self.chars -= 1;
        } else {
            self.chars += 1;
        }

        let text: String = current.iter().take(self.chars).collect();

        let delay_ms = if !self.deleting && self.chars == current.len() {
            self.deleting = true;
            // Pause at the full string; the first deleted character lands
            // one delete interval after the pause ends.
            PAUSE_MS + DELETE_MS
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.role = (self.role + 1) % self.roles.len();
            TYPE_MS
        } else if self.deleting {
            DELETE_MS
        } else {
            TYPE_MS
        };

        Frame { text, delay_ms }
    }

    /// One full cycle through every role, ending back at the first. The
    /// runtime script replays these frames in a loop.
    pub fn cycle(&mut self) -> Vec<Frame> {
        let ticks: usize = self.roles.iter().map(|r| r.len() * 2).sum();
        (0..ticks).map(|_| self.tick()).collect()
    }
}
