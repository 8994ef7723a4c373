//! Reveal-on-scroll configuration.

use serde::Serialize;

/// Observer settings for the one-shot fade/slide-in of top-level sections.
///
/// Elements start offset and transparent; once 10% visible and 50 px into
/// the viewport they transition to rest and stay there.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevealConfig {
    /// Visibility fraction required to trigger.
    pub threshold: f32,

    /// Observer root margin; the bottom inset holds the reveal until the
    /// element is 50 px into the viewport.
    pub root_margin: String,

    /// Initial downward offset in pixels.
    pub offset_px: u32,

    /// Transition duration in seconds.
    pub transition_secs: f32,

    /// Selector for the observed elements.
    pub selector: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            offset_px: 30,
            transition_secs: 0.6,
            selector: "section, header, footer".to_string(),
        }
    }
}
