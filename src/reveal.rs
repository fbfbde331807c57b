use serde::Deserialize;

use crate::constants::REVEAL_THRESHOLD;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealMode {
    Once,   // stays shown after the first sighting
    Mirror, // shown only while at or above the threshold
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RevealPolicy {
    #[serde(default = "default_threshold")]
    pub threshold: f32,
    #[serde(default = "default_mode")]
    pub mode: RevealMode,
}

fn default_threshold() -> f32 {
    REVEAL_THRESHOLD
}

fn default_mode() -> RevealMode {
    RevealMode::Mirror
}

impl Default for RevealPolicy {
    fn default() -> Self {
        Self { threshold: default_threshold(), mode: default_mode() }
    }
}

#[derive(Debug, Clone)]
pub struct Reveal {
    policy: RevealPolicy,
    shown: bool,
}

impl Reveal {
    pub fn new(policy: RevealPolicy) -> Self {
        Self { policy, shown: false }
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    // Returns the new state only when it changed
    pub fn observe(&mut self, ratio: f32) -> Option<bool> {
        let visible = ratio >= self.policy.threshold && ratio > 0.0;
        let next = match self.policy.mode {
            RevealMode::Once => self.shown || visible,
            RevealMode::Mirror => visible,
        };
        if next == self.shown {
            return None;
        }
        self.shown = next;
        Some(next)
    }
}

// Visible fraction of [top, top + height) inside the viewport
pub fn intersection_ratio(top: f32, height: f32, viewport_top: f32, viewport_height: f32) -> f32 {
    if height <= 0.0 {
        return 0.0;
    }
    let start = top.max(viewport_top);
    let end = (top + height).min(viewport_top + viewport_height);
    ((end - start) / height).clamp(0.0, 1.0)
}
