use serde::Deserialize;

use crate::clock::Millis;
use crate::timers::{TimerId, Timers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoplayModel {
    Interval, // repeating timer, one advance per firing
    Sampled,  // dwell time compared to the interval on every tick
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wake {
    Advance,
    Resume,
}

#[derive(Debug)]
pub struct Autoplay {
    model: AutoplayModel,
    interval: Millis,
    timer: Option<TimerId>,
}

impl Autoplay {
    pub fn new(model: AutoplayModel, interval: Millis) -> Self {
        Self { model, interval, timer: None }
    }

    // The interval model gets a fresh timer so a newly shown slide always
    // receives the full interval
    pub fn start(&mut self, now: Millis, timers: &mut Timers<Wake>) {
        self.stop(timers);
        if self.model == AutoplayModel::Interval {
            self.timer = Some(timers.repeat(now, self.interval, Wake::Advance));
        }
    }

    pub fn stop(&mut self, timers: &mut Timers<Wake>) {
        if let Some(id) = self.timer.take() {
            timers.cancel(id);
        }
    }

    pub fn sample_due(&self, elapsed: Millis) -> bool {
        self.model == AutoplayModel::Sampled && elapsed >= self.interval
    }
}
