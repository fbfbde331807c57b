use std::cell::Cell;
use std::rc::Rc;

// Milliseconds on a monotonic timeline owned by the host
pub type Millis = u64;

pub trait Clock {
    fn now(&self) -> Millis;
}

// --- Manual ---

// Only moves when told to. Clones share the same timeline.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Millis>>,
}

impl ManualClock {
    pub fn new(start: Millis) -> Self {
        Self { now: Rc::new(Cell::new(start)) }
    }

    pub fn set(&self, now: Millis) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Millis) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Millis {
        self.now.get()
    }
}

// --- Frame ---

// Accumulates per-frame deltas in seconds, as reported by the render loop
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    seconds: Rc<Cell<f64>>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, dt: f32) {
        if dt.is_finite() && dt > 0.0 {
            self.seconds.set(self.seconds.get() + dt as f64);
        }
    }
}

impl Clock for FrameClock {
    fn now(&self) -> Millis {
        (self.seconds.get() * 1000.0) as Millis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new(10);
        let other = clock.clone();
        clock.advance(5);
        assert_eq!(other.now(), 15);
        other.set(100);
        assert_eq!(clock.now(), 100);
    }

    #[test]
    fn frame_clock_accumulates_fractional_frames() {
        let clock = FrameClock::new();
        for _ in 0..60 {
            clock.advance(1.0 / 60.0);
        }
        let now = clock.now();
        assert!((999..=1000).contains(&now), "now = {now}");
    }

    #[test]
    fn frame_clock_ignores_bogus_deltas() {
        let clock = FrameClock::new();
        clock.advance(-1.0);
        clock.advance(f32::NAN);
        assert_eq!(clock.now(), 0);
    }
}
