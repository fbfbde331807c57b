use std::collections::VecDeque;

use crate::clock::Millis;

// Each delay is relative to the previous step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline<A> {
    steps: Vec<(Millis, A)>,
}

impl<A> Default for Timeline<A> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<A> Timeline<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(mut self, delay: Millis, action: A) -> Self {
        self.steps.push((delay, action));
        self
    }
}

#[derive(Debug)]
pub struct Sequencer<A> {
    pending: VecDeque<(Millis, A)>,
}

impl<A> Default for Sequencer<A> {
    fn default() -> Self {
        Self { pending: VecDeque::new() }
    }
}

impl<A> Sequencer<A> {
    pub fn new() -> Self {
        Self::default()
    }

    // Replaces whatever was still pending
    pub fn start(&mut self, now: Millis, timeline: Timeline<A>) {
        self.pending.clear();
        let mut due = now;
        for (delay, action) in timeline.steps {
            due += delay;
            self.pending.push_back((due, action));
        }
    }

    pub fn poll(&mut self, now: Millis) -> Vec<A> {
        let mut ready = Vec::new();
        while self.pending.front().is_some_and(|(due, _)| *due <= now) {
            if let Some((_, action)) = self.pending.pop_front() {
                ready.push(action);
            }
        }
        ready
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn cancel(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn three_phase() -> Timeline<&'static str> {
        Timeline::new().then(0, "exit").then(150, "swap").then(40, "enter")
    }

    #[test]
    fn steps_fire_at_cumulative_offsets() {
        let mut seq = Sequencer::new();
        seq.start(1_000, three_phase());

        assert_eq!(seq.poll(1_000), vec!["exit"]);
        assert_eq!(seq.poll(1_149), Vec::<&str>::new());
        assert_eq!(seq.poll(1_150), vec!["swap"]);
        assert!(!seq.is_idle());
        assert_eq!(seq.poll(1_190), vec!["enter"]);
        assert!(seq.is_idle());
    }

    #[test]
    fn late_poll_fires_everything_in_order() {
        let mut seq = Sequencer::new();
        seq.start(0, three_phase());
        assert_eq!(seq.poll(10_000), vec!["exit", "swap", "enter"]);
    }

    #[test]
    fn cancel_drops_pending_steps() {
        let mut seq = Sequencer::new();
        seq.start(0, three_phase());
        seq.poll(0);
        assert_eq!(seq.cancel(), 2);
        assert!(seq.poll(1_000).is_empty());
    }

    #[test]
    fn restart_replaces_pending_steps() {
        let mut seq = Sequencer::new();
        seq.start(0, three_phase());
        seq.poll(0);
        seq.start(500, Timeline::new().then(10, "other"));
        assert_eq!(seq.poll(1_000), vec!["other"]);
        assert!(seq.is_idle());
    }
}
