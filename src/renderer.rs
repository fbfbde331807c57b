use tracing::debug;

use crate::clock::Millis;
use crate::sequencer::{Sequencer, Timeline};
use crate::slide::SlideStore;
use crate::state::{Direction, RotationState, TransitionState};
use crate::view::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Exit,
    Swap,
    Enter,
}

#[derive(Debug)]
pub struct TransitionRenderer {
    swap_delay: Millis,
    enter_delay: Millis,
    direction: Direction,
    sequencer: Sequencer<Phase>,
}

impl TransitionRenderer {
    pub fn new(swap_delay: Millis, enter_delay: Millis) -> Self {
        Self {
            swap_delay,
            enter_delay,
            direction: Direction::Next,
            sequencer: Sequencer::new(),
        }
    }

    pub fn timeline(&self) -> Timeline<Phase> {
        Timeline::new()
            .then(0, Phase::Exit)
            .then(self.swap_delay, Phase::Swap)
            .then(self.enter_delay, Phase::Enter)
    }

    // Dropped while another transition is in flight. The exit phase and
    // indicator sync run immediately.
    pub fn begin(
        &mut self,
        now: Millis,
        target: usize,
        direction: Direction,
        rotation: &mut RotationState,
        view: &mut View,
        store: &SlideStore,
    ) -> bool {
        if let TransitionState::Transitioning { target: busy } = rotation.transition {
            debug!(busy, requested = target, "transition in flight, request dropped");
            return false;
        }

        rotation.transition = TransitionState::Transitioning { target };
        rotation.current_index = target;
        self.direction = direction;
        self.sequencer.start(now, self.timeline());
        self.advance(now, rotation, view, store);
        true
    }

    pub fn advance(&mut self, now: Millis, rotation: &mut RotationState, view: &mut View, store: &SlideStore) {
        let TransitionState::Transitioning { target } = rotation.transition else {
            return;
        };

        for phase in self.sequencer.poll(now) {
            match phase {
                Phase::Exit => {
                    view.sync_indicators(target, store.count());
                    view.exit(self.direction, now);
                }
                Phase::Swap => view.swap(store.get(target)),
                Phase::Enter => {
                    view.enter(now);
                    rotation.transition = TransitionState::Idle;
                    debug!(index = target, "transition complete");
                }
            }
        }
    }

    // Leaves the view where it stands
    pub fn cancel(&mut self, rotation: &mut RotationState) {
        self.sequencer.cancel();
        rotation.transition = TransitionState::Idle;
    }
}
