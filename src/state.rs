use crate::clock::Millis;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Next,
    Prev,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TransitionState {
    Idle,                            // Nothing in flight, navigation accepted
    Transitioning { target: usize }, // Exit/swap/enter running, navigation dropped
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PauseReason {
    Hover,
    Touch,
    Navigation,
}

#[derive(Debug, Clone)]
pub struct RotationState {
    pub current_index: usize,
    pub dwell_start: Option<Millis>,
    pub transition: TransitionState,
    hover: bool,
    touch: bool,
    navigation: bool,
}

impl RotationState {
    pub fn new(dwell_start: Millis) -> Self {
        Self {
            current_index: 0,
            dwell_start: Some(dwell_start),
            transition: TransitionState::Idle,
            hover: false,
            touch: false,
            navigation: false,
        }
    }

    pub fn running(&self) -> bool {
        !(self.hover || self.touch || self.navigation)
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.transition, TransitionState::Transitioning { .. })
    }

    // True when this call stopped a running rotation
    pub fn pause(&mut self, reason: PauseReason) -> bool {
        let was_running = self.running();
        *self.flag(reason) = true;
        was_running
    }

    // True when this call let a paused rotation run again
    pub fn release(&mut self, reason: PauseReason) -> bool {
        let was_running = self.running();
        *self.flag(reason) = false;
        !was_running && self.running()
    }

    pub fn is_paused_by(&self, reason: PauseReason) -> bool {
        match reason {
            PauseReason::Hover => self.hover,
            PauseReason::Touch => self.touch,
            PauseReason::Navigation => self.navigation,
        }
    }

    fn flag(&mut self, reason: PauseReason) -> &mut bool {
        match reason {
            PauseReason::Hover => &mut self.hover,
            PauseReason::Touch => &mut self.touch,
            PauseReason::Navigation => &mut self.navigation,
        }
    }
}
