use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::autoplay::{Autoplay, AutoplayModel, Wake};
use crate::clock::{Clock, Millis};
use crate::constants::*;
use crate::renderer::TransitionRenderer;
use crate::slide::{Slide, SlideStore};
use crate::state::{Direction, PauseReason, RotationState};
use crate::timers::{TimerId, Timers};
use crate::view::{Anchor, Anchors, View};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flavor {
    Selector, // item list with underline fill, click to select
    Carousel, // prev/next buttons, counter and progress ring, swipe
}

impl Flavor {
    pub fn required_anchors(self) -> &'static [Anchor] {
        match self {
            Flavor::Selector => &[
                Anchor::Selector,
                Anchor::Title,
                Anchor::Text,
                Anchor::Image,
                Anchor::Content,
            ],
            Flavor::Carousel => &[
                Anchor::Image,
                Anchor::Text,
                Anchor::PrevButton,
                Anchor::NextButton,
                Anchor::Counter,
            ],
        }
    }

    pub fn optional_anchors(self) -> &'static [Anchor] {
        match self {
            Flavor::Selector => &[Anchor::Tags, Anchor::Root, Anchor::Counter, Anchor::Progress],
            Flavor::Carousel => &[Anchor::Progress, Anchor::Root, Anchor::Title, Anchor::Tags],
        }
    }

    pub fn default_anchors(self) -> Anchors {
        self.required_anchors()
            .iter()
            .chain(self.optional_anchors())
            .copied()
            .collect()
    }

    pub fn autoplay_model(self) -> AutoplayModel {
        match self {
            Flavor::Selector => AutoplayModel::Interval,
            Flavor::Carousel => AutoplayModel::Sampled,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub advance_interval_ms: Millis,
    pub swap_delay_ms: Millis,
    pub enter_delay_ms: Millis,
    pub indicator_fill_ms: Millis,
    pub resume_delay_ms: Millis, // 0 restarts autoplay right after a manual navigation
    pub swipe_threshold_px: f32,
}

impl Timing {
    pub fn for_flavor(flavor: Flavor) -> Self {
        let (swap_delay_ms, resume_delay_ms) = match flavor {
            Flavor::Selector => (SELECTOR_SWAP_DELAY_MS, 0),
            Flavor::Carousel => (CAROUSEL_SWAP_DELAY_MS, RESUME_DELAY_MS),
        };
        Self {
            advance_interval_ms: ADVANCE_INTERVAL_MS,
            swap_delay_ms,
            enter_delay_ms: ENTER_DELAY_MS,
            indicator_fill_ms: INDICATOR_FILL_MS,
            resume_delay_ms,
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CarouselConfig {
    pub name: String,
    pub flavor: Flavor,
    pub autoplay: AutoplayModel,
    pub timing: Timing,
}

impl CarouselConfig {
    pub fn new(name: impl Into<String>, flavor: Flavor) -> Self {
        Self {
            name: name.into(),
            flavor,
            autoplay: flavor.autoplay_model(),
            timing: Timing::for_flavor(flavor),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    Disabled,
    Disposed,
}

#[derive(Debug)]
enum Lifecycle {
    Active(Box<Instance>),
    Disabled,
    Disposed,
}

#[derive(Debug)]
pub struct Carousel<C: Clock> {
    name: String,
    flavor: Flavor,
    clock: C,
    lifecycle: Lifecycle,
}

impl<C: Clock> Carousel<C> {
    // Missing required anchors or an empty slide list leave the widget
    // disabled: nothing is scheduled and every operation is a no-op.
    pub fn mount(config: CarouselConfig, slides: Vec<Slide>, anchors: Anchors, clock: C) -> Self {
        let missing = anchors.missing(config.flavor.required_anchors());
        let store = SlideStore::new(slides);

        let lifecycle = match store {
            Some(store) if missing.is_empty() => {
                info!(name = %config.name, slides = store.count(), flavor = ?config.flavor, "carousel mounted");
                Lifecycle::Active(Box::new(Instance::new(&config, store, anchors, clock.now())))
            }
            Some(_) => {
                warn!(name = %config.name, ?missing, "required anchors missing, carousel disabled");
                Lifecycle::Disabled
            }
            None => {
                warn!(name = %config.name, "no slides, carousel disabled");
                Lifecycle::Disabled
            }
        };

        Self {
            name: config.name,
            flavor: config.flavor,
            clock,
            lifecycle,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn status(&self) -> Status {
        match self.lifecycle {
            Lifecycle::Active(_) => Status::Active,
            Lifecycle::Disabled => Status::Disabled,
            Lifecycle::Disposed => Status::Disposed,
        }
    }

    pub fn view(&self) -> Option<&View> {
        self.instance().map(|i| &i.view)
    }

    pub fn current_index(&self) -> Option<usize> {
        self.instance().map(|i| i.rotation.current_index)
    }

    pub fn slide_count(&self) -> usize {
        self.instance().map_or(0, |i| i.store.count())
    }

    pub fn is_running(&self) -> bool {
        self.instance().is_some_and(|i| i.rotation.running())
    }

    pub fn is_transitioning(&self) -> bool {
        self.instance().is_some_and(|i| i.rotation.is_transitioning())
    }

    pub fn pending_timers(&self) -> usize {
        self.instance().map_or(0, |i| i.timers.len())
    }

    // --- Frame ---

    pub fn tick(&mut self) {
        let now = self.clock.now();
        if let Some(instance) = self.instance_mut() {
            instance.tick(now);
        }
    }

    // --- Navigation ---

    pub fn next(&mut self) -> bool {
        let now = self.clock.now();
        self.instance_mut().is_some_and(|i| {
            let target = i.store.next(i.rotation.current_index);
            i.navigate(now, target, Direction::Next)
        })
    }

    pub fn prev(&mut self) -> bool {
        let now = self.clock.now();
        self.instance_mut().is_some_and(|i| {
            let target = i.store.prev(i.rotation.current_index);
            i.navigate(now, target, Direction::Prev)
        })
    }

    // No-op for the current slide or an out-of-range index
    pub fn go_to(&mut self, index: usize) -> bool {
        let now = self.clock.now();
        self.instance_mut().is_some_and(|i| {
            if index >= i.store.count() {
                return false;
            }
            let direction = if index > i.rotation.current_index {
                Direction::Next
            } else {
                Direction::Prev
            };
            i.navigate(now, index, direction)
        })
    }

    // --- Pointer ---

    pub fn hover_enter(&mut self) {
        if let Some(i) = self.instance_mut().filter(|i| i.anchors.contains(Anchor::Root)) {
            i.pause(PauseReason::Hover);
        }
    }

    pub fn hover_leave(&mut self) {
        let now = self.clock.now();
        if let Some(i) = self.instance_mut().filter(|i| i.anchors.contains(Anchor::Root)) {
            i.release(PauseReason::Hover, now);
        }
    }

    pub fn touch_start(&mut self, x: f32) {
        if let Some(i) = self.instance_mut().filter(|i| i.anchors.contains(Anchor::Root)) {
            i.touch = Some(Touch { start_x: x, end_x: x });
            i.pause(PauseReason::Touch);
        }
    }

    pub fn touch_move(&mut self, x: f32) {
        if let Some(touch) = self.instance_mut().and_then(|i| i.touch.as_mut()) {
            touch.end_x = x;
        }
    }

    pub fn touch_end(&mut self) -> Option<Direction> {
        let now = self.clock.now();
        self.instance_mut().and_then(|i| i.finish_touch(now))
    }

    pub fn dispose(&mut self) {
        if let Lifecycle::Active(instance) = &mut self.lifecycle {
            let Instance { timers, renderer, rotation, .. } = &mut **instance;
            timers.clear();
            renderer.cancel(rotation);
            info!(name = %self.name, "carousel disposed");
        }
        self.lifecycle = Lifecycle::Disposed;
    }

    fn instance(&self) -> Option<&Instance> {
        match &self.lifecycle {
            Lifecycle::Active(instance) => Some(&**instance),
            _ => None,
        }
    }

    fn instance_mut(&mut self) -> Option<&mut Instance> {
        match &mut self.lifecycle {
            Lifecycle::Active(instance) => Some(&mut **instance),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Touch {
    start_x: f32,
    end_x: f32,
}

#[derive(Debug)]
struct Instance {
    store: SlideStore,
    timing: Timing,
    anchors: Anchors,
    rotation: RotationState,
    renderer: TransitionRenderer,
    autoplay: Autoplay,
    timers: Timers<Wake>,
    resume_timer: Option<TimerId>,
    view: View,
    touch: Option<Touch>,
}

impl Instance {
    fn new(config: &CarouselConfig, store: SlideStore, anchors: Anchors, now: Millis) -> Self {
        let timing = config.timing;
        let view = View::initial(&store, &anchors, now);
        let mut instance = Self {
            store,
            timing,
            anchors,
            rotation: RotationState::new(now),
            renderer: TransitionRenderer::new(timing.swap_delay_ms, timing.enter_delay_ms),
            autoplay: Autoplay::new(config.autoplay, timing.advance_interval_ms),
            timers: Timers::new(),
            resume_timer: None,
            view,
            touch: None,
        };
        instance.autoplay.start(now, &mut instance.timers);
        instance
    }

    fn tick(&mut self, now: Millis) {
        self.renderer.advance(now, &mut self.rotation, &mut self.view, &self.store);

        for wake in self.timers.drain_due(now) {
            match wake {
                Wake::Advance => {
                    if self.rotation.running() {
                        self.auto_advance(now);
                    }
                }
                Wake::Resume => {
                    self.resume_timer = None;
                    self.release(PauseReason::Navigation, now);
                }
            }
        }

        if self.rotation.running() {
            self.sample(now);
        }
    }

    fn sample(&mut self, now: Millis) {
        let start = *self.rotation.dwell_start.get_or_insert(now);
        let elapsed = now.saturating_sub(start);
        self.view.set_progress(
            percent(elapsed, self.timing.advance_interval_ms),
            percent(elapsed, self.timing.indicator_fill_ms),
        );
        if self.autoplay.sample_due(elapsed) {
            self.auto_advance(now);
        }
    }

    fn auto_advance(&mut self, now: Millis) {
        let target = self.store.next(self.rotation.current_index);
        if target == self.rotation.current_index {
            self.rotation.dwell_start = Some(now);
            return;
        }
        if self.begin(now, target, Direction::Next) {
            debug!(index = target, "autoplay advanced");
        }
    }

    fn begin(&mut self, now: Millis, target: usize, direction: Direction) -> bool {
        let accepted = self
            .renderer
            .begin(now, target, direction, &mut self.rotation, &mut self.view, &self.store);
        if accepted {
            self.rotation.dwell_start = Some(now);
        }
        accepted
    }

    fn navigate(&mut self, now: Millis, target: usize, direction: Direction) -> bool {
        if target == self.rotation.current_index || !self.begin(now, target, direction) {
            return false;
        }
        debug!(index = target, ?direction, "navigated");

        if self.timing.resume_delay_ms == 0 {
            if self.rotation.running() {
                self.autoplay.start(now, &mut self.timers);
            }
        } else {
            self.hold_for_resume(now);
        }
        true
    }

    fn finish_touch(&mut self, now: Millis) -> Option<Direction> {
        let touch = self.touch.take()?;
        let dx = touch.end_x - touch.start_x;

        let swiped = if dx.abs() > self.timing.swipe_threshold_px {
            let (target, direction) = if dx < 0.0 {
                (self.store.next(self.rotation.current_index), Direction::Next)
            } else {
                (self.store.prev(self.rotation.current_index), Direction::Prev)
            };
            (target != self.rotation.current_index && self.begin(now, target, direction)).then_some(direction)
        } else {
            None
        };
        debug!(dx, ?swiped, "swipe ended");

        self.hold_for_resume(now);
        self.release(PauseReason::Touch, now);
        swiped
    }

    fn hold_for_resume(&mut self, now: Millis) {
        if self.timing.resume_delay_ms == 0 {
            return;
        }
        self.pause(PauseReason::Navigation);
        if let Some(id) = self.resume_timer.take() {
            self.timers.cancel(id);
        }
        self.resume_timer = Some(self.timers.once(now, self.timing.resume_delay_ms, Wake::Resume));
    }

    fn pause(&mut self, reason: PauseReason) {
        if self.rotation.pause(reason) {
            self.autoplay.stop(&mut self.timers);
            debug!(?reason, "autoplay paused");
        }
    }

    // Resuming never continues a partial dwell
    fn release(&mut self, reason: PauseReason, now: Millis) {
        if self.rotation.release(reason) {
            self.rotation.dwell_start = Some(now);
            self.view.set_progress(0.0, 0.0);
            self.autoplay.start(now, &mut self.timers);
            debug!(?reason, "autoplay resumed");
        }
    }
}

fn percent(elapsed: Millis, duration: Millis) -> f32 {
    if duration == 0 {
        return 100.0;
    }
    (elapsed as f32 / duration as f32 * 100.0).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::view::Presentation;
    use pretty_assertions::assert_eq;

    fn slides() -> Vec<Slide> {
        ["A", "B", "C", "D"]
            .iter()
            .map(|s| Slide::new(*s, format!("images/{s}.png")).with_title(*s))
            .collect()
    }

    fn mount_with(flavor: Flavor, anchors: Anchors) -> (Carousel<ManualClock>, ManualClock) {
        let clock = ManualClock::new(0);
        let carousel = Carousel::mount(CarouselConfig::new("test", flavor), slides(), anchors, clock.clone());
        (carousel, clock)
    }

    fn mount(flavor: Flavor) -> (Carousel<ManualClock>, ManualClock) {
        mount_with(flavor, flavor.default_anchors())
    }

    fn settle(carousel: &mut Carousel<ManualClock>, clock: &ManualClock, ms: Millis) {
        clock.advance(ms);
        carousel.tick();
    }

    fn mount_config(config: CarouselConfig) -> (Carousel<ManualClock>, ManualClock) {
        let clock = ManualClock::new(0);
        let anchors = config.flavor.default_anchors();
        let carousel = Carousel::mount(config, slides(), anchors, clock.clone());
        (carousel, clock)
    }

    fn fast_autoplay(flavor: Flavor) -> CarouselConfig {
        let mut config = CarouselConfig::new("fast", flavor);
        config.timing.advance_interval_ms = 100;
        config.timing.swap_delay_ms = 150;
        config
    }

    #[test]
    fn next_walks_the_deck_and_wraps() {
        let (mut carousel, clock) = mount(Flavor::Carousel);

        for expected in 1..=3 {
            assert!(carousel.next());
            settle(&mut carousel, &clock, 200);
            assert_eq!(carousel.current_index(), Some(expected));
        }
        assert_eq!(carousel.view().unwrap().content.text, "D");

        assert!(carousel.next());
        settle(&mut carousel, &clock, 200);
        assert_eq!(carousel.current_index(), Some(0));
        assert_eq!(carousel.view().unwrap().content.text, "A");
        assert_eq!(carousel.view().unwrap().counter.as_deref(), Some("1 / 4"));
    }

    #[test]
    fn navigation_during_a_transition_is_dropped() {
        let (mut carousel, clock) = mount(Flavor::Selector);

        assert!(carousel.next());
        clock.advance(10);
        assert!(!carousel.next());
        assert!(!carousel.go_to(3));
        assert_eq!(carousel.current_index(), Some(1));

        settle(&mut carousel, &clock, 200);
        assert!(!carousel.is_transitioning());
        assert!(carousel.next());
        assert_eq!(carousel.current_index(), Some(2));
    }

    #[test]
    fn hover_freezes_progress_and_resume_restarts_dwell() {
        let (mut carousel, clock) = mount(Flavor::Carousel);

        settle(&mut carousel, &clock, 2_000);
        assert_eq!(carousel.view().unwrap().progress, Some(50.0));

        carousel.hover_enter();
        assert!(!carousel.is_running());
        settle(&mut carousel, &clock, 1_000);
        assert_eq!(carousel.view().unwrap().progress, Some(50.0));

        carousel.hover_leave();
        assert!(carousel.is_running());
        assert_eq!(carousel.view().unwrap().progress, Some(0.0));

        settle(&mut carousel, &clock, 1_000);
        assert_eq!(carousel.view().unwrap().progress, Some(25.0));

        // Partial dwell from before the pause is not carried over.
        settle(&mut carousel, &clock, 2_000);
        assert_eq!(carousel.current_index(), Some(0));
        settle(&mut carousel, &clock, 1_000);
        assert_eq!(carousel.current_index(), Some(1));
    }

    #[test]
    fn swipe_must_exceed_threshold() {
        let (mut carousel, clock) = mount(Flavor::Carousel);

        carousel.touch_start(100.0);
        carousel.touch_move(60.0);
        assert_eq!(carousel.touch_end(), None);
        assert_eq!(carousel.current_index(), Some(0));
        settle(&mut carousel, &clock, 200);

        carousel.touch_start(100.0);
        carousel.touch_move(59.0);
        assert_eq!(carousel.touch_end(), Some(Direction::Next));
        assert_eq!(carousel.current_index(), Some(1));
        settle(&mut carousel, &clock, 200);

        carousel.touch_start(100.0);
        carousel.touch_move(141.0);
        assert_eq!(carousel.touch_end(), Some(Direction::Prev));
        assert_eq!(carousel.current_index(), Some(0));
    }

    #[test]
    fn tap_without_movement_does_not_swipe() {
        let (mut carousel, clock) = mount(Flavor::Carousel);

        carousel.touch_start(10.0);
        carousel.touch_move(300.0);
        carousel.touch_end();
        settle(&mut carousel, &clock, 200);
        let index = carousel.current_index();

        carousel.touch_start(500.0);
        assert_eq!(carousel.touch_end(), None);
        assert_eq!(carousel.current_index(), index);
    }

    #[test]
    fn swipe_resumes_autoplay_after_delay() {
        let (mut carousel, clock) = mount(Flavor::Carousel);

        carousel.touch_start(100.0);
        assert!(!carousel.is_running());
        carousel.touch_end();
        assert!(!carousel.is_running());

        settle(&mut carousel, &clock, 149);
        assert!(!carousel.is_running());
        settle(&mut carousel, &clock, 1);
        assert!(carousel.is_running());
        assert_eq!(carousel.pending_timers(), 0);
    }

    #[test]
    fn resume_waits_for_hover_to_end() {
        let (mut carousel, clock) = mount(Flavor::Carousel);

        carousel.hover_enter();
        assert!(carousel.next());
        settle(&mut carousel, &clock, 200);
        assert!(!carousel.is_running());

        carousel.hover_leave();
        assert!(carousel.is_running());
    }

    #[test]
    fn hover_and_touch_need_a_root() {
        let anchors = Flavor::Carousel.default_anchors().without(Anchor::Root);
        let (mut carousel, _clock) = mount_with(Flavor::Carousel, anchors);

        carousel.hover_enter();
        assert!(carousel.is_running());
        carousel.touch_start(100.0);
        carousel.touch_move(0.0);
        assert_eq!(carousel.touch_end(), None);
        assert_eq!(carousel.current_index(), Some(0));
    }

    #[test]
    fn sampled_autoplay_advances_after_dwell() {
        let (mut carousel, clock) = mount(Flavor::Carousel);
        assert_eq!(carousel.pending_timers(), 0);

        settle(&mut carousel, &clock, 1_000);
        assert_eq!(carousel.view().unwrap().progress, Some(25.0));

        settle(&mut carousel, &clock, 3_000);
        assert_eq!(carousel.current_index(), Some(1));
        let view = carousel.view().unwrap();
        assert_eq!(view.progress, Some(0.0));
        assert_eq!(view.counter.as_deref(), Some("2 / 4"));
        assert_eq!(view.content.direction, Some(Direction::Next));
        assert_eq!(view.content.presentation, Presentation::Exiting);

        settle(&mut carousel, &clock, 100);
        let view = carousel.view().unwrap();
        assert_eq!(view.content.text, "B");
        assert_eq!(view.content.presentation, Presentation::Entered);
    }

    #[test]
    fn interval_autoplay_and_click_restart() {
        let (mut carousel, clock) = mount(Flavor::Selector);
        assert_eq!(carousel.pending_timers(), 1);

        settle(&mut carousel, &clock, 3_999);
        assert_eq!(carousel.current_index(), Some(0));
        settle(&mut carousel, &clock, 1);
        assert_eq!(carousel.current_index(), Some(1));
        settle(&mut carousel, &clock, 190);
        assert_eq!(carousel.view().unwrap().content.title.as_deref(), Some("B"));

        clock.set(5_000);
        assert!(carousel.go_to(3));
        assert_eq!(carousel.view().unwrap().active_item(), Some(3));

        clock.set(6_500);
        carousel.tick();
        assert_eq!(carousel.view().unwrap().selector[3].fill, 50.0);

        clock.set(8_999);
        carousel.tick();
        assert_eq!(carousel.current_index(), Some(3));
        clock.set(9_000);
        carousel.tick();
        assert_eq!(carousel.current_index(), Some(0));
        assert_eq!(carousel.pending_timers(), 1);
    }

    #[test]
    fn interval_tick_during_a_transition_is_skipped() {
        // Advances every 100 ms while a transition takes 190 ms
        let (mut carousel, clock) = mount_config(fast_autoplay(Flavor::Selector));

        clock.set(100);
        carousel.tick();
        assert_eq!(carousel.current_index(), Some(1));
        assert!(carousel.is_transitioning());

        clock.set(200);
        carousel.tick();
        assert_eq!(carousel.current_index(), Some(1));

        clock.set(290);
        carousel.tick();
        assert_eq!(carousel.current_index(), Some(1));
        assert!(!carousel.is_transitioning());

        clock.set(300);
        carousel.tick();
        assert_eq!(carousel.current_index(), Some(2));
    }

    #[test]
    fn sampled_advance_retries_once_the_transition_ends() {
        let (mut carousel, clock) = mount_config(fast_autoplay(Flavor::Carousel));

        clock.set(100);
        carousel.tick();
        assert_eq!(carousel.current_index(), Some(1));

        // Due again, but the 190 ms transition is still in flight
        for now in [200, 250] {
            clock.set(now);
            carousel.tick();
            assert_eq!(carousel.current_index(), Some(1));
            assert!(carousel.is_transitioning());
        }

        clock.set(290);
        carousel.tick();
        assert_eq!(carousel.current_index(), Some(2));
    }

    #[test]
    fn button_press_pauses_then_restarts_dwell() {
        let (mut carousel, clock) = mount(Flavor::Carousel);

        settle(&mut carousel, &clock, 2_000);
        assert_eq!(carousel.view().unwrap().progress, Some(50.0));

        assert!(carousel.next());
        assert!(!carousel.is_running());
        assert_eq!(carousel.pending_timers(), 1);

        settle(&mut carousel, &clock, 149);
        assert!(!carousel.is_running());

        settle(&mut carousel, &clock, 1);
        assert!(carousel.is_running());
        assert_eq!(carousel.pending_timers(), 0);
        assert_eq!(carousel.view().unwrap().progress, Some(0.0));

        // Full dwell measured from the resume at 2150
        clock.set(6_149);
        carousel.tick();
        assert_eq!(carousel.current_index(), Some(1));
        clock.set(6_150);
        carousel.tick();
        assert_eq!(carousel.current_index(), Some(2));
    }

    #[test]
    fn selecting_the_current_slide_is_a_no_op() {
        let (mut carousel, _clock) = mount(Flavor::Selector);
        assert!(!carousel.go_to(0));
        assert!(!carousel.go_to(9));
        assert!(!carousel.is_transitioning());
    }

    #[test]
    fn missing_anchor_disables_the_instance() {
        let anchors = Flavor::Carousel.default_anchors().without(Anchor::Counter);
        let (mut carousel, clock) = mount_with(Flavor::Carousel, anchors);

        assert_eq!(carousel.status(), Status::Disabled);
        assert_eq!(carousel.pending_timers(), 0);
        assert!(!carousel.next());
        assert!(!carousel.prev());
        assert!(!carousel.go_to(1));
        carousel.hover_enter();
        carousel.touch_start(0.0);
        assert_eq!(carousel.touch_end(), None);
        settle(&mut carousel, &clock, 10_000);
        assert_eq!(carousel.current_index(), None);
        assert!(carousel.view().is_none());
    }

    #[test]
    fn empty_deck_disables_the_instance() {
        let clock = ManualClock::new(0);
        let carousel = Carousel::mount(
            CarouselConfig::new("empty", Flavor::Selector),
            Vec::new(),
            Flavor::Selector.default_anchors(),
            clock,
        );
        assert_eq!(carousel.status(), Status::Disabled);
        assert_eq!(carousel.slide_count(), 0);
    }

    #[test]
    fn dispose_cancels_everything() {
        let (mut carousel, clock) = mount(Flavor::Selector);
        assert!(carousel.next());
        assert_eq!(carousel.pending_timers(), 1);

        carousel.dispose();
        assert_eq!(carousel.status(), Status::Disposed);
        assert_eq!(carousel.pending_timers(), 0);

        settle(&mut carousel, &clock, 10_000);
        assert!(!carousel.next());
        assert_eq!(carousel.current_index(), None);
    }

    #[test]
    fn single_slide_never_transitions() {
        let clock = ManualClock::new(0);
        let mut carousel = Carousel::mount(
            CarouselConfig::new("one", Flavor::Carousel),
            vec![Slide::new("only", "only.png")],
            Flavor::Carousel.default_anchors(),
            clock.clone(),
        );
        assert!(!carousel.next());
        settle(&mut carousel, &clock, 5_000);
        assert!(!carousel.is_transitioning());
        assert_eq!(carousel.current_index(), Some(0));
    }
}
