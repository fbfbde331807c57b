use std::collections::BTreeSet;

use serde::Deserialize;

use crate::clock::Millis;
use crate::slide::{Slide, SlideStore};
use crate::state::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    Root,
    Content,
    Title,
    Text,
    Image,
    Tags,
    Selector,
    PrevButton,
    NextButton,
    Counter,
    Progress,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Anchors(BTreeSet<Anchor>);

impl Anchors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, anchor: Anchor) -> Self {
        self.0.insert(anchor);
        self
    }

    pub fn without(mut self, anchor: Anchor) -> Self {
        self.0.remove(&anchor);
        self
    }

    pub fn contains(&self, anchor: Anchor) -> bool {
        self.0.contains(&anchor)
    }

    pub fn missing(&self, required: &[Anchor]) -> Vec<Anchor> {
        required.iter().copied().filter(|a| !self.contains(*a)).collect()
    }
}

impl FromIterator<Anchor> for Anchors {
    fn from_iter<I: IntoIterator<Item = Anchor>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Entered,
    Exiting,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentView {
    pub title: Option<String>,
    pub text: String,
    pub image_ref: String,
    pub tags: Vec<String>,
    pub presentation: Presentation,
    pub direction: Option<Direction>, // None until the first transition
    pub changed_at: Millis,
    // Bumped on every enter so the enter animation restarts even when the
    // presentation was already Entered
    pub epoch: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectorItem {
    pub label: String,
    pub active: bool,
    pub fill: f32, // underline, 0..=100
}

#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub content: ContentView,
    pub counter: Option<String>,     // "index / count", with Anchor::Counter
    pub progress: Option<f32>,       // ring fill 0..=100, with Anchor::Progress
    pub selector: Vec<SelectorItem>, // empty unless bound to Anchor::Selector
    show_title: bool,
    show_tags: bool,
}

impl View {
    pub fn initial(store: &SlideStore, anchors: &Anchors, now: Millis) -> Self {
        let first = store.get(0);
        let show_title = anchors.contains(Anchor::Title);
        let show_tags = anchors.contains(Anchor::Tags);

        let selector = if anchors.contains(Anchor::Selector) {
            store
                .iter()
                .enumerate()
                .map(|(i, slide)| SelectorItem {
                    label: slide.label().to_string(),
                    active: i == 0,
                    fill: 0.0,
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            content: ContentView {
                title: first.title.clone().filter(|_| show_title),
                text: first.primary_text.clone(),
                image_ref: first.image_ref.clone(),
                tags: if show_tags { first.tags.clone() } else { Vec::new() },
                presentation: Presentation::Entered,
                direction: None,
                changed_at: now,
                epoch: 0,
            },
            counter: anchors
                .contains(Anchor::Counter)
                .then(|| counter_label(0, store.count())),
            progress: anchors.contains(Anchor::Progress).then_some(0.0),
            selector,
            show_title,
            show_tags,
        }
    }

    pub fn sync_indicators(&mut self, index: usize, count: usize) {
        for (i, item) in self.selector.iter_mut().enumerate() {
            item.active = i == index;
            item.fill = 0.0;
        }
        if let Some(counter) = self.counter.as_mut() {
            *counter = counter_label(index, count);
        }
        if let Some(progress) = self.progress.as_mut() {
            *progress = 0.0;
        }
    }

    // `ring` goes to the progress ring, `fill` to the active underline
    pub fn set_progress(&mut self, ring: f32, fill: f32) {
        if let Some(progress) = self.progress.as_mut() {
            *progress = ring.clamp(0.0, 100.0);
        }
        if let Some(item) = self.selector.iter_mut().find(|item| item.active) {
            item.fill = fill.clamp(0.0, 100.0);
        }
    }

    pub fn exit(&mut self, direction: Direction, now: Millis) {
        self.content.presentation = Presentation::Exiting;
        self.content.direction = Some(direction);
        self.content.changed_at = now;
    }

    pub fn swap(&mut self, slide: &Slide) {
        let content = &mut self.content;
        content.title = slide.title.clone().filter(|_| self.show_title);
        content.text.clone_from(&slide.primary_text);
        content.image_ref.clone_from(&slide.image_ref);
        content.tags = if self.show_tags { slide.tags.clone() } else { Vec::new() };
    }

    pub fn enter(&mut self, now: Millis) {
        self.content.presentation = Presentation::Entered;
        self.content.changed_at = now;
        self.content.epoch += 1;
    }

    pub fn active_item(&self) -> Option<usize> {
        self.selector.iter().position(|item| item.active)
    }
}

pub fn counter_label(index: usize, count: usize) -> String {
    format!("{} / {}", index + 1, count)
}
