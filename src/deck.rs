use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::autoplay::AutoplayModel;
use crate::carousel::{Carousel, CarouselConfig, Flavor, Timing};
use crate::clock::{Clock, Millis};
use crate::error::{DeckError, Result};
use crate::reveal::RevealPolicy;
use crate::slide::Slide;
use crate::view::{Anchor, Anchors};

const BUILTIN_DECK: &str = include_str!("../decks/site.toml");

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Deck {
    #[serde(default, rename = "carousel")]
    pub carousels: Vec<CarouselSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CarouselSpec {
    pub name: String,
    pub flavor: Flavor,
    #[serde(default)]
    pub autoplay: Option<AutoplayModel>, // overrides the flavor's model
    // Elements present on the page; defaults to everything the flavor can use
    #[serde(default)]
    pub anchors: Option<Vec<Anchor>>,
    #[serde(default)]
    pub timing: TimingOverrides,
    #[serde(default)]
    pub reveal: RevealPolicy,
    #[serde(default)]
    pub slides: Vec<Slide>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimingOverrides {
    pub advance_interval_ms: Option<Millis>,
    pub swap_delay_ms: Option<Millis>,
    pub enter_delay_ms: Option<Millis>,
    pub indicator_fill_ms: Option<Millis>,
    pub resume_delay_ms: Option<Millis>,
    pub swipe_threshold_px: Option<f32>,
}

impl TimingOverrides {
    pub fn apply(&self, base: Timing) -> Timing {
        Timing {
            advance_interval_ms: self.advance_interval_ms.unwrap_or(base.advance_interval_ms),
            swap_delay_ms: self.swap_delay_ms.unwrap_or(base.swap_delay_ms),
            enter_delay_ms: self.enter_delay_ms.unwrap_or(base.enter_delay_ms),
            indicator_fill_ms: self.indicator_fill_ms.unwrap_or(base.indicator_fill_ms),
            resume_delay_ms: self.resume_delay_ms.unwrap_or(base.resume_delay_ms),
            swipe_threshold_px: self.swipe_threshold_px.unwrap_or(base.swipe_threshold_px),
        }
    }
}

impl CarouselSpec {
    pub fn config(&self) -> CarouselConfig {
        let mut config = CarouselConfig::new(self.name.clone(), self.flavor);
        if let Some(model) = self.autoplay {
            config.autoplay = model;
        }
        config.timing = self.timing.apply(config.timing);
        config
    }

    pub fn anchors(&self) -> Anchors {
        match &self.anchors {
            Some(anchors) => anchors.iter().copied().collect(),
            None => self.flavor.default_anchors(),
        }
    }

    pub fn mount<C: Clock>(&self, clock: C) -> Carousel<C> {
        Carousel::mount(self.config(), self.slides.clone(), self.anchors(), clock)
    }
}

impl Deck {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| DeckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        text.parse()
    }

    pub fn builtin() -> Result<Self> {
        BUILTIN_DECK.parse()
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for (i, carousel) in self.carousels.iter().enumerate() {
            if carousel.name.trim().is_empty() {
                return Err(DeckError::EmptyName(i));
            }
            if !seen.insert(carousel.name.as_str()) {
                return Err(DeckError::DuplicateName(carousel.name.clone()));
            }
            carousel.validate_ranges()?;
        }
        Ok(())
    }
}

impl CarouselSpec {
    // Swipe threshold finite and non-negative, reveal threshold within 0..=1
    fn validate_ranges(&self) -> Result<()> {
        if let Some(px) = self.timing.swipe_threshold_px {
            if !px.is_finite() || px < 0.0 {
                return Err(self.out_of_range("timing.swipe_threshold_px", px));
            }
        }
        let threshold = self.reveal.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(self.out_of_range("reveal.threshold", threshold));
        }
        Ok(())
    }

    fn out_of_range(&self, field: &'static str, value: f32) -> DeckError {
        DeckError::OutOfRange {
            carousel: self.name.clone(),
            field,
            value,
        }
    }
}

impl FromStr for Deck {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self> {
        let deck: Deck = toml::from_str(s)?;
        deck.validate()?;
        Ok(deck)
    }
}
