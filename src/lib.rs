pub mod autoplay;
pub mod carousel;
pub mod clock;
pub mod constants;
pub mod deck;
pub mod error;
pub mod renderer;
pub mod reveal;
pub mod sequencer;
pub mod slide;
pub mod state;
pub mod timers;
pub mod view;

pub use carousel::{Carousel, CarouselConfig, Flavor, Status, Timing};
pub use clock::{Clock, FrameClock, ManualClock, Millis};
pub use deck::{CarouselSpec, Deck};
pub use error::DeckError;
pub use reveal::{Reveal, RevealMode, RevealPolicy};
pub use slide::{Slide, SlideStore};
pub use state::Direction;
pub use view::{Anchor, Anchors, Presentation, View};
