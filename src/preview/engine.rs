use std::collections::HashMap;
use std::path::Path;

use raylib::prelude::*;
use tracing::debug;

use showcase::reveal::intersection_ratio;
use showcase::{Carousel, Clock, Deck, Flavor, FrameClock, Millis, Reveal};

use crate::preview::texture_loader::load_deck_textures;
use crate::preview::widgets::{self, CarouselLayout, SelectorLayout};

pub trait Engine {
    fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, deck: &Deck, base_dir: &Path) -> bool;
    fn render_frame(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) -> bool;
    fn shutdown(&mut self);
}

const HEADER_HEIGHT: f32 = 90.0;
const SECTION_HEIGHT: f32 = 460.0;
const SECTION_GAP: f32 = 60.0;
const MARGIN: f32 = 48.0;
const SCROLL_STEP: f32 = 60.0;

struct Section {
    carousel: Carousel<FrameClock>,
    reveal: Reveal,
    revealed_at: Option<Millis>, // last visibility change
    top: f32,
    hovered: bool,
    dragging: bool,
}

impl Section {
    fn bounds(&self, scroll: f32, width: f32) -> Rectangle {
        Rectangle::new(MARGIN, self.top - scroll, width - 2.0 * MARGIN, SECTION_HEIGHT)
    }

    fn alpha(&self, now: Millis) -> f32 {
        widgets::reveal_alpha(self.reveal.is_shown(), self.revealed_at, now)
    }

    fn handle_input(&mut self, bounds: Rectangle, mouse: Vector2, pressed: bool, down: bool, released: bool) {
        let inside = bounds.check_collision_point_rec(mouse);
        if inside != self.hovered {
            self.hovered = inside;
            if inside {
                self.carousel.hover_enter();
            } else {
                self.carousel.hover_leave();
            }
        }

        if pressed && inside {
            let clicked = match self.carousel.flavor() {
                Flavor::Selector => {
                    let layout = SelectorLayout::new(bounds, self.carousel.slide_count());
                    layout
                        .items
                        .iter()
                        .position(|r| r.check_collision_point_rec(mouse))
                        .map(|i| self.carousel.go_to(i))
                }
                Flavor::Carousel => {
                    let layout = CarouselLayout::new(bounds);
                    if layout.prev.check_collision_point_rec(mouse) {
                        Some(self.carousel.prev())
                    } else if layout.next.check_collision_point_rec(mouse) {
                        Some(self.carousel.next())
                    } else {
                        None
                    }
                }
            };
            if clicked.is_some() {
                return;
            }
            // Anywhere else on the widget, a left drag stands in for a swipe
            self.dragging = true;
            self.carousel.touch_start(mouse.x);
        } else if self.dragging && down {
            self.carousel.touch_move(mouse.x);
        }

        if self.dragging && released {
            self.dragging = false;
            if let Some(direction) = self.carousel.touch_end() {
                debug!(name = self.carousel.name(), ?direction, "swiped");
            }
        }
    }
}

// --- Page ---

// Scrollable, one section per deck widget
pub struct PageEngine {
    clock: FrameClock,
    sections: Vec<Section>,
    textures: HashMap<String, Texture2D>,
    scroll: f32,
}

impl PageEngine {
    pub fn new(clock: FrameClock) -> Self {
        Self {
            clock,
            sections: Vec::new(),
            textures: HashMap::new(),
            scroll: 0.0,
        }
    }

    fn page_height(&self) -> f32 {
        HEADER_HEIGHT + self.sections.len() as f32 * (SECTION_HEIGHT + SECTION_GAP)
    }
}

impl Engine for PageEngine {
    fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, deck: &Deck, base_dir: &Path) -> bool {
        self.textures = load_deck_textures(rl, thread, deck, base_dir);

        let mut top = HEADER_HEIGHT;
        for spec in &deck.carousels {
            self.sections.push(Section {
                carousel: spec.mount(self.clock.clone()),
                reveal: Reveal::new(spec.reveal),
                revealed_at: None,
                top,
                hovered: false,
                dragging: false,
            });
            top += SECTION_HEIGHT + SECTION_GAP;
        }

        !self.sections.is_empty()
    }

    fn render_frame(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) -> bool {
        let now = self.clock.now();
        let width = rl.get_screen_width() as f32;
        let height = rl.get_screen_height() as f32;

        let max_scroll = (self.page_height() - height).max(0.0);
        self.scroll = (self.scroll - rl.get_mouse_wheel_move() * SCROLL_STEP).clamp(0.0, max_scroll);
        let scroll = self.scroll;

        let mouse = rl.get_mouse_position();
        let pressed = rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT);
        let down = rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT);
        let released = rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT);

        // --- Update ---
        for section in self.sections.iter_mut() {
            let ratio = intersection_ratio(section.top, SECTION_HEIGHT, scroll, height);
            if let Some(shown) = section.reveal.observe(ratio) {
                section.revealed_at = Some(now);
                debug!(name = section.carousel.name(), shown, "section visibility changed");
            }
            let bounds = section.bounds(scroll, width);
            section.handle_input(bounds, mouse, pressed, down, released);
            section.carousel.tick();
        }

        // --- Draw ---
        let mut d = rl.begin_drawing(thread);
        d.clear_background(widgets::BACKGROUND);
        d.draw_text("Showcase preview", MARGIN as i32, (30.0 - scroll) as i32, 32, widgets::TEXT);

        for section in self.sections.iter() {
            let bounds = section.bounds(scroll, width);
            let alpha = section.alpha(now);
            let name = section.carousel.name();
            match section.carousel.view() {
                Some(view) => match section.carousel.flavor() {
                    Flavor::Selector => widgets::draw_selector(&mut d, name, view, bounds, &self.textures, now, alpha),
                    Flavor::Carousel => widgets::draw_carousel(&mut d, name, view, bounds, &self.textures, now, alpha),
                },
                None => {
                    let label = format!("{name} ({:?})", section.carousel.status());
                    d.draw_text(&label, bounds.x as i32, bounds.y as i32 + 8, 16, widgets::MUTED);
                }
            }
        }

        true
    }

    fn shutdown(&mut self) {
        for section in self.sections.iter_mut() {
            section.carousel.dispose();
        }
    }
}
