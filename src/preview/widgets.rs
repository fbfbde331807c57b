use std::collections::HashMap;

use raylib::prelude::*;

use showcase::constants::ENTER_ANIMATION_MS;
use showcase::view::{ContentView, View};
use showcase::{Direction, Millis, Presentation};

pub const BACKGROUND: Color = Color::new(11, 14, 26, 255);
pub const CARD: Color = Color::new(24, 29, 48, 255);
pub const ACCENT: Color = Color::new(94, 124, 255, 255);
pub const TEXT: Color = Color::new(236, 239, 247, 255);
pub const MUTED: Color = Color::new(128, 136, 160, 255);

const EXIT_FADE_MS: Millis = 150;
const SLIDE_OFFSET: f32 = 40.0;
const FONT_TITLE: i32 = 28;
const FONT_BODY: i32 = 20;
const FONT_SMALL: i32 = 16;

// --- Layout ---

pub struct SelectorLayout {
    pub items: Vec<Rectangle>,
    pub card: Rectangle,
    pub image: Rectangle,
    pub text: Rectangle,
}

impl SelectorLayout {
    pub fn new(bounds: Rectangle, count: usize) -> Self {
        let list_width = bounds.width * 0.3;
        let item_height = 56.0;
        let items = (0..count)
            .map(|i| {
                let y = bounds.y + 60.0 + i as f32 * item_height;
                Rectangle::new(bounds.x, y, list_width - 20.0, item_height - 8.0)
            })
            .collect();
        let card = Rectangle::new(
            bounds.x + list_width,
            bounds.y + 50.0,
            bounds.width - list_width,
            bounds.height - 60.0,
        );
        let image = Rectangle::new(card.x + 20.0, card.y + 20.0, card.width * 0.45, card.height - 40.0);
        let text = Rectangle::new(
            image.x + image.width + 24.0,
            card.y + 24.0,
            card.width * 0.55 - 64.0,
            card.height - 48.0,
        );
        Self { items, card, image, text }
    }
}

pub struct CarouselLayout {
    pub card: Rectangle,
    pub image: Rectangle,
    pub text: Rectangle,
    pub prev: Rectangle,
    pub next: Rectangle,
    pub ring_center: Vector2,
}

impl CarouselLayout {
    pub fn new(bounds: Rectangle) -> Self {
        let card = Rectangle::new(bounds.x, bounds.y + 50.0, bounds.width, bounds.height - 60.0);
        let image = Rectangle::new(card.x + 20.0, card.y + 20.0, card.width * 0.5 - 30.0, card.height - 40.0);
        let text = Rectangle::new(
            card.x + card.width * 0.5 + 10.0,
            card.y + 30.0,
            card.width * 0.5 - 40.0,
            card.height - 120.0,
        );
        let buttons_y = card.y + card.height - 70.0;
        let prev = Rectangle::new(text.x, buttons_y, 48.0, 48.0);
        let next = Rectangle::new(text.x + 60.0, buttons_y, 48.0, 48.0);
        let ring_center = Vector2::new(text.x + 180.0, buttons_y + 24.0);
        Self { card, image, text, prev, next, ring_center }
    }
}

// --- Motion ---

// Opacity and horizontal offset of the content at `now`
pub fn content_motion(content: &ContentView, now: Millis) -> (f32, f32) {
    let elapsed = now.saturating_sub(content.changed_at) as f32;
    let sign = match content.direction {
        Some(Direction::Next) | None => 1.0,
        Some(Direction::Prev) => -1.0,
    };
    match content.presentation {
        Presentation::Exiting => {
            let t = (elapsed / EXIT_FADE_MS as f32).min(1.0);
            (1.0 - t, -sign * SLIDE_OFFSET * 0.5 * t)
        }
        Presentation::Entered => {
            let t = (elapsed / ENTER_ANIMATION_MS as f32).min(1.0);
            let eased = 1.0 - (1.0 - t).powi(3);
            let offset = if content.direction.is_some() { sign * SLIDE_OFFSET * (1.0 - eased) } else { 0.0 };
            (eased, offset)
        }
    }
}

// A section that was never revealed stays hidden; fades run only after a
// visibility change at `changed_at`
pub fn reveal_alpha(shown: bool, changed_at: Option<Millis>, now: Millis) -> f32 {
    let Some(changed_at) = changed_at else {
        return 0.0;
    };
    let t = (now.saturating_sub(changed_at) as f32 / ENTER_ANIMATION_MS as f32).min(1.0);
    if shown { t } else { 1.0 - t }
}

// Greedy, by character count
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > max_chars {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, (color.a as f32 * alpha.clamp(0.0, 1.0)) as u8)
}

// --- Drawing ---

fn shift(rect: Rectangle, dx: f32) -> Rectangle {
    Rectangle::new(rect.x + dx, rect.y, rect.width, rect.height)
}

fn draw_image(
    d: &mut RaylibDrawHandle,
    textures: &HashMap<String, Texture2D>,
    image_ref: &str,
    area: Rectangle,
    alpha: f32,
) {
    let Some(texture) = textures.get(image_ref) else {
        d.draw_rectangle_rec(area, with_alpha(MUTED, alpha * 0.25));
        d.draw_rectangle_lines_ex(area, 2.0, with_alpha(MUTED, alpha));
        d.draw_text(image_ref, area.x as i32 + 12, area.y as i32 + 12, FONT_SMALL, with_alpha(MUTED, alpha));
        return;
    };

    // Fit inside the area, keeping the aspect ratio
    let tex_width = texture.width() as f32;
    let tex_height = texture.height() as f32;
    let scale = (area.width / tex_width).min(area.height / tex_height);
    let width = tex_width * scale;
    let height = tex_height * scale;
    let dest = Rectangle::new(
        area.x + (area.width - width) * 0.5,
        area.y + (area.height - height) * 0.5,
        width,
        height,
    );

    d.draw_texture_pro(
        texture,
        Rectangle::new(0.0, 0.0, tex_width, tex_height),
        dest,
        Vector2::new(0.0, 0.0),
        0.0,
        with_alpha(Color::WHITE, alpha),
    );
}

fn draw_paragraph(d: &mut RaylibDrawHandle, text: &str, area: Rectangle, y: f32, alpha: f32) -> f32 {
    let max_chars = ((area.width / (FONT_BODY as f32 * 0.55)) as usize).max(8);
    let mut y = y;
    for line in wrap_text(text, max_chars) {
        d.draw_text(&line, area.x as i32, y as i32, FONT_BODY, with_alpha(TEXT, alpha));
        y += FONT_BODY as f32 + 6.0;
    }
    y
}

fn draw_heading(d: &mut RaylibDrawHandle, name: &str, bounds: Rectangle, alpha: f32) {
    d.draw_text(name, bounds.x as i32, bounds.y as i32 + 8, FONT_SMALL, with_alpha(MUTED, alpha));
}

pub fn draw_selector(
    d: &mut RaylibDrawHandle,
    name: &str,
    view: &View,
    bounds: Rectangle,
    textures: &HashMap<String, Texture2D>,
    now: Millis,
    section_alpha: f32,
) {
    let layout = SelectorLayout::new(bounds, view.selector.len());
    draw_heading(d, name, bounds, section_alpha);

    for (item, rect) in view.selector.iter().zip(&layout.items) {
        let color = with_alpha(if item.active { TEXT } else { MUTED }, section_alpha);
        d.draw_text(&item.label, rect.x as i32, rect.y as i32 + 10, FONT_BODY, color);

        let underline = Rectangle::new(rect.x, rect.y + rect.height - 4.0, rect.width, 3.0);
        d.draw_rectangle_rec(underline, with_alpha(CARD, section_alpha));
        if item.active {
            let fill = Rectangle::new(underline.x, underline.y, rect.width * item.fill / 100.0, 3.0);
            d.draw_rectangle_rec(fill, with_alpha(ACCENT, section_alpha));
        }
    }

    d.draw_rectangle_rec(layout.card, with_alpha(CARD, section_alpha));

    let (alpha, offset) = content_motion(&view.content, now);
    let alpha = alpha * section_alpha;
    draw_image(d, textures, &view.content.image_ref, shift(layout.image, offset), alpha);

    let text_area = shift(layout.text, offset);
    let mut y = text_area.y;
    if let Some(title) = &view.content.title {
        d.draw_text(title, text_area.x as i32, y as i32, FONT_TITLE, with_alpha(TEXT, alpha));
        y += FONT_TITLE as f32 + 14.0;
    }
    y = draw_paragraph(d, &view.content.text, text_area, y, alpha) + 12.0;

    let mut x = text_area.x;
    for tag in &view.content.tags {
        let width = tag.chars().count() as f32 * FONT_SMALL as f32 * 0.6 + 20.0;
        let chip = Rectangle::new(x, y, width, FONT_SMALL as f32 + 12.0);
        d.draw_rectangle_lines_ex(chip, 1.0, with_alpha(ACCENT, alpha));
        d.draw_text(tag, chip.x as i32 + 10, chip.y as i32 + 6, FONT_SMALL, with_alpha(TEXT, alpha));
        x += width + 8.0;
    }
}

pub fn draw_carousel(
    d: &mut RaylibDrawHandle,
    name: &str,
    view: &View,
    bounds: Rectangle,
    textures: &HashMap<String, Texture2D>,
    now: Millis,
    section_alpha: f32,
) {
    let layout = CarouselLayout::new(bounds);
    draw_heading(d, name, bounds, section_alpha);
    d.draw_rectangle_rec(layout.card, with_alpha(CARD, section_alpha));

    // Image and text slide in from opposite sides
    let (alpha, offset) = content_motion(&view.content, now);
    let alpha = alpha * section_alpha;
    draw_image(d, textures, &view.content.image_ref, shift(layout.image, offset), alpha);

    let text_area = shift(layout.text, -offset);
    let mut y = text_area.y;
    if let Some(title) = &view.content.title {
        d.draw_text(title, text_area.x as i32, y as i32, FONT_TITLE, with_alpha(TEXT, alpha));
        y += FONT_TITLE as f32 + 14.0;
    }
    draw_paragraph(d, &view.content.text, text_area, y, alpha);

    for (rect, label) in [(layout.prev, "<"), (layout.next, ">")] {
        d.draw_rectangle_lines_ex(rect, 2.0, with_alpha(ACCENT, section_alpha));
        d.draw_text(label, rect.x as i32 + 18, rect.y as i32 + 12, FONT_TITLE, with_alpha(TEXT, section_alpha));
    }

    if let Some(progress) = view.progress {
        let center = layout.ring_center;
        d.draw_ring(center, 20.0, 24.0, 0.0, 360.0, 48, with_alpha(MUTED, section_alpha * 0.4));
        d.draw_ring(center, 20.0, 24.0, -90.0, -90.0 + 3.6 * progress, 48, with_alpha(ACCENT, section_alpha));
    }
    if let Some(counter) = &view.counter {
        let x = layout.ring_center.x as i32 + 40;
        let y = layout.ring_center.y as i32 - FONT_BODY / 2;
        d.draw_text(counter, x, y, FONT_BODY, with_alpha(TEXT, section_alpha));
    }
}
