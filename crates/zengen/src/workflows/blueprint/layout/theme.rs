use super::blocks::{Color, Rect};

pub const INCH: f32 = 72.0;

pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;

pub const MARGIN_X: f32 = 0.8 * INCH;
/// Flowing content never drops below this line; only the footer band does.
pub const CONTENT_FLOOR: f32 = 0.5 * INCH;
pub const FOOTER_Y: f32 = 0.4 * INCH;

pub const ACCENT: Color = Color::rgb(0.6, 1.0, 0.0);
pub const BACKGROUND: Color = Color::gray(0.1);
pub const BADGE_FILL: Color = Color::gray(0.15);
pub const BUTTON_FILL: Color = Color::gray(0.2);
pub const TABLE_BODY: Color = Color::gray(0.133);
pub const WHITE: Color = Color::gray(1.0);
pub const BLACK: Color = Color::gray(0.0);
pub const GREY: Color = Color::gray(0.5);
pub const LIGHT_GREY: Color = Color::gray(0.827);
pub const ALARM: Color = Color::rgb(1.0, 0.0, 0.0);

pub const fn media_box() -> Rect {
    Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT)
}

pub const fn content_width() -> f32 {
    PAGE_WIDTH - 2.0 * MARGIN_X
}
