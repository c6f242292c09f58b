//! `Canvas` implementation over an `embedded-graphics` draw target.

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10, FONT_9X18};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::renderer::TextRenderer;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

use crate::config::{
    APP_NAME, BANNER_HEIGHT, BANNER_WIDTH, DRIVE_ICON_SIZE, ITEM_COLOUR, ITEM_SELECTED_COLOUR,
    MENU_ICON_SIZE, MENU_SELECTOR_COLOUR, STATUS_BAR_COLOUR,
};
use crate::platform::{Asset, Canvas};

/// A draw target that can hand a finished frame to the display.
///
/// Buffered drivers flush here; simulators update their window.
pub trait FrameSink: DrawTarget<Color = Rgb888> {
    fn present(&mut self);
}

/// Canvas backed by any RGB888 [`FrameSink`].
///
/// Draw errors from the target are dropped; a frame with a missing
/// primitive is preferable to a stalled loop.
pub struct EgCanvas<D> {
    target: D,
}

impl<D: FrameSink> EgCanvas<D> {
    pub fn new(target: D) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    pub fn into_inner(self) -> D {
        self.target
    }
}

/// Closest mono font for a requested size.
fn font_for(size: u32) -> &'static MonoFont<'static> {
    match size {
        0..=12 => &FONT_6X10,
        13..=20 => &FONT_9X18,
        _ => &FONT_10X20,
    }
}

fn text_style(size: u32, color: Rgb888) -> MonoTextStyle<'static, Rgb888> {
    MonoTextStyle::new(font_for(size), color)
}

impl<D: FrameSink> Canvas for EgCanvas<D> {
    fn clear(&mut self, color: Rgb888) {
        let _ = self.target.clear(color);
    }

    fn draw_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb888) {
        if width == 0 || height == 0 {
            return;
        }
        let _ = Rectangle::new(Point::new(x, y), Size::new(width, height))
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut self.target);
    }

    fn draw_text(&mut self, x: i32, y: i32, size: u32, color: Rgb888, text: &str) {
        let _ = Text::with_baseline(text, Point::new(x, y), text_style(size, color), Baseline::Top)
            .draw(&mut self.target);
    }

    fn draw_image(&mut self, asset: Asset, x: i32, y: i32) {
        draw_asset(&mut self.target, asset, Point::new(x, y));
    }

    fn text_dimensions(&self, size: u32, text: &str) -> (u32, u32) {
        let style = text_style(size, Rgb888::BLACK);
        let metrics = style.measure_string(text, Point::zero(), Baseline::Top);
        (metrics.bounding_box.size.width, font_for(size).character_size.height)
    }

    fn present(&mut self) {
        self.target.present();
    }
}

/// Assets are drawn from primitives, so no image data ships with the crate.
fn draw_asset<D: DrawTarget<Color = Rgb888>>(target: &mut D, asset: Asset, origin: Point) {
    match asset {
        Asset::Banner => {
            let area = Rectangle::new(origin, Size::new(BANNER_WIDTH, BANNER_HEIGHT));
            let _ = RoundedRectangle::with_equal_corners(area, Size::new(12, 12))
                .into_styled(PrimitiveStyle::with_fill(MENU_SELECTOR_COLOUR))
                .draw(target);
            draw_centred(target, APP_NAME, area.center(), 25, ITEM_SELECTED_COLOUR);
        }
        Asset::DriveIcon => {
            let side = DRIVE_ICON_SIZE as i32;
            let body = Rectangle::new(
                origin + Point::new(side / 16, side / 5),
                Size::new(DRIVE_ICON_SIZE * 7 / 8, DRIVE_ICON_SIZE * 5 / 8),
            );
            let _ = RoundedRectangle::with_equal_corners(body, Size::new(8, 8))
                .into_styled(PrimitiveStyle::with_fill(STATUS_BAR_COLOUR))
                .draw(target);
            let led = body.bottom_right().unwrap_or(origin) - Point::new(side / 6, side / 6);
            let _ = Circle::new(led, DRIVE_ICON_SIZE / 16)
                .into_styled(PrimitiveStyle::with_fill(MENU_SELECTOR_COLOUR))
                .draw(target);
        }
        Asset::PageIcon(page) => {
            let area = Rectangle::new(origin, Size::new(MENU_ICON_SIZE, MENU_ICON_SIZE));
            let _ = RoundedRectangle::with_equal_corners(area, Size::new(6, 6))
                .into_styled(PrimitiveStyle::with_stroke(ITEM_COLOUR, 2))
                .draw(target);
            let initial = page.title().get(..1).unwrap_or("");
            draw_centred(target, initial, area.center(), 20, ITEM_COLOUR);
        }
    }
}

fn draw_centred<D: DrawTarget<Color = Rgb888>>(target: &mut D, text: &str, centre: Point, size: u32, color: Rgb888) {
    let layout = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build();
    let _ = Text::with_text_style(text, centre, text_style(size, color), layout).draw(target);
}
