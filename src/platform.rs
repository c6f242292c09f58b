//! Collaborator traits the dashboard drives each frame.
//!
//! A platform supplies a [`Canvas`] to draw on, an [`Input`] source of
//! button edges, and a [`Lifecycle`] that may ask the loop to stop.

use embedded_graphics::pixelcolor::Rgb888;

use crate::ui::buttons::ButtonEdges;
use crate::ui::Page;

/// Bitmap assets the dashboard places on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Asset {
    /// Application banner above the content pane.
    Banner,
    /// Storage page drive icon.
    DriveIcon,
    /// Small per-page icon on the menu rail.
    PageIcon(Page),
}

/// Drawing and presentation sink.
///
/// Coordinates are top-left anchored; text is drawn with its top edge at
/// `y`. `size` selects the font size.
pub trait Canvas {
    fn clear(&mut self, color: Rgb888);
    fn draw_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb888);
    fn draw_text(&mut self, x: i32, y: i32, size: u32, color: Rgb888, text: &str);
    fn draw_image(&mut self, asset: Asset, x: i32, y: i32);
    /// Rendered `(width, height)` of `text` at `size`.
    fn text_dimensions(&self, size: u32, text: &str) -> (u32, u32);
    /// Submit the composed frame. May block until the display is ready.
    fn present(&mut self);
}

/// Per-frame button source.
pub trait Input {
    /// Buttons newly pressed since the previous poll.
    fn poll(&mut self) -> ButtonEdges;
}

/// Host application lifecycle.
pub trait Lifecycle {
    /// `false` once the host wants the application to quit.
    fn should_continue(&mut self) -> bool;
}
