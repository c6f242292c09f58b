//! Label/value rows and the shared content grid.

use core::fmt;

use crate::config::{
    FONT_SIZE, ITEM_DIST, LABEL_VALUE_GAP, MENU_INFO_DESC_COLOUR, MENU_INFO_TITLE_COLOUR, ROW_STEP,
    START_Y,
};
use crate::platform::Canvas;
use crate::ui::format::{format_bounded, ValueBuf};

/// Text heights measured once when the dashboard starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextMetrics {
    /// Height of a reference menu/row glyph line.
    pub item_height: u32,
    /// Height of the status bar title line.
    pub title_height: u32,
}

impl TextMetrics {
    pub fn measure<C: Canvas + ?Sized>(canvas: &C, item: &str, title: &str) -> Self {
        let (_, item_height) = canvas.text_dimensions(FONT_SIZE, item);
        let (_, title_height) = canvas.text_dimensions(FONT_SIZE, title);
        Self {
            item_height,
            title_height,
        }
    }

    /// Offset that centres a text line inside an `ITEM_DIST`-tall cell.
    pub fn centre_offset(&self) -> i32 {
        centre_in(ITEM_DIST, self.item_height)
    }

    /// Top of content row `row` (1-based) on a grid starting at `top`.
    pub fn row_y_from(&self, top: i32, row: i32) -> i32 {
        top + self.centre_offset() + ROW_STEP * row
    }

    /// Top of content row `row` (1-based) on the standard page grid.
    pub fn row_y(&self, row: i32) -> i32 {
        self.row_y_from(START_Y, row)
    }
}

/// Offset that centres something `inner` tall inside `outer`.
pub fn centre_in(outer: i32, inner: u32) -> i32 {
    (outer - inner as i32) / 2
}

/// Draw `label` at `(x, y)` and `value` a fixed gap to its right.
///
/// A `None` or empty value draws only the label.
pub fn draw_item<C: Canvas + ?Sized>(canvas: &mut C, x: i32, y: i32, label: &str, value: Option<&str>) {
    let value_x = draw_label(canvas, x, y, label);
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        canvas.draw_text(value_x, y, FONT_SIZE, MENU_INFO_DESC_COLOUR, value);
    }
}

/// Like [`draw_item`], with the value rendered from `args` into a
/// bounded buffer. Output beyond the buffer is dropped.
pub fn draw_item_fmt<C: Canvas + ?Sized>(
    canvas: &mut C,
    x: i32,
    y: i32,
    label: &str,
    args: fmt::Arguments<'_>,
) {
    let value_x = draw_label(canvas, x, y, label);
    let value: ValueBuf = format_bounded(args);
    if !value.is_empty() {
        canvas.draw_text(value_x, y, FONT_SIZE, MENU_INFO_DESC_COLOUR, &value);
    }
}

/// Draws the label and returns where its value starts.
fn draw_label<C: Canvas + ?Sized>(canvas: &mut C, x: i32, y: i32, label: &str) -> i32 {
    let (width, _) = canvas.text_dimensions(FONT_SIZE, label);
    canvas.draw_text(x, y, FONT_SIZE, MENU_INFO_TITLE_COLOUR, label);
    x + width as i32 + LABEL_VALUE_GAP
}

/// `draw_itemf!(canvas, x, y, label, "fmt", args...)` - formatted row.
#[macro_export]
macro_rules! draw_itemf {
    ($canvas:expr, $x:expr, $y:expr, $label:expr, $($arg:tt)+) => {
        $crate::ui::layout::draw_item_fmt($canvas, $x, $y, $label, format_args!($($arg)+))
    };
}
