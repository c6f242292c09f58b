//! Storage usage bar.

use crate::config::{
    BACKGROUND_COLOUR, BAR_BORDER, BAR_INNER_WIDTH, BAR_OUTER_HEIGHT, BAR_OUTER_WIDTH,
    MENU_SELECTOR_COLOUR, STATUS_BAR_COLOUR,
};
use crate::platform::Canvas;

/// Filled width of a bar `inner_width` wide showing `used` of `total`.
///
/// `floor(used / total * inner_width)`, zero when `total` is zero and
/// never wider than `inner_width`.
pub fn bar_fill_width(used: u64, total: u64, inner_width: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let fill = u128::from(used) * u128::from(inner_width) / u128::from(total);
    fill.min(u128::from(inner_width)) as u32
}

/// Draw a usage bar with its top-left corner at `(x, y)`: a frame, an
/// empty track, and the fill proportional to `used / total`.
pub fn draw_usage_bar<C: Canvas + ?Sized>(canvas: &mut C, x: i32, y: i32, used: u64, total: u64) {
    let inner_x = x + BAR_BORDER as i32;
    let inner_y = y + BAR_BORDER as i32;
    let inner_height = BAR_OUTER_HEIGHT - 2 * BAR_BORDER;

    canvas.draw_rect(x, y, BAR_OUTER_WIDTH, BAR_OUTER_HEIGHT, STATUS_BAR_COLOUR);
    canvas.draw_rect(inner_x, inner_y, BAR_INNER_WIDTH, inner_height, BACKGROUND_COLOUR);
    canvas.draw_rect(
        inner_x,
        inner_y,
        bar_fill_width(used, total, BAR_INNER_WIDTH),
        inner_height,
        MENU_SELECTOR_COLOUR,
    );
}
