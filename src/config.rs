//! Application-wide constants and compile-time configuration.
//!
//! Screen geometry, grid constants, colours and buffer sizes live here so
//! they can be tuned in one place. Coordinates are in pixels on a
//! 1280×720 frame.

use embedded_graphics::pixelcolor::Rgb888;

/// Name shown in the status bar.
pub const APP_NAME: &str = "DevIdent";

// Screen

pub const SCREEN_WIDTH: u32 = 1280;
pub const SCREEN_HEIGHT: u32 = 720;

/// Height of the top status bar.
pub const STATUS_BAR_HEIGHT: u32 = 50;

/// Width of the left menu rail.
pub const MENU_RAIL_WIDTH: u32 = 400;

/// Width of the content pane to the right of the rail.
pub const CONTENT_WIDTH: u32 = SCREEN_WIDTH - MENU_RAIL_WIDTH;

/// Height of everything below the status bar.
pub const BODY_HEIGHT: u32 = SCREEN_HEIGHT - STATUS_BAR_HEIGHT;

// Text

/// Font size used for every label, value and menu entry.
pub const FONT_SIZE: u32 = 25;

/// Horizontal gap between a label and its value.
pub const LABEL_VALUE_GAP: i32 = 20;

/// Capacity of the buffer that formatted values are rendered into.
pub const VALUE_BUF_LEN: usize = 256;

/// Reference strings measured once at start-up for vertical centring.
pub const ITEM_REFERENCE_TEXT: &str = "Item";
pub const TITLE_REFERENCE_TEXT: &str = APP_NAME;

/// Shown in place of a value whose telemetry query failed.
pub const PLACEHOLDER: &str = "N/A";

// Grid

/// Menu row pitch; also the cell height rows are centred within.
pub const ITEM_DIST: i32 = 67;

/// Left edge of content-page rows.
pub const START_X: i32 = 450;

/// Top of the content-page grid.
pub const START_Y: i32 = 250;

/// Vertical step between successive content-page rows.
pub const ROW_STEP: i32 = 50;

/// Left edge of menu entries on the rail.
pub const MENU_TEXT_X: i32 = 30;

/// Draw a per-page icon at the right end of each menu row.
pub const MENU_ICONS_ENABLED: bool = true;

// Storage page

/// Left edge of the storage drive icons and usage bars.
pub const STORAGE_ICON_X: i32 = 450;

/// Left edge of the storage capacity rows.
pub const STORAGE_TEXT_X: i32 = 600;

/// Vertical distance between the three storage blocks.
pub const STORAGE_BLOCK_STEP: i32 = 208;

/// Top of the first storage block's icon and text.
pub const STORAGE_ICON_Y: i32 = 88;
pub const STORAGE_TEXT_Y: i32 = 38;

/// Offset from the icon top to its usage bar.
pub const STORAGE_BAR_OFFSET: i32 = 138;

/// Offset of a block's heading from the block top.
pub const STORAGE_HEADING_OFFSET: i32 = 50;

/// Step between the capacity rows under a heading.
pub const STORAGE_ROW_STEP: i32 = 38;

/// Outer size of a usage bar.
pub const BAR_OUTER_WIDTH: u32 = 128;
pub const BAR_OUTER_HEIGHT: u32 = 25;

/// Border between the outer frame and the fill area.
pub const BAR_BORDER: u32 = 2;

/// Inner (fill) width of a usage bar.
pub const BAR_INNER_WIDTH: u32 = BAR_OUTER_WIDTH - 2 * BAR_BORDER;

// Assets

pub const BANNER_WIDTH: u32 = 200;
pub const BANNER_HEIGHT: u32 = 120;
pub const BANNER_Y: i32 = 80;

pub const DRIVE_ICON_SIZE: u32 = 128;
pub const MENU_ICON_SIZE: u32 = 32;

// Colours

pub const BACKGROUND_COLOUR: Rgb888 = Rgb888::new(242, 241, 239);
pub const STATUS_BAR_COLOUR: Rgb888 = Rgb888::new(44, 44, 52);
pub const MENU_BAR_COLOUR: Rgb888 = Rgb888::new(58, 58, 68);
pub const MENU_SELECTOR_COLOUR: Rgb888 = Rgb888::new(0, 150, 136);
pub const ITEM_COLOUR: Rgb888 = Rgb888::new(200, 200, 200);
pub const ITEM_SELECTED_COLOUR: Rgb888 = Rgb888::new(255, 255, 255);
pub const MENU_INFO_TITLE_COLOUR: Rgb888 = Rgb888::new(32, 32, 32);
pub const MENU_INFO_DESC_COLOUR: Rgb888 = Rgb888::new(0, 121, 107);
