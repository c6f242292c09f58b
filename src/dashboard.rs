//! Frame controller - one synchronous iteration per displayed frame.
//!
//! Each frame draws the status bar and menu rail, polls input, advances
//! the selection, draws the selected page and presents the result. The
//! rail is drawn before the selection moves, so it trails the page
//! content by one frame after a navigation edge.

use crate::config::{
    APP_NAME, BACKGROUND_COLOUR, BANNER_WIDTH, BANNER_Y, BODY_HEIGHT, CONTENT_WIDTH, FONT_SIZE,
    ITEM_COLOUR, ITEM_DIST, ITEM_REFERENCE_TEXT, ITEM_SELECTED_COLOUR, MENU_BAR_COLOUR,
    MENU_ICONS_ENABLED, MENU_ICON_SIZE, MENU_RAIL_WIDTH, MENU_SELECTOR_COLOUR, MENU_TEXT_X,
    SCREEN_WIDTH, STATUS_BAR_COLOUR, STATUS_BAR_HEIGHT, TITLE_REFERENCE_TEXT,
};
use crate::platform::{Asset, Canvas, Input, Lifecycle};
use crate::telemetry::Telemetry;
use crate::ui::buttons::{Button, ButtonEdges};
use crate::ui::format::format_bounded;
use crate::ui::input_logic;
use crate::ui::layout::{centre_in, TextMetrics};
use crate::ui::pages::{self, PageContext};
use crate::ui::Page;

/// Removable media presence, sampled once when the dashboard starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DevicePresence {
    pub sd_card: bool,
    pub game_card: bool,
}

impl DevicePresence {
    /// Query both flags; a failed query reads as "not inserted".
    pub fn capture<T: Telemetry + ?Sized>(telemetry: &T) -> Self {
        let sd_card = telemetry.sd_card_inserted().unwrap_or_else(|e| {
            warn!("presence: sd card query failed ({})", e);
            false
        });
        let game_card = telemetry.game_card_inserted().unwrap_or_else(|e| {
            warn!("presence: game card query failed ({})", e);
            false
        });
        Self { sd_card, game_card }
    }
}

/// Mutable dashboard state carried from frame to frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardState {
    selection: usize,
    presence: DevicePresence,
}

impl DashboardState {
    /// Fresh state with the first page selected.
    pub fn new(presence: DevicePresence) -> Self {
        Self {
            selection: Page::Kernel.index(),
            presence,
        }
    }

    /// Selected rail index, `0..=Page::COUNT`.
    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn page(&self) -> Page {
        Page::from_index(self.selection).unwrap_or(Page::Exit)
    }

    pub fn presence(&self) -> DevicePresence {
        self.presence
    }

    /// Apply this frame's directional edges.
    pub fn apply(&mut self, edges: ButtonEdges) {
        self.selection = input_logic::advance(
            self.selection,
            edges.pressed(Button::Down),
            edges.pressed(Button::Up),
        );
    }
}

/// Whether this frame's edges end the loop, given the post-update page.
pub fn should_exit(edges: ButtonEdges, page: Page) -> bool {
    edges.pressed(Button::QuickExit) || (edges.pressed(Button::Confirm) && page == Page::Exit)
}

/// Result of a single frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameOutcome {
    Continue,
    Exit,
}

/// The dashboard loop over a telemetry source.
pub struct Dashboard<'a, T: ?Sized> {
    telemetry: &'a T,
    state: DashboardState,
    metrics: TextMetrics,
}

impl<'a, T: Telemetry + ?Sized> Dashboard<'a, T> {
    /// Measure reference text on `canvas`, sample device presence and
    /// select the first page.
    pub fn start<C: Canvas + ?Sized>(telemetry: &'a T, canvas: &C) -> Self {
        let metrics = TextMetrics::measure(canvas, ITEM_REFERENCE_TEXT, TITLE_REFERENCE_TEXT);
        let presence = DevicePresence::capture(telemetry);
        info!(
            "dashboard: start (sd card: {}, game card: {})",
            presence.sd_card,
            presence.game_card
        );

        Self {
            telemetry,
            state: DashboardState::new(presence),
            metrics,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn metrics(&self) -> TextMetrics {
        self.metrics
    }

    /// Run frames until the user exits or `host` asks to stop.
    pub fn run<C, I, H>(&mut self, canvas: &mut C, input: &mut I, host: &mut H)
    where
        C: Canvas + ?Sized,
        I: Input + ?Sized,
        H: Lifecycle + ?Sized,
    {
        while host.should_continue() {
            if self.frame(canvas, input) == FrameOutcome::Exit {
                return;
            }
        }
        info!("dashboard: host requested termination");
    }

    /// Compose, present and evaluate one frame.
    pub fn frame<C, I>(&mut self, canvas: &mut C, input: &mut I) -> FrameOutcome
    where
        C: Canvas + ?Sized,
        I: Input + ?Sized,
    {
        self.draw_chrome(canvas);

        let edges = input.poll();
        let previous = self.state.page();
        self.state.apply(edges);
        let page = self.state.page();
        if page != previous {
            info!("selection: {} -> {}", previous, page);
        }

        let ctx = PageContext {
            telemetry: self.telemetry,
            presence: self.state.presence,
            metrics: self.metrics,
        };
        pages::render(page, canvas, &ctx);

        canvas.present();

        if should_exit(edges, page) {
            info!("dashboard: exit from {}", page);
            FrameOutcome::Exit
        } else {
            FrameOutcome::Continue
        }
    }

    /// Background, status bar, menu rail, highlight and menu entries.
    fn draw_chrome<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let bar_height = STATUS_BAR_HEIGHT as i32;

        canvas.clear(BACKGROUND_COLOUR);
        canvas.draw_rect(0, 0, SCREEN_WIDTH, STATUS_BAR_HEIGHT, STATUS_BAR_COLOUR);
        canvas.draw_rect(0, bar_height, MENU_RAIL_WIDTH, BODY_HEIGHT, MENU_BAR_COLOUR);

        let title: heapless::String<32> = format_bounded(format_args!(
            "{} v{}.{}",
            APP_NAME,
            env!("CARGO_PKG_VERSION_MAJOR"),
            env!("CARGO_PKG_VERSION_MINOR")
        ));
        let title_y = centre_in(bar_height, self.metrics.title_height);
        canvas.draw_text(MENU_TEXT_X, title_y, FONT_SIZE, BACKGROUND_COLOUR, &title);

        let banner_x = MENU_RAIL_WIDTH as i32 + centre_in(CONTENT_WIDTH as i32, BANNER_WIDTH);
        canvas.draw_image(Asset::Banner, banner_x, BANNER_Y);

        let selected = self.state.page();
        let highlight_y = bar_height + ITEM_DIST * selected.index() as i32;
        canvas.draw_rect(0, highlight_y, MENU_RAIL_WIDTH, ITEM_DIST as u32, MENU_SELECTOR_COLOUR);

        let icon_x = MENU_RAIL_WIDTH as i32 - MENU_TEXT_X - MENU_ICON_SIZE as i32;
        for page in Page::ALL {
            let top = bar_height + ITEM_DIST * page.index() as i32;
            let colour = if page == selected {
                ITEM_SELECTED_COLOUR
            } else {
                ITEM_COLOUR
            };
            canvas.draw_text(
                MENU_TEXT_X,
                top + self.metrics.centre_offset(),
                FONT_SIZE,
                colour,
                page.title(),
            );
            if MENU_ICONS_ENABLED {
                canvas.draw_image(Asset::PageIcon(page), icon_x, top + centre_in(ITEM_DIST, MENU_ICON_SIZE));
            }
        }
    }
}

/// Start a dashboard over `telemetry` and run it to completion.
pub fn run<T, C, I, H>(telemetry: &T, canvas: &mut C, input: &mut I, host: &mut H)
where
    T: Telemetry + ?Sized,
    C: Canvas + ?Sized,
    I: Input + ?Sized,
    H: Lifecycle + ?Sized,
{
    Dashboard::start(telemetry, canvas).run(canvas, input, host);
}
