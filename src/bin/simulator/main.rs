//! Desktop simulator for the devident dashboard.
//!
//! Opens an SDL window the size of the target screen and runs the
//! dashboard against demo telemetry.
//!
//! Keys: arrows (or W/S) to navigate, Return to confirm, Escape or `+`
//! to quit. `DEVIDENT_SCALE` sets the window pixel scale (default 1);
//! `RUST_LOG` sets the log filter (default `info`).

mod demo;
mod window;

use std::cell::{Cell, RefCell};
use std::env;
use std::rc::Rc;

use anyhow::{Context, Result};
use devident::config::{APP_NAME, SCREEN_HEIGHT, SCREEN_WIDTH};
use devident::ui::display::EgCanvas;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, Window};
use tracing::info;
use tracing_subscriber::EnvFilter;

use demo::DemoTelemetry;
use window::{SimHost, SimInput, SimScreen};

fn window_scale() -> Result<u32> {
    match env::var("DEVIDENT_SCALE") {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("DEVIDENT_SCALE must be a positive integer, got {raw:?}")),
        Err(_) => Ok(1),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let scale = window_scale()?.max(1);
    let output = OutputSettingsBuilder::new().scale(scale).build();
    let window = Rc::new(RefCell::new(Window::new(APP_NAME, &output)));

    let display = SimulatorDisplay::<Rgb888>::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    // The window only yields events after its first update.
    window.borrow_mut().update(&display);
    info!("simulator: {}x{} at scale {}", SCREEN_WIDTH, SCREEN_HEIGHT, scale);

    let quit = Rc::new(Cell::new(false));
    let mut canvas = EgCanvas::new(SimScreen::new(display, Rc::clone(&window)));
    let mut input = SimInput::new(Rc::clone(&window), Rc::clone(&quit));
    let mut host = SimHost::new(quit);
    let telemetry = DemoTelemetry::new();

    devident::run(&telemetry, &mut canvas, &mut input, &mut host);

    info!("simulator: closed");
    Ok(())
}
