//! SDL window plumbing: draw target, key input and quit handling.
//!
//! The window is shared between the screen (which presents into it) and
//! the input source (which drains its events), so it sits behind an
//! `Rc<RefCell<_>>`. A window-close event is forwarded to [`SimHost`].

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;
use std::thread;
use std::time::{Duration, Instant};

use devident::ui::buttons::EdgeDetector;
use devident::ui::display::FrameSink;
use devident::{Button, ButtonEdges, Input, Lifecycle};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{SimulatorDisplay, SimulatorEvent, Window};

/// Target frame period (~60 Hz).
const FRAME_TIME: Duration = Duration::from_millis(16);

/// Map keyboard keys onto dashboard buttons.
///
///   Down / S       → DOWN
///   Up / W         → UP
///   Return / Space → CONFIRM
///   Escape / +     → QUICK_EXIT
fn button_for(keycode: Keycode) -> Option<Button> {
    match keycode {
        Keycode::Down | Keycode::S => Some(Button::Down),
        Keycode::Up | Keycode::W => Some(Button::Up),
        Keycode::Return | Keycode::Space => Some(Button::Confirm),
        Keycode::Escape | Keycode::Plus | Keycode::KpPlus => Some(Button::QuickExit),
        _ => None,
    }
}

/// Simulator display that presents into the shared window.
pub struct SimScreen {
    display: SimulatorDisplay<Rgb888>,
    window: Rc<RefCell<Window>>,
    last_frame: Instant,
}

impl SimScreen {
    pub fn new(display: SimulatorDisplay<Rgb888>, window: Rc<RefCell<Window>>) -> Self {
        Self {
            display,
            window,
            last_frame: Instant::now(),
        }
    }
}

impl OriginDimensions for SimScreen {
    fn size(&self) -> Size {
        self.display.size()
    }
}

impl DrawTarget for SimScreen {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.display.draw_iter(pixels)
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        self.display.fill_solid(area, color)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.display.clear(color)
    }
}

impl FrameSink for SimScreen {
    fn present(&mut self) {
        self.window.borrow_mut().update(&self.display);

        // Pace the loop the way a vsync'd display would.
        let elapsed = self.last_frame.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
        self.last_frame = Instant::now();
    }
}

/// Keyboard input drained from the window once per frame.
pub struct SimInput {
    window: Rc<RefCell<Window>>,
    quit: Rc<Cell<bool>>,
    held: ButtonEdges,
    detector: EdgeDetector,
}

impl SimInput {
    pub fn new(window: Rc<RefCell<Window>>, quit: Rc<Cell<bool>>) -> Self {
        Self {
            window,
            quit,
            held: ButtonEdges::none(),
            detector: EdgeDetector::new(),
        }
    }
}

impl Input for SimInput {
    fn poll(&mut self) -> ButtonEdges {
        // Keys pressed and released between two polls still count as held
        // for this frame.
        let mut levels = self.held;

        for event in self.window.borrow_mut().events() {
            match event {
                SimulatorEvent::Quit => self.quit.set(true),
                SimulatorEvent::KeyDown { keycode, .. } => {
                    if let Some(button) = button_for(keycode) {
                        self.held.insert(button);
                        levels.insert(button);
                    }
                }
                SimulatorEvent::KeyUp { keycode, .. } => {
                    if let Some(button) = button_for(keycode) {
                        self.held.remove(button);
                    }
                }
                _ => {}
            }
        }

        self.detector.update(levels)
    }
}

/// Stops the loop once the window has been closed.
pub struct SimHost {
    quit: Rc<Cell<bool>>,
}

impl SimHost {
    pub fn new(quit: Rc<Cell<bool>>) -> Self {
        Self { quit }
    }
}

impl Lifecycle for SimHost {
    fn should_continue(&mut self) -> bool {
        !self.quit.get()
    }
}
