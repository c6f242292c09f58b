//! Logical buttons and per-frame edge sets.
//!
//! Four logical buttons drive the dashboard:
//!   - DOWN       - next page
//!   - UP         - previous page
//!   - CONFIRM    - exit when the `Exit` entry is selected
//!   - QUICK_EXIT - exit from any page
//!
//! Input sources that report edges directly build a [`ButtonEdges`] with
//! [`ButtonEdges::with`]. Sources that only know which buttons are held
//! feed those levels through an [`EdgeDetector`] once per frame.

/// Logical dashboard buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Down,
    Up,
    Confirm,
    QuickExit,
}

impl Button {
    pub const ALL: [Button; 4] = [Button::Down, Button::Up, Button::Confirm, Button::QuickExit];

    const fn mask(self) -> u8 {
        1 << (self as u8)
    }
}

/// Set of buttons, used both for "newly pressed this frame" and for
/// "currently held".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonEdges(u8);

impl ButtonEdges {
    pub const fn none() -> Self {
        Self(0)
    }

    /// This set plus `button`.
    pub const fn with(self, button: Button) -> Self {
        Self(self.0 | button.mask())
    }

    pub fn insert(&mut self, button: Button) {
        self.0 |= button.mask();
    }

    pub fn remove(&mut self, button: Button) {
        self.0 &= !button.mask();
    }

    pub const fn pressed(self, button: Button) -> bool {
        self.0 & button.mask() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<Button> for ButtonEdges {
    fn from_iter<I: IntoIterator<Item = Button>>(iter: I) -> Self {
        iter.into_iter().fold(Self::none(), Self::with)
    }
}

/// Turns per-frame held-button levels into press edges.
///
/// A button reports an edge only on the first frame it is seen held;
/// it must be released before it can fire again.
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeDetector {
    held: ButtonEdges,
}

impl EdgeDetector {
    pub const fn new() -> Self {
        Self {
            held: ButtonEdges::none(),
        }
    }

    /// Feed this frame's held set; returns buttons that went down.
    pub fn update(&mut self, held: ButtonEdges) -> ButtonEdges {
        let pressed = ButtonEdges(held.0 & !self.held.0);
        self.held = held;
        pressed
    }
}
