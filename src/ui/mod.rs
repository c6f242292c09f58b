//! User interface - menu rail, page contents and the rendering backend.
//!
//! The dashboard is a flat list of pages selected from the left rail.
//! The last entry, [`Page::Exit`], has no content and only serves as the
//! target for the confirm button.
//!
//! ## Components
//!
//! - **Buttons**: logical buttons and per-frame edge sets
//! - **Input logic**: cyclic selection over the page list
//! - **Layout**: label/value rows with bounded formatting
//! - **Pages / widgets**: per-page content and the storage usage bar
//! - **Display**: `Canvas` implementation over `embedded-graphics`

pub mod buttons;
pub mod display;
pub mod format;
pub mod input_logic;
pub mod layout;
pub mod pages;
pub mod widgets;

use core::fmt;

/// Pages selectable from the menu rail, in rail order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Page {
    #[default]
    Kernel,
    System,
    Power,
    Storage,
    Joycon,
    Misc,
    /// Sentinel entry; confirming it ends the loop.
    Exit,
}

impl Page {
    /// Every page in rail order.
    pub const ALL: [Page; 7] = [
        Page::Kernel,
        Page::System,
        Page::Power,
        Page::Storage,
        Page::Joycon,
        Page::Misc,
        Page::Exit,
    ];

    /// Index of the `Exit` sentinel; the highest valid selection.
    pub const COUNT: usize = Page::ALL.len() - 1;

    /// Page at rail index `index`, if in range.
    pub fn from_index(index: usize) -> Option<Page> {
        Page::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Menu rail caption.
    pub fn title(self) -> &'static str {
        match self {
            Page::Kernel => "Kernel",
            Page::System => "System",
            Page::Power => "Power",
            Page::Storage => "Storage",
            Page::Joycon => "Joy-Con",
            Page::Misc => "Misc",
            Page::Exit => "Exit",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
