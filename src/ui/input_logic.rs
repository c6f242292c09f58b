use crate::ui::Page;

/// Move selection cursor one page up, wrapping to `Exit` from the top.
pub fn select_prev(selected: usize) -> usize {
    advance(selected, false, true)
}

/// Move selection cursor one page down, wrapping to the first page after `Exit`.
pub fn select_next(selected: usize) -> usize {
    advance(selected, true, false)
}

/// Apply one frame of directional edges to `selected`.
///
/// Both edges are applied when both fire, so up+down in one frame leaves
/// the selection where it was. The result is always in `0..=Page::COUNT`.
pub fn advance(selected: usize, down: bool, up: bool) -> usize {
    let last = Page::COUNT as isize;
    let mut next = selected.min(Page::COUNT) as isize;

    if down {
        next += 1;
    }
    if up {
        next -= 1;
    }

    if next > last {
        next = 0;
    }
    if next < 0 {
        next = last;
    }
    next as usize
}
