//! Pure formatting helpers for page values.
//!
//! Everything here writes into fixed-capacity `heapless` strings; output
//! that does not fit is cut at a character boundary rather than failing.

use core::fmt::{self, Write};

use crate::config::VALUE_BUF_LEN;
use crate::telemetry::HwAddress;

/// Buffer that formatted row values are rendered into.
pub type ValueBuf = heapless::String<VALUE_BUF_LEN>;

/// Human-readable byte size, e.g. `"31.91 GB"`.
pub type SizeString = heapless::String<16>;

/// Colon-delimited hardware address, e.g. `"00:11:22:33:44:55"`.
pub type AddressString = heapless::String<17>;

const SIZE_UNITS: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];

/// `fmt::Write` adapter that drops whatever does not fit.
struct Truncating<'a, const N: usize> {
    buf: &'a mut heapless::String<N>,
    full: bool,
}

impl<const N: usize> Write for Truncating<'_, N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.full {
            return Ok(());
        }
        for c in s.chars() {
            if self.buf.push(c).is_err() {
                // Stay full so a later, shorter char can't leave a gap.
                self.full = true;
                break;
            }
        }
        Ok(())
    }
}

/// Render `args` into an `N`-byte string, truncating on overflow.
pub fn format_bounded<const N: usize>(args: fmt::Arguments<'_>) -> heapless::String<N> {
    let mut buf = heapless::String::new();
    let mut w = Truncating {
        buf: &mut buf,
        full: false,
    };
    // The adapter never reports an error; a Display impl returning Err
    // just ends the output early.
    let _ = w.write_fmt(args);
    buf
}

/// Format a 6-byte address as uppercase hex pairs in array order.
pub fn format_address(addr: &HwAddress) -> AddressString {
    format_bounded(format_args!(
        "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
        addr[0], addr[1], addr[2], addr[3], addr[4], addr[5]
    ))
}

/// Format a byte count with binary units: plain bytes have no decimals,
/// larger units two.
pub fn format_size(bytes: u64) -> SizeString {
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format_bounded(format_args!("{} {}", bytes, SIZE_UNITS[0]))
    } else {
        format_bounded(format_args!("{:.2} {}", size, SIZE_UNITS[unit]))
    }
}

pub fn enabled_label(enabled: bool) -> &'static str {
    if enabled {
        "Enabled"
    } else {
        "Disabled"
    }
}

pub fn yes_no_label(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

pub fn inserted_label(inserted: bool) -> &'static str {
    if inserted {
        "Inserted"
    } else {
        "Not inserted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_units() {
        assert_eq!(format_size(0).as_str(), "0 B");
        assert_eq!(format_size(1023).as_str(), "1023 B");
        assert_eq!(format_size(1024).as_str(), "1.00 KB");
        assert_eq!(format_size(1536).as_str(), "1.50 KB");
        assert_eq!(format_size(32 * 1024 * 1024 * 1024).as_str(), "32.00 GB");
    }

    #[test]
    fn size_of_u64_max_fits() {
        assert_eq!(format_size(u64::MAX).as_str(), "16.00 EB");
    }

    #[test]
    fn bounded_keeps_short_output() {
        let s: heapless::String<8> = format_bounded(format_args!("{}-{}", 1, 2));
        assert_eq!(s.as_str(), "1-2");
    }

    #[test]
    fn bounded_truncates_on_char_boundary() {
        // 'é' is two bytes; only two of them fit in five bytes.
        let s: heapless::String<5> = format_bounded(format_args!("{}", "éééé"));
        assert_eq!(s.as_str(), "éé");

        // Once full, later short pieces are not appended.
        let s: heapless::String<5> = format_bounded(format_args!("{}{}", "éééé", "a"));
        assert_eq!(s.as_str(), "éé");
    }
}
