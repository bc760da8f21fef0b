//! WinAnsi encoding utilities for the standard PDF fonts
//!
//! The built-in Type1 fonts (Helvetica family) are addressed with
//! WinAnsiEncoding (Windows-1252). This module provides utilities for:
//! - Converting UTF-8 text to WinAnsi bytes
//! - Measuring, truncating and padding text by Helvetica glyph widths

use tracing::instrument;

/// Helvetica advance widths (1/1000 em) for ASCII 0x20..=0x7E.
///
/// Helvetica-Bold shares the digit, period, comma and currency widths, so
/// right-aligned amounts line up in both weights.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

/// Width used for glyphs outside the ASCII table
const DEFAULT_WIDTH: u16 = 556;

/// Get the width of a string in points at the given font size
pub fn text_width(s: &str, size: f32) -> f32 {
    let units: u32 = s.chars().map(|c| glyph_width(c) as u32).sum();
    units as f32 * size / 1000.0
}

fn glyph_width(c: char) -> u16 {
    match c as u32 {
        code @ 0x20..=0x7E => HELVETICA_WIDTHS[(code - 0x20) as usize],
        _ => DEFAULT_WIDTH,
    }
}

/// Truncate a string so that it fits within `max_width` points
///
/// An ellipsis ("...") is appended when characters had to be dropped.
pub fn truncate_to_width(s: &str, max_width: f32, size: f32) -> String {
    if text_width(s, size) <= max_width {
        return s.to_string();
    }

    let ellipsis = "...";
    let budget = max_width - text_width(ellipsis, size);
    let mut width = 0.0;
    let mut result = String::new();
    for c in s.chars() {
        let w = glyph_width(c) as f32 * size / 1000.0;
        if width + w > budget {
            break;
        }
        result.push(c);
        width += w;
    }
    result.push_str(ellipsis);
    result
}

/// Convert UTF-8 text to WinAnsi (Windows-1252) bytes
///
/// Characters without a WinAnsi code point are replaced with `?`.
#[instrument(level = "trace")]
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    let (cow, _, had_errors) = encoding_rs::WINDOWS_1252.encode(s);
    if !had_errors {
        return cow.into_owned();
    }

    // Slow path: encode char by char so a single bad glyph does not leak
    // an HTML numeric reference into the document.
    let mut result = Vec::with_capacity(s.len());
    let mut buf = [0u8; 4];
    for c in s.chars() {
        let (cow, _, bad) = encoding_rs::WINDOWS_1252.encode(c.encode_utf8(&mut buf));
        if bad {
            tracing::debug!(char = %c, "no WinAnsi code point, substituting '?'");
            result.push(b'?');
        } else {
            result.extend_from_slice(&cow);
        }
    }
    result
}
