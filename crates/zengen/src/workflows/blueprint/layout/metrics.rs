//! Glyph metrics for the two standard Type1 fonts the report uses, so text
//! can be centred, right-aligned and wrapped in link regions without
//! embedding font programs.

use super::blocks::Font;

const FIRST_PRINTABLE: u32 = 32;

// Advance widths in 1/1000 em for U+0020..=U+007E.
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // '0'..'?'
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 'P'..'_'
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // '`'..'o'
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // 'p'..'~'
];

const BULLET: char = '\u{2022}';
const BULLET_WIN_ANSI: u8 = 0x95;
const BULLET_WIDTH: u16 = 350;
const FALLBACK: u8 = b'?';

fn glyph_width(font: Font, ch: char) -> u16 {
    if ch == BULLET {
        return BULLET_WIDTH;
    }
    let table = match font {
        Font::Regular => &HELVETICA,
        Font::Bold => &HELVETICA_BOLD,
    };
    let index = (ch as u32)
        .checked_sub(FIRST_PRINTABLE)
        .and_then(|offset| table.get(offset as usize));
    match index {
        Some(width) => *width,
        None => table[(FALLBACK as u32 - FIRST_PRINTABLE) as usize],
    }
}

/// Rendered width of `text` in points.
pub fn text_width(text: &str, font: Font, size: f32) -> f32 {
    let units: u32 = text.chars().map(|ch| u32::from(glyph_width(font, ch))).sum();
    units as f32 * size / 1000.0
}

/// Encodes text as WinAnsi bytes. Characters outside the supported set are
/// replaced with `?` so the measured width always matches what is drawn.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch {
            BULLET => BULLET_WIN_ANSI,
            ' '..='~' => ch as u8,
            _ => FALLBACK,
        })
        .collect()
}
