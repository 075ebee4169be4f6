//! Metrics and text encoding for the standard Type1 fonts.
//!
//! Widths are the AFM advance widths (1/1000 em) of the Adobe core fonts.
//! Text is written with `WinAnsiEncoding`, so every string is normalized to
//! NFC and mapped to Windows-1252 before it reaches a content stream.

use crate::model::StandardFont;
use unicode_normalization::UnicodeNormalization;

/// Ascender of Helvetica, as a fraction of the font size.
pub const ASCENT: f32 = 0.718;

/// Descender of Helvetica (negative), as a fraction of the font size.
pub const DESCENT: f32 = -0.207;

/// Byte written for characters WinAnsi cannot represent.
const REPLACEMENT: u8 = b'?';

/// Advance widths for ASCII 0x20..=0x7E.
#[rustfmt::skip]
const HELVETICA_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_ASCII: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Advance width of a character in 1/1000 em.
pub fn char_width(font: StandardFont, ch: char) -> u16 {
    let ascii = match font {
        StandardFont::Helvetica => &HELVETICA_ASCII,
        StandardFont::HelveticaBold => &HELVETICA_BOLD_ASCII,
    };
    let lookup = |c: char| ascii[(c as usize) - 0x20];

    match ch {
        ' '..='~' => lookup(ch),
        '\u{a0}' | '\t' => lookup(' '),
        // Accented Latin letters share the advance of their base letter.
        'À'..='Å' => lookup('A'),
        'à'..='å' => lookup('a'),
        'È'..='Ë' => lookup('E'),
        'è'..='ë' => lookup('e'),
        'Ì'..='Ï' => lookup('I'),
        'ì'..='ï' => lookup('i'),
        'Ò'..='Ö' | 'Ø' => lookup('O'),
        'ò'..='ö' | 'ø' => lookup('o'),
        'Ù'..='Ü' => lookup('U'),
        'ù'..='ü' => lookup('u'),
        'Ç' => lookup('C'),
        'ç' => lookup('c'),
        'Ñ' => lookup('N'),
        'ñ' => lookup('n'),
        'Ý' => lookup('Y'),
        'ý' | 'ÿ' => lookup('y'),
        'Æ' => 1000,
        'æ' => 889,
        '’' | '‘' => lookup('\''),
        '“' | '”' => lookup('"'),
        '–' | '•' => 556,
        '—' | '…' => 1000,
        '€' => 556,
        '°' => 400,
        _ => lookup('?'),
    }
}

/// Width of a string set in `font` at `size` points.
pub fn string_width(text: &str, font: StandardFont, size: f32) -> f32 {
    let units: u32 = text.nfc().map(|ch| u32::from(char_width(font, ch))).sum();
    units as f32 * size / 1000.0
}

/// Encode text for a `WinAnsiEncoding` font.
///
/// Returns the encoded bytes and the number of characters that had to be
/// replaced with `?`.
pub fn encode_win_ansi(text: &str) -> (Vec<u8>, usize) {
    let mut bytes = Vec::with_capacity(text.len());
    let mut replaced = 0;

    for ch in text.nfc() {
        match win_ansi_byte(ch) {
            Some(b) => bytes.push(b),
            None => {
                bytes.push(REPLACEMENT);
                replaced += 1;
            }
        }
    }

    (bytes, replaced)
}

fn win_ansi_byte(ch: char) -> Option<u8> {
    let code = ch as u32;
    match code {
        0x20..=0x7E | 0xA0..=0xFF => Some(code as u8),
        _ => match ch {
            '€' => Some(0x80),
            '‚' => Some(0x82),
            'ƒ' => Some(0x83),
            '„' => Some(0x84),
            '…' => Some(0x85),
            '†' => Some(0x86),
            '‡' => Some(0x87),
            'ˆ' => Some(0x88),
            '‰' => Some(0x89),
            'Š' => Some(0x8A),
            '‹' => Some(0x8B),
            'Œ' => Some(0x8C),
            'Ž' => Some(0x8E),
            '‘' => Some(0x91),
            '’' => Some(0x92),
            '“' => Some(0x93),
            '”' => Some(0x94),
            '•' => Some(0x95),
            '–' => Some(0x96),
            '—' => Some(0x97),
            '˜' => Some(0x98),
            '™' => Some(0x99),
            'š' => Some(0x9A),
            '›' => Some(0x9B),
            'œ' => Some(0x9C),
            'ž' => Some(0x9E),
            'Ÿ' => Some(0x9F),
            '\t' => Some(b' '),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_widths() {
        assert_eq!(char_width(StandardFont::Helvetica, ' '), 278);
        assert_eq!(char_width(StandardFont::Helvetica, 'A'), 667);
        assert_eq!(char_width(StandardFont::Helvetica, 'i'), 222);
        assert_eq!(char_width(StandardFont::Helvetica, '~'), 584);
        assert_eq!(char_width(StandardFont::HelveticaBold, 'A'), 722);
        assert_eq!(char_width(StandardFont::HelveticaBold, 'm'), 889);
    }

    #[test]
    fn test_accented_widths() {
        assert_eq!(
            char_width(StandardFont::Helvetica, 'è'),
            char_width(StandardFont::Helvetica, 'e')
        );
        assert_eq!(
            char_width(StandardFont::HelveticaBold, 'À'),
            char_width(StandardFont::HelveticaBold, 'A')
        );
    }

    #[test]
    fn test_string_width() {
        // "Hi" = 722 + 222
        let width = string_width("Hi", StandardFont::Helvetica, 10.0);
        assert!((width - 9.44).abs() < 1e-4);
        assert_eq!(string_width("", StandardFont::Helvetica, 10.0), 0.0);
    }

    #[test]
    fn test_encode_latin1() {
        let (bytes, replaced) = encode_win_ansi("Più sicurezza");
        assert_eq!(replaced, 0);
        assert_eq!(bytes, b"Pi\xF9 sicurezza".to_vec());
    }

    #[test]
    fn test_encode_decomposed_is_normalized() {
        // 'e' + combining grave accent
        let (bytes, replaced) = encode_win_ansi("e\u{300}");
        assert_eq!(replaced, 0);
        assert_eq!(bytes, vec![0xE8]);
    }

    #[test]
    fn test_encode_cp1252_specials() {
        let (bytes, _) = encode_win_ansi("€ – ’");
        assert_eq!(bytes, vec![0x80, b' ', 0x96, b' ', 0x92]);
    }

    #[test]
    fn test_encode_unsupported() {
        let (bytes, replaced) = encode_win_ansi("a✓b");
        assert_eq!(bytes, b"a?b".to_vec());
        assert_eq!(replaced, 1);
    }
}
