//! Greedy line wrapping against font metrics.

use super::fonts::string_width;
use crate::model::StandardFont;

/// Break `text` into lines no wider than `max_width`.
///
/// Words are separated by whitespace and joined with single spaces. A word
/// wider than `max_width` on its own is split between characters. The result
/// always holds at least one line (possibly empty).
pub fn wrap_text(text: &str, font: StandardFont, size: f32, max_width: f32) -> Vec<String> {
    let space = string_width(" ", font, size);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0;

    for word in text.split_whitespace() {
        let word_width = string_width(word, font, size);

        if current.is_empty() {
            if word_width <= max_width {
                current.push_str(word);
                current_width = word_width;
            } else {
                let mut pieces = break_word(word, font, size, max_width);
                let last = pieces.pop().unwrap_or_default();
                lines.extend(pieces);
                current_width = string_width(&last, font, size);
                current = last;
            }
        } else if current_width + space + word_width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += space + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            if word_width <= max_width {
                current.push_str(word);
                current_width = word_width;
            } else {
                let mut pieces = break_word(word, font, size, max_width);
                let last = pieces.pop().unwrap_or_default();
                lines.extend(pieces);
                current_width = string_width(&last, font, size);
                current = last;
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Split a single overlong word into pieces that fit. Each piece holds at
/// least one character.
fn break_word(word: &str, font: StandardFont, size: f32, max_width: f32) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut width = 0.0;

    for ch in word.chars() {
        let mut buf = [0u8; 4];
        let ch_width = string_width(ch.encode_utf8(&mut buf), font, size);
        if !piece.is_empty() && width + ch_width > max_width {
            pieces.push(std::mem::take(&mut piece));
            width = 0.0;
        }
        piece.push(ch);
        width += ch_width;
    }

    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    const FONT: StandardFont = StandardFont::Helvetica;

    #[test]
    fn test_short_text_single_line() {
        let lines = wrap_text("Wear helmets.", FONT, 10.0, 400.0);
        assert_eq!(lines, vec!["Wear helmets."]);
    }

    #[test]
    fn test_empty_text_yields_one_line() {
        assert_eq!(wrap_text("", FONT, 10.0, 100.0), vec![String::new()]);
        assert_eq!(wrap_text("   ", FONT, 10.0, 100.0), vec![String::new()]);
    }

    #[test]
    fn test_wraps_at_word_boundaries() {
        let text = "alpha beta gamma delta epsilon zeta eta theta";
        let width = string_width("alpha beta gamma", FONT, 10.0) + 0.5;
        let lines = wrap_text(text, FONT, 10.0, width);

        assert_eq!(lines[0], "alpha beta gamma");
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(string_width(line, FONT, 10.0) <= width);
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_collapses_inner_whitespace() {
        let lines = wrap_text("a   b\tc", FONT, 10.0, 500.0);
        assert_eq!(lines, vec!["a b c"]);
    }

    #[test]
    fn test_breaks_overlong_word() {
        let word = "x".repeat(50);
        let width = string_width("xxxxxxxxxx", FONT, 10.0);
        let lines = wrap_text(&word, FONT, 10.0, width);

        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l.len() == 10));
    }

    #[test]
    fn test_overlong_word_after_short_word() {
        let width = string_width("xxxxx", FONT, 10.0);
        let lines = wrap_text("ab xxxxxxxx", FONT, 10.0, width);
        assert_eq!(lines, vec!["ab", "xxxxx", "xxx"]);
    }

    #[test]
    fn test_zero_width_still_progresses() {
        let lines = wrap_text("abc", FONT, 10.0, 0.0);
        assert_eq!(lines, vec!["a", "b", "c"]);
    }
}
