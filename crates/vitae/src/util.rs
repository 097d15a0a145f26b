//! Text measuring and color helpers for the terminal rendition.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// Palettes are written with the web page's hex colors and mapped here.
///
/// ```rust
/// use vitae::rgb_to_ansi256;
///
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
/// assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

/// Truncates to a display width, ending in `…` when something was cut.
///
/// ```rust
/// use vitae::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Skills", 10), "Skills");
/// assert_eq!(truncate_to_width("Achievements", 6), "Achie…");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

/// Greedy word wrap measured in display columns.
///
/// Words wider than `width` are kept whole on their own line. A `width` of
/// zero disables wrapping.
pub fn wrap_to_width(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if !line.is_empty() && line_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }
        if !line.is_empty() {
            line.push(' ');
            line_width += 1;
        }
        line.push_str(word);
        line_width += word_width;
    }
    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_ansi256_grayscale() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        let mid = rgb_to_ansi256((128, 128, 128));
        assert!((232..=255).contains(&mid));
    }

    #[test]
    fn test_rgb_to_ansi256_blue_accent() {
        // blue-600 lands in the blue corner of the cube
        assert_eq!(rgb_to_ansi256((37, 99, 235)), 26);
    }

    #[test]
    fn test_truncate_exact_fit() {
        assert_eq!(truncate_to_width("12345", 5), "12345");
        assert_eq!(truncate_to_width("123456", 5), "1234…");
    }

    #[test]
    fn test_truncate_tiny_widths() {
        assert_eq!(truncate_to_width("Hello", 0), "…");
        assert_eq!(truncate_to_width("Hello", 1), "…");
        assert_eq!(truncate_to_width("", 3), "");
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        let lines = wrap_to_width("Founded a personalized clothing brand", 16);
        assert_eq!(lines, vec!["Founded a", "personalized", "clothing brand"]);
    }

    #[test]
    fn test_wrap_keeps_long_word_whole() {
        let lines = wrap_to_width("see https://www.linkedin.com/in/someone", 10);
        assert_eq!(lines, vec!["see", "https://www.linkedin.com/in/someone"]);
    }

    #[test]
    fn test_wrap_zero_width_disables() {
        assert_eq!(wrap_to_width("a b c", 0), vec!["a b c"]);
    }

    #[test]
    fn test_wrap_empty_text() {
        assert_eq!(wrap_to_width("", 20), vec![""]);
    }

    #[test]
    fn test_wrap_counts_wide_chars() {
        // each "你好" is four columns wide
        let lines = wrap_to_width("你好 你好 你好", 9);
        assert_eq!(lines, vec!["你好 你好", "你好"]);
    }
}
