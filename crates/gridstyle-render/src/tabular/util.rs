//! ANSI-aware text measurement, truncation, padding and wrapping.
//!
//! Escape sequences are carried through untouched but never count toward
//! display width. Wide (CJK, emoji) characters count as two columns.

use console::{measure_text_width, pad_str, Alignment};
use unicode_width::UnicodeWidthChar;

/// Returns the display width of a string, ignoring ANSI escape codes.
///
/// ```rust
/// use gridstyle_render::tabular::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Truncates a string from the end to fit within `max_width` columns,
/// appending `ellipsis` when anything was cut.
///
/// ```rust
/// use gridstyle_render::tabular::truncate_end;
///
/// assert_eq!(truncate_end("Hello World", 8, "…"), "Hello W…");
/// assert_eq!(truncate_end("Short", 10, "…"), "Short");
/// ```
pub fn truncate_end(s: &str, max_width: usize, ellipsis: &str) -> String {
    if measure_text_width(s) <= max_width {
        return s.to_string();
    }

    let ellipsis_width = measure_text_width(ellipsis);
    if max_width <= ellipsis_width {
        return truncate_to_display_width(ellipsis, max_width);
    }

    let mut result = truncate_to_display_width(s, max_width - ellipsis_width);
    result.push_str(ellipsis);
    result
}

/// Pads on the left (right-aligns) to `width`. Never truncates.
pub fn pad_left(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Right, None).into_owned()
}

/// Pads on the right (left-aligns) to `width`. Never truncates.
pub fn pad_right(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Left, None).into_owned()
}

/// Centers within `width`; an odd leftover space goes on the right.
pub fn pad_center(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Center, None).into_owned()
}

/// Word-wraps text to lines of at most `width` columns.
///
/// Words wider than `width` are hard-split. Embedded newlines start new
/// lines. Runs of spaces between words collapse to one.
///
/// ```rust
/// use gridstyle_render::tabular::wrap;
///
/// assert_eq!(wrap("hello world foo bar", 11), vec!["hello world", "foo bar"]);
/// assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
/// ```
pub fn wrap(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![s.to_string()];
    }

    let mut lines = Vec::new();
    for paragraph in s.split('\n') {
        let first_line = lines.len();
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split(' ').filter(|word| !word.is_empty()) {
            let mut word = word.to_string();
            let mut word_width = measure_text_width(&word);

            while word_width > width {
                if line_width > 0 {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                let head = split_head(&word, width);
                word = word[head.len()..].to_string();
                word_width = measure_text_width(&word);
                lines.push(head);
            }
            if word_width == 0 {
                continue;
            }

            if line_width == 0 {
                line = word;
                line_width = word_width;
            } else if line_width + 1 + word_width <= width {
                line.push(' ');
                line.push_str(&word);
                line_width += 1 + word_width;
            } else {
                lines.push(std::mem::replace(&mut line, word));
                line_width = word_width;
            }
        }

        if line_width > 0 || lines.len() == first_line {
            lines.push(line);
        }
    }
    lines
}

/// Longest prefix of `word` fitting in `width`, at least one character.
fn split_head(word: &str, width: usize) -> String {
    let head = truncate_to_display_width(word, width);
    if measure_text_width(&head) > 0 {
        return head;
    }
    // A single character wider than the column still has to go somewhere.
    let mut end = head.len();
    if let Some(c) = word[end..].chars().next() {
        end += c.len_utf8();
    }
    word[..end].to_string()
}

/// Keeps characters from the start until `max_width` columns are filled.
/// Escape sequences are copied whole.
pub(crate) fn truncate_to_display_width(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if measure_text_width(s) <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let mut in_escape = false;

    for c in s.chars() {
        if c == '\x1b' {
            result.push(c);
            in_escape = true;
            continue;
        }

        if in_escape {
            result.push(c);
            // CSI sequences end with a letter or '~'
            if c.is_ascii_alphabetic() || c == '~' {
                in_escape = false;
            }
            continue;
        }

        let char_width = UnicodeWidthChar::width(c).unwrap_or(0);
        if current_width + char_width > max_width {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- display_width ---

    #[test]
    fn display_width_ascii() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn display_width_ansi() {
        assert_eq!(display_width("\x1b[1;32mbold green\x1b[0m"), 10);
        assert_eq!(display_width("\x1b[38;5;196mcolor\x1b[0m"), 5);
    }

    #[test]
    fn display_width_unicode() {
        assert_eq!(display_width("日本語"), 6);
        assert_eq!(display_width("café"), 4);
    }

    // --- truncate_end ---

    #[test]
    fn truncate_end_basic() {
        assert_eq!(truncate_end("hello world", 8, "…"), "hello w…");
        assert_eq!(truncate_end("hello world", 8, "..."), "hello...");
    }

    #[test]
    fn truncate_end_exact_fit() {
        assert_eq!(truncate_end("hello", 5, "…"), "hello");
    }

    #[test]
    fn truncate_end_tiny_width() {
        assert_eq!(truncate_end("hello", 1, "…"), "…");
        assert_eq!(truncate_end("hello", 0, "…"), "");
        assert_eq!(truncate_end("hello", 2, "..."), "..");
    }

    #[test]
    fn truncate_end_ansi() {
        let styled = "\x1b[31mhello world\x1b[0m";
        let result = truncate_end(styled, 8, "…");
        assert_eq!(display_width(&result), 8);
        assert!(result.starts_with("\x1b[31m"));
    }

    #[test]
    fn truncate_end_cjk() {
        assert_eq!(truncate_end("日本語テスト", 7, "…"), "日本語…");
    }

    // --- padding ---

    #[test]
    fn padding() {
        assert_eq!(pad_left("42", 5), "   42");
        assert_eq!(pad_right("42", 5), "42   ");
        assert_eq!(pad_center("hi", 5), " hi  ");
        assert_eq!(pad_right("hello", 3), "hello");
    }

    #[test]
    fn padding_ignores_ansi() {
        let padded = pad_right("\x1b[31mab\x1b[0m", 4);
        assert_eq!(display_width(&padded), 4);
    }

    // --- wrap ---

    #[test]
    fn wrap_words() {
        assert_eq!(wrap("the quick brown fox", 10), vec!["the quick", "brown fox"]);
    }

    #[test]
    fn wrap_fits_on_one_line() {
        assert_eq!(wrap("short", 10), vec!["short"]);
    }

    #[test]
    fn wrap_splits_long_words() {
        assert_eq!(wrap("ab abcdefg", 3), vec!["ab", "abc", "def", "g"]);
    }

    #[test]
    fn wrap_keeps_newlines() {
        assert_eq!(wrap("a\n\nb", 5), vec!["a", "", "b"]);
    }

    #[test]
    fn wrap_empty() {
        assert_eq!(wrap("", 5), vec![""]);
    }

    #[test]
    fn wrap_wide_char_in_narrow_column() {
        assert_eq!(wrap("日本", 1), vec!["日", "本"]);
    }

    #[test]
    fn wrapped_lines_fit() {
        for line in wrap("dirty-ground-vegetable with a long tail", 6) {
            assert!(display_width(&line) <= 6, "{:?}", line);
        }
    }
}
