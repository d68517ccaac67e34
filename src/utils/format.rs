use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const ELLIPSIS: &str = "...";

pub fn text_width(value: &str) -> usize {
    UnicodeWidthStr::width(value)
}

/// Cut `value` to `max_len` display cells, marking the cut with `...`.
///
/// Below the marker's own width there is no room for it, so the text is
/// cut hard instead.
pub fn fit_text(value: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }
    if text_width(value) <= max_len {
        return value.to_string();
    }
    if max_len < ELLIPSIS.len() {
        return take_width(value, max_len);
    }
    let mut trimmed = take_width(value, max_len - ELLIPSIS.len());
    trimmed.push_str(ELLIPSIS);
    trimmed
}

pub fn take_width(value: &str, max_len: usize) -> String {
    let mut output = String::new();
    let mut width = 0;
    for ch in value.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width > max_len {
            break;
        }
        output.push(ch);
        width += ch_width;
    }
    output
}

pub fn pad_to_width(value: &str, width: usize) -> String {
    let fill = width.saturating_sub(text_width(value));
    let mut output = String::with_capacity(value.len() + fill);
    output.push_str(value);
    output.extend(std::iter::repeat_n(' ', fill));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_width_counts_display_cells() {
        assert_eq!(text_width("Не найдено"), 10);
        assert_eq!(text_width("表"), 2);
    }

    #[test]
    fn fit_text_trims_by_display_width() {
        assert_eq!(fit_text("表表表", 5), "表...");
        assert_eq!(fit_text("kworker/0:1H", 8), "kwork...");
    }

    #[test]
    fn fit_text_without_room_for_marker_cuts_hard() {
        assert_eq!(fit_text("abcdef", 2), "ab");
        assert_eq!(fit_text("abcdef", 0), "");
    }

    #[test]
    fn fit_text_marker_fills_narrow_widths() {
        assert_eq!(fit_text("abcdef", 3), "...");
        assert_eq!(fit_text("abcdef", 4), "a...");
        assert_eq!(fit_text("abc", 3), "abc");
    }

    #[test]
    fn pad_to_width_fills_with_spaces() {
        assert_eq!(pad_to_width("ab", 5), "ab   ");
        assert_eq!(pad_to_width("abcdef", 3), "abcdef");
        assert_eq!(pad_to_width("表", 3), "表 ");
    }
}
