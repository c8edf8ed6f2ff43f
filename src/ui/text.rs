use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Greedy word wrap by display width. Words wider than `width` are split at
/// grapheme boundaries. Always returns at least one line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in text.split_word_bounds() {
        let word_width = word.width();
        if word.trim().is_empty() {
            if line_width > 0 && line_width + word_width <= width {
                line.push_str(word);
                line_width += word_width;
            }
            continue;
        }

        if line_width + word_width > width && line_width > 0 {
            lines.push(finish(&mut line));
            line_width = 0;
        }

        if word_width <= width {
            line.push_str(word);
            line_width += word_width;
            continue;
        }

        for grapheme in word.graphemes(true) {
            let grapheme_width = grapheme.width();
            if line_width + grapheme_width > width && line_width > 0 {
                lines.push(finish(&mut line));
                line_width = 0;
            }
            line.push_str(grapheme);
            line_width += grapheme_width;
        }
    }

    if line_width > 0 || lines.is_empty() {
        lines.push(finish(&mut line));
    }
    lines
}

/// Cuts `text` to `width` display columns, ending with `…` when shortened.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let grapheme_width = grapheme.width();
        if used + grapheme_width > width - 1 {
            break;
        }
        out.push_str(grapheme);
        used += grapheme_width;
    }
    out.push('…');
    out
}

pub fn display_width(text: &str) -> usize {
    text.width()
}

fn finish(line: &mut String) -> String {
    let done = line.trim_end().to_string();
    line.clear();
    done
}

#[cfg(test)]
mod tests {
    use super::{truncate, wrap};

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(
            wrap("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn splits_words_longer_than_the_width() {
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn counts_wide_characters_by_display_width() {
        assert_eq!(wrap("日本語日本語日本", 6), vec!["日本語", "日本語", "日本"]);
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        assert_eq!(wrap("", 10), vec![String::new()]);
    }

    #[test]
    fn truncate_adds_ellipsis_only_when_needed() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("presentation", 6), "prese…");
        assert_eq!(truncate("anything", 0), "");
    }
}
