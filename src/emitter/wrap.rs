//! Greedy word wrapping for comment text
//!
//! Breaks happen only at whitespace. Runs of whitespace inside a line collapse to a
//! single space, newlines in the input are kept as hard breaks, and a word longer
//! than the width is placed alone on its own line rather than split.

/// Wrap `text` into lines of at most `width` characters.
///
/// Widths are counted in `char`s. A width of zero is treated as one. Trailing
/// newlines in `text` do not produce trailing empty lines.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.trim_end_matches('\n').split('\n') {
        let mut current = String::new();
        let mut current_len = 0;

        for word in paragraph.split_whitespace() {
            let word_len = word.chars().count();
            if current.is_empty() {
                current.push_str(word);
                current_len = word_len;
            } else if current_len + 1 + word_len <= width {
                current.push(' ');
                current.push_str(word);
                current_len += 1 + word_len;
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_len = word_len;
            }
        }

        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_text_is_single_line() {
        assert_eq!(wrap("hello world", 80), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_breaks_at_spaces() {
        assert_eq!(
            wrap("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn test_wrap_exact_fit() {
        assert_eq!(wrap("abcd efgh", 9), vec!["abcd efgh"]);
        assert_eq!(wrap("abcd efgh", 8), vec!["abcd", "efgh"]);
    }

    #[test]
    fn test_wrap_long_word_is_not_split() {
        assert_eq!(
            wrap("a supercalifragilistic b", 5),
            vec!["a", "supercalifragilistic", "b"]
        );
    }

    #[test]
    fn test_wrap_collapses_whitespace_runs() {
        assert_eq!(wrap("a   b\tc", 80), vec!["a b c"]);
    }

    #[test]
    fn test_wrap_keeps_hard_breaks() {
        assert_eq!(wrap("one\n\ntwo\n", 80), vec!["one", "", "two"]);
    }

    #[test]
    fn test_wrap_counts_chars_not_bytes() {
        assert_eq!(wrap("ééé ééé", 7), vec!["ééé ééé"]);
    }

    #[test]
    fn test_wrap_zero_width() {
        assert_eq!(wrap("a b", 0), vec!["a", "b"]);
    }
}
