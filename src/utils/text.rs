//! Text layout utilities.
//!
//! Helpers for fitting prose into terminal columns. Widths are measured in
//! chars, which matches how the page content is authored.

/// Word-wrap `text` to lines of at most `width` chars. Words longer than the
/// width are split. Explicit newlines are kept.
///
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_len = 0;
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > width {
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let rest = word.split_off(width);
                lines.push(word.into_iter().collect());
                word = rest;
            }
            let needed = if current_len == 0 {
                word.len()
            } else {
                current_len + 1 + word.len()
            };
            if needed > width {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.extend(word.iter());
            current_len += word.len();
        }
        lines.push(current);
    }
    lines
}

/// Cut `text` to at most `width` chars, marking the cut with an ellipsis.
///
pub fn truncate(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_breaks_on_words() {
        assert_eq!(
            wrap("practical software mindset", 12),
            vec!["practical", "software", "mindset"]
        );
        assert_eq!(wrap("a b c d", 3), vec!["a b", "c d"]);
    }

    #[test]
    fn test_wrap_counts_chars_not_bytes() {
        let lines = wrap("Łódź Łódź Łódź", 9);
        assert_eq!(lines, vec!["Łódź Łódź", "Łódź"]);
    }

    #[test]
    fn test_wrap_splits_long_words_and_keeps_newlines() {
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap("one\n\ntwo", 10), vec!["one", "", "two"]);
        assert_eq!(wrap("", 10), vec![""]);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("portfolio", 20), "portfolio");
        assert_eq!(truncate("portfolio", 5), "port…");
        assert_eq!(truncate("portfolio", 0), "");
    }
}
