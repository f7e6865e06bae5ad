//! Line clamping for fixed-height card fields.

use super::width::truncate_to_width;

/// Wrap `text` to `width` cells and keep at most `max_lines` lines.
///
/// When text is cut the last kept line ends in "...". Empty text yields no
/// lines.
pub fn clamp_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = textwrap::wrap(text, width)
        .into_iter()
        .map(std::borrow::Cow::into_owned)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            *last = truncate_to_width(&format!("{last}..."), width);
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_single_line() {
        assert_eq!(clamp_lines("Back pain", 20, 2), vec!["Back pain"]);
    }

    #[test]
    fn test_wraps_within_limit() {
        assert_eq!(
            clamp_lines("Refer to physio now", 10, 3),
            vec!["Refer to", "physio now"]
        );
    }

    #[test]
    fn test_clamped_text_gets_ellipsis() {
        let lines = clamp_lines("one two three four five six", 9, 2);
        assert_eq!(lines, vec!["one two", "three..."]);
    }

    #[test]
    fn test_ellipsis_fits_width() {
        let lines = clamp_lines("aaaaaaaa bbbbbbbb cccccccc", 8, 2);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "bbbbb...");
    }

    #[test]
    fn test_empty_inputs() {
        assert!(clamp_lines("", 10, 2).is_empty());
        assert!(clamp_lines("text", 0, 2).is_empty());
        assert!(clamp_lines("text", 10, 0).is_empty());
    }
}
