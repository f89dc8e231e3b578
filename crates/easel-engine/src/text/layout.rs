/// One line produced by [`wrap_text`], ready to be painted at `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidLine {
    pub text: String,
    pub y: f32,
}

/// Optional wrapping box for [`wrap_text`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextBox {
    pub max_width: f32,
    /// `None` leaves the box open at the bottom.
    pub max_height: Option<f32>,
}

/// Breaks `text` into baseline-positioned lines.
///
/// Rules:
/// - tabs become two spaces, `\n` starts a new paragraph
/// - with a box, the first baseline sits one `leading` below `y`, and a word
///   that would push the line's measured width (trailing space included)
///   past `max_width` starts a new line
/// - words whose line would start below `y + max_height` are dropped
/// - each paragraph ends with its pending line; `y` advances by `leading`
///   after every emitted line
///
/// Emitted text has its trailing separator trimmed.
pub fn wrap_text<F>(text: &str, y: f32, bounds: Option<TextBox>, leading: f32, measure: F) -> Vec<LaidLine>
where
    F: Fn(&str) -> f32,
{
    let mut y = y;
    let mut bottom = None;
    if let Some(b) = bounds {
        y += leading;
        bottom = b.max_height.map(|h| h + y);
    }

    let text = text.replace('\t', "  ");
    let mut out = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();

        for word in paragraph.split(' ') {
            if bottom.is_some_and(|bottom| y + leading > bottom) {
                continue;
            }
            let candidate = format!("{line}{word} ");
            let too_wide = bounds.is_some_and(|b| measure(&candidate) > b.max_width);
            if too_wide && !line.is_empty() {
                out.push(LaidLine { text: line.trim_end().to_string(), y });
                line = format!("{word} ");
                y += leading;
            } else {
                line = candidate;
            }
        }

        out.push(LaidLine { text: line.trim_end().to_string(), y });
        y += leading;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // Ten pixels per character, trailing space included.
    fn mono(s: &str) -> f32 {
        s.chars().count() as f32 * 10.0
    }

    fn texts(lines: &[LaidLine]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn unbounded_single_line() {
        let lines = wrap_text("hello world", 20.0, None, 15.0, mono);
        assert_eq!(lines, vec![LaidLine { text: "hello world".into(), y: 20.0 }]);
    }

    #[test]
    fn newlines_start_paragraphs() {
        let lines = wrap_text("a\nb", 0.0, None, 10.0, mono);
        assert_eq!(texts(&lines), vec!["a", "b"]);
        assert_eq!(lines[1].y, 10.0);
    }

    #[test]
    fn tabs_expand_to_two_spaces() {
        let lines = wrap_text("a\tb", 0.0, None, 10.0, mono);
        assert_eq!(lines[0].text, "a  b");
    }

    #[test]
    fn wraps_at_width_and_shifts_first_baseline() {
        // "aa bb " is 60 px wide; the box is 50.
        let bounds = TextBox { max_width: 50.0, max_height: None };
        let lines = wrap_text("aa bb cc", 0.0, Some(bounds), 10.0, mono);
        assert_eq!(texts(&lines), vec!["aa", "bb", "cc"]);
        assert_eq!(lines.iter().map(|l| l.y).collect::<Vec<_>>(), vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn overlong_first_word_does_not_emit_blank_line() {
        let bounds = TextBox { max_width: 20.0, max_height: None };
        let lines = wrap_text("abcdef gh", 0.0, Some(bounds), 10.0, mono);
        assert_eq!(texts(&lines), vec!["abcdef", "gh"]);
    }

    #[test]
    fn words_below_the_box_are_dropped() {
        let bounds = TextBox { max_width: 30.0, max_height: Some(15.0) };
        // Baselines start at 10 and the box bottom is 25: no line may start past 20.
        let lines = wrap_text("aa bb cc dd", 0.0, Some(bounds), 10.0, mono);
        assert_eq!(texts(&lines)[0], "aa");
        assert!(lines.iter().all(|l| !l.text.contains("dd")));
    }
}
