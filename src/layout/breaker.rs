use crate::{metrics::FontMetrics, LayoutParameters, TextLayoutError};
use log::{debug, trace};
use std::fmt;

/// One wrapped line: an ordered run of words, separated by single spaces when
/// rendered. A line does not carry its width; kerning and tracking make width
/// depend on the full string, so it is measured whenever it is needed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    words: Vec<String>,
}

impl Line {
    pub fn new<S: Into<String>>(words: impl IntoIterator<Item = S>) -> Line {
        Line {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The line as it will be measured and drawn
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// The words of a run of text: maximal runs of non-whitespace, in order.
/// Line breaks of any kind separate words just like spaces do
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Break `text` into lines no wider than `params.max_width()`, greedily
/// fitting as many words on each line as possible.
///
/// Explicit line breaks (`\n`, `\r\n`, or `\r`) always end a line, and words
/// are never moved across them. Blank lines produce no output. A word that is
/// wider than the maximum width all on its own is never split; it gets a line
/// to itself and overflows.
///
/// Widths are measured by `metrics` on the whole candidate line, so kerning
/// and tracking between words are accounted for. Any measurement error is
/// returned as-is.
pub fn break_lines<M: FontMetrics>(
    text: &str,
    params: &LayoutParameters,
    metrics: &M,
) -> Result<Vec<Line>, TextLayoutError> {
    // normalize newlines
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut lines: Vec<Line> = Vec::new();
    for segment in text.split('\n') {
        break_segment(segment, params, metrics, &mut lines)?;
    }

    debug!(
        "broke {} bytes of text into {} lines at max width {}",
        text.len(),
        lines.len(),
        params.max_width()
    );
    Ok(lines)
}

/// Greedily wrap one hard-broken segment, appending its lines to `lines`
fn break_segment<M: FontMetrics>(
    segment: &str,
    params: &LayoutParameters,
    metrics: &M,
    lines: &mut Vec<Line>,
) -> Result<(), TextLayoutError> {
    let spacing = params.spacing();
    let max_width = params.max_width();

    let mut current: Vec<&str> = Vec::new();
    let mut current_text = String::new();

    for word in words(segment) {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current_text} {word}")
        };
        let width = metrics.advance_width(&candidate, params.font_size(), &spacing)?;

        if width > max_width && !current.is_empty() {
            // the word doesn't fit, it starts the next line instead
            push_line(lines, &mut current);
            current.push(word);
            current_text = word.to_string();
        } else {
            if width > max_width {
                debug!("{word:?} is wider than a line on its own ({width} > {max_width})");
            }
            current.push(word);
            current_text = candidate;
        }
    }

    if !current.is_empty() {
        push_line(lines, &mut current);
    }

    Ok(())
}

fn push_line(lines: &mut Vec<Line>, current: &mut Vec<&str>) {
    let line = Line::new(current.drain(..));
    trace!("line {}: {:?}", lines.len(), line.text());
    lines.push(line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::testing::FixedAdvance;
    use crate::{FontMeasurementError, Pt};

    /// 10pt text at half an em per character: every character is 5pt wide
    fn params(max_width: f32) -> LayoutParameters {
        LayoutParameters::builder(Pt(max_width), Pt(10.0))
            .build()
            .expect("valid parameters")
    }

    fn texts(lines: &[Line]) -> Vec<String> {
        lines.iter().map(Line::text).collect()
    }

    #[test]
    fn exact_fit_stays_on_the_line() {
        // "aa bb" is exactly 25pt wide
        let lines = break_lines("aa bb cc", &params(25.0), &FixedAdvance::default())
            .expect("can break lines");
        assert_eq!(texts(&lines), vec!["aa bb", "cc"]);
    }

    #[test]
    fn one_point_less_pushes_the_word_down() {
        let lines = break_lines("aa bb cc", &params(24.0), &FixedAdvance::default())
            .expect("can break lines");
        assert_eq!(texts(&lines), vec!["aa", "bb", "cc"]);
    }

    #[test]
    fn overlong_word_gets_its_own_line() {
        let word = "supercalifragilisticexpialidocious";
        let lines =
            break_lines(word, &params(50.0), &FixedAdvance::default()).expect("can break lines");
        assert_eq!(texts(&lines), vec![word]);

        let lines = break_lines(&format!("a {word} b"), &params(50.0), &FixedAdvance::default())
            .expect("can break lines");
        assert_eq!(texts(&lines), vec!["a", word, "b"]);
    }

    #[test]
    fn overlong_last_word_is_not_dropped() {
        let lines = break_lines("aa bb cccccccccccc", &params(25.0), &FixedAdvance::default())
            .expect("can break lines");
        assert_eq!(texts(&lines), vec!["aa bb", "cccccccccccc"]);
    }

    #[test]
    fn empty_and_blank_text_produce_no_lines() {
        let metrics = FixedAdvance::default();
        assert!(break_lines("", &params(25.0), &metrics).expect("can break").is_empty());
        assert!(break_lines("  \t ", &params(25.0), &metrics).expect("can break").is_empty());
        assert!(break_lines("\n\n \n", &params(25.0), &metrics).expect("can break").is_empty());
    }

    #[test]
    fn hard_breaks_are_never_merged() {
        let lines = break_lines("Line one\nLine two", &params(1000.0), &FixedAdvance::default())
            .expect("can break lines");
        assert_eq!(texts(&lines), vec!["Line one", "Line two"]);

        let lines = break_lines("a\r\nb\rc\n\nd", &params(1000.0), &FixedAdvance::default())
            .expect("can break lines");
        assert_eq!(texts(&lines), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn runs_of_whitespace_collapse_to_single_spaces() {
        let lines = break_lines("  aa \t  bb   ", &params(1000.0), &FixedAdvance::default())
            .expect("can break lines");
        assert_eq!(texts(&lines), vec!["aa bb"]);
        assert_eq!(lines[0].words(), &["aa".to_string(), "bb".to_string()]);
    }

    #[test]
    fn whole_candidate_is_measured() {
        // "ab ab" is 25pt without kerning; tightening the "b " and " a" pairs
        // lets it fit in 23pt
        let metrics = FixedAdvance::default()
            .with_kerning(('b', ' '), -0.1)
            .with_kerning((' ', 'a'), -0.1);
        let kerned = LayoutParameters::builder(Pt(23.0), Pt(10.0))
            .kerning(true)
            .build()
            .expect("valid parameters");

        let lines = break_lines("ab ab", &kerned, &metrics).expect("can break lines");
        assert_eq!(texts(&lines), vec!["ab ab"]);

        let lines = break_lines("ab ab", &params(23.0), &metrics).expect("can break lines");
        assert_eq!(texts(&lines), vec!["ab", "ab"]);
    }

    #[test]
    fn tracking_widens_lines() {
        // 100/1000 em of tracking adds 1pt between each of the 4 gaps in "aa bb"
        let tracked = LayoutParameters::builder(Pt(25.0), Pt(10.0))
            .tracking(100.0)
            .build()
            .expect("valid parameters");
        let lines = break_lines("aa bb", &tracked, &FixedAdvance::default())
            .expect("can break lines");
        assert_eq!(texts(&lines), vec!["aa", "bb"]);
    }

    #[test]
    fn measurement_errors_propagate() {
        let metrics = FixedAdvance::default().without_glyph('x');
        match break_lines("aa xx", &params(100.0), &metrics) {
            Err(TextLayoutError::FontMeasurement(FontMeasurementError::MissingGlyph { ch })) => {
                assert_eq!(ch, 'x')
            }
            other => panic!("expected a missing glyph error, got {other:?}"),
        }
    }

    #[test]
    fn words_are_conserved() {
        let text = lipsum::lipsum(300);
        let metrics = FixedAdvance::default();
        for max_width in [20.0, 60.0, 137.5, 400.0] {
            let lines = break_lines(&text, &params(max_width), &metrics).expect("can break lines");
            let wrapped: Vec<&str> = lines
                .iter()
                .flat_map(|l| l.words().iter().map(String::as_str))
                .collect();
            let original: Vec<&str> = words(&text).collect();
            assert_eq!(wrapped, original, "max width {max_width}");
        }
    }

    #[test]
    fn multi_word_lines_fit() {
        let text = lipsum::lipsum(300);
        let metrics = FixedAdvance::default();
        for max_width in [20.0, 60.0, 137.5, 400.0] {
            let params = params(max_width);
            for line in break_lines(&text, &params, &metrics).expect("can break lines") {
                let width = metrics
                    .advance_width(&line.text(), params.font_size(), &params.spacing())
                    .expect("can measure");
                assert!(
                    line.words().len() == 1 || width <= params.max_width(),
                    "{:?} is {width} wide",
                    line.text()
                );
            }
        }
    }

    #[test]
    fn breaking_is_repeatable() {
        let text = lipsum::lipsum(120);
        let metrics = FixedAdvance::default();
        let first = break_lines(&text, &params(90.0), &metrics).expect("can break lines");
        let second = break_lines(&text, &params(90.0), &metrics).expect("can break lines");
        assert_eq!(first, second);
    }
}
