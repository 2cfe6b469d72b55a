//! Greedy word-wrap for cover page text.

/// Wrap `text` into lines no wider than `max_width` points.
///
/// Greedy line-fill: words are taken in order and appended to the current
/// line (each followed by a trailing space) until the measured candidate
/// exceeds `max_width`, at which point the accumulated line is committed and
/// the word starts a new one. The final accumulator is always committed, so
/// empty input yields exactly one empty line; downstream vertical spacing
/// depends on that. A single word wider than `max_width` is never split.
///
/// `metric` measures a string at a font size in the same units as
/// `max_width` (see [`super::FontMetrics::string_width`]).
pub fn wrap_text<F>(text: &str, max_width: f32, metric: F, font_size: f32) -> Vec<String>
where
    F: Fn(&str, f32) -> f32,
{
    let mut lines = Vec::new();
    let mut line = String::new();

    for (n, word) in text.split(' ').enumerate() {
        let candidate = format!("{line}{word} ");
        if metric(&candidate, font_size) > max_width && n > 0 {
            lines.push(line);
            line = format!("{word} ");
        } else {
            line = candidate;
        }
    }

    lines.push(line);
    lines
}
