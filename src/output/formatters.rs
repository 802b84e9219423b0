//! Formatting utilities for terminal output

/// Draw the letters as a text honeycomb, center in the middle row
///
/// Expects six outer letters; fewer leave blanks in the hive.
#[must_use]
pub fn honeycomb_lines(center: char, outer: &[char]) -> [String; 3] {
    let cell = |i: usize| outer.get(i).copied().unwrap_or(' ');
    [
        format!("   {}   {}", cell(0), cell(1)),
        format!(" {}  [{}]  {}", cell(2), center, cell(3)),
        format!("   {}   {}", cell(4), cell(5)),
    ]
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Heuristic score as a bar; a perfectly balanced puzzle scores 240
#[must_use]
pub fn score_bar(score: f64, width: usize) -> String {
    let max_score = 240.0;
    create_progress_bar(score, max_score, width)
}
