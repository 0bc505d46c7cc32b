//! Formatting utilities for terminal output

use crate::core::WinLine;

/// Fit cell text into `width` columns, eliding with `…` when too long
#[must_use]
pub fn fit_cell(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        format!("{text:<width$}")
    } else if width == 0 {
        String::new()
    } else {
        let kept: String = text.chars().take(width - 1).collect();
        format!("{kept}…")
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Human list of completed lines, e.g. "row 1, diagonal"
#[must_use]
pub fn describe_lines(lines: &[WinLine]) -> String {
    lines
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_cell_pads_short_text() {
        assert_eq!(fit_cell("Bridge", 8), "Bridge  ");
    }

    #[test]
    fn fit_cell_elides_long_text() {
        assert_eq!(fit_cell("Local Language Sign", 8), "Local L…");
        assert_eq!(fit_cell("Local Language Sign", 8).chars().count(), 8);
    }

    #[test]
    fn fit_cell_zero_width() {
        assert_eq!(fit_cell("anything", 0), "");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 25, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(25, 25, 10), "██████████");
    }

    #[test]
    fn progress_bar_partial() {
        assert_eq!(create_progress_bar(5, 25, 10), "██░░░░░░░░");
    }

    #[test]
    fn describe_multiple_lines() {
        let text = describe_lines(&[WinLine::Row(0), WinLine::Column(4), WinLine::MainDiagonal]);
        assert_eq!(text, "row 1, column 5, diagonal");
    }
}
