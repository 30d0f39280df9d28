//! ASCII bar charts for terminal output.
//!
//! Deliberately plain (fixed-width rows of `#`), so the output is
//! deterministic and easy to snapshot.

use crate::domain::CategoryCount;
use crate::report::format::truncate;

const MAX_LABEL_WIDTH: usize = 24;

/// Render `counts` as horizontal bars, longest bar `width` characters wide.
pub fn render_ascii_bars(title: &str, counts: &[CategoryCount], width: usize) -> String {
    let width = width.max(1);
    let mut out = format!("{title}\n");
    if counts.is_empty() {
        out.push_str("(no data)\n");
        return out;
    }

    let label_width = counts
        .iter()
        .map(|c| c.label.chars().count())
        .max()
        .unwrap_or(0)
        .min(MAX_LABEL_WIDTH);
    let max = counts.iter().map(|c| c.count).max().unwrap_or(0);

    for c in counts {
        let len = bar_len(c.count, max, width);
        let label = truncate(&c.label, label_width);
        out.push_str(&format!(
            "{label:<label_width$} | {bar:<width$} {count}\n",
            bar = "#".repeat(len),
            count = c.count,
        ));
    }
    out
}

fn bar_len(count: usize, max: usize, width: usize) -> usize {
    if max == 0 {
        return 0;
    }
    let len = (count as f64 / max as f64 * width as f64).round() as usize;
    // Non-zero counts always get at least one mark.
    if count > 0 { len.max(1) } else { 0 }
}
