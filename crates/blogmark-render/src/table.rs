//! Table rendering.
//!
//! Columns share the available width evenly. The header row sits on the mid
//! background with a rule below it; body rows sit on the dark background.
//! Rows are drawn with as many cells as they have, so a short or long row
//! simply ends early or runs past the header.

use blogmark_ansi::codes::RESET;
use blogmark_ansi::utils::pad_to;

use crate::node::InlineLine;
use crate::text::wrap_inline;
use crate::{bg_color, fg_color, RenderStyle};

/// Minimum column content width.
const MIN_COL_WIDTH: usize = 8;

/// Column layout of one table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableState {
    /// Content width of each column, without padding.
    pub column_widths: Vec<usize>,
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split `available_width` evenly over `num_cols` columns.
    ///
    /// Each column carries one space of padding on both sides and columns are
    /// separated by a one-character rule. Leftover columns go to the leftmost
    /// columns. No column is narrower than the minimum width.
    pub fn calculate_widths(&mut self, num_cols: usize, available_width: usize) {
        if num_cols == 0 {
            self.column_widths.clear();
            return;
        }

        let chrome = num_cols * 2 + (num_cols - 1);
        let content = available_width.saturating_sub(chrome);
        let base = content / num_cols;
        let extra = content % num_cols;

        self.column_widths = (0..num_cols)
            .map(|i| {
                let width = if i < extra { base + 1 } else { base };
                width.max(MIN_COL_WIDTH)
            })
            .collect();
    }

    pub fn num_columns(&self) -> usize {
        self.column_widths.len()
    }

    /// Width of a full row including padding and separators.
    pub fn total_width(&self) -> usize {
        let n = self.num_columns();
        let content: usize = self.column_widths.iter().sum();
        content + n * 2 + n.saturating_sub(1)
    }

    fn width_of(&self, col: usize) -> usize {
        self.column_widths.get(col).copied().unwrap_or(MIN_COL_WIDTH)
    }
}

/// Render a table as terminal lines.
pub fn render_table(
    headers: &[InlineLine],
    rows: &[Vec<InlineLine>],
    width: usize,
    left_margin: &str,
    style: &RenderStyle,
) -> Vec<String> {
    let num_cols = rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(headers.len()))
        .max()
        .unwrap_or(0);

    let mut state = TableState::new();
    state.calculate_widths(num_cols, width);

    let mut lines = Vec::new();
    if !headers.is_empty() {
        lines.extend(render_row(headers, &state, left_margin, &bg_color(&style.mid), style));
        lines.push(format!(
            "{}{}{}{}",
            left_margin,
            fg_color(&style.grey),
            "─".repeat(state.total_width()),
            RESET
        ));
    }

    let bg = bg_color(&style.dark);
    for row in rows {
        lines.extend(render_row(row, &state, left_margin, &bg, style));
    }

    lines
}

/// Render one row; cells wrap within their column and the row grows to the tallest cell.
fn render_row(
    cells: &[InlineLine],
    state: &TableState,
    left_margin: &str,
    bg: &str,
    style: &RenderStyle,
) -> Vec<String> {
    if cells.is_empty() {
        return vec![left_margin.to_string()];
    }

    let wrapped: Vec<Vec<String>> = cells
        .iter()
        .enumerate()
        .map(|(i, cell)| wrap_inline(cell, state.width_of(i), style))
        .collect();
    let height = wrapped.iter().map(Vec::len).max().unwrap_or(1);
    let separator = format!("{}{}│", RESET, fg_color(&style.symbol));

    (0..height)
        .map(|row| {
            let parts: Vec<String> = wrapped
                .iter()
                .enumerate()
                .map(|(col, lines)| {
                    let content = lines.get(row).map(String::as_str).unwrap_or("");
                    // Re-apply the row background after inline resets.
                    format!("{} {}{} ", bg, pad_to(content, state.width_of(col)), bg)
                })
                .collect();
            format!("{}{}{}", left_margin, parts.join(&separator), RESET)
        })
        .collect()
}
