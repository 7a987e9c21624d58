//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

/// Plain-text table whose column widths follow the widest cell.
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Rows shorter than the header list render with empty trailing cells.
    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        render_line(&mut out, &self.headers, &widths);
        for row in &self.rows {
            render_line(&mut out, row, &widths);
        }

        out
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(cell.width());
            }
        }
        widths
    }
}

fn render_line(out: &mut String, cells: &[String], widths: &[usize]) {
    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        // Pad by display width so wide glyphs keep the columns aligned.
        let pad = width.saturating_sub(cell.width());
        out.push_str(cell);
        out.push_str(&" ".repeat(pad));
        if i + 1 < widths.len() {
            out.push_str("  ");
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');
}
