//! Plain aligned-column table rendering

use console::{measure_text_width, pad_str, truncate_str, Alignment};

const COLUMN_GAP: &str = "  ";

/// Column layout
#[derive(Debug, Clone)]
pub struct Column {
    /// Header text (may be empty)
    pub header: String,
    /// Column is padded to at least this width
    pub min_width: usize,
    /// Cells wider than this are truncated with `...`
    pub max_width: Option<usize>,
}

impl Column {
    /// Column sized to its contents
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            min_width: 0,
            max_width: None,
        }
    }

    /// Set the minimum width
    pub fn min_width(mut self, width: usize) -> Self {
        self.min_width = width;
        self
    }

    /// Set the maximum width
    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    fn fit(&self, cell: &str) -> String {
        match self.max_width {
            Some(max) => truncate_str(cell, max, "...").into_owned(),
            None => cell.to_string(),
        }
    }
}

/// Render a header line plus one line per row, columns left-aligned.
///
/// Widths are measured in terminal columns, so wide characters line up. Trailing
/// whitespace is trimmed from every line. Rows shorter than `columns` get empty cells.
///
/// # Examples
///
/// ```
/// use bytecode_diff::report::table::{render, Column};
///
/// let columns = [Column::new("NAME"), Column::new("SIZE")];
/// let rows = vec![vec!["Foo".to_string(), "+1".to_string()]];
/// assert_eq!(render(&columns, &rows), "NAME  SIZE\nFoo   +1");
/// ```
pub fn render(columns: &[Column], rows: &[Vec<String>]) -> String {
    let fitted: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .enumerate()
                .map(|(i, column)| column.fit(row.get(i).map(String::as_str).unwrap_or("")))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            fitted
                .iter()
                .map(|row| measure_text_width(&row[i]))
                .chain([measure_text_width(&column.header), column.min_width])
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<String> = columns.iter().map(|column| column.header.clone()).collect();

    std::iter::once(&header)
        .chain(fitted.iter())
        .map(|cells| render_line(cells, &widths))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_line(cells: &[String], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad_str(cell, *width, Alignment::Left, None).into_owned())
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    line.trim_end().to_string()
}
