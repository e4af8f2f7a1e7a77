//! Comparison report shaping and output
//!
//! Turns a [`ComparisonResult`] into display rows, a rendered table and warning lines,
//! and hands them to a [`ReportSink`].

use serde::Serialize;
use std::path::Path;

use super::sink::ReportSink;
use super::table::{self, Column};
use crate::compare::{CompareOptions, ComparisonResult, FileDiff};
use crate::fmt::{format_gas_delta, format_signed, to_json_string};

/// Contract names are truncated beyond this many columns
pub const DEFAULT_NAME_WIDTH: usize = 30;

/// One table row, already formatted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// Artifact file name (truncated on render)
    pub name: String,
    /// Gas delta wording, e.g. `200 more gas` or `Same`
    pub gas: String,
    /// Signed deployed-code delta in bytes
    pub deployed_bytes: String,
    /// Signed constructor-code delta in bytes
    pub init_bytes: String,
}

impl DisplayRow {
    /// Format one diff
    pub fn from_diff(diff: &FileDiff) -> Self {
        Self {
            name: diff.name.clone(),
            gas: format_gas_delta(diff.gas_cost()),
            deployed_bytes: format_signed(diff.deployed_code_bytes),
            init_bytes: format_signed(diff.init_code_bytes),
        }
    }

    fn into_cells(self) -> Vec<String> {
        vec![self.name, self.gas, self.deployed_bytes, self.init_bytes]
    }
}

/// Machine-readable form of a comparison
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    /// Every successful diff, unchanged ones included
    pub diffs: Vec<JsonDiff<'a>>,
    /// Files only in the old directory
    pub only_old: &'a [String],
    /// Files only in the new directory
    pub only_new: &'a [String],
    /// Files missing a code field
    pub incomparable: &'a [String],
    /// Files that could not be read or parsed
    pub failed: &'a [String],
}

/// One diff in a [`JsonReport`]
#[derive(Debug, Serialize)]
pub struct JsonDiff<'a> {
    /// Artifact file name
    pub name: &'a str,
    /// Constructor-code delta in bytes
    pub init_code_bytes: i64,
    /// Deployed-code delta in bytes
    pub deployed_code_bytes: i64,
    /// Deployment gas delta
    pub gas_cost: i64,
}

impl<'a> JsonReport<'a> {
    /// Borrow a comparison result
    pub fn new(result: &'a ComparisonResult) -> Self {
        Self {
            diffs: result
                .diffs
                .iter()
                .map(|diff| JsonDiff {
                    name: &diff.name,
                    init_code_bytes: diff.init_code_bytes,
                    deployed_code_bytes: diff.deployed_code_bytes,
                    gas_cost: diff.gas_cost(),
                })
                .collect(),
            only_old: &result.only_old,
            only_new: &result.only_new,
            incomparable: &result.incomparable,
            failed: &result.failed,
        }
    }
}

/// Shapes comparison results for display
#[derive(Debug, Clone)]
pub struct ReportFormatter {
    suppress_same: bool,
    warnings: bool,
    name_width: usize,
}

impl ReportFormatter {
    /// Formatter honoring the display flags in `options`
    pub fn new(options: &CompareOptions) -> Self {
        Self {
            suppress_same: options.suppress_same,
            warnings: options.warnings,
            name_width: DEFAULT_NAME_WIDTH,
        }
    }

    /// Override the name column width
    pub fn with_name_width(mut self, width: usize) -> Self {
        self.name_width = width;
        self
    }

    /// Display rows in result order.
    ///
    /// With `suppress_same`, a diff is hidden only when both its init and deployed
    /// deltas are zero.
    pub fn rows(&self, result: &ComparisonResult) -> Vec<DisplayRow> {
        result
            .diffs
            .iter()
            .filter(|diff| !(self.suppress_same && diff.is_unchanged()))
            .map(DisplayRow::from_diff)
            .collect()
    }

    /// Render rows as an aligned table, or `None` when there is nothing to show
    pub fn render_table(&self, rows: &[DisplayRow]) -> Option<String> {
        if rows.is_empty() {
            return None;
        }

        let columns = [
            Column::new("").max_width(self.name_width),
            Column::new("RUNTIME GAS").min_width(16),
            Column::new("RUNTIME BYTES").min_width(18),
            Column::new("INITIALIZATION BYTES"),
        ];
        let cells: Vec<Vec<String>> = rows.iter().cloned().map(DisplayRow::into_cells).collect();

        Some(table::render(&columns, &cells))
    }

    /// Warning lines about files present on one side only.
    ///
    /// Empty when warnings are disabled or nothing is orphaned.
    pub fn orphan_warnings(
        &self,
        result: &ComparisonResult,
        old_dir: &Path,
        new_dir: &Path,
    ) -> Vec<String> {
        if !self.warnings || !result.has_orphans() {
            return Vec::new();
        }

        let mut lines = vec![
            "Warning: could not compare some contracts that might have been renamed or removed"
                .to_string(),
        ];
        if !result.only_old.is_empty() {
            lines.push(format!(
                "  Missing from {}: {}",
                new_dir.display(),
                result.only_old.join(", ")
            ));
        }
        if !result.only_new.is_empty() {
            lines.push(format!(
                "  Missing from {}: {}",
                old_dir.display(),
                result.only_new.join(", ")
            ));
        }
        lines
    }

    /// Write the table (if any rows survive) and then the orphan warnings
    pub fn emit(
        &self,
        result: &ComparisonResult,
        old_dir: &Path,
        new_dir: &Path,
        sink: &dyn ReportSink,
    ) {
        if let Some(table) = self.render_table(&self.rows(result)) {
            sink.table(&table);
        }
        for line in self.orphan_warnings(result, old_dir, new_dir) {
            sink.warning(&line);
        }
    }

    /// Write the result as a JSON document, followed by the orphan warnings
    pub fn emit_json(
        &self,
        result: &ComparisonResult,
        old_dir: &Path,
        new_dir: &Path,
        sink: &dyn ReportSink,
    ) {
        sink.document(&to_json_string(&JsonReport::new(result)));
        for line in self.orphan_warnings(result, old_dir, new_dir) {
            sink.warning(&line);
        }
    }
}
