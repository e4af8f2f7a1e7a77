//! Report generation for comparison results
//!
//! - [`formatter`] turns a comparison into rows, warnings and JSON
//! - [`table`] lays rows out in aligned columns
//! - [`sink`] decides where the text ends up

pub mod formatter;
pub mod sink;
pub mod table;

pub use formatter::{DisplayRow, JsonReport, ReportFormatter, DEFAULT_NAME_WIDTH};
pub use sink::{ConsoleSink, MemorySink, ReportEvent, ReportSink, StreamSink};
