//! Export functionality for game trees and solver runs
//!
//! Supports nested JSON and a collapsible HTML viewer for trees, and CSV
//! traces of per-pass solver statistics.

mod html;
mod json;
mod trace_csv;

pub use html::{render_html, write_html};
pub use json::{NodeView, to_json_string, write_json};
pub use trace_csv::{TraceRow, trace_rows, write_trace_csv};
