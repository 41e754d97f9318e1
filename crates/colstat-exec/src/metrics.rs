//! Run-level metrics emitted through `tracing`.
//!
//! No exporter lives here; the binary decides where the events go.

use colstat_core::RunSummary;

pub fn emit_span(event: &str, key_values: &[(&str, String)]) {
    let span = tracing::trace_span!("colstat", event);
    let _guard = span.enter();
    for (k, v) in key_values {
        tracing::trace!(%event, %k, %v, "metric");
    }
}

/// Key/value pairs describing a finished run.
pub fn summary_metrics(summary: &RunSummary) -> Vec<(&'static str, String)> {
    vec![
        ("operation", summary.operation.to_string()),
        ("column", summary.column.to_string()),
        ("files", summary.files.to_string()),
        ("rows", summary.rows.to_string()),
        ("duration_ms", summary.duration_ms().to_string()),
    ]
}
