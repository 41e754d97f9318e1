//! Textual rendering of a computed statistic.

/// Render a value as plain decimal text.
///
/// Finite values use the shortest round-tripping decimal form (`300`, `0.25`).
/// Non-finite values render as `+Inf`, `-Inf` and `NaN`.
pub fn format_value(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_infinite() {
        let text = if v.is_sign_positive() { "+Inf" } else { "-Inf" };
        text.to_string()
    } else {
        format!("{}", v)
    }
}
