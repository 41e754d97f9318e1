//! Readers that turn raw inputs into numeric column values.
//!
//! Only CSV is supported today. New formats get their own module and expose
//! the same `extract(source) -> Vec<f64>` shape.

pub mod csv;
