//! Statistical operations and their reducers.
//!
//! Each `Operation` maps to a pure function over a slice of values. Reducers
//! never fail: the average of an empty slice is NaN.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Reducer signature shared by every operation.
pub type Reducer = fn(&[f64]) -> f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    #[default]
    Sum,
    Avg,
}

impl Operation {
    /// Stable name as accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Sum => "sum",
            Operation::Avg => "avg",
        }
    }

    pub fn reducer(&self) -> Reducer {
        match self {
            Operation::Sum => sum,
            Operation::Avg => avg,
        }
    }

    pub fn reduce(&self, data: &[f64]) -> f64 {
        (self.reducer())(data)
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sum" => Ok(Operation::Sum),
            "avg" => Ok(Operation::Avg),
            other => Err(Error::InvalidOperation(other.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn sum(data: &[f64]) -> f64 {
    // Seeded with +0.0: an empty sum is `0`, never `-0`.
    data.iter().fold(0.0, |acc, v| acc + v)
}

pub fn avg(data: &[f64]) -> f64 {
    sum(data) / data.len() as f64
}
