//! The closed set of computations a task can perform.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::task::SetCalcError;
use crate::value::ResultKind;

/// Number of input sequences an operation consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// One input sequence.
    Unary,
    /// Two input sequences.
    Binary,
}

/// A leaf computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    Intersection,
    Union,
    Difference,
    SymmetricDifference,
    IsSubset,
    Mean,
    Median,
    Mode,
    Variance,
    StandardDeviation,
}

impl Operation {
    /// All operations, in report-declaration order.
    pub const ALL: [Self; 10] = [
        Self::Intersection,
        Self::Union,
        Self::Difference,
        Self::SymmetricDifference,
        Self::IsSubset,
        Self::Mean,
        Self::Median,
        Self::Mode,
        Self::Variance,
        Self::StandardDeviation,
    ];

    /// Short key used on the command line and in the registry.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Intersection => "intersection",
            Self::Union => "union",
            Self::Difference => "difference",
            Self::SymmetricDifference => "symmetric-difference",
            Self::IsSubset => "subset",
            Self::Mean => "mean",
            Self::Median => "median",
            Self::Mode => "mode",
            Self::Variance => "variance",
            Self::StandardDeviation => "stddev",
        }
    }

    /// Human-readable label used for report entries.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Intersection => "Intersection",
            Self::Union => "Union",
            Self::Difference => "Difference",
            Self::SymmetricDifference => "Symmetric Difference",
            Self::IsSubset => "Subset",
            Self::Mean => "Mean",
            Self::Median => "Median",
            Self::Mode => "Mode",
            Self::Variance => "Variance",
            Self::StandardDeviation => "Standard Deviation",
        }
    }

    /// Number of input sequences.
    #[must_use]
    pub fn arity(self) -> Arity {
        match self {
            Self::Intersection
            | Self::Union
            | Self::Difference
            | Self::SymmetricDifference
            | Self::IsSubset => Arity::Binary,
            Self::Mean | Self::Median | Self::Mode | Self::Variance | Self::StandardDeviation => {
                Arity::Unary
            }
        }
    }

    /// The kind of value this operation produces.
    #[must_use]
    pub fn result_kind(self) -> ResultKind {
        match self {
            Self::Intersection
            | Self::Union
            | Self::Difference
            | Self::SymmetricDifference
            | Self::Mode => ResultKind::Sequence,
            Self::IsSubset => ResultKind::Boolean,
            Self::Mean | Self::Median | Self::Variance | Self::StandardDeviation => {
                ResultKind::Float
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Operation {
    type Err = SetCalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        match key.as_str() {
            "symdiff" | "symmetric_difference" => return Ok(Self::SymmetricDifference),
            "is-subset" | "is_subset" => return Ok(Self::IsSubset),
            "standard-deviation" | "standard_deviation" => return Ok(Self::StandardDeviation),
            _ => {}
        }
        Self::ALL
            .into_iter()
            .find(|op| op.key() == key)
            .ok_or_else(|| SetCalcError::UnknownTask(s.trim().to_string()))
    }
}
