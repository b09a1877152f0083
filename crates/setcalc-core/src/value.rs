//! Typed task results and their textual rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_FLOAT_PRECISION;
use crate::Element;

/// The kind of value a task is declared to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    /// An ordered sequence of elements.
    Sequence,
    /// A truth value.
    Boolean,
    /// A 64-bit float.
    Float,
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Sequence => "sequence",
            Self::Boolean => "boolean",
            Self::Float => "float",
        };
        f.write_str(s)
    }
}

/// The single value a task produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResultValue {
    /// Ordered sequence result (set operations, mode).
    Sequence(Vec<Element>),
    /// Boolean result (subset check).
    Boolean(bool),
    /// Float result (mean, median, variance, standard deviation).
    Float(f64),
}

impl ResultValue {
    /// The kind tag of this value.
    #[must_use]
    pub fn kind(&self) -> ResultKind {
        match self {
            Self::Sequence(_) => ResultKind::Sequence,
            Self::Boolean(_) => ResultKind::Boolean,
            Self::Float(_) => ResultKind::Float,
        }
    }

    /// Render the value with the given format.
    #[must_use]
    pub fn render(&self, format: ValueFormat) -> String {
        match self {
            Self::Sequence(items) => items
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" "),
            Self::Boolean(b) => b.to_string(),
            Self::Float(x) => format!("{x:.prec$}", prec = usize::from(format.float_precision)),
        }
    }

    /// Borrow the sequence payload, if any.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Element]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// The boolean payload, if any.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The float payload, if any.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(x) => Some(*x),
            _ => None,
        }
    }
}

/// Rendering options for result values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueFormat {
    /// Fractional digits for float values.
    pub float_precision: u16,
}

impl Default for ValueFormat {
    fn default() -> Self {
        Self {
            float_precision: DEFAULT_FLOAT_PRECISION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_sequence_space_joined() {
        let v = ResultValue::Sequence(vec![2, 3]);
        assert_eq!(v.render(ValueFormat::default()), "2 3");
    }

    #[test]
    fn render_empty_sequence() {
        let v = ResultValue::Sequence(Vec::new());
        assert_eq!(v.render(ValueFormat::default()), "");
    }

    #[test]
    fn render_boolean() {
        assert_eq!(
            ResultValue::Boolean(true).render(ValueFormat::default()),
            "true"
        );
        assert_eq!(
            ResultValue::Boolean(false).render(ValueFormat::default()),
            "false"
        );
    }

    #[test]
    fn render_float_fixed_point() {
        let v = ResultValue::Float(3.0);
        assert_eq!(v.render(ValueFormat::default()), "3.000000");
        assert_eq!(v.render(ValueFormat { float_precision: 2 }), "3.00");
    }

    #[test]
    fn render_float_widest_precision() {
        let text = ResultValue::Float(1.5).render(ValueFormat {
            float_precision: u16::MAX,
        });
        assert_eq!(text.len(), 2 + usize::from(u16::MAX));
        assert!(text.starts_with("1.5000"));
    }

    #[test]
    fn render_nan() {
        let v = ResultValue::Float(f64::NAN);
        assert_eq!(v.render(ValueFormat::default()), "NaN");
    }

    #[test]
    fn kind_tags() {
        assert_eq!(ResultValue::Sequence(vec![]).kind(), ResultKind::Sequence);
        assert_eq!(ResultValue::Boolean(false).kind(), ResultKind::Boolean);
        assert_eq!(ResultValue::Float(0.0).kind(), ResultKind::Float);
    }

    #[test]
    fn accessors() {
        assert_eq!(ResultValue::Sequence(vec![1]).as_sequence(), Some(&[1][..]));
        assert_eq!(ResultValue::Boolean(true).as_bool(), Some(true));
        assert_eq!(ResultValue::Float(1.5).as_float(), Some(1.5));
        assert!(ResultValue::Float(1.5).as_bool().is_none());
    }

    #[test]
    fn serializes_untagged() {
        let json = serde_json::to_string(&ResultValue::Sequence(vec![1, 4])).unwrap();
        assert_eq!(json, "[1,4]");
        let json = serde_json::to_string(&ResultValue::Boolean(true)).unwrap();
        assert_eq!(json, "true");
    }

    #[test]
    fn kind_display() {
        assert_eq!(ResultKind::Float.to_string(), "float");
    }
}
