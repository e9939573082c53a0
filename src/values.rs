use itertools::Itertools;
use log::debug;
use ordered_float::OrderedFloat;
use serde_json::{Value, json};
use thiserror::Error;

use crate::counting::find_counted;
use crate::minmax::find_all;

/// What type the input tokens should be read as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueKind {
    #[default]
    Int,
    Float,
    Text,
}

impl std::str::FromStr for ValueKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "int" | "integer" => Ok(ValueKind::Int),
            "float" | "f64" => Ok(ValueKind::Float),
            "text" | "str" | "string" => Ok(ValueKind::Text),
            _ => Err(format!(
                "Unknown value kind {:?}, expected one of int, float, text",
                s
            )),
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueKind::Int => write!(f, "int"),
            ValueKind::Float => write!(f, "float"),
            ValueKind::Text => write!(f, "text"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Can't read {token:?} (at position {position}) as {kind}")]
pub struct ParseValueError {
    pub token: String,
    pub position: usize,
    pub kind: ValueKind,
}

/// A sequence of one type of value, in natural order.
///
/// Floats are wrapped in [`OrderedFloat`], so every float has a place in the order (NaN is
/// larger than everything else).
#[derive(Debug, Clone, PartialEq)]
pub enum Values {
    Int(Vec<i64>),
    Float(Vec<OrderedFloat<f64>>),
    Text(Vec<String>),
}

impl Values {
    pub fn parse<S: AsRef<str>>(
        kind: ValueKind,
        tokens: impl IntoIterator<Item = S>,
    ) -> Result<Self, ParseValueError> {
        let tokens = tokens.into_iter();
        let err = |position: usize, token: &str| ParseValueError {
            token: token.to_string(),
            position,
            kind,
        };
        let values = match kind {
            ValueKind::Int => Values::Int(
                tokens
                    .enumerate()
                    .map(|(i, t)| t.as_ref().parse::<i64>().map_err(|_| err(i, t.as_ref())))
                    .collect::<Result<_, _>>()?,
            ),
            ValueKind::Float => Values::Float(
                tokens
                    .enumerate()
                    .map(|(i, t)| {
                        t.as_ref()
                            .parse::<f64>()
                            .map(OrderedFloat)
                            .map_err(|_| err(i, t.as_ref()))
                    })
                    .collect::<Result<_, _>>()?,
            ),
            ValueKind::Text => {
                Values::Text(tokens.map(|t| t.as_ref().to_string()).collect())
            }
        };
        debug!("Read {} {} value(s)", values.len(), kind);
        Ok(values)
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Values::Int(_) => ValueKind::Int,
            Values::Float(_) => ValueKind::Float,
            Values::Text(_) => ValueKind::Text,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Values::Int(v) => v.len(),
            Values::Float(v) => v.len(),
            Values::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(min, max)` rendered as text, `None` for no values.
    pub fn min_max(&self) -> Option<(String, String)> {
        match self {
            Values::Int(v) => render(find_all(v)),
            Values::Float(v) => render(find_all(v)),
            Values::Text(v) => render(find_all(v)),
        }
    }

    /// As [`Values::min_max`], with the number of comparisons it took.
    pub fn min_max_counted(&self) -> Option<((String, String), usize)> {
        fn counted<T: PartialOrd + Clone + ToString>(v: &[T]) -> Option<((String, String), usize)> {
            if v.is_empty() {
                return None;
            }
            let ((lo, hi), comparisons) = find_counted(v, 0, v.len() - 1);
            Some(((lo.to_string(), hi.to_string()), comparisons))
        }
        match self {
            Values::Int(v) => counted(v),
            Values::Float(v) => counted(v),
            Values::Text(v) => counted(v),
        }
    }

    /// `(min, max)` as JSON values of the right type, `null`s for no values.
    pub fn min_max_json(&self) -> (Value, Value) {
        let pair = match self {
            Values::Int(v) => find_all(v).map(|(lo, hi)| (json!(lo), json!(hi))),
            Values::Float(v) => find_all(v).map(|(lo, hi)| (float_json(lo), float_json(hi))),
            Values::Text(v) => find_all(v).map(|(lo, hi)| (json!(lo), json!(hi))),
        };
        pair.unwrap_or((Value::Null, Value::Null))
    }

    /// As [`Values::min_max_json`], with the number of comparisons it took.
    pub fn min_max_json_counted(&self) -> ((Value, Value), usize) {
        fn counted<T: PartialOrd + Clone>(
            v: &[T],
            to_json: impl Fn(T) -> Value,
        ) -> ((Value, Value), usize) {
            if v.is_empty() {
                return ((Value::Null, Value::Null), 0);
            }
            let ((lo, hi), comparisons) = find_counted(v, 0, v.len() - 1);
            ((to_json(lo), to_json(hi)), comparisons)
        }
        match self {
            Values::Int(v) => counted(v, |x| json!(x)),
            Values::Float(v) => counted(v, float_json),
            Values::Text(v) => counted(v, |x| json!(x)),
        }
    }
}

/// JSON has no NaN or infinity, so those are written as strings, the same as the text output.
fn float_json(x: OrderedFloat<f64>) -> Value {
    if x.0.is_finite() {
        json!(x.0)
    } else {
        json!(x.0.to_string())
    }
}

fn render<T: ToString>(pair: Option<(T, T)>) -> Option<(String, String)> {
    pair.map(|(lo, hi)| (lo.to_string(), hi.to_string()))
}

impl std::fmt::Display for Values {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Values::Int(v) => write!(f, "[{}]", v.iter().join(", ")),
            Values::Float(v) => write!(f, "[{}]", v.iter().join(", ")),
            Values::Text(v) => write!(f, "[{}]", v.iter().map(|s| format!("{:?}", s)).join(", ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_str() {
        assert_eq!("int".parse::<ValueKind>(), Ok(ValueKind::Int));
        assert_eq!("Float".parse::<ValueKind>(), Ok(ValueKind::Float));
        assert_eq!("string".parse::<ValueKind>(), Ok(ValueKind::Text));
        assert!("complex".parse::<ValueKind>().is_err());
        for kind in [ValueKind::Int, ValueKind::Float, ValueKind::Text] {
            assert_eq!(kind.to_string().parse::<ValueKind>(), Ok(kind));
        }
    }

    #[test]
    fn parse_ints() {
        let v = Values::parse(ValueKind::Int, ["3", "7", "-1"]).unwrap();
        assert_eq!(v, Values::Int(vec![3, 7, -1]));
        assert_eq!(v.kind(), ValueKind::Int);
        assert_eq!(v.len(), 3);
        assert_eq!(v.min_max(), Some(("-1".to_string(), "7".to_string())));
        assert_eq!(v.to_string(), "[3, 7, -1]");
    }

    #[test]
    fn parse_error_position() {
        let err = Values::parse(ValueKind::Int, ["3", "7", "x1", "2"]).unwrap_err();
        assert_eq!(
            err,
            ParseValueError {
                token: "x1".to_string(),
                position: 2,
                kind: ValueKind::Int
            }
        );
        assert_eq!(err.to_string(), "Can't read \"x1\" (at position 2) as int");

        assert!(Values::parse(ValueKind::Float, ["1.5", "abc"]).is_err());
    }

    #[test]
    fn floats() {
        let v = Values::parse(ValueKind::Float, ["0.5", "-2.25", "1e3"]).unwrap();
        assert_eq!(v.min_max(), Some(("-2.25".to_string(), "1000".to_string())));
        assert_eq!(v.min_max_json(), (json!(-2.25), json!(1000.0)));
    }

    #[test]
    fn nan_is_largest() {
        let v = Values::parse(ValueKind::Float, ["NaN", "1", "-inf"]).unwrap();
        assert_eq!(v.min_max(), Some(("-inf".to_string(), "NaN".to_string())));
        assert_eq!(v.min_max_json(), (json!("-inf"), json!("NaN")));
    }

    #[test]
    fn non_finite_json_is_not_null() {
        let v = Values::parse(ValueKind::Float, ["-inf", "1"]).unwrap();
        assert_eq!(v.min_max_json(), (json!("-inf"), json!(1.0)));
        assert_eq!(v.min_max_json_counted(), ((json!("-inf"), json!(1.0)), 1));

        let v = Values::parse(ValueKind::Float, ["2.5", "inf", "0"]).unwrap();
        assert_eq!(v.min_max_json(), (json!(0.0), json!("inf")));
    }

    #[test]
    fn json_counted_matches_uncounted() {
        for v in [
            Values::parse(ValueKind::Int, ["3", "7", "1", "9", "5", "2", "8", "4", "6"]).unwrap(),
            Values::parse(ValueKind::Text, ["pear", "apple", "Zebra"]).unwrap(),
            Values::parse(ValueKind::Float, ["0.5", "NaN", "-3"]).unwrap(),
        ] {
            let (pair, comparisons) = v.min_max_json_counted();
            assert_eq!(pair, v.min_max_json());
            assert_eq!(comparisons, crate::counting::expected_comparisons(v.len()));
        }
        let empty = Values::Int(vec![]);
        assert_eq!(empty.min_max_json_counted(), ((Value::Null, Value::Null), 0));
    }

    #[test]
    fn text() {
        let v = Values::parse(ValueKind::Text, ["pear", "apple", "Zebra"]).unwrap();
        // uppercase sorts first
        assert_eq!(v.min_max(), Some(("Zebra".to_string(), "pear".to_string())));
        assert_eq!(v.min_max_json(), (json!("Zebra"), json!("pear")));
        assert_eq!(v.to_string(), r#"["pear", "apple", "Zebra"]"#);
    }

    #[test]
    fn empty() {
        let v = Values::parse(ValueKind::Int, Vec::<String>::new()).unwrap();
        assert!(v.is_empty());
        assert_eq!(v.min_max(), None);
        assert_eq!(v.min_max_counted(), None);
        assert_eq!(v.min_max_json(), (Value::Null, Value::Null));
        assert_eq!(v.to_string(), "[]");
    }

    #[test]
    fn counted() {
        let v = Values::parse(ValueKind::Int, ["10", "8", "6", "4", "2", "0"]).unwrap();
        assert_eq!(
            v.min_max_counted(),
            Some((("0".to_string(), "10".to_string()), 8))
        );
    }
}
