//! Typed cell values and the comparators used to order them.
//!
//! Rows expose one [`CellValue`] per column. Sorting never compares values
//! through implicit coercion: a [`Comparator`] is resolved once per sort
//! column from the column's [`ValueKind`] and applied to every pair of cells.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};

/// A single cell value exposed by a row for one column.
///
/// # Example
///
/// ```
/// use datatable::CellValue;
///
/// let name = CellValue::from("Amy");
/// let budget = CellValue::from(1_500i64);
/// let missing = CellValue::from(None::<String>);
/// assert!(missing.is_empty());
/// assert_eq!(name.to_string(), "Amy");
/// assert_eq!(budget.to_string(), "1500");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// No value for this column.
    #[default]
    Empty,
    /// Text value.
    Text(String),
    /// Whole number.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Boolean value.
    Bool(bool),
    /// Point in time.
    DateTime(DateTime<Utc>),
}

impl CellValue {
    /// Returns `true` if this is an empty value.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Returns the comparison kind of this value, `None` when empty.
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            CellValue::Empty => None,
            CellValue::Text(_) => Some(ValueKind::Text),
            CellValue::Int(_) | CellValue::Float(_) => Some(ValueKind::Number),
            CellValue::Bool(_) => Some(ValueKind::Bool),
            CellValue::DateTime(_) => Some(ValueKind::DateTime),
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Empty => "empty",
            CellValue::Text(_) => "text",
            CellValue::Int(_) => "int",
            CellValue::Float(_) => "float",
            CellValue::Bool(_) => "bool",
            CellValue::DateTime(_) => "datetime",
        }
    }

    /// Returns the text if this is a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Int(n) => write!(f, "{}", n),
            CellValue::Float(n) => write!(f, "{}", n),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}

impl From<&String> for CellValue {
    fn from(v: &String) -> Self {
        CellValue::Text(v.clone())
    }
}

impl From<i32> for CellValue {
    fn from(v: i32) -> Self {
        CellValue::Int(v as i64)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<u32> for CellValue {
    fn from(v: u32) -> Self {
        CellValue::Int(v as i64)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(v: DateTime<Utc>) -> Self {
        CellValue::DateTime(v)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(CellValue::Empty)
    }
}

// =============================================================================
// Comparison
// =============================================================================

/// The family of values a column holds, used to pick its comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Lexicographic comparison.
    Text,
    /// Numeric comparison across integers and floats.
    Number,
    /// `false` before `true`.
    Bool,
    /// Chronological comparison.
    DateTime,
}

impl ValueKind {
    fn rank(self) -> u8 {
        match self {
            ValueKind::Text => 0,
            ValueKind::Number => 1,
            ValueKind::Bool => 2,
            ValueKind::DateTime => 3,
        }
    }
}

/// Ascending comparator for one column.
///
/// Values must be homogeneous within a column. Empty cells order after every
/// other value. Cells whose kind does not match the comparator are never
/// coerced: they order after matching cells, grouped by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparator {
    kind: ValueKind,
}

impl Comparator {
    /// Create a comparator for a value kind.
    pub fn for_kind(kind: ValueKind) -> Self {
        Self { kind }
    }

    /// Resolve the comparator for a column.
    ///
    /// Uses the declared kind when present, otherwise the kind of the first
    /// non-empty value, otherwise text.
    pub fn resolve<I>(declared: Option<ValueKind>, values: I) -> Self
    where
        I: IntoIterator<Item = CellValue>,
    {
        let kind = declared
            .or_else(|| values.into_iter().find_map(|v| v.kind()))
            .unwrap_or(ValueKind::Text);
        Self { kind }
    }

    /// The kind this comparator orders.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Whether a value can be ordered by this comparator without falling
    /// back to kind ranking.
    pub fn accepts(&self, value: &CellValue) -> bool {
        value.kind().is_none_or(|k| k == self.kind)
    }

    /// Compare two cells in ascending order.
    pub fn compare(&self, a: &CellValue, b: &CellValue) -> Ordering {
        match (a, b) {
            (CellValue::Empty, CellValue::Empty) => return Ordering::Equal,
            (CellValue::Empty, _) => return Ordering::Greater,
            (_, CellValue::Empty) => return Ordering::Less,
            _ => {}
        }

        match (a, b) {
            (CellValue::Text(x), CellValue::Text(y)) if self.kind == ValueKind::Text => x.cmp(y),
            (CellValue::Bool(x), CellValue::Bool(y)) if self.kind == ValueKind::Bool => x.cmp(y),
            (CellValue::DateTime(x), CellValue::DateTime(y))
                if self.kind == ValueKind::DateTime =>
            {
                x.cmp(y)
            }
            (CellValue::Int(x), CellValue::Int(y)) if self.kind == ValueKind::Number => x.cmp(y),
            (CellValue::Int(x), CellValue::Float(y)) if self.kind == ValueKind::Number => {
                compare_int_float(*x, *y)
            }
            (CellValue::Float(x), CellValue::Int(y)) if self.kind == ValueKind::Number => {
                compare_int_float(*y, *x).reverse()
            }
            (CellValue::Float(x), CellValue::Float(y)) if self.kind == ValueKind::Number => {
                compare_floats(*x, *y)
            }
            _ => self.compare_mismatched(a, b),
        }
    }

    fn compare_mismatched(&self, a: &CellValue, b: &CellValue) -> Ordering {
        let rank = |v: &CellValue| match v.kind() {
            Some(k) if k == self.kind => 0,
            Some(k) => 1 + k.rank(),
            None => u8::MAX,
        };
        rank(a).cmp(&rank(b))
    }
}

/// Floats by value, so `-0.0 == 0.0`. NaN falls back to `total_cmp` and
/// sorts past every number of the same sign.
fn compare_floats(x: f64, y: f64) -> Ordering {
    x.partial_cmp(&y).unwrap_or_else(|| x.total_cmp(&y))
}

/// Exact comparison of an integer against a float.
///
/// Casting `x` to `f64` rounds above 2^53, which would make distinct
/// integers equal to the same float.
fn compare_int_float(x: i64, y: f64) -> Ordering {
    // 2^63, the first float above i64::MAX.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if y.is_nan() {
        return (x as f64).total_cmp(&y);
    }
    if y >= LIMIT {
        return Ordering::Less;
    }
    if y < -LIMIT {
        return Ordering::Greater;
    }

    // In range, so the floor is an exact i64.
    let floor = y.floor();
    match x.cmp(&(floor as i64)) {
        Ordering::Equal if y > floor => Ordering::Less,
        ord => ord,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_resolve_prefers_declared_kind() {
        let cmp = Comparator::resolve(Some(ValueKind::Number), vec![CellValue::from("x")]);
        assert_eq!(cmp.kind(), ValueKind::Number);
    }

    #[test]
    fn test_resolve_skips_empty_values() {
        let values = vec![CellValue::Empty, CellValue::from(3i64)];
        assert_eq!(Comparator::resolve(None, values).kind(), ValueKind::Number);
        assert_eq!(Comparator::resolve(None, vec![]).kind(), ValueKind::Text);
    }

    #[test]
    fn test_numbers_compare_numerically() {
        let cmp = Comparator::for_kind(ValueKind::Number);
        // Lexicographically "10" < "9"; numerically it is not.
        assert_eq!(
            cmp.compare(&CellValue::Int(10), &CellValue::Int(9)),
            Ordering::Greater
        );
        assert_eq!(
            cmp.compare(&CellValue::Int(2), &CellValue::Float(2.5)),
            Ordering::Less
        );
    }

    #[test]
    fn test_large_integers_compare_exactly_against_floats() {
        let cmp = Comparator::for_kind(ValueKind::Number);
        let big = 1i64 << 53;
        let float = CellValue::Float(big as f64);

        assert_eq!(cmp.compare(&CellValue::Int(big + 1), &float), Ordering::Greater);
        assert_eq!(cmp.compare(&float, &CellValue::Int(big + 1)), Ordering::Less);
        assert_eq!(cmp.compare(&CellValue::Int(big), &float), Ordering::Equal);
        assert_eq!(
            cmp.compare(&CellValue::Int(-3), &CellValue::Float(-2.5)),
            Ordering::Less
        );
        assert_eq!(
            cmp.compare(&CellValue::Int(i64::MAX), &CellValue::Float(f64::INFINITY)),
            Ordering::Less
        );
        assert_eq!(
            cmp.compare(&CellValue::Int(i64::MIN), &CellValue::Float(i64::MIN as f64)),
            Ordering::Equal
        );
        assert_eq!(
            cmp.compare(&CellValue::Int(0), &CellValue::Float(f64::NAN)),
            Ordering::Less
        );
        assert_eq!(
            cmp.compare(&CellValue::Float(-0.0), &CellValue::Float(0.0)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_dates_compare_chronologically() {
        let cmp = Comparator::for_kind(ValueKind::DateTime);
        let early = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(
            cmp.compare(&early.into(), &late.into()),
            Ordering::Less
        );
    }

    #[test]
    fn test_empty_orders_last() {
        let cmp = Comparator::for_kind(ValueKind::Text);
        assert_eq!(
            cmp.compare(&CellValue::Empty, &CellValue::from("a")),
            Ordering::Greater
        );
        assert_eq!(cmp.compare(&CellValue::Empty, &CellValue::Empty), Ordering::Equal);
    }

    #[test]
    fn test_mismatched_kinds_order_after_matching() {
        let cmp = Comparator::for_kind(ValueKind::Text);
        assert!(!cmp.accepts(&CellValue::Int(1)));
        assert_eq!(
            cmp.compare(&CellValue::Int(1), &CellValue::from("z")),
            Ordering::Greater
        );
    }
}
