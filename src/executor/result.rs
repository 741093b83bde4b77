//! Result types for query execution
//!
//! A [`ResultSet`] is the normalized shape every execution produces: the
//! engine-reported column order plus one column->value map per row. Scalars
//! keep their native engine type; columns declared DATE or TIME come back as
//! calendar values, not strings, so the comparator can stay type-exact.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use serde::ser::{Serialize, Serializer};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

/// A single cell value
#[derive(Debug, Clone)]
pub enum ScalarValue {
    /// SQL NULL
    Null,
    /// 64-bit signed integer
    Integer(i64),
    /// 64-bit floating point
    Real(f64),
    /// UTF-8 text
    Text(String),
    /// Calendar date (column declared DATE)
    Date(NaiveDate),
    /// Time of day (column declared TIME)
    Time(NaiveTime),
}

impl ScalarValue {
    /// Convert an engine value, using the declared column type to recover
    /// DATE and TIME cells stored as text. Unparseable text stays text.
    pub fn from_engine(value: rusqlite::types::Value, decl_type: Option<&str>) -> Self {
        use rusqlite::types::Value;

        match value {
            Value::Null => ScalarValue::Null,
            Value::Integer(i) => ScalarValue::Integer(i),
            Value::Real(f) => ScalarValue::Real(f),
            Value::Text(s) => match decl_type {
                Some(d) if d.eq_ignore_ascii_case("DATE") => {
                    match NaiveDate::parse_from_str(&s, DATE_FORMAT) {
                        Ok(date) => ScalarValue::Date(date),
                        Err(_) => ScalarValue::Text(s),
                    }
                }
                Some(d) if d.eq_ignore_ascii_case("TIME") => {
                    match NaiveTime::parse_from_str(&s, TIME_FORMAT) {
                        Ok(time) => ScalarValue::Time(time),
                        Err(_) => ScalarValue::Text(s),
                    }
                }
                _ => ScalarValue::Text(s),
            },
            // No dataset column holds blobs; render lossily for display.
            Value::Blob(b) => ScalarValue::Text(String::from_utf8_lossy(&b).into_owned()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            ScalarValue::Null => 0,
            ScalarValue::Integer(_) => 1,
            ScalarValue::Real(_) => 2,
            ScalarValue::Text(_) => 3,
            ScalarValue::Date(_) => 4,
            ScalarValue::Time(_) => 5,
        }
    }
}

impl PartialEq for ScalarValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for ScalarValue {}

impl PartialOrd for ScalarValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScalarValue {
    /// Total order: variants rank Null < Integer < Real < Text < Date < Time,
    /// same-variant values compare naturally (reals via total_cmp).
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use ScalarValue::*;

        match (self, other) {
            (Null, Null) => std::cmp::Ordering::Equal,
            (Integer(a), Integer(b)) => a.cmp(b),
            (Real(a), Real(b)) => a.total_cmp(b),
            (Text(a), Text(b)) => a.cmp(b),
            (Date(a), Date(b)) => a.cmp(b),
            (Time(a), Time(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl Serialize for ScalarValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ScalarValue::Null => serializer.serialize_none(),
            ScalarValue::Integer(i) => serializer.serialize_i64(*i),
            ScalarValue::Real(f) => serializer.serialize_f64(*f),
            ScalarValue::Text(s) => serializer.serialize_str(s),
            ScalarValue::Date(d) => serializer.serialize_str(&d.format(DATE_FORMAT).to_string()),
            ScalarValue::Time(t) => serializer.serialize_str(&t.format(TIME_FORMAT).to_string()),
        }
    }
}

/// A row keyed by column name
pub type Row = BTreeMap<String, ScalarValue>;

/// Normalized result of a read query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSet {
    /// Column names in engine-reported order
    pub columns: Vec<String>,
    /// Rows, each holding exactly the columns above
    pub rows: Vec<Row>,
}

impl ResultSet {
    /// Returns the number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no rows matched
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_not_equal_to_text() {
        assert_ne!(
            ScalarValue::Integer(50),
            ScalarValue::Text("50".to_string())
        );
    }

    #[test]
    fn test_date_parsed_from_declared_column() {
        let v = ScalarValue::from_engine(
            rusqlite::types::Value::Text("1380-09-06".to_string()),
            Some("DATE"),
        );
        assert!(matches!(v, ScalarValue::Date(_)));
    }

    #[test]
    fn test_undeclared_text_stays_text() {
        let v = ScalarValue::from_engine(
            rusqlite::types::Value::Text("1380-09-06".to_string()),
            None,
        );
        assert_eq!(v, ScalarValue::Text("1380-09-06".to_string()));
    }

    #[test]
    fn test_malformed_date_stays_text() {
        let v = ScalarValue::from_engine(
            rusqlite::types::Value::Text("yesterday".to_string()),
            Some("DATE"),
        );
        assert_eq!(v, ScalarValue::Text("yesterday".to_string()));
    }

    #[test]
    fn test_total_order_is_stable_across_variants() {
        let mut values = vec![
            ScalarValue::Text("a".to_string()),
            ScalarValue::Integer(3),
            ScalarValue::Null,
            ScalarValue::Integer(1),
        ];
        values.sort();
        assert_eq!(values[0], ScalarValue::Null);
        assert_eq!(values[1], ScalarValue::Integer(1));
        assert_eq!(values[2], ScalarValue::Integer(3));
    }

    #[test]
    fn test_serialization() {
        let d = NaiveDate::from_ymd_opt(1380, 9, 6).unwrap();
        assert_eq!(
            serde_json::to_string(&ScalarValue::Date(d)).unwrap(),
            "\"1380-09-06\""
        );
        assert_eq!(serde_json::to_string(&ScalarValue::Null).unwrap(), "null");
        assert_eq!(serde_json::to_string(&ScalarValue::Integer(7)).unwrap(), "7");
    }
}
