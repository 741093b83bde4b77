//! # Result Comparator
//!
//! Decides set-equivalence of two result sets, independent of row order
//! and column order. Pure and engine-free: it only sees [`ResultSet`]
//! values, so it can be tested against hand-built fixtures.
//!
//! Algorithm: compare the *sets* of column names; then canonicalize each
//! result set into a list of tuples ordered by the alphabetically-sorted
//! column names, sort the tuple lists, and compare element-wise. Duplicate
//! rows therefore matter (multiset semantics), and cells compare with
//! exact type and value.

use std::collections::BTreeSet;

use crate::executor::{ResultSet, ScalarValue};

/// True iff the two result sets hold the same rows over the same columns
pub fn equivalent(a: &ResultSet, b: &ResultSet) -> bool {
    let columns_a: BTreeSet<&str> = a.columns.iter().map(String::as_str).collect();
    let columns_b: BTreeSet<&str> = b.columns.iter().map(String::as_str).collect();
    if columns_a != columns_b {
        return false;
    }

    canonical_rows(a) == canonical_rows(b)
}

/// Rows as value tuples in sorted-column order, sorted by natural order
fn canonical_rows(rs: &ResultSet) -> Vec<Vec<ScalarValue>> {
    // Duplicates in the column list are kept: selecting a column twice
    // widens the tuples and must fail against a single-column reference.
    let mut order: Vec<&String> = rs.columns.iter().collect();
    order.sort();

    let mut rows: Vec<Vec<ScalarValue>> = rs
        .rows
        .iter()
        .map(|row| {
            order
                .iter()
                .map(|name| row.get(*name).cloned().unwrap_or(ScalarValue::Null))
                .collect()
        })
        .collect();
    rows.sort();
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::Row;

    fn fixture(columns: &[&str], rows: &[&[ScalarValue]]) -> ResultSet {
        ResultSet {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: rows
                .iter()
                .map(|values| {
                    columns
                        .iter()
                        .zip(values.iter())
                        .map(|(c, v)| (c.to_string(), v.clone()))
                        .collect::<Row>()
                })
                .collect(),
        }
    }

    fn int(i: i64) -> ScalarValue {
        ScalarValue::Integer(i)
    }

    fn text(s: &str) -> ScalarValue {
        ScalarValue::Text(s.to_string())
    }

    #[test]
    fn test_row_order_does_not_matter() {
        let a = fixture(&["x", "y"], &[&[int(1), text("a")], &[int(2), text("b")]]);
        let b = fixture(&["x", "y"], &[&[int(2), text("b")], &[int(1), text("a")]]);
        assert!(equivalent(&a, &b));
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let a = fixture(&["x", "y"], &[&[int(1), text("a")]]);
        let b = fixture(&["y", "x"], &[&[text("a"), int(1)]]);
        assert!(equivalent(&a, &b));
    }

    #[test]
    fn test_column_set_matters() {
        let a = fixture(&["x"], &[&[int(1)]]);
        let b = fixture(&["z"], &[&[int(1)]]);
        assert!(!equivalent(&a, &b));
    }

    #[test]
    fn test_multiset_semantics() {
        let a = fixture(&["x"], &[&[int(1)], &[int(1)]]);
        let b = fixture(&["x"], &[&[int(1)]]);
        assert!(!equivalent(&a, &b));
    }

    #[test]
    fn test_duplicated_column_selection_is_not_equivalent() {
        // `SELECT x, x` repeats the column name; its canonical tuples are
        // wider than a plain `SELECT x` even though the column sets match.
        let doubled = fixture(&["x", "x"], &[&[int(1), int(1)]]);
        let single = fixture(&["x"], &[&[int(1)]]);
        assert!(!equivalent(&doubled, &single));
        assert!(!equivalent(&single, &doubled));
        assert!(equivalent(&doubled, &doubled));
    }

    #[test]
    fn test_exact_scalar_equality() {
        let a = fixture(&["x"], &[&[int(50)]]);
        let b = fixture(&["x"], &[&[text("50")]]);
        assert!(!equivalent(&a, &b));
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            (
                fixture(&["x"], &[&[int(1)]]),
                fixture(&["x"], &[&[int(1)]]),
            ),
            (
                fixture(&["x"], &[&[int(1)]]),
                fixture(&["x"], &[&[int(2)]]),
            ),
            (fixture(&["x"], &[&[int(1)]]), fixture(&["y"], &[&[int(1)]])),
            (
                fixture(&["x"], &[&[ScalarValue::Null]]),
                fixture(&["x"], &[]),
            ),
        ];
        for (a, b) in &pairs {
            assert_eq!(equivalent(a, b), equivalent(b, a));
        }
    }

    #[test]
    fn test_null_cells_compare_equal() {
        let a = fixture(&["x"], &[&[ScalarValue::Null]]);
        let b = fixture(&["x"], &[&[ScalarValue::Null]]);
        assert!(equivalent(&a, &b));
    }

    #[test]
    fn test_empty_results_with_same_columns_match() {
        let a = fixture(&["x", "y"], &[]);
        let b = fixture(&["y", "x"], &[]);
        assert!(equivalent(&a, &b));
    }

    #[test]
    fn test_inputs_not_mutated() {
        let a = fixture(&["y", "x"], &[&[int(2), int(1)], &[int(4), int(3)]]);
        let b = fixture(&["x", "y"], &[&[int(3), int(4)], &[int(1), int(2)]]);
        let a_before = a.clone();
        let b_before = b.clone();
        assert!(equivalent(&a, &b));
        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }
}
