//! Frame Time Table Module
//! Rectangular table of average frame times: one row per dataset, one column
//! per phase function.

use crate::error::{ChartError, Result};

/// Row-major table of frame times in milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameTimeTable {
    rows: Vec<Vec<f64>>,
}

impl FrameTimeTable {
    /// Wrap rows without checking their shape. Use [`validate`](Self::validate)
    /// before laying out a chart.
    pub fn new(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Self {
        Self::new(rows.iter().map(|r| r.as_ref().to_vec()).collect())
    }

    /// Column count taken from the first row.
    pub fn column_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Check that the table is non-empty, rectangular and finite.
    ///
    /// Returns the `(rows, columns)` shape on success.
    pub fn validate(&self) -> Result<(usize, usize)> {
        let columns = self.column_count();
        if self.rows.is_empty() || columns == 0 {
            return Err(ChartError::EmptyTable);
        }

        for (r, row) in self.rows.iter().enumerate() {
            if row.len() != columns {
                return Err(ChartError::ShapeMismatch {
                    row: r,
                    expected: columns,
                    found: row.len(),
                });
            }
            if let Some((c, &value)) = row.iter().enumerate().find(|(_, v)| !v.is_finite()) {
                return Err(ChartError::InvalidValue {
                    row: r,
                    column: c,
                    value,
                });
            }
        }

        Ok((self.rows.len(), columns))
    }

    /// Smallest and largest value in the table, `None` when empty.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.rows.iter().flatten().fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_reports_shape() {
        let table = FrameTimeTable::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(table.validate().unwrap(), (2, 3));
    }

    #[test]
    fn short_row_is_a_shape_mismatch() {
        let table = FrameTimeTable::new(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0], vec![7.0, 8.0, 9.0]]);
        match table.validate() {
            Err(ChartError::ShapeMismatch {
                row,
                expected,
                found,
            }) => {
                assert_eq!(row, 1);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("expected shape mismatch, got {:?}", other),
        }
    }

    #[test]
    fn long_row_is_a_shape_mismatch() {
        let table = FrameTimeTable::new(vec![vec![1.0, 2.0], vec![4.0, 5.0, 6.0]]);
        assert!(matches!(
            table.validate(),
            Err(ChartError::ShapeMismatch { row: 1, .. })
        ));
    }

    #[test]
    fn empty_tables_are_rejected() {
        assert!(matches!(
            FrameTimeTable::new(Vec::new()).validate(),
            Err(ChartError::EmptyTable)
        ));
        assert!(matches!(
            FrameTimeTable::new(vec![Vec::new()]).validate(),
            Err(ChartError::EmptyTable)
        ));
    }

    #[test]
    fn nan_is_rejected_with_position() {
        let table = FrameTimeTable::new(vec![vec![1.0, 2.0], vec![3.0, f64::NAN]]);
        assert!(matches!(
            table.validate(),
            Err(ChartError::InvalidValue {
                row: 1,
                column: 1,
                ..
            })
        ));
    }

    #[test]
    fn value_range_spans_all_cells() {
        let table = FrameTimeTable::from_rows(&[[20.0, 20.1, 19.0], [21.0, 20.0, 18.0]]);
        assert_eq!(table.value_range(), Some((18.0, 21.0)));
        assert_eq!(FrameTimeTable::new(Vec::new()).value_range(), None);
    }
}
