use serde::{Deserialize, Serialize};

use crate::core::utils::{vector_max, vector_min};
use crate::core::{PcpError, SolutionTable};

/// The statistics of a table column in the column's original units.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ColumnStats {
    /// The minimum value.
    pub min: f64,
    /// The maximum value.
    pub max: f64,
    /// The peak-to-peak range (`max - min`).
    pub range: f64,
}

impl ColumnStats {
    /// Whether the column values are all equal and cannot be scaled.
    ///
    /// return: `bool`
    pub fn is_degenerate(&self) -> bool {
        self.range == 0.0
    }
}

/// Calculate the minimum, maximum and range of a column with one scan of the table. A zero range
/// is returned as is; it is up to the caller to check [`ColumnStats::is_degenerate`] before
/// normalising the column. This returns [`PcpError::RangeOverflow`] when `max - min` does not fit
/// in a `f64`.
///
/// # Arguments
///
/// * `table`: The solution table.
/// * `column_index`: The column index.
///
/// returns: `Result<ColumnStats, PcpError>`
pub fn compute_column_stats(
    table: &SolutionTable,
    column_index: usize,
) -> Result<ColumnStats, PcpError> {
    let values = table.column(column_index)?;
    if values.is_empty() {
        return Err(PcpError::EmptyTable);
    }
    let min = vector_min(&values)?;
    let max = vector_max(&values)?;
    let range = max - min;
    if !range.is_finite() {
        return Err(PcpError::RangeOverflow(format!("column #{column_index}")));
    }

    Ok(ColumnStats { min, max, range })
}

#[cfg(test)]
mod test {
    use crate::core::{PcpError, SolutionTable};
    use crate::normalise::compute_column_stats;

    #[test]
    fn test_column_stats() {
        let table = SolutionTable::new(vec![vec![0.0, 0.0], vec![5.0, 10.0], vec![10.0, 20.0]])
            .unwrap();
        let stats = compute_column_stats(&table, 0).unwrap();
        assert_eq!(stats.min, 0.0);
        assert_eq!(stats.max, 10.0);
        assert_eq!(stats.range, 10.0);
        assert!(!stats.is_degenerate());

        let stats = compute_column_stats(&table, 1).unwrap();
        assert_eq!(stats.range, 20.0);
    }

    #[test]
    fn test_degenerate_column() {
        let table = SolutionTable::new(vec![vec![3.5, 1.0], vec![3.5, 2.0]]).unwrap();
        let stats = compute_column_stats(&table, 0).unwrap();
        assert_eq!(stats.range, 0.0);
        assert!(stats.is_degenerate());
    }

    #[test]
    fn test_wrong_column() {
        let table = SolutionTable::new(vec![vec![3.5, 1.0]]).unwrap();
        assert!(compute_column_stats(&table, 2).is_err());
    }

    #[test]
    /// Finite values whose difference overflows are rejected
    fn test_range_overflow() {
        let table = SolutionTable::new(vec![
            vec![-1e308, 0.0],
            vec![0.0, 1.0],
            vec![1e308, 2.0],
        ])
        .unwrap();
        assert!(matches!(
            compute_column_stats(&table, 0),
            Err(PcpError::RangeOverflow(ref c)) if c == "column #0"
        ));
        assert_eq!(compute_column_stats(&table, 1).unwrap().range, 2.0);
    }
}
