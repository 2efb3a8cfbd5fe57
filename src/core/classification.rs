use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::core::PcpError;

/// The category of a solution in the reference set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolutionCategory {
    /// The solution is dominated by at least another one.
    Dominated,
    /// The solution belongs to the Pareto front.
    NonDominated,
    /// The solution selected by an external weighting procedure.
    BestWeighted,
}

impl Display for SolutionCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SolutionCategory::Dominated => f.write_str("Dominated"),
            SolutionCategory::NonDominated => f.write_str("Nondominated"),
            SolutionCategory::BestWeighted => f.write_str("Best-weighted"),
        }
    }
}

/// Number of solutions in each category.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub dominated: usize,
    pub non_dominated: usize,
    pub best_weighted: usize,
}

/// Assign each row of the solution table to a [`SolutionCategory`] using the indices of the
/// non-dominated solutions and the optional index of the best-weighted solution.
#[derive(Clone, Debug)]
pub struct Classification {
    /// The number of rows in the table.
    row_count: usize,
    /// The indices of the non-dominated rows.
    non_dominated: BTreeSet<usize>,
    /// The index of the best-weighted row.
    best_weighted: Option<usize>,
}

impl Classification {
    /// Create the classification. This returns an error if any index is not a valid row index.
    ///
    /// # Arguments
    ///
    /// * `row_count`: The number of rows in the solution table.
    /// * `non_dominated`: The indices of the non-dominated rows.
    /// * `best_weighted`: The index of the best-weighted row, if any.
    ///
    /// returns: `Result<Classification, PcpError>`
    pub fn new<I: IntoIterator<Item = usize>>(
        row_count: usize,
        non_dominated: I,
        best_weighted: Option<usize>,
    ) -> Result<Self, PcpError> {
        let non_dominated: BTreeSet<usize> = non_dominated.into_iter().collect();
        if let Some(index) = non_dominated.iter().find(|i| **i >= row_count) {
            return Err(PcpError::IndexOutOfRange(
                "non-dominated".to_string(),
                *index,
                row_count,
            ));
        }
        if let Some(index) = best_weighted {
            if index >= row_count {
                return Err(PcpError::IndexOutOfRange(
                    "best-weighted".to_string(),
                    index,
                    row_count,
                ));
            }
            if !non_dominated.contains(&index) {
                warn!("The best-weighted solution #{index} is not listed as non-dominated");
            }
        }

        Ok(Self {
            row_count,
            non_dominated,
            best_weighted,
        })
    }

    /// Get the category of a row. The best-weighted row takes precedence over the non-dominated
    /// list.
    ///
    /// # Arguments
    ///
    /// * `row`: The row index.
    ///
    /// returns: `SolutionCategory`
    pub fn category(&self, row: usize) -> SolutionCategory {
        if self.best_weighted == Some(row) {
            SolutionCategory::BestWeighted
        } else if self.non_dominated.contains(&row) {
            SolutionCategory::NonDominated
        } else {
            SolutionCategory::Dominated
        }
    }

    /// The number of rows being classified.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// The index of the best-weighted row.
    pub fn best_weighted(&self) -> Option<usize> {
        self.best_weighted
    }

    /// Count the rows in each category.
    ///
    /// returns: `CategoryCount`
    pub fn count(&self) -> CategoryCount {
        let mut count = CategoryCount::default();
        for row in 0..self.row_count {
            match self.category(row) {
                SolutionCategory::Dominated => count.dominated += 1,
                SolutionCategory::NonDominated => count.non_dominated += 1,
                SolutionCategory::BestWeighted => count.best_weighted += 1,
            }
        }
        count
    }

    /// Get the rows with their category in drawing order: dominated rows first, then
    /// non-dominated rows and the best-weighted row last, so that it is drawn on top. Rows keep
    /// their table order within a category.
    ///
    /// returns: `Vec<(usize, SolutionCategory)>`
    pub fn drawing_order(&self) -> Vec<(usize, SolutionCategory)> {
        let mut rows: Vec<(usize, SolutionCategory)> =
            (0..self.row_count).map(|r| (r, self.category(r))).collect();
        rows.sort_by_key(|(r, c)| {
            let layer = match c {
                SolutionCategory::Dominated => 0,
                SolutionCategory::NonDominated => 1,
                SolutionCategory::BestWeighted => 2,
            };
            (layer, *r)
        });
        rows
    }
}
