use std::fmt::{Display, Formatter};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::core::utils::{vector_max, vector_min};
use crate::core::{Objective, PcpError, SolutionTable};
use crate::normalise::{build_ticks, compute_column_stats, ColumnStats, TickSet, TickSpacing};

/// What to do when all the values of a column are equal and the column range is zero.
#[derive(Default, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum DegenerateColumnPolicy {
    /// Return [`PcpError::DegenerateColumn`].
    #[default]
    Fail,
    /// Set all the column values to the given number in plotting units.
    Constant(f64),
}

impl DegenerateColumnPolicy {
    /// Check the fill value. This returns an error when the value is not finite and logs a
    /// warning when it falls outside the [0, 1] plotting range.
    ///
    /// returns: `Result<(), PcpError>`
    pub fn validate(&self) -> Result<(), PcpError> {
        if let DegenerateColumnPolicy::Constant(value) = *self {
            if !value.is_finite() {
                return Err(PcpError::InvalidFillValue(value));
            }
            if !(0.0..=1.0).contains(&value) {
                warn!("Constant columns are set to {value}, outside the [0, 1] axis range");
            }
        }
        Ok(())
    }
}

impl Display for DegenerateColumnPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DegenerateColumnPolicy::Fail => f.write_str("fail"),
            DegenerateColumnPolicy::Constant(v) => write!(f, "constant ({v})"),
        }
    }
}

/// Scale the values of an objective column to the [0, 1] range using `(value - min) / range`.
///
/// This must be applied exactly once per column with statistics calculated from the same
/// unmodified data: the transformation is not idempotent and a second application against the
/// same `stats` scales the column again.
///
/// When the column range is zero, the `policy` decides whether to return an error or to fill the
/// column with a constant.
///
/// # Arguments
///
/// * `table`: The solution table.
/// * `objective`: The objective whose column is normalised.
/// * `stats`: The column statistics calculated before normalisation.
/// * `policy`: The action to take when the column range is zero.
///
/// returns: `Result<(), PcpError>`
pub fn normalise_column_in_place(
    table: &mut SolutionTable,
    objective: &Objective,
    stats: &ColumnStats,
    policy: DegenerateColumnPolicy,
) -> Result<(), PcpError> {
    if !stats.range.is_finite() {
        return Err(PcpError::RangeOverflow(format!(
            "the objective '{}'",
            objective.name()
        )));
    }
    if stats.is_degenerate() {
        return match policy {
            DegenerateColumnPolicy::Fail => {
                Err(PcpError::DegenerateColumn(objective.name().to_string()))
            }
            DegenerateColumnPolicy::Constant(value) => {
                policy.validate()?;
                warn!(
                    "All values of '{}' are equal to {}. Setting the column to {value}",
                    objective.name(),
                    stats.min
                );
                table.map_column(objective.index(), |_| value)
            }
        };
    }

    let ColumnStats { min, range, .. } = *stats;
    table.map_column(objective.index(), |v| (v - min) / range)
}

/// The data of an objective axis: the objective, the statistics of its column in original units
/// and the extent of the column after normalisation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ObjectiveAxis {
    /// The objective.
    pub objective: Objective,
    /// The column statistics in original units.
    pub stats: ColumnStats,
    /// The minimum of the normalised column.
    pub normalised_min: f64,
    /// The range of the normalised column.
    pub normalised_range: f64,
}

/// Normalise the objective columns of a solution table and provide the ticks to label each axis.
///
/// The column statistics are collected for all the objectives before any column is changed, and
/// each column is then normalised exactly once. The normaliser owns the table, therefore the
/// normalised values cannot be scaled again.
///
/// # Example
/// ```
///  use pcplot::core::{default_objectives, SolutionTable};
///  use pcplot::normalise::{AxisNormaliser, DegenerateColumnPolicy, TickSpacing};
///
///  let table = SolutionTable::new(vec![vec![0.0, 0.0], vec![5.0, 10.0], vec![10.0, 20.0]]).unwrap();
///  let normaliser =
///     AxisNormaliser::new(table, default_objectives(2), DegenerateColumnPolicy::Fail).unwrap();
///  let ticks = normaliser.ticks(0, 5, TickSpacing::Reference).unwrap();
///  assert_eq!(ticks.labels(), vec![0.0, 2.0, 4.0, 6.0, 8.0]);
/// ```
#[derive(Debug, Clone)]
pub struct AxisNormaliser {
    /// The normalised table.
    table: SolutionTable,
    /// The axes ordered by column.
    axes: Vec<ObjectiveAxis>,
}

impl AxisNormaliser {
    /// Calculate the statistics of all columns and normalise the table. This returns an error if
    /// the number of objectives does not match the number of table columns, if the objectives
    /// are not ordered by column or if a column range is zero and `policy` is
    /// [`DegenerateColumnPolicy::Fail`].
    ///
    /// # Arguments
    ///
    /// * `table`: The solution table in original units.
    /// * `objectives`: The objectives in column order.
    /// * `policy`: The action to take when a column range is zero.
    ///
    /// returns: `Result<AxisNormaliser, PcpError>`
    pub fn new(
        mut table: SolutionTable,
        objectives: Vec<Objective>,
        policy: DegenerateColumnPolicy,
    ) -> Result<Self, PcpError> {
        if objectives.len() != table.number_of_columns() {
            return Err(PcpError::ObjectiveMismatch(
                objectives.len(),
                table.number_of_columns(),
            ));
        }
        if let Some((position, o)) = objectives
            .iter()
            .enumerate()
            .find(|(position, o)| o.index() != *position)
        {
            return Err(PcpError::Generic(format!(
                "The objective '{}' at position {position} refers to column #{}",
                o.name(),
                o.index()
            )));
        }

        policy.validate()?;

        // snapshot the original units before any column is changed
        let stats = objectives
            .iter()
            .map(|o| {
                compute_column_stats(&table, o.index()).map_err(|e| match e {
                    PcpError::RangeOverflow(_) => {
                        PcpError::RangeOverflow(format!("the objective '{}'", o.name()))
                    }
                    e => e,
                })
            })
            .collect::<Result<Vec<ColumnStats>, PcpError>>()?;

        info!(
            "Normalising {} objectives for {} solutions",
            objectives.len(),
            table.number_of_rows()
        );
        let mut axes = Vec::with_capacity(objectives.len());
        for (objective, stats) in objectives.into_iter().zip(stats) {
            normalise_column_in_place(&mut table, &objective, &stats, policy)?;

            let column = table.column(objective.index())?;
            let normalised_min = vector_min(&column)?;
            let normalised_range = vector_max(&column)? - normalised_min;
            debug!(
                "{objective}: min = {}, max = {}, range = {}",
                stats.min, stats.max, stats.range
            );

            axes.push(ObjectiveAxis {
                objective,
                stats,
                normalised_min,
                normalised_range,
            });
        }

        Ok(Self { table, axes })
    }

    /// Get the normalised table.
    ///
    /// return: `&SolutionTable`
    pub fn table(&self) -> &SolutionTable {
        &self.table
    }

    /// Consume the normaliser and return the normalised table.
    ///
    /// return: `SolutionTable`
    pub fn into_table(self) -> SolutionTable {
        self.table
    }

    /// Get all the axes in column order.
    ///
    /// return: `&[ObjectiveAxis]`
    pub fn axes(&self) -> &[ObjectiveAxis] {
        &self.axes
    }

    /// Get an axis by position. This returns an error if the axis does not exist.
    ///
    /// # Arguments
    ///
    /// * `index`: The axis index.
    ///
    /// returns: `Result<&ObjectiveAxis, PcpError>`
    pub fn axis(&self, index: usize) -> Result<&ObjectiveAxis, PcpError> {
        self.axes
            .get(index)
            .ok_or(PcpError::NonExistingIndex("axis".to_string(), index))
    }

    /// The number of axes.
    pub fn number_of_axes(&self) -> usize {
        self.axes.len()
    }

    /// Build the ticks of an axis. Positions are spaced using the current extent of the
    /// normalised column and labels using the column's original statistics.
    ///
    /// # Arguments
    ///
    /// * `index`: The axis index.
    /// * `tick_count`: The number of ticks. This must be at least 2.
    /// * `spacing`: How the label step is calculated.
    ///
    /// returns: `Result<TickSet, PcpError>`
    pub fn ticks(
        &self,
        index: usize,
        tick_count: usize,
        spacing: TickSpacing,
    ) -> Result<TickSet, PcpError> {
        let axis = self.axis(index)?;
        build_ticks(
            &axis.stats,
            axis.normalised_min,
            axis.normalised_range,
            tick_count,
            spacing,
        )
    }
}
