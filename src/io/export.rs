use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::{CategoryCount, Classification, PcpError};
use crate::normalise::{AxisNormaliser, ColumnStats, TickSet, TickSpacing};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
/// The exported data of one objective axis.
pub struct AxisExport {
    /// The objective name.
    pub name: String,
    /// The column index.
    pub index: usize,
    /// The column statistics in original units.
    pub stats: ColumnStats,
    /// The minimum of the normalised column.
    pub normalised_min: f64,
    /// The range of the normalised column.
    pub normalised_range: f64,
    /// The axis ticks.
    pub ticks: TickSet,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
/// The struct used to export the axis scales of a parallel-coordinates chart, so that the chart
/// can be drawn by a different tool.
pub struct ReportExport {
    /// The objective axes in column order.
    pub axes: Vec<AxisExport>,
    /// The number of solutions in the reference set.
    pub solutions: usize,
    /// The number of solutions in each category.
    pub categories: CategoryCount,
    /// The index of the best-weighted solution.
    pub best_weighted: Option<usize>,
    /// The number of ticks on each axis.
    pub tick_count: usize,
    /// The tick spacing used to build the labels.
    pub spacing: TickSpacing,
}

impl ReportExport {
    /// Collect the data to export. This returns an error if the ticks cannot be built.
    ///
    /// # Arguments
    ///
    /// * `normaliser`: The normaliser with the axis data.
    /// * `classification`: The solution classification.
    /// * `tick_count`: The number of ticks on each axis.
    /// * `spacing`: The tick spacing.
    ///
    /// returns: `Result<ReportExport, PcpError>`
    pub fn new(
        normaliser: &AxisNormaliser,
        classification: &Classification,
        tick_count: usize,
        spacing: TickSpacing,
    ) -> Result<Self, PcpError> {
        let axes = normaliser
            .axes()
            .iter()
            .enumerate()
            .map(|(i, axis)| {
                Ok(AxisExport {
                    name: axis.objective.name().to_string(),
                    index: axis.objective.index(),
                    stats: axis.stats,
                    normalised_min: axis.normalised_min,
                    normalised_range: axis.normalised_range,
                    ticks: normaliser.ticks(i, tick_count, spacing)?,
                })
            })
            .collect::<Result<Vec<AxisExport>, PcpError>>()?;

        Ok(Self {
            axes,
            solutions: classification.row_count(),
            categories: classification.count(),
            best_weighted: classification.best_weighted(),
            tick_count,
            spacing,
        })
    }

    /// Save the data to a JSON file. This returns an error if the file cannot be saved.
    ///
    /// # Arguments
    ///
    /// * `file`: The path to the JSON file.
    ///
    /// returns: `Result<(), PcpError>`
    pub fn save_to_json(&self, file: &Path) -> Result<(), PcpError> {
        let data = serde_json::to_string_pretty(self).map_err(|e| {
            PcpError::Export(format!(
                "The following error occurred while converting the report struct: {e}"
            ))
        })?;

        info!("Saving JSON file {:?}", file);
        fs::write(file, data).map_err(|e| {
            PcpError::Export(format!(
                "The following error occurred while exporting the report JSON file: {e}",
            ))
        })
    }

    /// Read the data previously exported with [`Self::save_to_json`].
    ///
    /// # Arguments
    ///
    /// * `file`: The path to the JSON file.
    ///
    /// returns: `Result<ReportExport, PcpError>`
    pub fn read_from_json(file: &Path) -> Result<Self, PcpError> {
        let file_str = file.to_string_lossy().to_string();
        if !file.exists() {
            return Err(PcpError::Io(file_str, "the file does not exist".to_string()));
        }
        let data = fs::File::open(file).map_err(|e| PcpError::Io(file_str.clone(), e.to_string()))?;

        serde_json::from_reader(data).map_err(|e| {
            PcpError::Generic(format!(
                "Cannot parse the JSON file '{file_str}' because: {e}"
            ))
        })
    }
}
