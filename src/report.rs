use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::core::{default_objectives, objectives_from_names, Classification, PcpError};
use crate::io::{read_dominance_indices, read_solution_table, ReportExport};
use crate::normalise::{AxisNormaliser, DegenerateColumnPolicy, TickSet, TickSpacing};
#[cfg(feature = "plot")]
use crate::plot::{plot_parallel_coordinates, PlotOptions};

/// The default number of ticks on each axis.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Input arguments to build a parallel-coordinates report.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReportArg {
    /// The delimiter-separated file with the reference set. Each line is a solution and each
    /// field the value of an objective. The file has no header.
    pub table: PathBuf,
    /// The file with the row indices of the non-dominated solutions. When `None`, all
    /// solutions are dominated.
    pub non_dominated: Option<PathBuf>,
    /// The row index of the best-weighted solution.
    pub best_weighted: Option<usize>,
    /// The objective names in column order. This defaults to [`default_objectives`].
    pub objectives: Option<Vec<String>>,
    /// The field delimiter of both files. This defaults to `,`.
    pub delimiter: Option<char>,
    /// What to do with objectives whose values are all equal. This defaults to
    /// [`DegenerateColumnPolicy::Fail`].
    pub degenerate_policy: Option<DegenerateColumnPolicy>,
    /// The number of ticks on each axis. This defaults to [`DEFAULT_TICK_COUNT`].
    pub tick_count: Option<usize>,
    /// How tick labels are spaced. This defaults to [`TickSpacing::Reference`].
    pub spacing: Option<TickSpacing>,
    /// The options of the chart. This defaults to [`PlotOptions::default()`].
    #[cfg(feature = "plot")]
    pub plot: Option<PlotOptions>,
}

impl ReportArg {
    /// Create the arguments with the two input files only. All other options use their
    /// default value.
    ///
    /// # Arguments
    ///
    /// * `table`: The file with the reference set.
    /// * `non_dominated`: The file with the indices of the non-dominated solutions.
    ///
    /// returns: `ReportArg`
    pub fn new(table: &Path, non_dominated: Option<&Path>) -> Self {
        Self {
            table: table.to_path_buf(),
            non_dominated: non_dominated.map(|p| p.to_path_buf()),
            best_weighted: None,
            objectives: None,
            delimiter: None,
            degenerate_policy: None,
            tick_count: None,
            spacing: None,
            #[cfg(feature = "plot")]
            plot: None,
        }
    }

    /// Read the arguments from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `file`: The path to the JSON file.
    ///
    /// returns: `Result<ReportArg, PcpError>`
    pub fn from_json(file: &Path) -> Result<Self, PcpError> {
        let file_str = file.to_string_lossy().to_string();
        if !file.exists() {
            return Err(PcpError::Io(file_str, "the file does not exist".to_string()));
        }
        let data =
            fs::read_to_string(file).map_err(|e| PcpError::Io(file_str.clone(), e.to_string()))?;
        serde_json::from_str(&data).map_err(|e| {
            PcpError::Generic(format!(
                "Cannot parse the configuration file '{file_str}' because: {e}"
            ))
        })
    }

    /// The field delimiter as byte. This returns an error for non-ASCII characters.
    fn delimiter_byte(&self) -> Result<u8, PcpError> {
        let delimiter = self.delimiter.unwrap_or(',');
        if !delimiter.is_ascii() {
            return Err(PcpError::Generic(format!(
                "The delimiter '{delimiter}' must be an ASCII character"
            )));
        }
        Ok(delimiter as u8)
    }
}

/// A reference set loaded, classified and normalised, ready to be exported or drawn.
///
/// # Example
/// ```no_run
///  use std::path::Path;
///  use pcplot::{Report, ReportArg};
///
///  let mut args = ReportArg::new(
///     Path::new("GAA-reference-set.csv"),
///     Some(Path::new("non-dominated-index.csv")),
///  );
///  args.best_weighted = Some(560);
///  let report = Report::new(args).unwrap();
///  report.plot(Path::new("example.png")).unwrap();
/// ```
#[derive(Debug)]
pub struct Report {
    /// The arguments the report was built with.
    args: ReportArg,
    /// The normalised table and its axes.
    normaliser: AxisNormaliser,
    /// The category of each solution.
    classification: Classification,
}

impl Report {
    /// Load the input files, classify the solutions and normalise the table. Indices are
    /// validated before the table is normalised. This returns an error if a file cannot be
    /// read or is malformed, if an index is out of range or if an objective cannot be
    /// normalised.
    ///
    /// # Arguments
    ///
    /// * `args`: The report arguments.
    ///
    /// returns: `Result<Report, PcpError>`
    pub fn new(args: ReportArg) -> Result<Self, PcpError> {
        let delimiter = args.delimiter_byte()?;
        let tick_count = args.tick_count.unwrap_or(DEFAULT_TICK_COUNT);
        if tick_count < 2 {
            return Err(PcpError::TickCountTooSmall(tick_count));
        }

        let table = read_solution_table(&args.table, delimiter)?;
        let non_dominated = match &args.non_dominated {
            Some(file) => read_dominance_indices(file, delimiter)?,
            None => {
                warn!("No non-dominated solutions were provided");
                Vec::new()
            }
        };
        let classification =
            Classification::new(table.number_of_rows(), non_dominated, args.best_weighted)?;

        let objectives = match &args.objectives {
            Some(names) => objectives_from_names(names)?,
            None => default_objectives(table.number_of_columns()),
        };
        let normaliser = AxisNormaliser::new(
            table,
            objectives,
            args.degenerate_policy.unwrap_or_default(),
        )?;

        let count = classification.count();
        info!(
            "Loaded {} solutions: {} non-dominated, {} dominated",
            classification.row_count(),
            count.non_dominated + count.best_weighted,
            count.dominated
        );

        Ok(Self {
            args,
            normaliser,
            classification,
        })
    }

    /// Get the normaliser.
    ///
    /// return: `&AxisNormaliser`
    pub fn normaliser(&self) -> &AxisNormaliser {
        &self.normaliser
    }

    /// Get the classification.
    ///
    /// return: `&Classification`
    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    /// The number of ticks on each axis.
    pub fn tick_count(&self) -> usize {
        self.args.tick_count.unwrap_or(DEFAULT_TICK_COUNT)
    }

    /// The tick spacing.
    pub fn spacing(&self) -> TickSpacing {
        self.args.spacing.unwrap_or_default()
    }

    /// Build the ticks of all the axes.
    ///
    /// returns: `Result<Vec<TickSet>, PcpError>`
    pub fn ticks(&self) -> Result<Vec<TickSet>, PcpError> {
        (0..self.normaliser.number_of_axes())
            .map(|i| self.normaliser.ticks(i, self.tick_count(), self.spacing()))
            .collect()
    }

    /// Collect the axis data to export.
    ///
    /// returns: `Result<ReportExport, PcpError>`
    pub fn export(&self) -> Result<ReportExport, PcpError> {
        ReportExport::new(
            &self.normaliser,
            &self.classification,
            self.tick_count(),
            self.spacing(),
        )
    }

    /// Export the axis data to a JSON file.
    ///
    /// # Arguments
    ///
    /// * `file`: The path to the JSON file.
    ///
    /// returns: `Result<(), PcpError>`
    pub fn save_to_json(&self, file: &Path) -> Result<(), PcpError> {
        self.export()?.save_to_json(file)
    }

    /// Draw the parallel-coordinates chart and save it to an image.
    ///
    /// # Arguments
    ///
    /// * `file`: The path to the image. Use the `svg` extension to export a vector image.
    ///
    /// returns: `Result<(), PcpError>`
    #[cfg(feature = "plot")]
    pub fn plot(&self, file: &Path) -> Result<(), PcpError> {
        let options = self.args.plot.clone().unwrap_or_default();
        plot_parallel_coordinates(
            &self.normaliser,
            &self.classification,
            &self.ticks()?,
            &options,
            file,
        )
    }
}
