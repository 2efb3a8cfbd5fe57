//! Draw parallel-coordinates plots (PCP) of the reference set of a multi-objective optimisation
//! problem.
//!
//! The reference set is a table where each row is a solution and each column an objective. Each
//! objective column is scaled to [0, 1] so that all objectives share the same plotting scale,
//! while the axis ticks keep showing the values in the objective's original units. Solutions are
//! drawn as lines crossing one vertical axis per objective and are coloured depending on whether
//! they are dominated, non-dominated or the best-weighted solution.
//!
//! The [`Report`] loads the input files and ties the steps together:
//! ```no_run
//!  use std::path::Path;
//!  use pcplot::{Report, ReportArg};
//!
//!  let args = ReportArg::new(
//!     Path::new("GAA-reference-set.csv"),
//!     Some(Path::new("non-dominated-index.csv")),
//!  );
//!  let report = Report::new(args).unwrap();
//!  report.save_to_json(Path::new("axes.json")).unwrap();
//! ```
pub use report::{Report, ReportArg, DEFAULT_TICK_COUNT};

pub mod core;
pub mod io;
pub mod normalise;
#[cfg(feature = "plot")]
pub mod plot;
mod report;
