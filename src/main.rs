use std::error::Error;
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum, ValueHint};
use log::{info, LevelFilter};

use pcplot::normalise::{DegenerateColumnPolicy, TickSpacing};
use pcplot::plot::ColourScheme;
use pcplot::{Report, ReportArg};

/// The value constant columns are set to when `--degenerate constant` is given.
const DEFAULT_FILL_VALUE: f64 = 0.5;

/// What to do with objectives whose values are all equal.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum DegenerateMode {
    /// Stop with an error naming the objective.
    Fail,
    /// Draw the objective as a flat line at `--degenerate-value`.
    Constant,
}

/// Draw the parallel-coordinates plot of a multi-objective reference set.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// The delimiter-separated file with the reference set (one solution per line, no header).
    #[arg(short, long, value_hint = ValueHint::FilePath, required_unless_present = "config")]
    table: Option<PathBuf>,

    /// The file with the row indices of the non-dominated solutions.
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    non_dominated: Option<PathBuf>,

    /// The row index of the best-weighted solution.
    #[arg(short, long)]
    best_weighted: Option<usize>,

    /// The image to save. Use the `svg` extension for a vector image.
    #[arg(short, long, default_value = "example.png", value_hint = ValueHint::FilePath)]
    output: PathBuf,

    /// Export the axis statistics and ticks to this JSON file.
    #[arg(long, value_hint = ValueHint::FilePath)]
    export_json: Option<PathBuf>,

    /// Do not draw the chart.
    #[arg(long, action = ArgAction::SetTrue)]
    no_plot: bool,

    /// The comma-separated objective names, in column order.
    #[arg(long, value_delimiter = ',')]
    objectives: Option<Vec<String>>,

    /// The field delimiter of the input files.
    #[arg(short, long)]
    delimiter: Option<char>,

    /// The number of ticks on each axis.
    #[arg(long)]
    ticks: Option<usize>,

    /// Space tick labels so that the last label is the objective maximum.
    #[arg(long, action = ArgAction::SetTrue)]
    consistent_ticks: bool,

    /// What to do with objectives whose values are all equal.
    #[arg(long, value_enum)]
    degenerate: Option<DegenerateMode>,

    /// The value, between 0 and 1, constant objectives are drawn at [default: 0.5]. This
    /// implies `--degenerate constant`.
    #[arg(long)]
    degenerate_value: Option<f64>,

    /// The line colours: `reference` or `contrast`.
    #[arg(long)]
    scheme: Option<ColourScheme>,

    /// The chart title.
    #[arg(long)]
    title: Option<String>,

    /// The image width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// The image height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// A JSON file with the report arguments. Command line options take precedence.
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Show debug messages.
    #[arg(long, action = ArgAction::SetTrue)]
    debug: bool,
}

impl Cli {
    /// Merge the command line options into the arguments read from the configuration file.
    fn report_arg(&self) -> Result<ReportArg, Box<dyn Error>> {
        let mut args = match (&self.config, &self.table) {
            (Some(file), _) => ReportArg::from_json(file)?,
            (None, Some(table)) => ReportArg::new(table, None),
            (None, None) => return Err("The table file is required".into()),
        };

        if let Some(table) = &self.table {
            args.table = table.clone();
        }
        if self.non_dominated.is_some() {
            args.non_dominated = self.non_dominated.clone();
        }
        if self.best_weighted.is_some() {
            args.best_weighted = self.best_weighted;
        }
        if self.objectives.is_some() {
            args.objectives = self.objectives.clone();
        }
        if self.delimiter.is_some() {
            args.delimiter = self.delimiter;
        }
        if self.ticks.is_some() {
            args.tick_count = self.ticks;
        }
        if self.consistent_ticks {
            args.spacing = Some(TickSpacing::Consistent);
        }
        match (self.degenerate, self.degenerate_value) {
            (Some(DegenerateMode::Fail), _) => {
                args.degenerate_policy = Some(DegenerateColumnPolicy::Fail)
            }
            (Some(DegenerateMode::Constant), value) => {
                args.degenerate_policy = Some(DegenerateColumnPolicy::Constant(
                    value.unwrap_or(DEFAULT_FILL_VALUE),
                ))
            }
            (None, Some(value)) => {
                args.degenerate_policy = Some(DegenerateColumnPolicy::Constant(value))
            }
            (None, None) => {}
        }

        let mut plot = args.plot.clone().unwrap_or_default();
        if let Some(scheme) = self.scheme {
            plot.scheme = scheme;
        }
        if let Some(title) = &self.title {
            plot.title = title.clone();
        }
        if let Some(width) = self.width {
            plot.width = width;
        }
        if let Some(height) = self.height {
            plot.height = height;
        }
        args.plot = Some(plot);

        Ok(args)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let level = if cli.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::builder().filter_level(level).init();

    let report = Report::new(cli.report_arg()?)?;

    if let Some(file) = &cli.export_json {
        report.save_to_json(file)?;
    }
    if !cli.no_plot {
        report.plot(&cli.output)?;
    }
    info!("Done");

    Ok(())
}

#[cfg(test)]
mod test {
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};

    use pcplot::normalise::{DegenerateColumnPolicy, TickSpacing};
    use pcplot::plot::{ColourScheme, PlotOptions};
    use pcplot::ReportArg;

    use crate::Cli;

    /// Write a configuration file in the temporary folder and return its path.
    fn config_file(name: &str, args: &ReportArg) -> PathBuf {
        let file = env::temp_dir().join(format!("pcplot_cli_{}_{name}", std::process::id()));
        fs::write(&file, serde_json::to_string(args).unwrap()).unwrap();
        file
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    /// Flags given on the command line replace the values of the configuration file
    fn test_flags_override_config() {
        let mut config = ReportArg::new(&PathBuf::from("set.csv"), None);
        config.best_weighted = Some(3);
        config.tick_count = Some(8);
        config.degenerate_policy = Some(DegenerateColumnPolicy::Fail);
        config.plot = Some(PlotOptions {
            title: "From config".to_string(),
            ..PlotOptions::default()
        });
        let file = config_file("override.json", &config);
        let file_str = file.to_string_lossy().to_string();

        let cli = Cli::try_parse_from([
            "pcplot",
            "--config",
            file_str.as_str(),
            "--table",
            "other.csv",
            "--ticks",
            "4",
            "--consistent-ticks",
            "--degenerate",
            "constant",
            "--scheme",
            "contrast",
        ])
        .unwrap();
        let args = cli.report_arg().unwrap();
        assert_eq!(args.table, PathBuf::from("other.csv"));
        assert_eq!(args.tick_count, Some(4));
        assert_eq!(args.spacing, Some(TickSpacing::Consistent));
        assert_eq!(
            args.degenerate_policy,
            Some(DegenerateColumnPolicy::Constant(0.5))
        );
        // options without a flag keep the configuration value
        assert_eq!(args.best_weighted, Some(3));
        let plot = args.plot.unwrap();
        assert_eq!(plot.title, "From config");
        assert_eq!(plot.scheme, ColourScheme::Contrast);

        let cli = Cli::try_parse_from(["pcplot", "--config", file_str.as_str()]).unwrap();
        assert_eq!(cli.report_arg().unwrap().tick_count, Some(8));
    }

    #[test]
    fn test_degenerate_flags() {
        let policy = |flags: &[&str]| {
            let mut argv = vec!["pcplot", "--table", "set.csv"];
            argv.extend_from_slice(flags);
            Cli::try_parse_from(argv)
                .unwrap()
                .report_arg()
                .unwrap()
                .degenerate_policy
        };
        assert_eq!(policy(&[]), None);
        assert_eq!(
            policy(&["--degenerate", "fail"]),
            Some(DegenerateColumnPolicy::Fail)
        );
        assert_eq!(
            policy(&["--degenerate", "constant", "--degenerate-value", "0.2"]),
            Some(DegenerateColumnPolicy::Constant(0.2))
        );
        assert_eq!(
            policy(&["--degenerate-value", "1"]),
            Some(DegenerateColumnPolicy::Constant(1.0))
        );
        assert!(Cli::try_parse_from(["pcplot", "--table", "set.csv", "--degenerate", "skip"])
            .is_err());
        assert!(Cli::try_parse_from(["pcplot", "--best-weighted", "2"]).is_err());
    }
}
