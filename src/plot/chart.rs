use std::ffi::OsStr;
use std::fmt::Display;
use std::path::Path;

use log::{debug, info};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use serde::{Deserialize, Serialize};

use crate::core::{Classification, PcpError, SolutionCategory};
use crate::normalise::{AxisNormaliser, TickSet};
use crate::plot::ColourScheme;

static FONT: &str = "sans-serif";
/// The space above and below the [0, 1] plotting range.
const Y_PADDING: f64 = 0.05;
/// The length of the tick marks in pixels.
const TICK_LENGTH: i32 = 4;

/// The options to draw a parallel-coordinates chart.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlotOptions {
    /// The image width in pixels.
    pub width: u32,
    /// The image height in pixels.
    pub height: u32,
    /// The chart title.
    pub title: String,
    /// The line colours.
    pub scheme: ColourScheme,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            width: 1500,
            height: 500,
            title: "PCP Example".to_string(),
            scheme: ColourScheme::Reference,
        }
    }
}

/// Map a drawing error to the library error.
fn plot_error<E: Display>(e: E) -> PcpError {
    PcpError::Plot(e.to_string())
}

/// Format a tick label in original units.
fn format_label(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Draw the parallel-coordinates chart of a normalised reference set and save it to `file`.
/// Each objective is a vertical axis and each solution a line crossing all axes. Neighbouring
/// axes delimit a panel, so `N` objectives produce `N-1` panels. Each axis is labelled with
/// ticks in the objective's original units; the last panel also carries the ticks of the last
/// objective on its right side.
///
/// The image is saved as SVG when the file extension is `svg` and as bitmap otherwise, with the
/// format taken from the extension (for example `png`).
///
/// # Arguments
///
/// * `normaliser`: The normaliser with the normalised table and the axis data.
/// * `classification`: The category of each solution.
/// * `ticks`: The ticks of each axis, built with [`AxisNormaliser::ticks`].
/// * `options`: The chart options.
/// * `file`: The path to the image.
///
/// returns: `Result<(), PcpError>`
pub fn plot_parallel_coordinates(
    normaliser: &AxisNormaliser,
    classification: &Classification,
    ticks: &[TickSet],
    options: &PlotOptions,
    file: &Path,
) -> Result<(), PcpError> {
    if normaliser.number_of_axes() < 2 {
        return Err(PcpError::Plot(
            "At least two objectives are needed to draw the chart".to_string(),
        ));
    }
    if classification.row_count() != normaliser.table().number_of_rows() {
        return Err(PcpError::Plot(format!(
            "The classification has {} solutions, but the table has {} rows",
            classification.row_count(),
            normaliser.table().number_of_rows()
        )));
    }
    if ticks.len() != normaliser.number_of_axes() {
        return Err(PcpError::Plot(format!(
            "{} tick sets were provided for {} axes",
            ticks.len(),
            normaliser.number_of_axes()
        )));
    }

    info!("Saving chart {:?}", file);
    let size = (options.width, options.height);
    if file.extension() == Some(OsStr::new("svg")) {
        let root = SVGBackend::new(file, size).into_drawing_area();
        draw(&root, normaliser, classification, ticks, options)
    } else {
        let root = BitMapBackend::new(file, size).into_drawing_area();
        draw(&root, normaliser, classification, ticks, options)
    }
}

/// Draw the chart on the backend.
fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    normaliser: &AxisNormaliser,
    classification: &Classification,
    ticks: &[TickSet],
    options: &PlotOptions,
) -> Result<(), PcpError> {
    root.fill(&WHITE).map_err(plot_error)?;
    let title_style =
        TextStyle::from((FONT, 24).into_font()).pos(Pos::new(HPos::Center, VPos::Top));
    root.draw(&Text::new(
        options.title.as_str(),
        ((options.width / 2) as i32, 8),
        title_style,
    ))
    .map_err(plot_error)?;
    let body = root.margin(40, 0, 0, 0);

    let legend_width = (options.width as f64 * 0.15) as u32;
    let (plot_area, legend_area) =
        body.split_horizontally(options.width.saturating_sub(legend_width));
    let plot_area = plot_area.margin(5, 30, 60, 60);

    let number_of_panels = normaliser.number_of_axes() - 1;
    let panels = plot_area.split_evenly((1, number_of_panels));
    let rows = classification.drawing_order();
    let table = normaliser.table();

    let left_label =
        TextStyle::from((FONT, 12).into_font()).pos(Pos::new(HPos::Right, VPos::Center));
    let right_label =
        TextStyle::from((FONT, 12).into_font()).pos(Pos::new(HPos::Left, VPos::Center));
    let name_label =
        TextStyle::from((FONT, 14).into_font()).pos(Pos::new(HPos::Center, VPos::Top));

    for (p, panel) in panels.iter().enumerate() {
        let x0 = p as f64;
        let x1 = x0 + 1.0;
        let mut chart = ChartBuilder::on(panel)
            .build_cartesian_2d(x0..x1, -Y_PADDING..1.0 + Y_PADDING)
            .map_err(plot_error)?;

        // one segment per solution between the panel's two axes
        let mut lines = Vec::with_capacity(rows.len());
        for (r, category) in rows.iter() {
            let values = table.row(*r)?;
            let style = options.scheme.style(*category).shape_style();
            lines.push(PathElement::new(
                vec![(x0, values[p]), (x1, values[p + 1])],
                style,
            ));
        }
        chart.draw_series(lines).map_err(plot_error)?;
        debug!("Drawn panel #{} with {} solutions", p + 1, rows.len());

        // left axis
        draw_axis(root, &chart, x0, &ticks[p], -TICK_LENGTH, &left_label)?;
        let name = normaliser.axis(p)?.objective.name().to_string();
        draw_axis_name(root, &chart, x0, name, &name_label)?;

        // twin axis with the last objective on the right of the last panel
        if p == number_of_panels - 1 {
            draw_axis(root, &chart, x1, &ticks[p + 1], TICK_LENGTH, &right_label)?;
            let name = normaliser.axis(p + 1)?.objective.name().to_string();
            draw_axis_name(root, &chart, x1, name, &name_label)?;
        }
    }

    draw_legend(&legend_area, classification, options.scheme)?;
    root.present().map_err(plot_error)?;
    Ok(())
}

/// Draw a vertical axis with its ticks and labels at `x`. The ticks point left when
/// `tick_length` is negative and right otherwise. This draws on the root area because labels
/// fall outside the panel.
fn draw_axis<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &ChartContext<DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    x: f64,
    ticks: &TickSet,
    tick_length: i32,
    label_style: &TextStyle,
) -> Result<(), PcpError> {
    let bottom = chart.backend_coord(&(x, 0.0));
    let top = chart.backend_coord(&(x, 1.0));
    root.draw(&PathElement::new(vec![bottom, top], BLACK.stroke_width(1)))
        .map_err(plot_error)?;

    for tick in ticks.ticks() {
        let (px, py) = chart.backend_coord(&(x, tick.position));
        root.draw(&PathElement::new(
            vec![(px, py), (px + tick_length, py)],
            BLACK.stroke_width(1),
        ))
        .map_err(plot_error)?;
        root.draw(&Text::new(
            format_label(tick.label),
            (px + 2 * tick_length, py),
            label_style.clone(),
        ))
        .map_err(plot_error)?;
    }
    Ok(())
}

/// Write the objective name below the axis at `x`.
fn draw_axis_name<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &ChartContext<DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    x: f64,
    name: String,
    label_style: &TextStyle,
) -> Result<(), PcpError> {
    let (px, py) = chart.backend_coord(&(x, -Y_PADDING));
    root.draw(&Text::new(name, (px, py + 8), label_style.clone()))
        .map_err(plot_error)?;
    Ok(())
}

/// Draw one legend entry for each category with at least one solution.
fn draw_legend<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    classification: &Classification,
    scheme: ColourScheme,
) -> Result<(), PcpError> {
    let count = classification.count();
    let entries = [
        (SolutionCategory::NonDominated, count.non_dominated),
        (SolutionCategory::BestWeighted, count.best_weighted),
        (SolutionCategory::Dominated, count.dominated),
    ];
    let label_style =
        TextStyle::from((FONT, 14).into_font()).pos(Pos::new(HPos::Left, VPos::Center));

    let mut y = 20;
    for (category, _) in entries.iter().filter(|(_, n)| *n > 0) {
        let style = scheme.style(*category);
        area.draw(&PathElement::new(
            vec![(10, y), (40, y)],
            style.colour.stroke_width(style.stroke_width),
        ))
        .map_err(plot_error)?;
        area.draw(&Text::new(category.to_string(), (48, y), label_style.clone()))
            .map_err(plot_error)?;
        y += 22;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use std::env;

    use crate::core::{default_objectives, Classification, PcpError, SolutionTable};
    use crate::normalise::{AxisNormaliser, DegenerateColumnPolicy, TickSet, TickSpacing};
    use crate::plot::chart::format_label;
    use crate::plot::{plot_parallel_coordinates, PlotOptions};

    fn normaliser(columns: usize) -> AxisNormaliser {
        let rows = (0..6)
            .map(|r| (0..columns).map(|c| (r * (c + 1)) as f64).collect())
            .collect();
        let table = SolutionTable::new(rows).unwrap();
        AxisNormaliser::new(table, default_objectives(columns), DegenerateColumnPolicy::Fail)
            .unwrap()
    }

    fn ticks(normaliser: &AxisNormaliser) -> Vec<TickSet> {
        (0..normaliser.number_of_axes())
            .map(|i| normaliser.ticks(i, 10, TickSpacing::Reference).unwrap())
            .collect()
    }

    #[test]
    fn test_format_label() {
        assert_eq!(format_label(2.0), "2.0");
        assert_eq!(format_label(71.35), "71.35");
    }

    #[test]
    fn test_wrong_arguments() {
        let file = env::temp_dir().join("pcplot_not_saved.svg");
        let options = PlotOptions::default();

        // one axis only
        let n = normaliser(1);
        let c = Classification::new(6, vec![0], None).unwrap();
        assert!(matches!(
            plot_parallel_coordinates(&n, &c, &ticks(&n), &options, &file),
            Err(PcpError::Plot(_))
        ));

        // wrong classification size
        let n = normaliser(3);
        let c = Classification::new(5, vec![0], None).unwrap();
        assert!(plot_parallel_coordinates(&n, &c, &ticks(&n), &options, &file).is_err());

        // missing ticks
        let c = Classification::new(6, vec![0], None).unwrap();
        let err = plot_parallel_coordinates(&n, &c, &ticks(&n)[0..2], &options, &file)
            .unwrap_err();
        assert!(err.to_string().contains("2 tick sets were provided for 3 axes"));
    }

    #[test]
    fn test_plot_svg() {
        let n = normaliser(4);
        let c = Classification::new(6, vec![1, 3, 5], Some(3)).unwrap();
        let file = env::temp_dir().join(format!("pcplot_{}_chart.svg", std::process::id()));
        plot_parallel_coordinates(&n, &c, &ticks(&n), &PlotOptions::default(), &file).unwrap();

        let content = std::fs::read_to_string(&file).unwrap();
        assert!(content.contains("<svg"));
        assert!(content.contains("Objective #4"));
        assert!(content.contains("Best-weighted"));
    }
}
