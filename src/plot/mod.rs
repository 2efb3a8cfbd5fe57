//! Draw parallel-coordinates charts with `plotters`.
pub use chart::{plot_parallel_coordinates, PlotOptions};
pub use style::{CategoryStyle, ColourScheme};

mod chart;
mod style;
