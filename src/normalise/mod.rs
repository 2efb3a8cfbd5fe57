//! Scale the objective columns of a reference set to [0, 1] and map the original units to tick
//! positions on the shared plotting scale.
pub use column_stats::{compute_column_stats, ColumnStats};
pub use normaliser::{
    normalise_column_in_place, AxisNormaliser, DegenerateColumnPolicy, ObjectiveAxis,
};
pub use ticks::{build_ticks, Tick, TickSet, TickSpacing};

mod column_stats;
mod normaliser;
mod ticks;
