pub use export::{AxisExport, ReportExport};
pub use loader::{read_dominance_indices, read_solution_table};

mod export;
mod loader;
