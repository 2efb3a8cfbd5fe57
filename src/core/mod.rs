pub use classification::{CategoryCount, Classification, SolutionCategory};
pub use error::PcpError;
pub use objective::{default_objectives, objectives_from_names, Objective, GAA_OBJECTIVES};
pub use table::SolutionTable;

mod classification;
mod error;
mod objective;
mod table;
pub(crate) mod test_utils;
pub mod utils;
