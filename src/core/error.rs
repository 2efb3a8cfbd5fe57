use thiserror::Error;

#[derive(Error, Debug)]
/// Errors raised by the library.
pub enum PcpError {
    #[error("The following error occurred: {0}")]
    Generic(String),
    #[error("The solution table does not contain any row")]
    EmptyTable,
    #[error("The {0} index {1} does not exist")]
    NonExistingIndex(String, usize),
    #[error("The {0} named '{1}' already exist")]
    DuplicatedName(String, String),
    #[error("The table has {1} columns but {0} objectives were provided")]
    ObjectiveMismatch(usize, usize),
    #[error("The values of the objective '{0}' are all equal and the column cannot be normalised")]
    DegenerateColumn(String),
    #[error("The range of {0} is too large to be represented and the column cannot be normalised")]
    RangeOverflow(String),
    #[error("Constant columns can only be filled with a finite number, but {0} was given")]
    InvalidFillValue(f64),
    #[error("The {0} index {1} is out of range. The table only has {2} rows")]
    IndexOutOfRange(String, usize, usize),
    #[error("At least 2 ticks are needed to build an axis, but {0} were requested")]
    TickCountTooSmall(usize),
    #[error("The file '{0}' is malformed: {1}")]
    MalformedInput(String, String),
    #[error("Cannot read the file '{0}' because: {1}")]
    Io(String, String),
    #[error("An error occurred when exporting the report data: {0}")]
    Export(String),
    #[error("An error occurred when drawing the chart: {0}")]
    Plot(String),
}
