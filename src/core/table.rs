use crate::core::PcpError;

/// The reference set loaded as a matrix. Each row is a solution and each column holds the values
/// of one objective. All rows have the same length and all values are finite.
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionTable {
    /// The rows with the objective values.
    rows: Vec<Vec<f64>>,
    /// The number of columns shared by all rows.
    number_of_columns: usize,
}

impl SolutionTable {
    /// Create the table from its rows. This returns an error if there are no rows, if the rows
    /// have a different length or if any value is not finite.
    ///
    /// # Arguments
    ///
    /// * `rows`: The solutions. Each nested vector contains the objective values of a solution.
    ///
    /// returns: `Result<SolutionTable, PcpError>`
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, PcpError> {
        let number_of_columns = match rows.first() {
            None => return Err(PcpError::EmptyTable),
            Some(first) => first.len(),
        };
        if number_of_columns == 0 {
            return Err(PcpError::MalformedInput(
                "table".to_string(),
                "the first row does not contain any value".to_string(),
            ));
        }

        for (r, row) in rows.iter().enumerate() {
            if row.len() != number_of_columns {
                return Err(PcpError::MalformedInput(
                    "table".to_string(),
                    format!(
                        "row #{} has {} values, but {} were expected",
                        r + 1,
                        row.len(),
                        number_of_columns
                    ),
                ));
            }
            if let Some(c) = row.iter().position(|v| !v.is_finite()) {
                return Err(PcpError::MalformedInput(
                    "table".to_string(),
                    format!("the value at row #{} and column #{} is not finite", r + 1, c + 1),
                ));
            }
        }

        Ok(Self {
            rows,
            number_of_columns,
        })
    }

    /// The number of solutions.
    pub fn number_of_rows(&self) -> usize {
        self.rows.len()
    }

    /// The number of objective columns.
    pub fn number_of_columns(&self) -> usize {
        self.number_of_columns
    }

    /// Get all the rows.
    ///
    /// return: `&[Vec<f64>]`
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Get a row by index. This returns an error if the row does not exist.
    ///
    /// # Arguments
    ///
    /// * `index`: The row index.
    ///
    /// returns: `Result<&[f64], PcpError>`
    pub fn row(&self, index: usize) -> Result<&[f64], PcpError> {
        self.rows
            .get(index)
            .map(|r| r.as_slice())
            .ok_or(PcpError::NonExistingIndex("row".to_string(), index))
    }

    /// Collect the values of one column. This returns an error if the column does not exist.
    ///
    /// # Arguments
    ///
    /// * `index`: The column index.
    ///
    /// returns: `Result<Vec<f64>, PcpError>`
    pub fn column(&self, index: usize) -> Result<Vec<f64>, PcpError> {
        self.check_column(index)?;
        Ok(self.rows.iter().map(|r| r[index]).collect())
    }

    /// Apply `f` to every cell of a column. This returns an error if the column does not exist.
    ///
    /// # Arguments
    ///
    /// * `index`: The column index.
    /// * `f`: The function returning the new cell value from the current one.
    ///
    /// returns: `Result<(), PcpError>`
    pub(crate) fn map_column<F: Fn(f64) -> f64>(
        &mut self,
        index: usize,
        f: F,
    ) -> Result<(), PcpError> {
        self.check_column(index)?;
        for row in self.rows.iter_mut() {
            row[index] = f(row[index]);
        }
        Ok(())
    }

    fn check_column(&self, index: usize) -> Result<(), PcpError> {
        if index >= self.number_of_columns {
            return Err(PcpError::NonExistingIndex("column".to_string(), index));
        }
        Ok(())
    }
}
