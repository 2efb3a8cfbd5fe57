use std::collections::BTreeSet;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info};

use crate::core::{PcpError, SolutionTable};

/// Open a delimiter-separated file without header. Records may have a different number of fields;
/// the callers validate the shape.
fn open_reader(
    file: &Path,
    delimiter: u8,
) -> Result<csv::Reader<std::fs::File>, PcpError> {
    let file_str = file.to_string_lossy().to_string();
    if !file.exists() {
        return Err(PcpError::Io(file_str, "the file does not exist".to_string()));
    }
    ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .flexible(true)
        .trim(Trim::All)
        .from_path(file)
        .map_err(|e| PcpError::Io(file_str, e.to_string()))
}

/// Iterate over the file records, converting parsing errors.
fn records<'a>(
    reader: &'a mut csv::Reader<std::fs::File>,
    file_str: &str,
) -> impl Iterator<Item = Result<StringRecord, PcpError>> + 'a {
    let file_str = file_str.to_string();
    reader
        .records()
        .map(move |r| r.map_err(|e| PcpError::MalformedInput(file_str.clone(), e.to_string())))
}

/// Load the solution table from a delimiter-separated file with no header. Each line is a
/// solution and each field the value of an objective. This returns an error if the file cannot
/// be read, if a value is not a finite number or if the rows have a different number of values.
///
/// # Arguments
///
/// * `file`: The path to the file.
/// * `delimiter`: The field delimiter.
///
/// returns: `Result<SolutionTable, PcpError>`
pub fn read_solution_table(file: &Path, delimiter: u8) -> Result<SolutionTable, PcpError> {
    let file_str = file.to_string_lossy().to_string();
    info!("Loading the solution table from {file_str}");

    let mut reader = open_reader(file, delimiter)?;
    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (r, record) in records(&mut reader, &file_str).enumerate() {
        let record = record?;
        let row = record
            .iter()
            .enumerate()
            .map(|(c, cell)| {
                cell.parse::<f64>().map_err(|_| {
                    PcpError::MalformedInput(
                        file_str.clone(),
                        format!(
                            "the value '{cell}' at row #{} and column #{} is not a number",
                            r + 1,
                            c + 1
                        ),
                    )
                })
            })
            .collect::<Result<Vec<f64>, PcpError>>()?;
        rows.push(row);
    }

    let table = SolutionTable::new(rows).map_err(|e| match e {
        PcpError::MalformedInput(_, message) => PcpError::MalformedInput(file_str.clone(), message),
        e => e,
    })?;
    debug!(
        "Loaded {} solutions with {} objectives",
        table.number_of_rows(),
        table.number_of_columns()
    );
    Ok(table)
}

/// Load the row indices of the non-dominated solutions. The indices can be separated by the
/// delimiter, by new lines or both, and may be encoded as floats (for example `560.0`). Repeated
/// indices are collapsed and the result is sorted. This returns an error if a field is not a
/// non-negative integer.
///
/// # Arguments
///
/// * `file`: The path to the file.
/// * `delimiter`: The field delimiter.
///
/// returns: `Result<Vec<usize>, PcpError>`
pub fn read_dominance_indices(file: &Path, delimiter: u8) -> Result<Vec<usize>, PcpError> {
    let file_str = file.to_string_lossy().to_string();
    info!("Loading the non-dominated indices from {file_str}");

    let mut reader = open_reader(file, delimiter)?;
    let mut indices = BTreeSet::new();
    for record in records(&mut reader, &file_str) {
        for field in record?.iter().filter(|f| !f.is_empty()) {
            indices.insert(parse_index(field).ok_or_else(|| {
                PcpError::MalformedInput(
                    file_str.clone(),
                    format!("'{field}' is not a valid row index"),
                )
            })?);
        }
    }
    debug!("Loaded {} non-dominated indices", indices.len());

    Ok(indices.into_iter().collect())
}

/// Parse a row index that may be encoded as a float.
fn parse_index(field: &str) -> Option<usize> {
    if let Ok(index) = field.parse::<usize>() {
        return Some(index);
    }
    let value = field.parse::<f64>().ok()?;
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= usize::MAX as f64 {
        Some(value as usize)
    } else {
        None
    }
}

#[cfg(test)]
mod test {
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    use crate::core::PcpError;
    use crate::io::{read_dominance_indices, read_solution_table};

    /// Write a file in the temporary folder and return its path.
    fn temp_file(name: &str, content: &str) -> PathBuf {
        let file = env::temp_dir().join(format!("pcplot_{}_{name}", std::process::id()));
        fs::write(&file, content).unwrap();
        file
    }

    #[test]
    fn test_read_table() {
        let file = temp_file("table.csv", "0,0\n5, 10\n10,20\n");
        let table = read_solution_table(&file, b',').unwrap();
        assert_eq!(table.number_of_rows(), 3);
        assert_eq!(table.column(1).unwrap(), vec![0.0, 10.0, 20.0]);

        let file = temp_file("table_tab.txt", "1.5\t2e3\n-3\t4\n");
        let table = read_solution_table(&file, b'\t').unwrap();
        assert_eq!(table.row(0).unwrap(), &[1.5, 2000.0]);
    }

    #[test]
    fn test_read_table_not_a_number() {
        let file = temp_file("table_nan.csv", "0,0\n5,abc\n");
        let err = read_solution_table(&file, b',').unwrap_err();
        assert!(matches!(err, PcpError::MalformedInput(..)));
        assert!(
            err.to_string()
                .contains("the value 'abc' at row #2 and column #2 is not a number"),
            "{}",
            err
        );
    }

    #[test]
    fn test_read_ragged_table() {
        let file = temp_file("table_ragged.csv", "0,0,1\n5,1\n");
        let err = read_solution_table(&file, b',').unwrap_err();
        assert!(
            err.to_string().contains("table_ragged.csv")
                && err.to_string().contains("row #2 has 2 values, but 3 were expected"),
            "{}",
            err
        );
    }

    #[test]
    fn test_missing_file() {
        let file = env::temp_dir().join("pcplot_this_file_does_not_exist.csv");
        assert!(matches!(
            read_solution_table(&file, b','),
            Err(PcpError::Io(..))
        ));
    }

    #[test]
    fn test_read_indices() {
        let file = temp_file("nd.csv", "4,1,7\n2\n560.0,1\n");
        let indices = read_dominance_indices(&file, b',').unwrap();
        assert_eq!(indices, vec![1, 2, 4, 7, 560]);

        let file = temp_file("nd_trailing.csv", "0,3,5,\n");
        assert_eq!(read_dominance_indices(&file, b',').unwrap(), vec![0, 3, 5]);
    }

    #[test]
    fn test_read_wrong_indices() {
        for (name, content) in [("nd_frac.csv", "1,2.5"), ("nd_neg.csv", "-1"), ("nd_txt.csv", "a")]
        {
            let file = temp_file(name, content);
            let err = read_dominance_indices(&file, b',').unwrap_err();
            assert!(err.to_string().contains("is not a valid row index"), "{}", err);
        }
    }
}
