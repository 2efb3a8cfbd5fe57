use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::core::PcpError;

/// The names of the ten objectives of the General Aviation Aircraft (GAA) reference set, in the
/// order their columns appear in the table.
pub const GAA_OBJECTIVES: [&str; 10] = [
    "NOISE", "WEMP", "DOC", "ROUGH", "WFUEL", "PURCH", "RANGE", "LDMAX", "VCMAX", "PFPF",
];

/// An objective plotted on one of the parallel axes. The index is the table column holding the
/// objective values and also the axis position from left to right.
///
/// # Example
/// ```
///  use pcplot::core::Objective;
///
///  let o = Objective::new("NOISE", 0);
///  println!("{}", o);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Objective {
    /// The objective name.
    name: String,
    /// The column index in the solution table.
    index: usize,
}

impl Objective {
    /// Create a new objective.
    ///
    /// # Arguments
    ///
    /// * `name`: The objective name.
    /// * `index`: The column index in the solution table.
    ///
    /// returns: `Objective`
    pub fn new(name: &str, index: usize) -> Self {
        Self {
            name: name.to_string(),
            index,
        }
    }

    /// Get the objective name.
    ///
    /// return: `&str`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the column index.
    ///
    /// return: `usize`
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Display for Objective {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Objective '{}' (column #{})", self.name, self.index + 1)
    }
}

/// Build the ordered list of objectives from their names. The position of each name is used as
/// column index. This returns an error if a name is repeated.
///
/// # Arguments
///
/// * `names`: The objective names, in column order.
///
/// returns: `Result<Vec<Objective>, PcpError>`
pub fn objectives_from_names<S: AsRef<str>>(names: &[S]) -> Result<Vec<Objective>, PcpError> {
    let mut seen = HashSet::new();
    names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let name = name.as_ref().trim();
            if !seen.insert(name.to_string()) {
                return Err(PcpError::DuplicatedName(
                    "objective".to_string(),
                    name.to_string(),
                ));
            }
            Ok(Objective::new(name, index))
        })
        .collect()
}

/// Get the default objectives for a table with `number_of_columns` columns. The GAA names are used
/// when the table has ten columns, otherwise the objectives are named `Objective #<n>`.
///
/// # Arguments
///
/// * `number_of_columns`: The number of columns in the solution table.
///
/// returns: `Vec<Objective>`
pub fn default_objectives(number_of_columns: usize) -> Vec<Objective> {
    if number_of_columns == GAA_OBJECTIVES.len() {
        GAA_OBJECTIVES
            .iter()
            .enumerate()
            .map(|(i, name)| Objective::new(name, i))
            .collect()
    } else {
        (0..number_of_columns)
            .map(|i| Objective::new(&format!("Objective #{}", i + 1), i))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use crate::core::objective::{default_objectives, objectives_from_names, GAA_OBJECTIVES};

    #[test]
    fn test_objectives_from_names() {
        let objectives = objectives_from_names(&["NOISE", " WEMP "]).unwrap();
        assert_eq!(objectives[1].name(), "WEMP");
        assert_eq!(objectives[1].index(), 1);

        let err = objectives_from_names(&["NOISE", "NOISE"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The objective named 'NOISE' already exist"
        );
    }

    #[test]
    fn test_default_objectives() {
        let objectives = default_objectives(10);
        let names: Vec<&str> = objectives.iter().map(|o| o.name()).collect();
        assert_eq!(names, GAA_OBJECTIVES.to_vec());

        let objectives = default_objectives(3);
        assert_eq!(objectives[2].name(), "Objective #3");
    }
}
