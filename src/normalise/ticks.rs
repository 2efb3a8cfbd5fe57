use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::core::utils::round_to;
use crate::core::PcpError;
use crate::normalise::ColumnStats;

/// The number of decimal places tick positions and labels are rounded to.
const TICK_DECIMALS: i32 = 2;

/// How the label step is calculated with respect to the position step.
#[derive(Default, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum TickSpacing {
    /// The label step divides the column range by the number of ticks, while the position step
    /// divides the normalised range by the number of ticks minus one. The last label is therefore
    /// one step below the column maximum. This reproduces the reference charts exactly.
    #[default]
    Reference,
    /// Both steps divide their range by the number of ticks minus one, so that each label is the
    /// original value at its position and the last label is the column maximum.
    Consistent,
}

impl Display for TickSpacing {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TickSpacing::Reference => f.write_str("reference"),
            TickSpacing::Consistent => f.write_str("consistent"),
        }
    }
}

/// A tick on a vertical axis.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// The tick position in plotting units.
    pub position: f64,
    /// The value shown next to the tick, in the objective's original units.
    pub label: f64,
}

/// The ordered ticks of an axis.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TickSet {
    ticks: Vec<Tick>,
}

impl TickSet {
    /// Get the ticks.
    ///
    /// return: `&[Tick]`
    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    /// Get the tick positions.
    ///
    /// return: `Vec<f64>`
    pub fn positions(&self) -> Vec<f64> {
        self.ticks.iter().map(|t| t.position).collect()
    }

    /// Get the tick labels.
    ///
    /// return: `Vec<f64>`
    pub fn labels(&self) -> Vec<f64> {
        self.ticks.iter().map(|t| t.label).collect()
    }

    /// The number of ticks.
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    /// Whether there are no ticks.
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }
}

/// Build evenly spaced ticks for an axis. Labels are spaced in the column's original units using
/// the range in `stats`; positions are independently spaced in plotting units using the current
/// minimum and range of the normalised column. Both are rounded to two decimal places.
///
/// With [`TickSpacing::Reference`]:
///  - `label[i] = round(stats.min + i * stats.range / tick_count, 2)`
///  - `position[i] = round(normalised_min + i * normalised_range / (tick_count - 1), 2)`
///
/// # Arguments
///
/// * `stats`: The column statistics in original units, collected before normalisation.
/// * `normalised_min`: The minimum of the normalised column.
/// * `normalised_range`: The range of the normalised column.
/// * `tick_count`: The number of ticks. This must be at least 2.
/// * `spacing`: How the label step is calculated.
///
/// returns: `Result<TickSet, PcpError>`
pub fn build_ticks(
    stats: &ColumnStats,
    normalised_min: f64,
    normalised_range: f64,
    tick_count: usize,
    spacing: TickSpacing,
) -> Result<TickSet, PcpError> {
    if tick_count < 2 {
        return Err(PcpError::TickCountTooSmall(tick_count));
    }

    let label_divisor = match spacing {
        TickSpacing::Reference => tick_count as f64,
        TickSpacing::Consistent => (tick_count - 1) as f64,
    };
    let label_step = stats.range / label_divisor;
    let position_step = normalised_range / (tick_count - 1) as f64;

    let ticks = (0..tick_count)
        .map(|i| Tick {
            position: round_to(normalised_min + position_step * i as f64, TICK_DECIMALS),
            label: round_to(stats.min + label_step * i as f64, TICK_DECIMALS),
        })
        .collect();

    Ok(TickSet { ticks })
}

#[cfg(test)]
mod test {
    use crate::core::test_utils::assert_approx_array_eq;
    use crate::core::PcpError;
    use crate::normalise::{build_ticks, ColumnStats, TickSpacing};

    fn stats(min: f64, max: f64) -> ColumnStats {
        ColumnStats {
            min,
            max,
            range: max - min,
        }
    }

    #[test]
    /// Labels use a step of range/5 while positions use a step of 1/4
    fn test_reference_spacing() {
        let ticks = build_ticks(&stats(0.0, 10.0), 0.0, 1.0, 5, TickSpacing::Reference).unwrap();
        assert_eq!(ticks.len(), 5);
        assert_approx_array_eq(&ticks.labels(), &[0.0, 2.0, 4.0, 6.0, 8.0]);
        assert_approx_array_eq(&ticks.positions(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_consistent_spacing() {
        let ticks = build_ticks(&stats(0.0, 10.0), 0.0, 1.0, 5, TickSpacing::Consistent).unwrap();
        assert_approx_array_eq(&ticks.labels(), &[0.0, 2.5, 5.0, 7.5, 10.0]);
        assert_approx_array_eq(&ticks.positions(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_ascending_and_rounded() {
        let ticks = build_ticks(&stats(71.3456, 74.9871), 0.0, 1.0, 10, TickSpacing::Reference)
            .unwrap();
        assert_eq!(ticks.len(), 10);
        for pair in ticks.ticks().windows(2) {
            assert!(pair[1].position > pair[0].position);
            assert!(pair[1].label >= pair[0].label);
        }
        assert_eq!(ticks.labels()[0], 71.35);
        assert_eq!(ticks.positions()[1], 0.11);
        assert_eq!(ticks.positions()[9], 1.0);
    }

    #[test]
    fn test_too_few_ticks() {
        for count in [0, 1] {
            let err = build_ticks(&stats(0.0, 1.0), 0.0, 1.0, count, TickSpacing::Reference)
                .unwrap_err();
            assert!(matches!(err, PcpError::TickCountTooSmall(c) if c == count));
        }
        assert!(build_ticks(&stats(0.0, 1.0), 0.0, 1.0, 2, TickSpacing::Reference).is_ok());
    }

    #[test]
    /// A constant column does not produce NaN
    fn test_zero_range() {
        let ticks = build_ticks(&stats(4.0, 4.0), 0.5, 0.0, 3, TickSpacing::Reference).unwrap();
        assert_approx_array_eq(&ticks.labels(), &[4.0, 4.0, 4.0]);
        assert_approx_array_eq(&ticks.positions(), &[0.5, 0.5, 0.5]);
    }
}
