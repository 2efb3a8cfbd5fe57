use std::fmt::{Display, Formatter};
use std::str::FromStr;

use plotters::style::{Color, RGBColor, ShapeStyle};
use serde::{Deserialize, Serialize};

use crate::core::SolutionCategory;

/// The colours used to draw the three categories of solutions.
#[derive(Default, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ColourScheme {
    /// Blue non-dominated solutions, a dark orange best-weighted solution and light grey
    /// dominated solutions.
    #[default]
    Reference,
    /// Teal non-dominated solutions, a crimson best-weighted solution and grey dominated
    /// solutions.
    Contrast,
}

/// How a category of solutions is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CategoryStyle {
    /// The line colour.
    pub colour: RGBColor,
    /// The line opacity between 0 and 1.
    pub opacity: f64,
    /// The line width in pixels.
    pub stroke_width: u32,
}

impl CategoryStyle {
    /// Convert to the style used by the drawing backend.
    pub fn shape_style(&self) -> ShapeStyle {
        ShapeStyle {
            color: self.colour.mix(self.opacity),
            filled: false,
            stroke_width: self.stroke_width,
        }
    }
}

impl ColourScheme {
    /// Get the style to draw a category of solutions with.
    ///
    /// # Arguments
    ///
    /// * `category`: The solution category.
    ///
    /// returns: `CategoryStyle`
    pub fn style(&self, category: SolutionCategory) -> CategoryStyle {
        let (colour, opacity, stroke_width) = match (self, category) {
            (ColourScheme::Reference, SolutionCategory::NonDominated) => {
                (RGBColor(0, 0, 255), 0.3, 2)
            }
            (ColourScheme::Reference, SolutionCategory::BestWeighted) => {
                (RGBColor(255, 140, 0), 1.0, 3)
            }
            (ColourScheme::Reference, SolutionCategory::Dominated) => {
                (RGBColor(211, 211, 211), 0.4, 2)
            }
            (ColourScheme::Contrast, SolutionCategory::NonDominated) => {
                (RGBColor(0, 128, 128), 0.35, 2)
            }
            (ColourScheme::Contrast, SolutionCategory::BestWeighted) => {
                (RGBColor(220, 20, 60), 1.0, 3)
            }
            (ColourScheme::Contrast, SolutionCategory::Dominated) => {
                (RGBColor(128, 128, 128), 0.25, 1)
            }
        };
        CategoryStyle {
            colour,
            opacity,
            stroke_width,
        }
    }
}

impl Display for ColourScheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ColourScheme::Reference => f.write_str("reference"),
            ColourScheme::Contrast => f.write_str("contrast"),
        }
    }
}

impl FromStr for ColourScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reference" => Ok(ColourScheme::Reference),
            "contrast" => Ok(ColourScheme::Contrast),
            _ => Err(format!(
                "'{s}' is not a valid colour scheme. Use 'reference' or 'contrast'"
            )),
        }
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use crate::core::SolutionCategory;
    use crate::plot::ColourScheme;

    #[test]
    fn test_scheme_style() {
        let scheme = ColourScheme::Reference;
        let best = scheme.style(SolutionCategory::BestWeighted);
        let dominated = scheme.style(SolutionCategory::Dominated);
        assert_eq!(best.opacity, 1.0);
        assert!(best.opacity > dominated.opacity);
        assert!(best.stroke_width > dominated.stroke_width);
        assert_ne!(best.colour, dominated.colour);
    }

    #[test]
    fn test_parse_scheme() {
        assert_eq!(
            ColourScheme::from_str("Contrast").unwrap(),
            ColourScheme::Contrast
        );
        assert!(ColourScheme::from_str("rainbow").is_err());
    }
}
