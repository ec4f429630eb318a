use std::{f64::consts::PI, fmt::Display, str::FromStr};

use super::PlotError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrigFunction {
    Sin,
    Cos,
    Tan,
}

impl TrigFunction {
    pub fn apply(&self, x: f64) -> f64 {
        match self {
            TrigFunction::Sin => x.sin(),
            TrigFunction::Cos => x.cos(),
            TrigFunction::Tan => x.tan(),
        }
    }
}

impl Display for TrigFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrigFunction::Sin => write!(f, "sin"),
            TrigFunction::Cos => write!(f, "cos"),
            TrigFunction::Tan => write!(f, "tan"),
        }
    }
}

impl FromStr for TrigFunction {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sin" => Ok(TrigFunction::Sin),
            "cos" => Ok(TrigFunction::Cos),
            "tan" => Ok(TrigFunction::Tan),
            other => Err(PlotError::UnknownTrigFunction {
                name: other.to_string(),
            }),
        }
    }
}

/// A curve `y = f(x)` given by its coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    Linear { m: f64, b: f64 },
    Quadratic { a: f64, b: f64, c: f64 },
    Cubic { a: f64, b: f64, c: f64, d: f64 },
    /// `y = a * e^(bx)`
    Exponential { a: f64, b: f64 },
    Trigonometric(TrigFunction),
}

impl Curve {
    pub fn evaluate(&self, x: f64) -> f64 {
        match *self {
            Curve::Linear { m, b } => m * x + b,
            Curve::Quadratic { a, b, c } => a * x.powi(2) + b * x + c,
            Curve::Cubic { a, b, c, d } => a * x.powi(3) + b * x.powi(2) + c * x + d,
            Curve::Exponential { a, b } => a * (b * x).exp(),
            Curve::Trigonometric(function) => function.apply(x),
        }
    }

    /// Range of x the curve is sampled over.
    pub fn domain(&self) -> (f64, f64) {
        match self {
            Curve::Linear { .. } | Curve::Quadratic { .. } | Curve::Cubic { .. } => (-10.0, 10.0),
            Curve::Exponential { .. } => (-2.0, 2.0),
            Curve::Trigonometric(_) => (-2.0 * PI, 2.0 * PI),
        }
    }

    /// Fixed y range for curves whose values blow up inside the domain.
    pub fn y_clip(&self) -> Option<(f64, f64)> {
        match self {
            Curve::Trigonometric(TrigFunction::Tan) => Some((-10.0, 10.0)),
            _ => None,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Curve::Linear { m, b } => format!("y = {}x + {}", m, b),
            Curve::Quadratic { a, b, c } => format!("y = {}x^2 + {}x + {}", a, b, c),
            Curve::Cubic { a, b, c, d } => format!("y = {}x^3 + {}x^2 + {}x + {}", a, b, c, d),
            Curve::Exponential { a, b } => format!("y = {}e^({}x)", a, b),
            Curve::Trigonometric(function) => format!("y = {}(x)", function),
        }
    }

    pub fn title(&self) -> String {
        match self {
            Curve::Linear { .. } => String::from("Graph of y = mx + b"),
            Curve::Quadratic { .. } => String::from("Graph of y = ax^2 + bx + c"),
            Curve::Cubic { .. } => String::from("Graph of y = ax^3 + bx^2 + cx + d"),
            Curve::Exponential { .. } => String::from("Graph of y = a * e^(bx)"),
            Curve::Trigonometric(function) => format!("Graph of y = {}(x)", function),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Curve, TrigFunction};

    #[test]
    fn test_evaluate() {
        assert_eq!(Curve::Linear { m: 2.0, b: 3.0 }.evaluate(1.5), 6.0);
        assert_eq!(Curve::Quadratic { a: 1.0, b: -2.0, c: 1.0 }.evaluate(1.0), 0.0);
        assert_eq!(
            Curve::Cubic { a: 1.0, b: 0.0, c: 0.0, d: -8.0 }.evaluate(2.0),
            0.0
        );
        assert_eq!(Curve::Exponential { a: 3.0, b: 1.0 }.evaluate(0.0), 3.0);
        assert_eq!(Curve::Trigonometric(TrigFunction::Cos).evaluate(0.0), 1.0);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Curve::Linear { m: 2.0, b: 3.5 }.label(), "y = 2x + 3.5");
        assert_eq!(Curve::Exponential { a: 1.0, b: -0.5 }.label(), "y = 1e^(-0.5x)");
        assert_eq!(Curve::Trigonometric(TrigFunction::Sin).label(), "y = sin(x)");
    }

    #[test]
    fn test_trig_function_from_str() {
        assert_eq!(" TAN".parse::<TrigFunction>(), Ok(TrigFunction::Tan));
        assert!("sec".parse::<TrigFunction>().is_err());
    }
}
