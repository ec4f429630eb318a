//! Text plots for the `graph` command.
//!
//! This module never evaluates expressions: it receives already validated
//! coefficients or vertices and renders them on a character grid with axes,
//! a title and a legend.

pub mod canvas;
pub mod curve;
pub mod shape;

use std::{fmt::Display, str::FromStr};

use thiserror::Error;

pub use canvas::Canvas;
pub use curve::{Curve, TrigFunction};
pub use shape::Shape;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlotError {
    #[error("a triangle needs exactly 3 vertices, received {received}")]
    TriangleVertexCount { received: usize },
    #[error("a polygon needs at least 3 vertices, received {received}")]
    TooFewVertices { received: usize },
    #[error("unknown graph type {name:?}")]
    UnknownGraph { name: String },
    #[error("invalid trigonometric function {name:?}, please enter 'sin', 'cos', or 'tan'")]
    UnknownTrigFunction { name: String },
}

/// Plot size in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            width: 72,
            height: 24,
        }
    }
}

/// The kinds of graph the `graph` command can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphKind {
    Linear,
    Quadratic,
    Cubic,
    Exponential,
    Trigonometric,
    Triangle,
    Polygon,
}

impl GraphKind {
    pub const ALL: [GraphKind; 7] = [
        GraphKind::Linear,
        GraphKind::Quadratic,
        GraphKind::Cubic,
        GraphKind::Exponential,
        GraphKind::Trigonometric,
        GraphKind::Triangle,
        GraphKind::Polygon,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GraphKind::Linear => "linear",
            GraphKind::Quadratic => "quadratic",
            GraphKind::Cubic => "cubic",
            GraphKind::Exponential => "exponential",
            GraphKind::Trigonometric => "trigonometric",
            GraphKind::Triangle => "triangle",
            GraphKind::Polygon => "polygon",
        }
    }

    /// Comma separated list of every kind, for prompts.
    pub fn supported() -> String {
        GraphKind::ALL
            .iter()
            .map(|kind| kind.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Display for GraphKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for GraphKind {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        GraphKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or(PlotError::UnknownGraph { name })
    }
}

pub fn render_curve(curve: &Curve, config: &PlotConfig) -> String {
    let (x_min, x_max) = curve.domain();
    let samples = config.width.max(2) * 4;

    let points = (0..samples)
        .map(|i| {
            let x = x_min + (x_max - x_min) * i as f64 / (samples - 1) as f64;
            (x, curve.evaluate(x))
        })
        .filter(|(_, y)| y.is_finite())
        .collect::<Vec<_>>();

    let y_range = curve.y_clip().unwrap_or_else(|| {
        points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), (_, y)| {
                (min.min(*y), max.max(*y))
            })
    });

    let mut canvas = Canvas::new(config, (x_min, x_max), y_range);
    canvas.draw_axes();
    for (x, y) in points {
        canvas.plot(x, y, '*');
    }

    canvas.render(&curve.title(), &format!("* {}", curve.label()))
}

pub fn render_shape(shape: &Shape, config: &PlotConfig) -> String {
    let vertices = shape.vertices();
    let (x_range, y_range) = shape::bounds(vertices);

    let mut canvas = Canvas::new(config, x_range, y_range);
    canvas.draw_axes();
    for edge in shape.closed_outline().windows(2) {
        canvas.line(edge[0], edge[1], '*');
    }
    for (x, y) in vertices {
        canvas.plot(*x, *y, 'o');
    }

    canvas.render(shape.name(), &format!("o-* {}", shape.name()))
}

#[cfg(test)]
mod tests {
    use super::{render_curve, render_shape, Curve, GraphKind, PlotConfig, PlotError, Shape, TrigFunction};

    #[test]
    fn test_graph_kind_from_str() {
        assert_eq!(" Linear ".parse::<GraphKind>(), Ok(GraphKind::Linear));
        assert_eq!("polygon".parse::<GraphKind>(), Ok(GraphKind::Polygon));
        assert_eq!(
            "spiral".parse::<GraphKind>(),
            Err(PlotError::UnknownGraph {
                name: "spiral".to_string()
            })
        );
        assert!(GraphKind::supported().starts_with("linear, quadratic"));
    }

    #[test]
    fn test_render_curve_layout() {
        let config = PlotConfig {
            width: 40,
            height: 12,
        };
        let plot = render_curve(&Curve::Linear { m: 2.0, b: 3.0 }, &config);
        let lines = plot.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 12 + 3);
        assert_eq!(lines[0], "Graph of y = mx + b");
        assert!(lines[1..13].iter().all(|line| line.chars().count() == 40));
        assert!(lines[14].contains("y = 2x + 3"));
        assert!(plot.contains('*'));
        assert!(plot.contains('|'));
    }

    #[test]
    fn test_render_tan_skips_poles() {
        let plot = render_curve(
            &Curve::Trigonometric(TrigFunction::Tan),
            &PlotConfig::default(),
        );

        assert!(plot.starts_with("Graph of y = tan(x)"));
        assert!(plot.contains("y: [-10, 10]"));
    }

    #[test]
    fn test_render_triangle() {
        let triangle = Shape::triangle(vec![(0.0, 0.0), (4.0, 0.0), (2.0, 3.0)]).unwrap();
        let plot = render_shape(&triangle, &PlotConfig::default());

        assert!(plot.starts_with("Triangle\n"));
        assert_eq!(plot.matches('o').count(), 3 + 1);
        assert!(plot.ends_with("legend: o-* Triangle"));
    }

    #[test]
    fn test_render_triangle_with_extreme_vertices() {
        let triangle = Shape::triangle(vec![(-1e308, 0.0), (1e308, 0.0), (0.0, 1.0)]).unwrap();
        let plot = render_shape(&triangle, &PlotConfig::default());

        assert!(plot.starts_with("Triangle\n"));
        assert_eq!(plot.matches('o').count(), 3 + 1);
        assert!(plot.ends_with("legend: o-* Triangle"));
    }
}
