use super::PlotError;

/// A closed outline through a list of vertices.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Triangle(Vec<(f64, f64)>),
    Polygon(Vec<(f64, f64)>),
}

impl Shape {
    pub fn triangle(vertices: Vec<(f64, f64)>) -> Result<Self, PlotError> {
        if vertices.len() != 3 {
            return Err(PlotError::TriangleVertexCount {
                received: vertices.len(),
            });
        }

        Ok(Shape::Triangle(vertices))
    }

    pub fn polygon(vertices: Vec<(f64, f64)>) -> Result<Self, PlotError> {
        if vertices.len() < 3 {
            return Err(PlotError::TooFewVertices {
                received: vertices.len(),
            });
        }

        Ok(Shape::Polygon(vertices))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Shape::Triangle(_) => "Triangle",
            Shape::Polygon(_) => "Polygon",
        }
    }

    pub fn vertices(&self) -> &[(f64, f64)] {
        match self {
            Shape::Triangle(vertices) | Shape::Polygon(vertices) => vertices,
        }
    }

    /// The vertices followed by the first one again.
    pub fn closed_outline(&self) -> Vec<(f64, f64)> {
        let vertices = self.vertices();
        let mut outline = vertices.to_vec();
        outline.extend(vertices.first().copied());
        outline
    }
}

/// Bounding box of the vertices with a 10% margin on every side.
pub fn bounds(vertices: &[(f64, f64)]) -> ((f64, f64), (f64, f64)) {
    let (x_min, x_max, y_min, y_max) = vertices.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY),
        |(x_min, x_max, y_min, y_max), (x, y)| (x_min.min(*x), x_max.max(*x), y_min.min(*y), y_max.max(*y)),
    );

    (with_margin(x_min, x_max), with_margin(y_min, y_max))
}

/// Widens `min..max` by a tenth of its width on both sides, saturating at the
/// largest finite values.
fn with_margin(min: f64, max: f64) -> (f64, f64) {
    let margin = max * 0.1 - min * 0.1;

    (
        (min - margin).clamp(f64::MIN, f64::MAX),
        (max + margin).clamp(f64::MIN, f64::MAX),
    )
}

#[cfg(test)]
mod tests {
    use super::{bounds, Shape};
    use crate::plot::PlotError;

    #[test]
    fn test_vertex_counts() {
        assert!(Shape::triangle(vec![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]).is_ok());
        assert_eq!(
            Shape::triangle(vec![(0.0, 0.0), (1.0, 0.0)]),
            Err(PlotError::TriangleVertexCount { received: 2 })
        );
        assert_eq!(
            Shape::polygon(vec![]),
            Err(PlotError::TooFewVertices { received: 0 })
        );
        assert!(Shape::polygon(vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).is_ok());
    }

    #[test]
    fn test_closed_outline() {
        let square = Shape::polygon(vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
        let outline = square.closed_outline();

        assert_eq!(outline.len(), 5);
        assert_eq!(outline.first(), outline.last());
    }

    #[test]
    fn test_bounds_margin() {
        let (x_range, y_range) = bounds(&[(0.0, 0.0), (10.0, 20.0)]);

        assert_eq!(x_range, (-1.0, 11.0));
        assert_eq!(y_range, (-2.0, 22.0));
    }

    #[test]
    fn test_bounds_stay_finite_for_extreme_vertices() {
        let (x_range, y_range) = bounds(&[(-1.7e308, 0.0), (1.7e308, 0.0), (0.0, 1.0)]);

        assert_eq!(x_range, (f64::MIN, f64::MAX));
        assert!(y_range.0.is_finite() && y_range.1.is_finite());
    }
}
