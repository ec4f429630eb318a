use super::PlotConfig;

/// A character grid mapped onto a rectangle of the plane.
///
/// Row 0 is the top of the plot. Points outside the rectangle are dropped.
pub struct Canvas {
    width: usize,
    height: usize,
    x_range: (f64, f64),
    y_range: (f64, f64),
    cells: Vec<Vec<char>>,
}

impl Canvas {
    pub fn new(config: &PlotConfig, x_range: (f64, f64), y_range: (f64, f64)) -> Self {
        let width = config.width.max(2);
        let height = config.height.max(2);

        Canvas {
            width,
            height,
            x_range: normalize_range(x_range),
            y_range: normalize_range(y_range),
            cells: vec![vec![' '; width]; height],
        }
    }

    pub fn x_range(&self) -> (f64, f64) {
        self.x_range
    }

    pub fn y_range(&self) -> (f64, f64) {
        self.y_range
    }

    /// Grid cell `(column, row)` for a point, if it is inside the plot.
    pub fn to_cell(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        let (x_min, x_max) = self.x_range;
        let (y_min, y_max) = self.y_range;

        if !x.is_finite() || !y.is_finite() || x < x_min || x > x_max || y < y_min || y > y_max {
            return None;
        }

        let column = (fraction(x, x_min, x_max) * (self.width - 1) as f64).round() as usize;
        let row = ((1.0 - fraction(y, y_min, y_max)) * (self.height - 1) as f64).round() as usize;

        Some((column.min(self.width - 1), row.min(self.height - 1)))
    }

    pub fn plot(&mut self, x: f64, y: f64, mark: char) {
        if let Some((column, row)) = self.to_cell(x, y) {
            self.cells[row][column] = mark;
        }
    }

    /// Draws the x and y axes where they fall inside the plot.
    pub fn draw_axes(&mut self) {
        let origin = self.to_cell(0.0, 0.0);

        if let Some((_, row)) = self.to_cell(self.x_range.0, 0.0) {
            self.cells[row].iter_mut().for_each(|cell| *cell = '-');
        }

        if let Some((column, _)) = self.to_cell(0.0, self.y_range.0) {
            for row in self.cells.iter_mut() {
                row[column] = '|';
            }
        }

        if let Some((column, row)) = origin {
            self.cells[row][column] = '+';
        }
    }

    /// Draws a straight segment, one mark per crossed cell.
    pub fn line(&mut self, from: (f64, f64), to: (f64, f64), mark: char) {
        let (x_min, x_max) = self.x_range;
        let (y_min, y_max) = self.y_range;
        let cells_x = (fraction(to.0, x_min, x_max) - fraction(from.0, x_min, x_max)).abs() * self.width as f64;
        let cells_y = (fraction(to.1, y_min, y_max) - fraction(from.1, y_min, y_max)).abs() * self.height as f64;

        // A segment never crosses more cells than the grid has along its edges.
        let limit = ((self.width + self.height) * 4) as f64;
        let cells = cells_x.max(cells_y);
        let cells = if cells.is_finite() { cells.ceil().clamp(1.0, limit) } else { limit };
        let steps = (cells as usize).saturating_mul(2);

        for step in 0..=steps {
            let t = step as f64 / steps as f64;
            self.plot(from.0 * (1.0 - t) + to.0 * t, from.1 * (1.0 - t) + to.1 * t, mark);
        }
    }

    pub fn render(&self, title: &str, legend: &str) -> String {
        let mut lines = Vec::with_capacity(self.height + 3);
        lines.push(title.to_string());
        lines.extend(self.cells.iter().map(|row| row.iter().collect::<String>()));
        lines.push(format!(
            "x: [{}, {}]  y: [{}, {}]",
            format_bound(self.x_range.0),
            format_bound(self.x_range.1),
            format_bound(self.y_range.0),
            format_bound(self.y_range.1)
        ));
        lines.push(format!("legend: {}", legend));

        lines.join("\n")
    }
}

fn normalize_range((min, max): (f64, f64)) -> (f64, f64) {
    if !min.is_finite() || !max.is_finite() || min > max {
        return (-1.0, 1.0);
    }

    if max - min < f64::EPSILON {
        let padding = (min.abs() * 0.1).max(1.0);
        return (min - padding, max + padding);
    }

    (min, max)
}

/// Where `value` sits between `min` and `max`, as 0.0 to 1.0.
///
/// Works on halves so that ranges as wide as the whole `f64` line do not
/// overflow to infinity.
fn fraction(value: f64, min: f64, max: f64) -> f64 {
    (value / 2.0 - min / 2.0) / (max / 2.0 - min / 2.0)
}

fn format_bound(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');

    match trimmed {
        "-0" => String::from("0"),
        other => other.to_string(),
    }
}
