//! The interactive read loop.
//!
//! Every line is routed to one of three places: the static help listing, the
//! `graph` dialogue (which collects coefficients and hands them to
//! [`crate::plot`]), or the expression evaluator.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::{debug, info};

use crate::{
    caret_at_position,
    errors::errors::{Error, ErrorTip},
    lexer::vocabulary::STANDARD_VOCABULARY,
    parser::parser::evaluate,
    plot::{render_curve, render_shape, Curve, GraphKind, PlotConfig, PlotError, Shape, TrigFunction},
};

#[derive(Debug, Clone)]
pub struct ReplConfig {
    pub prompt: String,
    pub plot: PlotConfig,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: String::from("Calc> "),
            plot: PlotConfig::default(),
        }
    }
}

/// Failures while collecting the parameters of a graph.
#[derive(Error, Debug)]
pub enum GraphInputError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("input ended before the graph was complete")]
    EndOfInput,
    #[error("{input:?} is not a finite number")]
    InvalidNumber { input: String },
    #[error("{input:?} is not a vertex count")]
    InvalidCount { input: String },
    #[error(transparent)]
    Plot(#[from] PlotError),
}

/// Renders a result the way the loop prints it: `14.0`, `0.5`, `inf`, `NaN`.
pub fn format_value(value: f64) -> String {
    format!("{:?}", value)
}

pub fn help_text() -> String {
    let mut lines = vec![
        String::from("**Available Commands**:"),
        String::from("+ (Addition): Adds two numbers."),
        String::from("- (Subtraction): Subtracts two numbers."),
        String::from("* (Multiplication): Multiplies two numbers."),
        String::from("/ (Division): Divides two numbers."),
        String::from("^ (Power): Raises a number to a power, right-associative."),
        String::from("() (Parentheses): Used to group expressions for order of operations."),
        String::from("sqrt(x) or √(x) (Square Root): Calculates the square root of a number."),
        String::from("log(x), ln(x) (Logarithm): Natural logarithm of x."),
        String::from("log(x, base) (Logarithm): Calculates the logarithm of x to the given base."),
        String::from("sin(x) (Sine): Calculates the sine of an angle in radians."),
        String::from("cos(x) (Cosine): Calculates the cosine of an angle in radians."),
        String::from("tan(x) (Tangent): Calculates the tangent of an angle in radians."),
    ];

    for (name, value) in STANDARD_VOCABULARY.constants() {
        lines.push(format!("{} (Constant): {}", name, value));
    }

    lines.extend([
        String::from("**Graph Plotting**:"),
        String::from("graph: Starts the process to plot different types of graphs."),
        String::from("    linear: Plots a linear equation of the form y = mx + b."),
        String::from("    quadratic: Plots a quadratic equation of the form y = ax^2 + bx + c."),
        String::from("    cubic: Plots a cubic equation of the form y = ax^3 + bx^2 + cx + d."),
        String::from("    exponential: Plots an exponential equation of the form y = a * e^(bx)."),
        String::from("    trigonometric: Plots trigonometric functions (sin, cos, tan)."),
        String::from("    triangle: Plots a triangle given the coordinates of its vertices."),
        String::from("    polygon: Plots a polygon given the coordinates of its vertices."),
        String::from("Example of using graph plotting:"),
        String::from("    graph -> linear -> Enter the coefficient m: 2 -> Enter the coefficient b: 3"),
        String::from("This will plot the graph of y = 2x + 3."),
    ]);

    lines.join("\n")
}

pub struct Repl<R, W> {
    input: R,
    output: W,
    config: ReplConfig,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(input: R, output: W, config: ReplConfig) -> Self {
        Repl {
            input,
            output,
            config,
        }
    }

    /// Prompts and handles lines until the input is exhausted.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.output, "{}", self.config.prompt)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                info!("end of input, leaving");
                return Ok(());
            };

            self.handle_line(&line)?;
        }
    }

    pub fn handle_line(&mut self, line: &str) -> io::Result<()> {
        let command = line.trim().to_lowercase();

        if command.is_empty() {
            return Ok(());
        }

        if command == "help" {
            return writeln!(self.output, "{}", help_text());
        }

        if command.starts_with("graph") {
            return self.graph();
        }

        match evaluate(line) {
            Ok(value) => writeln!(self.output, "{}", format_value(value)),
            Err(error) => self.report(line, &error),
        }
    }

    fn report(&mut self, line: &str, error: &Error) -> io::Result<()> {
        writeln!(self.output, "Error: {}", error)?;
        writeln!(self.output, "{}", caret_at_position(line, error.get_position()))?;
        if let ErrorTip::Suggestion(tip) = error.get_tip() {
            writeln!(self.output, "Tip: {}", tip)?;
        }
        writeln!(self.output, "Please check your input and try again.")
    }

    fn graph(&mut self) -> io::Result<()> {
        match self.collect_graph() {
            Ok(plot) => writeln!(self.output, "{}", plot),
            Err(GraphInputError::Io(error)) => Err(error),
            Err(GraphInputError::EndOfInput) => Ok(()),
            Err(GraphInputError::Plot(PlotError::UnknownGraph { name })) => {
                debug!(name = %name, "unknown graph type");
                writeln!(
                    self.output,
                    "Currently supported types: {}.",
                    GraphKind::supported()
                )
            }
            Err(error) => {
                writeln!(self.output, "Error: {}", error)?;
                writeln!(self.output, "Please check your input and try again.")
            }
        }
    }

    fn collect_graph(&mut self) -> Result<String, GraphInputError> {
        let kind = self
            .ask(&format!("Enter type of equation ({}): ", GraphKind::supported()))?
            .parse::<GraphKind>()?;
        debug!(%kind, "collecting graph parameters");

        let curve = match kind {
            GraphKind::Linear => Curve::Linear {
                m: self.ask_number("Enter the coefficient m: ")?,
                b: self.ask_number("Enter the coefficient b: ")?,
            },
            GraphKind::Quadratic => Curve::Quadratic {
                a: self.ask_number("Enter the coefficient a: ")?,
                b: self.ask_number("Enter the coefficient b: ")?,
                c: self.ask_number("Enter the coefficient c: ")?,
            },
            GraphKind::Cubic => Curve::Cubic {
                a: self.ask_number("Enter the coefficient a: ")?,
                b: self.ask_number("Enter the coefficient b: ")?,
                c: self.ask_number("Enter the coefficient c: ")?,
                d: self.ask_number("Enter the coefficient d: ")?,
            },
            GraphKind::Exponential => Curve::Exponential {
                a: self.ask_number("Enter the coefficient a: ")?,
                b: self.ask_number("Enter the coefficient b: ")?,
            },
            GraphKind::Trigonometric => Curve::Trigonometric(
                self.ask("Enter the trigonometric function (sin, cos, tan): ")?
                    .parse::<TrigFunction>()?,
            ),
            GraphKind::Triangle => {
                let shape = Shape::triangle(self.ask_vertices(3)?)?;
                return Ok(render_shape(&shape, &self.config.plot));
            }
            GraphKind::Polygon => {
                let answer = self.ask("Enter the number of vertices: ")?;
                let count = answer
                    .parse::<usize>()
                    .map_err(|_| GraphInputError::InvalidCount { input: answer })?;
                let shape = Shape::polygon(self.ask_vertices(count)?)?;
                return Ok(render_shape(&shape, &self.config.plot));
            }
        };

        Ok(render_curve(&curve, &self.config.plot))
    }

    fn ask_vertices(&mut self, count: usize) -> Result<Vec<(f64, f64)>, GraphInputError> {
        (1..=count)
            .map(|i| {
                let x = self.ask_number(&format!("Enter x{}: ", i))?;
                let y = self.ask_number(&format!("Enter y{}: ", i))?;
                Ok((x, y))
            })
            .collect()
    }

    fn ask_number(&mut self, prompt: &str) -> Result<f64, GraphInputError> {
        let answer = self.ask(prompt)?;

        match answer.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(GraphInputError::InvalidNumber { input: answer }),
        }
    }

    /// Prompts once and returns the trimmed reply.
    fn ask(&mut self, prompt: &str) -> Result<String, GraphInputError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        match self.read_line()? {
            Some(line) => Ok(line.trim().to_string()),
            None => Err(GraphInputError::EndOfInput),
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}
