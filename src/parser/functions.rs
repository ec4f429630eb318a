//! Domain-checked math functions used by the grammar.

use crate::errors::errors::ErrorImpl;

pub fn sqrt(x: f64) -> Result<f64, ErrorImpl> {
    if x < 0.0 {
        return Err(ErrorImpl::MathDomain {
            function: "sqrt",
            reason: "argument must not be negative",
        });
    }

    Ok(x.sqrt())
}

/// Natural logarithm when `base` is `None`.
pub fn log(x: f64, base: Option<f64>) -> Result<f64, ErrorImpl> {
    if x <= 0.0 {
        return Err(ErrorImpl::MathDomain {
            function: "log",
            reason: "argument must be positive",
        });
    }

    match base {
        None => Ok(x.ln()),
        Some(base) if base <= 0.0 => Err(ErrorImpl::MathDomain {
            function: "log",
            reason: "base must be positive",
        }),
        Some(base) if base == 1.0 => Err(ErrorImpl::MathDomain {
            function: "log",
            reason: "base must not be 1",
        }),
        Some(base) => Ok(x.ln() / base.ln()),
    }
}
