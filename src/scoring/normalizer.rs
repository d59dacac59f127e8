//! Linear rescaling of raw sub-test measurements onto the unit interval.

use crate::core::{Error, Result};

/// Rescale `value` from `[min, max]` to `[0, 1]`.
///
/// Pure function, no clamping: a value outside `[min, max]` yields a result
/// outside `[0, 1]` and that result propagates through the rest of the
/// pipeline. Callers own the well-formedness of the range; only the
/// degenerate `min == max` case (division by zero) is rejected here.
pub fn normalize(value: f64, min: f64, max: f64) -> Result<f64> {
    if min == max {
        return Err(Error::invalid_input(format!(
            "cannot normalize over a degenerate range (min == max == {})",
            min
        )));
    }
    Ok((value - min) / (max - min))
}
