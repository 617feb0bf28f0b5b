/// The sign of a function value for bracket logic.
///
/// Exact zero gets its own category so a root sitting on an endpoint is
/// never misread as a positive or negative value by the sign-change test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Value is negative.
    Negative,
    /// Value is exactly zero (positive or negative zero).
    Zero,
    /// Value is positive.
    Positive,
}

impl Sign {
    /// Returns the sign of a function value.
    ///
    /// Callers are expected to reject non-finite values before classifying;
    /// a NaN input falls into the `Zero` category.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Sign::Positive
        } else if value < 0.0 {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }
}
