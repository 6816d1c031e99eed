/// Number formatting helpers.
///
/// This module renders `f64` results the way C's `%G` conversion does: a
/// fixed number of significant digits, trailing zeros removed, and scientific
/// notation for very large or very small magnitudes.
pub mod format;
