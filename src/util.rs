/// Numeric conversion helpers.
///
/// Integer arithmetic falls back to floating point when a result leaves the
/// `i64` range, and exponentiation needs a `u32` exponent for the checked
/// integer path. The conversions for both live here.
pub mod num;
