/// Operator dispatch and zero-divisor checks.
pub mod core;
/// Exponentiation.
pub mod power;
/// Integer-preserving arithmetic helpers for `+ - * %`.
pub mod scalar;
