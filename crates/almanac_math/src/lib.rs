//! Numeric toolkit shared by the almanac crates.
//!
//! This crate provides:
//! - Polynomial (Horner) evaluation and parallel-list summation
//! - Floor-based modulo variants (`modulo`, `amod`, `mod3`, `quotient`)
//! - Trigonometry on degrees, including a full-quadrant arctangent
//! - Root finding: bisection, angular inversion and integer search,
//!   all bounded by explicit iteration guards

pub mod angle;
pub mod error;
pub mod numeric;
pub mod search;

pub use angle::{
    angle, arccos_degrees, arcsin_degrees, arctan_degrees, cosine_degrees, normalize_360,
    sin_degrees, tangent_degrees,
};
pub use error::MathError;
pub use numeric::{amod, amod_int, mod3, modulo, poly, quotient, sigma};
pub use search::{
    ANGULAR_PRECISION, MAX_BISECTIONS, MAX_LINEAR_STEPS, binary_search, final_of, invert_angular,
    invert_angular_with_precision, next_of, try_next_of,
};
