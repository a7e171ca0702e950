//! Quaternions and quaternionic integers that interoperate with real, complex
//! and integer numbers.
//!
//! # Sections
//! - [`hypercomplex`]: the [`Quaternion`] and [`QuaternionicInteger`] value types,
//!   construction and text parsing
//! - [`tower`]: operand classification and mixed-kind dispatch
//! - [`transcendental`]: `exp`, `ln` and geodesic distance
//! - [`matrix`]: 2x2 complex and 4x4 real representations
//! - [`display`]: vertical equation rendering
//! - [`list`]: sorted linked list of quaternions
//! - [`width`]: fixed-width component storage
//!
//! ```
//! use quaternionic::{Quaternion, QuaternionicInteger};
//!
//! let product = Quaternion::new(7.0, 6.0, -4.0, 2.0) * Quaternion::new(5.0, -1.0, -2.0, 9.0);
//! assert_eq!(product, Quaternion::new(15.0, -9.0, -90.0, 57.0));
//!
//! let integral = QuaternionicInteger::new(5, 9, -10, 4) * QuaternionicInteger::new(-7, 3, -2, -5);
//! assert_eq!(integral.to_string(), "-62 + 10i + 117j - 41k");
//! ```

mod config;
mod error;
mod scalar;

pub mod display;
pub mod hypercomplex;
pub mod list;
pub mod matrix;
pub mod tower;
pub mod transcendental;
pub mod width;

pub use config::{FormatConfig, DEFAULT_EPSILON, DEFAULT_PRECISION};
pub use display::{DisplayEquation, EquationOperator};
pub use error::{QuatResult, QuaternionError};
pub use hypercomplex::{Arg, Component, Hypercomplex, Quaternion, QuaternionBuilder, QuaternionicInteger};
pub use list::{ListOrdering, QuaternionList};
pub use matrix::{complex_matrix, matrix_to_quaternion, real_matrix, QuaternionMatrix};
pub use tower::{apply, classify, BinaryOp, NumericKind, Number};
pub use transcendental::{exp, geodesic_distance, ln, Transcendental};
pub use width::{FloatWidth, IntegerWidth};
