//! Exponential, logarithm and geodesic distance over the numeric tower.
//!
//! [`Transcendental`] is the minimal capability set (`exp`, `ln`, `norm`,
//! `unit_vector`) shared by reals, complex numbers and quaternions. The
//! `*_number` helpers pick the implementation from the classified kind of a
//! [`Number`].

use num_complex::Complex64;
use tracing::trace;

use crate::error::{QuatResult, QuaternionError};
use crate::hypercomplex::Quaternion;
use crate::tower::{NumericKind, Number};

pub trait Transcendental: Copy {
    fn exp(self) -> Self;
    fn ln(self) -> Self;
    fn norm(self) -> f64;
    /// Unit vector along the non-real part; zero when there is none.
    fn unit_vector(self) -> Self;
}

impl Transcendental for f64 {
    fn exp(self) -> Self {
        f64::exp(self)
    }

    fn ln(self) -> Self {
        f64::ln(self)
    }

    fn norm(self) -> f64 {
        self.abs()
    }

    fn unit_vector(self) -> Self {
        0.0
    }
}

impl Transcendental for Complex64 {
    fn exp(self) -> Self {
        Complex64::exp(self)
    }

    fn ln(self) -> Self {
        Complex64::ln(self)
    }

    fn norm(self) -> f64 {
        Complex64::norm(self)
    }

    fn unit_vector(self) -> Self {
        if self.im == 0.0 {
            Complex64::new(0.0, 0.0)
        } else {
            Complex64::new(0.0, self.im.signum())
        }
    }
}

impl Transcendental for Quaternion {
    fn exp(self) -> Self {
        Quaternion::exp(&self)
    }

    fn ln(self) -> Self {
        Quaternion::ln(&self)
    }

    fn norm(self) -> f64 {
        Quaternion::norm(&self)
    }

    fn unit_vector(self) -> Self {
        Quaternion::unit_vector(&self)
    }
}

pub fn exp<T: Transcendental>(x: T) -> T {
    x.exp()
}

pub fn ln<T: Transcendental>(x: T) -> T {
    x.ln()
}

/// `e^x` for a number of any kind. Quaternionic integers give a general quaternion.
pub fn exp_number(x: Number) -> Number {
    trace!(kind = ?x.kind(), "exp");
    match x.kind() {
        NumericKind::Real => Number::Real(x.to_f64().exp()),
        NumericKind::Complex => Number::Complex(x.to_complex().exp()),
        NumericKind::Quaternion | NumericKind::QuaternionicInteger => {
            Number::Quaternion(x.to_quaternion().exp())
        }
    }
}

/// Natural logarithm for a number of any kind.
///
/// Real arguments stay real, so a negative real gives NaN; pass it as a
/// complex number for the principal complex logarithm.
///
/// # Errors
/// [`crate::QuaternionError::DivisionByZero`] for a zero quaternion or
/// quaternionic integer, whose logarithm has no direction.
pub fn ln_number(x: Number) -> QuatResult<Number> {
    trace!(kind = ?x.kind(), "ln");
    Ok(match x.kind() {
        NumericKind::Real => Number::Real(x.to_f64().ln()),
        NumericKind::Complex => Number::Complex(x.to_complex().ln()),
        NumericKind::Quaternion | NumericKind::QuaternionicInteger => {
            if x.is_zero() {
                return Err(QuaternionError::DivisionByZero);
            }
            Number::Quaternion(x.to_quaternion().ln())
        }
    })
}

/// Angle of the rotation taking `unit(a)` to `unit(b)`: `|ln(unit(a)⁻¹ · unit(b))|`.
///
/// # Errors
/// [`crate::QuaternionError::DivisionByZero`] when `a` is zero.
pub fn geodesic_distance(a: impl Into<Quaternion>, b: impl Into<Quaternion>) -> QuatResult<f64> {
    let (a, b) = (a.into(), b.into());
    let rotation = a.unit().reciprocal()? * b.unit();
    Ok(rotation.ln().norm())
}
