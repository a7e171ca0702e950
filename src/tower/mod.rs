//! Numeric tower: the four operand kinds and how mixed-kind operations resolve.
//!
//! ```text
//! Real < Complex < Quaternion < QuaternionicInteger
//! ```
//!
//! A result takes the most general kind of its operands. The integral kind is
//! kept only when both operands are integral and the operation is a ring
//! operation (see [`dispatch`]).

pub mod dispatch;

pub use dispatch::{apply, apply_args, conjugate, negate, BinaryOp};

use core::fmt;
use core::hash::{Hash, Hasher};

use num_complex::Complex64;

use crate::hypercomplex::{Arg, Hypercomplex, Quaternion, QuaternionicInteger};

/// Classified kind of an operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumericKind {
    Real,
    Complex,
    Quaternion,
    QuaternionicInteger,
}

impl NumericKind {
    /// Real and complex operands, which the scalar path evaluates natively.
    pub fn is_scalar(self) -> bool {
        matches!(self, NumericKind::Real | NumericKind::Complex)
    }
}

/// A value of any kind the tower understands.
///
/// Machine integers are kept apart from floats so that integral closure can
/// recognise them; both classify as [`NumericKind::Real`].
#[derive(Clone, Copy, Debug)]
pub enum Number {
    Integer(i64),
    Real(f64),
    Complex(Complex64),
    Quaternion(Quaternion),
    QuaternionicInteger(QuaternionicInteger),
}

impl Number {
    pub fn kind(&self) -> NumericKind {
        match self {
            Number::Integer(_) | Number::Real(_) => NumericKind::Real,
            Number::Complex(_) => NumericKind::Complex,
            Number::Quaternion(_) => NumericKind::Quaternion,
            Number::QuaternionicInteger(_) => NumericKind::QuaternionicInteger,
        }
    }

    /// True for machine integers and quaternionic integers.
    pub fn is_integral(&self) -> bool {
        matches!(self, Number::Integer(_) | Number::QuaternionicInteger(_))
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Number::Integer(n) => *n == 0,
            Number::QuaternionicInteger(q) => q.to_list() == [0; 4],
            _ => self.to_quaternion() == 0.0,
        }
    }

    /// The value as a machine-integer-backed quaternion, if it is integral.
    pub fn as_integral(&self) -> Option<QuaternionicInteger> {
        match self {
            Number::Integer(n) => Some(QuaternionicInteger::from(*n)),
            Number::QuaternionicInteger(q) => Some(*q),
            _ => None,
        }
    }

    /// The value as a real number, if it is one.
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Number::Integer(n) => Some(*n as f64),
            Number::Real(x) => Some(*x),
            _ => None,
        }
    }

    /// Embedding into quaternion space; always exact for real and complex kinds.
    pub fn to_quaternion(&self) -> Quaternion {
        match self {
            Number::Integer(n) => Quaternion::from(*n),
            Number::Real(x) => Quaternion::from(*x),
            Number::Complex(c) => Quaternion::from(*c),
            Number::Quaternion(q) => *q,
            Number::QuaternionicInteger(q) => q.to_quaternion(),
        }
    }

    /// Drops `j` and `k`.
    pub fn to_complex(&self) -> Complex64 {
        match self {
            Number::Complex(c) => *c,
            other => other.to_quaternion().to_complex(),
        }
    }

    /// Scalar part only.
    pub fn to_f64(&self) -> f64 {
        match self {
            Number::Integer(n) => *n as f64,
            Number::Real(x) => *x,
            other => other.to_quaternion().scalar(),
        }
    }
}

/// Classifies a constructor argument; text has no numeric kind.
pub fn classify(arg: &Arg) -> Option<NumericKind> {
    arg.as_number().map(|n| n.kind())
}

/// Integral values compare against floating ones without rounding, so
/// equality stays transitive for integers above 2^53.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self.as_integral(), other.as_integral()) {
            (Some(a), Some(b)) => a == b,
            (Some(a), None) => a == other.to_quaternion(),
            (None, Some(b)) => self.to_quaternion() == b,
            (None, None) => self.to_quaternion() == other.to_quaternion(),
        }
    }
}

/// Hashes the quaternion embedding, so `2 == 2.0 == 2+0i` all collide.
impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_quaternion().hash(state);
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(n) => fmt::Display::fmt(n, f),
            Number::Real(x) => fmt::Display::fmt(x, f),
            Number::Complex(c) => fmt::Display::fmt(c, f),
            Number::Quaternion(q) => fmt::Display::fmt(q, f),
            Number::QuaternionicInteger(q) => fmt::Display::fmt(q, f),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Integer(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::Integer(i64::from(n))
    }
}

impl From<f64> for Number {
    fn from(x: f64) -> Self {
        Number::Real(x)
    }
}

impl From<Complex64> for Number {
    fn from(c: Complex64) -> Self {
        Number::Complex(c)
    }
}

impl From<Quaternion> for Number {
    fn from(q: Quaternion) -> Self {
        Number::Quaternion(q)
    }
}

impl From<QuaternionicInteger> for Number {
    fn from(q: QuaternionicInteger) -> Self {
        Number::QuaternionicInteger(q)
    }
}

impl From<Hypercomplex> for Number {
    fn from(h: Hypercomplex) -> Self {
        match h {
            Hypercomplex::Integral(q) => Number::QuaternionicInteger(q),
            Hypercomplex::General(q) => Number::Quaternion(q),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(value: &Number) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(&Arg::from(3)), Some(NumericKind::Real));
        assert_eq!(classify(&Arg::from(3.5)), Some(NumericKind::Real));
        assert_eq!(
            classify(&Arg::from(Complex64::new(1.0, 2.0))),
            Some(NumericKind::Complex)
        );
        assert_eq!(
            classify(&Arg::from(Quaternion::ONE)),
            Some(NumericKind::Quaternion)
        );
        assert_eq!(
            classify(&Arg::from(QuaternionicInteger::ONE)),
            Some(NumericKind::QuaternionicInteger)
        );
        assert_eq!(classify(&Arg::from("1 + 2i")), None);
    }

    #[test]
    fn test_kind_order() {
        assert!(NumericKind::Real < NumericKind::Complex);
        assert!(NumericKind::Complex < NumericKind::Quaternion);
        assert!(NumericKind::Quaternion < NumericKind::QuaternionicInteger);
        assert!(NumericKind::Complex.is_scalar());
        assert!(!NumericKind::Quaternion.is_scalar());
    }

    #[test]
    fn test_cross_kind_equality_and_hash() {
        let values = [
            Number::Integer(2),
            Number::Real(2.0),
            Number::Complex(Complex64::new(2.0, 0.0)),
            Number::Quaternion(Quaternion::from_real(2.0)),
            Number::QuaternionicInteger(QuaternionicInteger::from(2)),
        ];
        for a in &values {
            for b in &values {
                assert_eq!(a, b);
            }
        }
        for value in &values {
            assert_eq!(hash_of(value), hash_of(&values[0]));
        }

        assert_ne!(Number::Integer(2), Number::Complex(Complex64::new(2.0, 1.0)));
    }

    #[test]
    fn test_equality_is_transitive_above_f64_precision() {
        let above = Number::Integer((1 << 53) + 1);
        let exact = Number::Integer(1 << 53);
        let float = Number::Real((1u64 << 53) as f64);
        assert_eq!(exact, float);
        assert_ne!(above, float);
        assert_ne!(float, above);
        assert_ne!(above, exact);
        assert_ne!(
            Number::QuaternionicInteger(QuaternionicInteger::new((1 << 53) + 1, 0, 0, 0)),
            float
        );
    }

    #[test]
    fn test_integral_and_zero() {
        assert!(Number::Integer(4).is_integral());
        assert!(!Number::Real(4.0).is_integral());
        assert!(Number::Real(0.0).is_zero());
        assert!(Number::Quaternion(Quaternion::ZERO).is_zero());
        assert!(!Number::Complex(Complex64::new(0.0, 1.0)).is_zero());
        assert_eq!(Number::Real(2.5).as_integral(), None);
    }
}
