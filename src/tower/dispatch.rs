//! Binary-operation dispatch across numeric kinds.
//!
//! Every operation is tried twice:
//!
//! 1. forward: the left operand's kind owns the operation
//! 2. reflected: the right operand's kind owns it, the left operand stays on the left
//!
//! An owner that does not implement the operand pair reports "not applicable"
//! (`Ok(None)`); only when both attempts decline does [`apply`] fail with
//! [`QuaternionError::ArgumentType`].
//!
//! # Closure
//!
//! | owner              | other operand          | `+ - *`              | `/`                      | `**`            |
//! |--------------------|------------------------|----------------------|--------------------------|-----------------|
//! | real / complex     | real / complex         | scalar               | scalar                   | scalar          |
//! | quaternion         | any                    | quaternion           | quaternion               | real exponent / real base |
//! | quaternionic int   | integer / quat. int    | quaternionic integer | integral iff exact (int) | quaternion      |
//! | quaternionic int   | float / complex / quat | quaternion           | quaternion               | quaternion      |

use core::fmt;

use num_complex::Complex64;
use tracing::{debug, trace};

use super::Number;
use crate::error::{QuatResult, QuaternionError};
use crate::hypercomplex::{Arg, Quaternion, QuaternionicInteger};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "**",
        }
    }

    /// Ring operations keep integral operands integral.
    pub fn preserves_integrality(self) -> bool {
        matches!(self, BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Evaluates `lhs op rhs`, choosing the result kind from the operand kinds.
///
/// # Errors
/// - [`QuaternionError::DivisionByZero`] when dividing by any zero value
/// - [`QuaternionError::ArgumentType`] when neither operand implements the pair
pub fn apply(op: BinaryOp, lhs: Number, rhs: Number) -> QuatResult<Number> {
    if op == BinaryOp::Div && rhs.is_zero() {
        return Err(QuaternionError::DivisionByZero);
    }

    if let Some(result) = forward(op, lhs, rhs)? {
        return Ok(result);
    }
    trace!(%op, lhs = ?lhs.kind(), rhs = ?rhs.kind(), "forward not applicable, trying reflected");

    if let Some(result) = reflected(op, lhs, rhs)? {
        return Ok(result);
    }
    debug!(%op, lhs = ?lhs.kind(), rhs = ?rhs.kind(), "no implementation for operand pair");
    Err(QuaternionError::ArgumentType(format!(
        "unsupported operand kinds for {op}: {:?} and {:?}",
        lhs.kind(),
        rhs.kind()
    )))
}

/// [`apply`] on raw arguments; text operands have no kind and are rejected.
pub fn apply_args(op: BinaryOp, lhs: &Arg, rhs: &Arg) -> QuatResult<Number> {
    match (lhs.as_number(), rhs.as_number()) {
        (Some(a), Some(b)) => apply(op, a, b),
        _ => Err(QuaternionError::ArgumentType(format!(
            "unsupported operand for {op}: text has no numeric kind"
        ))),
    }
}

/// Negation; every kind maps to itself, except that an integral value whose
/// negation overflows `i64` promotes like the binary operations do.
pub fn negate(value: Number) -> Number {
    match value {
        Number::Integer(n) => n.checked_neg().map_or(Number::Real(-(n as f64)), Number::Integer),
        Number::Real(x) => Number::Real(-x),
        Number::Complex(c) => Number::Complex(-c),
        Number::Quaternion(q) => Number::Quaternion(-q),
        Number::QuaternionicInteger(q) => q
            .checked_neg()
            .map_or(Number::Quaternion(-q.to_quaternion()), Number::QuaternionicInteger),
    }
}

/// Conjugation; reals are their own conjugate.
pub fn conjugate(value: Number) -> Number {
    match value {
        Number::Integer(_) | Number::Real(_) => value,
        Number::Complex(c) => Number::Complex(c.conj()),
        Number::Quaternion(q) => Number::Quaternion(q.conjugate()),
        Number::QuaternionicInteger(q) => Number::QuaternionicInteger(q.conjugate()),
    }
}

fn forward(op: BinaryOp, lhs: Number, rhs: Number) -> QuatResult<Option<Number>> {
    match lhs {
        Number::Integer(_) | Number::Real(_) | Number::Complex(_) => Ok(scalar_binary(op, lhs, rhs)),
        Number::Quaternion(_) => general_binary(op, lhs, rhs).map(|q| q.map(Number::Quaternion)),
        Number::QuaternionicInteger(owner) => integral_binary(op, owner, rhs, Side::Left),
    }
}

fn reflected(op: BinaryOp, lhs: Number, rhs: Number) -> QuatResult<Option<Number>> {
    match rhs {
        // scalar owners only know scalar pairs, which the forward pass already saw
        Number::Integer(_) | Number::Real(_) | Number::Complex(_) => Ok(None),
        Number::Quaternion(_) => general_binary(op, lhs, rhs).map(|q| q.map(Number::Quaternion)),
        Number::QuaternionicInteger(owner) => integral_binary(op, owner, lhs, Side::Right),
    }
}

// =============================================================================
// Scalar owners
// =============================================================================

fn scalar_binary(op: BinaryOp, lhs: Number, rhs: Number) -> Option<Number> {
    if !rhs.kind().is_scalar() {
        return None;
    }
    match (lhs, rhs) {
        (Number::Integer(a), Number::Integer(b)) => Some(integer_binary(op, a, b)),
        _ => match (lhs.as_real(), rhs.as_real()) {
            (Some(a), Some(b)) => Some(real_binary(op, a, b)),
            _ => Some(Number::Complex(complex_binary(op, lhs.to_complex(), rhs.to_complex()))),
        },
    }
}

// Overflow promotes to a real result.
fn integer_binary(op: BinaryOp, a: i64, b: i64) -> Number {
    let exact = match op {
        BinaryOp::Add => a.checked_add(b),
        BinaryOp::Sub => a.checked_sub(b),
        BinaryOp::Mul => a.checked_mul(b),
        BinaryOp::Pow => u32::try_from(b).ok().and_then(|e| a.checked_pow(e)),
        BinaryOp::Div => None,
    };
    match exact {
        Some(n) => Number::Integer(n),
        None => real_binary(op, a as f64, b as f64),
    }
}

fn real_binary(op: BinaryOp, a: f64, b: f64) -> Number {
    match op {
        BinaryOp::Add => Number::Real(a + b),
        BinaryOp::Sub => Number::Real(a - b),
        BinaryOp::Mul => Number::Real(a * b),
        BinaryOp::Div => Number::Real(a / b),
        // a negative base with a fractional exponent has a complex result
        BinaryOp::Pow if a < 0.0 && b.fract() != 0.0 => {
            Number::Complex(Complex64::new(a, 0.0).powf(b))
        }
        BinaryOp::Pow => Number::Real(a.powf(b)),
    }
}

fn complex_binary(op: BinaryOp, a: Complex64, b: Complex64) -> Complex64 {
    match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => a / b,
        BinaryOp::Pow => a.powc(b),
    }
}

// =============================================================================
// Quaternion owners
// =============================================================================

/// General quaternion arithmetic on `lhs op rhs`, with either operand owning it.
fn general_binary(op: BinaryOp, lhs: Number, rhs: Number) -> QuatResult<Option<Quaternion>> {
    let a = lhs.to_quaternion();
    let result = match (op, rhs.as_real()) {
        (BinaryOp::Add, _) => a + rhs.to_quaternion(),
        (BinaryOp::Sub, _) => a - rhs.to_quaternion(),
        (BinaryOp::Mul, Some(r)) => a * r,
        (BinaryOp::Mul, None) => a * rhs.to_quaternion(),
        (BinaryOp::Div, Some(r)) => a / r,
        (BinaryOp::Div, None) => a.checked_div(rhs.to_quaternion())?,
        (BinaryOp::Pow, Some(exponent)) if !lhs.kind().is_scalar() => a.powf(exponent)?,
        (BinaryOp::Pow, _) => match lhs.as_real() {
            Some(base) if !rhs.kind().is_scalar() => Quaternion::real_pow(base, rhs.to_quaternion())?,
            _ => return Ok(None),
        },
    };
    Ok(Some(result))
}

fn integral_binary(
    op: BinaryOp,
    owner: QuaternionicInteger,
    other: Number,
    side: Side,
) -> QuatResult<Option<Number>> {
    if let Some(o) = other.as_integral() {
        let (a, b) = match side {
            Side::Left => (owner, o),
            Side::Right => (o, owner),
        };
        let exact = match op {
            BinaryOp::Add => a.checked_add(&b),
            BinaryOp::Sub => a.checked_sub(&b),
            BinaryOp::Mul => a.checked_mul(&b),
            BinaryOp::Div => match (side, other) {
                (Side::Left, Number::Integer(divisor)) => owner.exact_div(divisor),
                _ => None,
            },
            BinaryOp::Pow => None,
        };
        if let Some(result) = exact {
            return Ok(Some(Number::QuaternionicInteger(result)));
        }
        if op.preserves_integrality() {
            // overflow promotes to the general quaternion
            debug!(%op, "quaternionic integer overflow, promoting");
        }
    }

    trace!(%op, other = ?other.kind(), "promoting quaternionic integer to quaternion");
    let owner = Number::Quaternion(owner.to_quaternion());
    let (lhs, rhs) = match side {
        Side::Left => (owner, other),
        Side::Right => (other, owner),
    };
    general_binary(op, lhs, rhs).map(|q| q.map(Number::Quaternion))
}
