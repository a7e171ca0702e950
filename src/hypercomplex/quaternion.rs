use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::Sum;
use core::ops::{Add, Div, Mul, Neg, Sub};

use num_complex::Complex64;
use num_traits::{One, ToPrimitive, Zero};

use crate::config::{FormatConfig, DEFAULT_PRECISION};
use crate::error::{QuatResult, QuaternionError};
use crate::scalar::{self, Components};

/// Floating-point quaternion `scalar + i·i + j·j + k·k`.
///
/// Values are immutable: every operation returns a new quaternion.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Quaternion {
    scalar: f64,
    i: f64,
    j: f64,
    k: f64,
}

impl Quaternion {
    pub const ZERO: Quaternion = Quaternion::new(0.0, 0.0, 0.0, 0.0);
    pub const ONE: Quaternion = Quaternion::new(1.0, 0.0, 0.0, 0.0);
    pub const I: Quaternion = Quaternion::new(0.0, 1.0, 0.0, 0.0);
    pub const J: Quaternion = Quaternion::new(0.0, 0.0, 1.0, 0.0);
    pub const K: Quaternion = Quaternion::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(scalar: f64, i: f64, j: f64, k: f64) -> Self {
        Quaternion { scalar, i, j, k }
    }

    pub const fn from_real(scalar: f64) -> Self {
        Quaternion::new(scalar, 0.0, 0.0, 0.0)
    }

    /// `(real, imag)` of the complex number become `(scalar, i)`.
    pub fn from_complex(c: Complex64) -> Self {
        Quaternion::new(c.re, c.im, 0.0, 0.0)
    }

    /// The first complex number supplies `(scalar, i)`, the second `(j, k)`.
    pub fn from_complex_pair(first: Complex64, second: Complex64) -> Self {
        Quaternion::new(first.re, first.im, second.re, second.im)
    }

    pub fn scalar(&self) -> f64 {
        self.scalar
    }

    pub fn i(&self) -> f64 {
        self.i
    }

    pub fn j(&self) -> f64 {
        self.j
    }

    pub fn k(&self) -> f64 {
        self.k
    }

    /// The vector part `(0, i, j, k)`.
    pub fn vector(&self) -> Self {
        Quaternion::new(0.0, self.i, self.j, self.k)
    }

    pub fn norm_squared(&self) -> f64 {
        scalar::norm_squared(self.to_components())
    }

    /// Euclidean length of the four components.
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Same as [`Quaternion::norm`].
    pub fn abs(&self) -> f64 {
        self.norm()
    }

    pub fn conjugate(&self) -> Self {
        Self::from_components(scalar::conjugate(self.to_components()))
    }

    /// Multiplicative inverse, `conjugate / norm²`.
    ///
    /// # Errors
    /// [`QuaternionError::DivisionByZero`] when the norm is zero.
    pub fn reciprocal(&self) -> QuatResult<Self> {
        if self.is_zero() {
            return Err(QuaternionError::DivisionByZero);
        }
        Ok(self.inverse())
    }

    /// `self · rhs⁻¹`, reporting a zero divisor instead of producing NaN.
    pub fn checked_div(self, rhs: impl Into<Quaternion>) -> QuatResult<Self> {
        let rhs = rhs.into();
        Ok(self * rhs.reciprocal()?)
    }

    /// The quaternion scaled to norm 1; zero stays zero.
    pub fn unit(&self) -> Self {
        if self.is_zero() {
            return *self;
        }
        *self / self.norm()
    }

    /// Rotation angle `acos(scalar / norm)`. NaN for the zero quaternion.
    pub fn angle(&self) -> f64 {
        (self.scalar / self.norm()).clamp(-1.0, 1.0).acos()
    }

    /// Unit vector along the vector part: the rotation axis.
    pub fn unit_vector(&self) -> Self {
        self.vector().unit()
    }

    /// `q^e = |q|^e · (cos(eθ) + û·sin(eθ))` for a real exponent.
    ///
    /// # Errors
    /// [`QuaternionError::DivisionByZero`] for a zero base with a negative exponent.
    pub fn powf(&self, exponent: f64) -> QuatResult<Self> {
        if self.is_zero() {
            return if exponent > 0.0 {
                Ok(Self::ZERO)
            } else if exponent == 0.0 {
                Ok(Self::ONE)
            } else {
                Err(QuaternionError::DivisionByZero)
            };
        }

        let theta = exponent * self.angle();
        let magnitude = self.norm().powf(exponent);
        Ok((Self::from_real(theta.cos()) + self.unit_vector() * theta.sin()) * magnitude)
    }

    /// `base^q = exp(q · ln(base))` for a positive real base.
    pub fn real_pow(base: f64, exponent: Quaternion) -> QuatResult<Self> {
        if base <= 0.0 || base.is_nan() {
            return Err(QuaternionError::ArgumentType(format!(
                "real base of a quaternion power must be positive, got {base}"
            )));
        }
        Ok((exponent * base.ln()).exp())
    }

    /// `e^q = e^s · (cos|v| + v̂·sin|v|)`.
    pub fn exp(&self) -> Self {
        let vector_norm = self.vector().norm();
        (Self::from_real(vector_norm.cos()) + self.unit_vector() * vector_norm.sin())
            * self.scalar.exp()
    }

    /// `ln q = ln|q| + v̂·acos(s/|q|)`.
    pub fn ln(&self) -> Self {
        Self::from_real(self.norm().ln()) + self.unit_vector() * self.angle()
    }

    pub fn complex_pair(&self) -> (Complex64, Complex64) {
        (
            Complex64::new(self.scalar, self.i),
            Complex64::new(self.j, self.k),
        )
    }

    /// `[scalar, i, j, k]`
    pub fn to_list(&self) -> [f64; 4] {
        self.to_components()
    }

    /// `[i, j, k]`
    pub fn vector_to_list(&self) -> [f64; 3] {
        [self.i, self.j, self.k]
    }

    /// Drops `j` and `k`.
    pub fn to_complex(&self) -> Complex64 {
        Complex64::new(self.scalar, self.i)
    }

    /// True unless every component is zero.
    pub fn is_nonzero(&self) -> bool {
        !self.is_zero()
    }

    /// Componentwise comparison within the default tolerance.
    pub fn approx_eq(&self, other: &Quaternion) -> bool {
        self.approx_eq_with(other, &FormatConfig::default())
    }

    pub fn approx_eq_with(&self, other: &Quaternion, config: &FormatConfig) -> bool {
        self.to_components()
            .iter()
            .zip(other.to_components().iter())
            .all(|(a, b)| (a - b).abs() <= config.epsilon)
    }

    pub fn to_string_with(&self, config: &FormatConfig) -> String {
        format!("{:.*}", config.precision, self)
    }

    pub(crate) fn to_components(self) -> Components<f64> {
        [self.scalar, self.i, self.j, self.k]
    }

    pub(crate) fn from_components(c: Components<f64>) -> Self {
        Quaternion::new(c[0], c[1], c[2], c[3])
    }

    // Unchecked inverse; a zero norm yields non-finite components.
    fn inverse(&self) -> Self {
        self.conjugate() / self.norm_squared()
    }
}

// =============================================================================
// Equality and hashing
// =============================================================================

/// Hashes one component so that `0.0` and `-0.0` collide, as they compare equal.
fn hash_component<H: Hasher>(value: f64, state: &mut H) {
    let bits = if value == 0.0 {
        0
    } else if value.is_nan() {
        u64::MAX
    } else {
        value.to_bits()
    };
    bits.hash(state);
}

impl Hash for Quaternion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.j == 0.0 && self.k == 0.0 {
            // real: the scalar alone; complex: the (real, imag) pair
            hash_component(self.scalar, state);
            if self.i != 0.0 {
                hash_component(self.i, state);
            }
        } else {
            for c in self.to_components() {
                hash_component(c, state);
            }
        }
    }
}

impl PartialEq<f64> for Quaternion {
    fn eq(&self, other: &f64) -> bool {
        self.i == 0.0 && self.j == 0.0 && self.k == 0.0 && self.scalar == *other
    }
}

impl PartialEq<i64> for Quaternion {
    fn eq(&self, other: &i64) -> bool {
        *self == *other as f64
    }
}

impl PartialEq<Complex64> for Quaternion {
    fn eq(&self, other: &Complex64) -> bool {
        self.j == 0.0 && self.k == 0.0 && self.scalar == other.re && self.i == other.im
    }
}

impl PartialEq<Quaternion> for f64 {
    fn eq(&self, other: &Quaternion) -> bool {
        other == self
    }
}

impl PartialEq<Quaternion> for i64 {
    fn eq(&self, other: &Quaternion) -> bool {
        other == self
    }
}

impl PartialEq<Quaternion> for Complex64 {
    fn eq(&self, other: &Quaternion) -> bool {
        other == self
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Canonical form `"3.7000 + 17.1000i - 2.4000j + 4.8000k"`.
///
/// Honours the formatter precision (`{:.2}`); four decimals otherwise.
impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        write!(f, "{:.*}", precision, self.scalar)?;
        for (value, unit) in [(self.i, 'i'), (self.j, 'j'), (self.k, 'k')] {
            let sign = if value < 0.0 { '-' } else { '+' };
            write!(f, " {} {:.*}{}", sign, precision, value.abs(), unit)?;
        }
        Ok(())
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<f64> for Quaternion {
    fn from(value: f64) -> Self {
        Quaternion::from_real(value)
    }
}

impl From<i64> for Quaternion {
    fn from(value: i64) -> Self {
        Quaternion::from_real(value as f64)
    }
}

impl From<i32> for Quaternion {
    fn from(value: i32) -> Self {
        Quaternion::from_real(f64::from(value))
    }
}

impl From<Complex64> for Quaternion {
    fn from(value: Complex64) -> Self {
        Quaternion::from_complex(value)
    }
}

impl From<(Complex64, Complex64)> for Quaternion {
    fn from((first, second): (Complex64, Complex64)) -> Self {
        Quaternion::from_complex_pair(first, second)
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from(components: [f64; 4]) -> Self {
        Quaternion::from_components(components)
    }
}

/// Narrowing conversions keep the scalar part only; integer targets truncate.
impl ToPrimitive for Quaternion {
    fn to_i64(&self) -> Option<i64> {
        self.scalar.to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.scalar.to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.scalar)
    }
}

impl Zero for Quaternion {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        scalar::is_zero(self.to_components())
    }
}

impl One for Quaternion {
    fn one() -> Self {
        Self::ONE
    }
}

// =============================================================================
// Arithmetic
// =============================================================================

impl Neg for Quaternion {
    type Output = Self;
    fn neg(self) -> Self {
        Self::from_components(scalar::neg(self.to_components()))
    }
}

impl Add for Quaternion {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::from_components(scalar::add(self.to_components(), other.to_components()))
    }
}

impl Sub for Quaternion {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::from_components(scalar::sub(self.to_components(), other.to_components()))
    }
}

/// Hamilton product
impl Mul for Quaternion {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        Self::from_components(scalar::hamilton(self.to_components(), other.to_components()))
    }
}

/// `self · other⁻¹`; a zero divisor gives non-finite components, as with
/// `Complex64`. Use [`Quaternion::checked_div`] to get an error instead.
impl Div for Quaternion {
    type Output = Self;
    fn div(self, other: Self) -> Self {
        self * other.inverse()
    }
}

impl Sum for Quaternion {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, q| acc + q)
    }
}

// Real operands act on the scalar part (addition) or on every component
// (multiplication, division).
macro_rules! real_ops {
    ($($t:ty),*) => {$(
        impl Add<$t> for Quaternion {
            type Output = Quaternion;
            fn add(self, r: $t) -> Quaternion {
                Quaternion::new(self.scalar + r as f64, self.i, self.j, self.k)
            }
        }

        impl Sub<$t> for Quaternion {
            type Output = Quaternion;
            fn sub(self, r: $t) -> Quaternion {
                Quaternion::new(self.scalar - r as f64, self.i, self.j, self.k)
            }
        }

        impl Mul<$t> for Quaternion {
            type Output = Quaternion;
            fn mul(self, r: $t) -> Quaternion {
                Quaternion::from_components(scalar::scale(self.to_components(), r as f64))
            }
        }

        impl Div<$t> for Quaternion {
            type Output = Quaternion;
            fn div(self, r: $t) -> Quaternion {
                let r = r as f64;
                Quaternion::new(self.scalar / r, self.i / r, self.j / r, self.k / r)
            }
        }

        impl Add<Quaternion> for $t {
            type Output = Quaternion;
            fn add(self, q: Quaternion) -> Quaternion {
                q + self
            }
        }

        impl Sub<Quaternion> for $t {
            type Output = Quaternion;
            fn sub(self, q: Quaternion) -> Quaternion {
                Quaternion::new(self as f64 - q.scalar, -q.i, -q.j, -q.k)
            }
        }

        impl Mul<Quaternion> for $t {
            type Output = Quaternion;
            fn mul(self, q: Quaternion) -> Quaternion {
                q * self
            }
        }

        impl Div<Quaternion> for $t {
            type Output = Quaternion;
            fn div(self, q: Quaternion) -> Quaternion {
                q.inverse() * self
            }
        }
    )*};
}

real_ops!(f64, i64);

// Complex operands are embedded as (re, im, 0, 0); order matters for `*` and `/`.
impl Add<Complex64> for Quaternion {
    type Output = Quaternion;
    fn add(self, c: Complex64) -> Quaternion {
        self + Quaternion::from(c)
    }
}

impl Sub<Complex64> for Quaternion {
    type Output = Quaternion;
    fn sub(self, c: Complex64) -> Quaternion {
        self - Quaternion::from(c)
    }
}

impl Mul<Complex64> for Quaternion {
    type Output = Quaternion;
    fn mul(self, c: Complex64) -> Quaternion {
        self * Quaternion::from(c)
    }
}

impl Div<Complex64> for Quaternion {
    type Output = Quaternion;
    fn div(self, c: Complex64) -> Quaternion {
        self / Quaternion::from(c)
    }
}

impl Add<Quaternion> for Complex64 {
    type Output = Quaternion;
    fn add(self, q: Quaternion) -> Quaternion {
        Quaternion::from(self) + q
    }
}

impl Sub<Quaternion> for Complex64 {
    type Output = Quaternion;
    fn sub(self, q: Quaternion) -> Quaternion {
        Quaternion::from(self) - q
    }
}

impl Mul<Quaternion> for Complex64 {
    type Output = Quaternion;
    fn mul(self, q: Quaternion) -> Quaternion {
        Quaternion::from(self) * q
    }
}

impl Div<Quaternion> for Complex64 {
    type Output = Quaternion;
    fn div(self, q: Quaternion) -> Quaternion {
        Quaternion::from(self) / q
    }
}
