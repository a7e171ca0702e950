use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::Sum;
use core::ops::{Add, Div, Mul, Neg, Sub};

use num_complex::Complex64;
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};

use super::{Hypercomplex, Quaternion};
use crate::error::QuatResult;
use crate::scalar::{self, Components};

/// Quaternion whose four components are integers.
///
/// Closed under `+`, `-`, `*`, negation and conjugation with other quaternionic
/// integers and plain integers. Every other operation promotes to a general
/// [`Quaternion`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuaternionicInteger {
    scalar: i64,
    i: i64,
    j: i64,
    k: i64,
}

impl QuaternionicInteger {
    pub const ZERO: QuaternionicInteger = QuaternionicInteger::new(0, 0, 0, 0);
    pub const ONE: QuaternionicInteger = QuaternionicInteger::new(1, 0, 0, 0);

    pub const fn new(scalar: i64, i: i64, j: i64, k: i64) -> Self {
        QuaternionicInteger { scalar, i, j, k }
    }

    /// Truncates every component toward zero.
    pub fn from_quaternion(q: Quaternion) -> Self {
        let [s, i, j, k] = q.to_list();
        QuaternionicInteger::new(s as i64, i as i64, j as i64, k as i64)
    }

    pub fn scalar(&self) -> i64 {
        self.scalar
    }

    pub fn i(&self) -> i64 {
        self.i
    }

    pub fn j(&self) -> i64 {
        self.j
    }

    pub fn k(&self) -> i64 {
        self.k
    }

    pub fn to_quaternion(&self) -> Quaternion {
        Quaternion::from_components(scalar::to_f64(self.to_components()))
    }

    pub fn vector(&self) -> Self {
        QuaternionicInteger::new(0, self.i, self.j, self.k)
    }

    /// Panics on overflow in debug builds, like `i64` arithmetic; see
    /// [`QuaternionicInteger::checked_norm_squared`].
    pub fn norm_squared(&self) -> i64 {
        scalar::norm_squared(self.to_components())
    }

    pub fn checked_norm_squared(&self) -> Option<i64> {
        scalar::checked_norm_squared(self.to_components())
    }

    pub fn norm(&self) -> f64 {
        self.to_quaternion().norm()
    }

    pub fn abs(&self) -> f64 {
        self.norm()
    }

    pub fn conjugate(&self) -> Self {
        Self::from_components(scalar::conjugate(self.to_components()))
    }

    /// Inverse as a general quaternion.
    pub fn reciprocal(&self) -> QuatResult<Quaternion> {
        self.to_quaternion().reciprocal()
    }

    pub fn unit(&self) -> Quaternion {
        self.to_quaternion().unit()
    }

    pub fn angle(&self) -> f64 {
        self.to_quaternion().angle()
    }

    pub fn unit_vector(&self) -> Quaternion {
        self.to_quaternion().unit_vector()
    }

    /// Powers always leave the integers.
    pub fn powf(&self, exponent: f64) -> QuatResult<Quaternion> {
        self.to_quaternion().powf(exponent)
    }

    /// Divides every component by `divisor` when all of them divide exactly.
    ///
    /// `None` for a zero divisor and for a quotient outside `i64`
    /// (`i64::MIN / -1`).
    pub fn exact_div(&self, divisor: i64) -> Option<Self> {
        if divisor == 0 {
            return None;
        }
        let mut quotient = [0i64; 4];
        for (q, c) in quotient.iter_mut().zip(self.to_components()) {
            c.checked_rem(divisor)?;
            let (value, remainder) = c.div_rem(&divisor);
            if remainder != 0 {
                return None;
            }
            *q = value;
        }
        Some(Self::from_components(quotient))
    }

    // =========================================================================
    // Checked ring operations
    // =========================================================================

    /// `None` when a component overflows `i64`.
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        scalar::checked_add(self.to_components(), other.to_components()).map(Self::from_components)
    }

    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        scalar::checked_sub(self.to_components(), other.to_components()).map(Self::from_components)
    }

    /// Hamilton product, `None` when a product or partial sum overflows `i64`.
    pub fn checked_mul(&self, other: &Self) -> Option<Self> {
        scalar::checked_hamilton(self.to_components(), other.to_components())
            .map(Self::from_components)
    }

    pub fn checked_neg(&self) -> Option<Self> {
        scalar::checked_neg(self.to_components()).map(Self::from_components)
    }

    pub fn complex_pair(&self) -> (Complex64, Complex64) {
        self.to_quaternion().complex_pair()
    }

    pub fn to_complex(&self) -> Complex64 {
        self.to_quaternion().to_complex()
    }

    pub fn to_list(&self) -> [i64; 4] {
        self.to_components()
    }

    pub fn vector_to_list(&self) -> [i64; 3] {
        [self.i, self.j, self.k]
    }

    pub fn is_nonzero(&self) -> bool {
        !self.is_zero()
    }

    /// Compares against a floating quaternion without rounding the integers,
    /// so that equality stays transitive above 2^53.
    pub(crate) fn eq_exact(&self, q: &Quaternion) -> bool {
        self.to_components()
            .iter()
            .zip(q.to_list())
            .all(|(&n, x)| x.fract() == 0.0 && x as i128 == i128::from(n))
    }

    pub(crate) fn to_components(self) -> Components<i64> {
        [self.scalar, self.i, self.j, self.k]
    }

    pub(crate) fn from_components(c: Components<i64>) -> Self {
        QuaternionicInteger::new(c[0], c[1], c[2], c[3])
    }
}

/// `"5 + 9i - 10j + 4k"`
impl fmt::Display for QuaternionicInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.scalar)?;
        for (value, unit) in [(self.i, 'i'), (self.j, 'j'), (self.k, 'k')] {
            let sign = if value < 0 { '-' } else { '+' };
            write!(f, " {} {}{}", sign, value.unsigned_abs(), unit)?;
        }
        Ok(())
    }
}

// Equal values hash equally across both quaternion types.
impl Hash for QuaternionicInteger {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_quaternion().hash(state);
    }
}

impl PartialEq<Quaternion> for QuaternionicInteger {
    fn eq(&self, other: &Quaternion) -> bool {
        self.eq_exact(other)
    }
}

impl PartialEq<QuaternionicInteger> for Quaternion {
    fn eq(&self, other: &QuaternionicInteger) -> bool {
        other.eq_exact(self)
    }
}

impl PartialEq<i64> for QuaternionicInteger {
    fn eq(&self, other: &i64) -> bool {
        self.i == 0 && self.j == 0 && self.k == 0 && self.scalar == *other
    }
}

impl PartialEq<QuaternionicInteger> for i64 {
    fn eq(&self, other: &QuaternionicInteger) -> bool {
        other == self
    }
}

impl PartialEq<f64> for QuaternionicInteger {
    fn eq(&self, other: &f64) -> bool {
        self.eq_exact(&Quaternion::from_real(*other))
    }
}

impl PartialEq<Complex64> for QuaternionicInteger {
    fn eq(&self, other: &Complex64) -> bool {
        self.eq_exact(&Quaternion::from_complex(*other))
    }
}

impl From<QuaternionicInteger> for Quaternion {
    fn from(q: QuaternionicInteger) -> Self {
        q.to_quaternion()
    }
}

impl From<i64> for QuaternionicInteger {
    fn from(value: i64) -> Self {
        QuaternionicInteger::new(value, 0, 0, 0)
    }
}

impl From<[i64; 4]> for QuaternionicInteger {
    fn from(components: [i64; 4]) -> Self {
        Self::from_components(components)
    }
}

impl ToPrimitive for QuaternionicInteger {
    fn to_i64(&self) -> Option<i64> {
        Some(self.scalar)
    }

    fn to_u64(&self) -> Option<u64> {
        self.scalar.to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.scalar as f64)
    }
}

impl Zero for QuaternionicInteger {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        scalar::is_zero(self.to_components())
    }
}

impl One for QuaternionicInteger {
    fn one() -> Self {
        Self::ONE
    }
}

// =============================================================================
// Integral arithmetic
// =============================================================================

impl Neg for QuaternionicInteger {
    type Output = Self;
    fn neg(self) -> Self {
        Self::from_components(scalar::neg(self.to_components()))
    }
}

impl Add for QuaternionicInteger {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::from_components(scalar::add(self.to_components(), other.to_components()))
    }
}

impl Sub for QuaternionicInteger {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::from_components(scalar::sub(self.to_components(), other.to_components()))
    }
}

impl Mul for QuaternionicInteger {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        Self::from_components(scalar::hamilton(self.to_components(), other.to_components()))
    }
}

impl Sum for QuaternionicInteger {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, q| acc + q)
    }
}

impl Add<i64> for QuaternionicInteger {
    type Output = Self;
    fn add(self, n: i64) -> Self {
        QuaternionicInteger::new(self.scalar + n, self.i, self.j, self.k)
    }
}

impl Sub<i64> for QuaternionicInteger {
    type Output = Self;
    fn sub(self, n: i64) -> Self {
        QuaternionicInteger::new(self.scalar - n, self.i, self.j, self.k)
    }
}

impl Mul<i64> for QuaternionicInteger {
    type Output = Self;
    fn mul(self, n: i64) -> Self {
        Self::from_components(scalar::scale(self.to_components(), n))
    }
}

impl Add<QuaternionicInteger> for i64 {
    type Output = QuaternionicInteger;
    fn add(self, q: QuaternionicInteger) -> QuaternionicInteger {
        q + self
    }
}

impl Sub<QuaternionicInteger> for i64 {
    type Output = QuaternionicInteger;
    fn sub(self, q: QuaternionicInteger) -> QuaternionicInteger {
        QuaternionicInteger::new(self - q.scalar, -q.i, -q.j, -q.k)
    }
}

impl Mul<QuaternionicInteger> for i64 {
    type Output = QuaternionicInteger;
    fn mul(self, q: QuaternionicInteger) -> QuaternionicInteger {
        q * self
    }
}

/// Integral when `divisor` divides every component exactly, a general
/// quaternion (true division) otherwise.
impl Div<i64> for QuaternionicInteger {
    type Output = Hypercomplex;
    fn div(self, divisor: i64) -> Hypercomplex {
        match self.exact_div(divisor) {
            Some(q) => Hypercomplex::Integral(q),
            None => Hypercomplex::General(self.to_quaternion() / divisor),
        }
    }
}

impl Div for QuaternionicInteger {
    type Output = Quaternion;
    fn div(self, other: Self) -> Quaternion {
        self.to_quaternion() / other.to_quaternion()
    }
}

impl Div<QuaternionicInteger> for i64 {
    type Output = Quaternion;
    fn div(self, q: QuaternionicInteger) -> Quaternion {
        self / q.to_quaternion()
    }
}

// =============================================================================
// Promotion to the general quaternion
// =============================================================================

macro_rules! promoting_ops {
    ($($t:ty),*) => {$(
        impl Add<$t> for QuaternionicInteger {
            type Output = Quaternion;
            fn add(self, rhs: $t) -> Quaternion {
                self.to_quaternion() + rhs
            }
        }

        impl Sub<$t> for QuaternionicInteger {
            type Output = Quaternion;
            fn sub(self, rhs: $t) -> Quaternion {
                self.to_quaternion() - rhs
            }
        }

        impl Mul<$t> for QuaternionicInteger {
            type Output = Quaternion;
            fn mul(self, rhs: $t) -> Quaternion {
                self.to_quaternion() * rhs
            }
        }

        impl Div<$t> for QuaternionicInteger {
            type Output = Quaternion;
            fn div(self, rhs: $t) -> Quaternion {
                self.to_quaternion() / rhs
            }
        }

        impl Add<QuaternionicInteger> for $t {
            type Output = Quaternion;
            fn add(self, q: QuaternionicInteger) -> Quaternion {
                self + q.to_quaternion()
            }
        }

        impl Sub<QuaternionicInteger> for $t {
            type Output = Quaternion;
            fn sub(self, q: QuaternionicInteger) -> Quaternion {
                self - q.to_quaternion()
            }
        }

        impl Mul<QuaternionicInteger> for $t {
            type Output = Quaternion;
            fn mul(self, q: QuaternionicInteger) -> Quaternion {
                self * q.to_quaternion()
            }
        }

        impl Div<QuaternionicInteger> for $t {
            type Output = Quaternion;
            fn div(self, q: QuaternionicInteger) -> Quaternion {
                self / q.to_quaternion()
            }
        }
    )*};
}

promoting_ops!(f64, Complex64, Quaternion);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn iq1() -> QuaternionicInteger {
        QuaternionicInteger::new(5, 9, -10, 4)
    }

    fn iq2() -> QuaternionicInteger {
        QuaternionicInteger::new(-7, 3, -2, -5)
    }

    fn q1() -> Quaternion {
        Quaternion::new(3.7, 17.1, -2.4, 4.8)
    }

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_display() {
        assert_eq!(iq1().to_string(), "5 + 9i - 10j + 4k");
        assert_eq!(iq2().to_string(), "-7 + 3i - 2j - 5k");
        assert_eq!(
            QuaternionicInteger::new(18, -6, 24, -36).to_string(),
            "18 - 6i + 24j - 36k"
        );
    }

    #[test]
    fn test_truncating_conversion() {
        let q = QuaternionicInteger::from_quaternion(q1());
        assert_eq!(q, QuaternionicInteger::new(3, 17, -2, 4));
        let q = QuaternionicInteger::from_quaternion(Quaternion::new(-0.9, 5.99, -7.5, 0.0));
        assert_eq!(q, QuaternionicInteger::new(0, 5, -7, 0));
    }

    #[test]
    fn test_closed_operations() {
        assert_eq!(iq1() + iq2(), QuaternionicInteger::new(-2, 12, -12, -1));
        assert_eq!(iq1() - iq2(), QuaternionicInteger::new(12, 6, -8, 9));
        assert_eq!(iq1() * iq2(), QuaternionicInteger::new(-62, 10, 117, -41));
        assert_eq!(iq1() + 3, QuaternionicInteger::new(8, 9, -10, 4));
        assert_eq!(3 - iq1(), QuaternionicInteger::new(-2, -9, 10, -4));
        assert_eq!(iq1() * 2, QuaternionicInteger::new(10, 18, -20, 8));
        assert_eq!(-iq1(), QuaternionicInteger::new(-5, -9, 10, -4));
        assert_eq!(iq1().conjugate(), QuaternionicInteger::new(5, -9, 10, -4));
    }

    #[test]
    fn test_promoting_operations() {
        let product: Quaternion = iq1() * q1();
        assert!(product.approx_eq(&Quaternion::new(-178.6, 80.4, -23.8, 188.2)));
        let product: Quaternion = q1() * iq1();
        assert!(product.approx_eq(&Quaternion::new(-178.6, 157.2, -74.2, -110.6)));

        let c = Complex64::new(10.0, -5.0);
        assert_eq!(iq1() * c, Quaternion::new(95.0, 65.0, -120.0, -10.0));
        assert_eq!(c * iq1(), Quaternion::new(95.0, 65.0, -80.0, 90.0));

        let sum: Quaternion = iq1() + 0.5;
        assert_eq!(sum, Quaternion::new(5.5, 9.0, -10.0, 4.0));
    }

    #[test]
    fn test_division() {
        let q = QuaternionicInteger::new(18, -6, 24, -36);
        assert_eq!(q / 6, Hypercomplex::Integral(QuaternionicInteger::new(3, -1, 4, -6)));
        assert_eq!(
            iq1() / 2,
            Hypercomplex::General(Quaternion::new(2.5, 4.5, -5.0, 2.0))
        );
        assert!((iq1() / 0).to_quaternion().scalar().is_infinite());

        let quotient: Quaternion = iq1() / iq2();
        assert!((quotient * iq2()).approx_eq(&iq1().to_quaternion()));
        assert_eq!(q.exact_div(0), None);
    }

    #[test]
    fn test_equality_and_hash() {
        assert_eq!(iq1(), Quaternion::new(5.0, 9.0, -10.0, 4.0));
        assert_eq!(Quaternion::new(5.0, 9.0, -10.0, 4.0), iq1());
        assert_eq!(QuaternionicInteger::new(-6, 0, 0, 0), -6);
        assert_eq!(QuaternionicInteger::new(-6, 0, 0, 0), -6.0);
        assert_eq!(QuaternionicInteger::new(4, -2, 0, 0), Complex64::new(4.0, -2.0));
        assert_eq!(
            hash_of(&iq1()),
            hash_of(&Quaternion::new(5.0, 9.0, -10.0, 4.0))
        );
    }

    #[test]
    fn test_checked_operations() {
        assert_eq!(iq1().checked_mul(&iq2()), Some(iq1() * iq2()));
        assert_eq!(iq1().checked_add(&iq2()), Some(iq1() + iq2()));
        assert_eq!(iq1().checked_sub(&iq2()), Some(iq1() - iq2()));
        assert_eq!(iq1().checked_neg(), Some(-iq1()));
        assert_eq!(iq1().checked_norm_squared(), Some(222));

        let big = QuaternionicInteger::new(i64::MAX, 0, 0, 0);
        assert_eq!(big.checked_add(&QuaternionicInteger::ONE), None);
        assert_eq!(big.checked_mul(&QuaternionicInteger::new(0, 2, 0, 0)), None);
        assert_eq!(big.checked_norm_squared(), None);
        assert_eq!(QuaternionicInteger::new(0, 0, i64::MIN, 0).checked_neg(), None);
    }

    #[test]
    fn test_exact_division_outside_range() {
        let min = QuaternionicInteger::new(i64::MIN, 0, 0, 0);
        assert_eq!(min.exact_div(-1), None);
        assert_eq!(min.exact_div(2), Some(QuaternionicInteger::new(i64::MIN / 2, 0, 0, 0)));

        let quotient = min / -1;
        assert!(!quotient.is_integral());
        assert_eq!(quotient.to_quaternion().scalar(), 9.223372036854775808e18);
    }

    #[test]
    fn test_equality_with_floats_is_exact() {
        let above = QuaternionicInteger::new((1 << 53) + 1, 0, 0, 0);
        let rounded = Quaternion::from_real((1u64 << 53) as f64);
        assert_ne!(above, rounded);
        assert_ne!(rounded, above);
        assert_eq!(QuaternionicInteger::new(1 << 53, 0, 0, 0), rounded);
        assert_ne!(QuaternionicInteger::new(i64::MAX, 0, 0, 0), 9.223372036854775808e18);
        assert_ne!(QuaternionicInteger::ONE, f64::NAN);
    }

    #[test]
    fn test_norm_and_power() {
        assert_eq!(iq1().norm_squared(), 222);
        assert!((iq1().norm() - 222f64.sqrt()).abs() < 1e-12);
        let squared = iq1().powf(2.0).unwrap();
        assert!(squared.approx_eq(&(iq1() * iq1()).to_quaternion()));
        assert_eq!(iq1().to_i64(), Some(5));
    }
}
