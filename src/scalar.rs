//! Component arithmetic shared by the floating and integral quaternion types.
//!
//! Both value types store four components of one scalar type and apply the
//! same algebra to them. The formulas live here once, generic over
//! [`Component`], so that the integral path can never drift from the general
//! one.
//!
//! # Hamilton product
//!
//! ```text
//! s = a.s·b.s − a.i·b.i − a.j·b.j − a.k·b.k
//! i = a.s·b.i + a.i·b.s + a.j·b.k − a.k·b.j
//! j = a.s·b.j − a.i·b.k + a.j·b.s + a.k·b.i
//! k = a.s·b.k + a.i·b.j − a.j·b.i + a.k·b.s
//! ```

use core::fmt::Debug;
use core::ops::{Neg, Sub};
use num_traits::{CheckedAdd, CheckedMul, CheckedNeg, CheckedSub, One, Zero};

/// Scalar type a quaternion can be built from.
pub trait Component:
    Copy + Debug + PartialEq + PartialOrd + Zero + One + Sub<Output = Self> + Neg<Output = Self>
{
    fn to_f64(self) -> f64;
}

impl Component for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

impl Component for i64 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

/// Components in `[scalar, i, j, k]` order.
pub type Components<T> = [T; 4];

pub fn add<T: Component>(a: Components<T>, b: Components<T>) -> Components<T> {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2], a[3] + b[3]]
}

pub fn sub<T: Component>(a: Components<T>, b: Components<T>) -> Components<T> {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2], a[3] - b[3]]
}

pub fn neg<T: Component>(a: Components<T>) -> Components<T> {
    [-a[0], -a[1], -a[2], -a[3]]
}

pub fn scale<T: Component>(a: Components<T>, factor: T) -> Components<T> {
    [a[0] * factor, a[1] * factor, a[2] * factor, a[3] * factor]
}

pub fn conjugate<T: Component>(a: Components<T>) -> Components<T> {
    [a[0], -a[1], -a[2], -a[3]]
}

pub fn norm_squared<T: Component>(a: Components<T>) -> T {
    a[0] * a[0] + a[1] * a[1] + a[2] * a[2] + a[3] * a[3]
}

/// Hamilton product `a · b` (not commutative).
pub fn hamilton<T: Component>(a: Components<T>, b: Components<T>) -> Components<T> {
    let [s1, i1, j1, k1] = a;
    let [s2, i2, j2, k2] = b;

    [
        s1 * s2 - i1 * i2 - j1 * j2 - k1 * k2,
        s1 * i2 + i1 * s2 + j1 * k2 - k1 * j2,
        s1 * j2 - i1 * k2 + j1 * s2 + k1 * i2,
        s1 * k2 + i1 * j2 - j1 * i2 + k1 * s2,
    ]
}

// =============================================================================
// Checked variants for bounded components
// =============================================================================

/// Component types whose arithmetic can overflow.
pub trait CheckedComponent: Component + CheckedAdd + CheckedSub + CheckedMul + CheckedNeg {}

impl CheckedComponent for i64 {}

pub fn checked_add<T: CheckedComponent>(a: Components<T>, b: Components<T>) -> Option<Components<T>> {
    Some([
        a[0].checked_add(&b[0])?,
        a[1].checked_add(&b[1])?,
        a[2].checked_add(&b[2])?,
        a[3].checked_add(&b[3])?,
    ])
}

pub fn checked_sub<T: CheckedComponent>(a: Components<T>, b: Components<T>) -> Option<Components<T>> {
    Some([
        a[0].checked_sub(&b[0])?,
        a[1].checked_sub(&b[1])?,
        a[2].checked_sub(&b[2])?,
        a[3].checked_sub(&b[3])?,
    ])
}

pub fn checked_neg<T: CheckedComponent>(a: Components<T>) -> Option<Components<T>> {
    Some([
        a[0].checked_neg()?,
        a[1].checked_neg()?,
        a[2].checked_neg()?,
        a[3].checked_neg()?,
    ])
}

// `Σ ±x·y`, `None` as soon as a product or a partial sum overflows.
fn checked_signed_sum<T: CheckedComponent>(terms: [(T, T, bool); 4]) -> Option<T> {
    terms.iter().try_fold(T::zero(), |acc, &(x, y, positive)| {
        let product = x.checked_mul(&y)?;
        if positive {
            acc.checked_add(&product)
        } else {
            acc.checked_sub(&product)
        }
    })
}

pub fn checked_norm_squared<T: CheckedComponent>(a: Components<T>) -> Option<T> {
    checked_signed_sum(a.map(|c| (c, c, true)))
}

/// [`hamilton`] with every product and partial sum checked.
pub fn checked_hamilton<T: CheckedComponent>(
    a: Components<T>,
    b: Components<T>,
) -> Option<Components<T>> {
    let [s1, i1, j1, k1] = a;
    let [s2, i2, j2, k2] = b;

    Some([
        checked_signed_sum([(s1, s2, true), (i1, i2, false), (j1, j2, false), (k1, k2, false)])?,
        checked_signed_sum([(s1, i2, true), (i1, s2, true), (j1, k2, true), (k1, j2, false)])?,
        checked_signed_sum([(s1, j2, true), (i1, k2, false), (j1, s2, true), (k1, i2, true)])?,
        checked_signed_sum([(s1, k2, true), (i1, j2, true), (j1, i2, false), (k1, s2, true)])?,
    ])
}

pub fn to_f64<T: Component>(a: Components<T>) -> Components<f64> {
    [a[0].to_f64(), a[1].to_f64(), a[2].to_f64(), a[3].to_f64()]
}

pub fn is_zero<T: Component>(a: Components<T>) -> bool {
    a.iter().all(|c| c.is_zero())
}
