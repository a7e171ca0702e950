//! Quaternion value types.
//!
//! # Sections
//! - [`Quaternion`]: four floating components, the general case
//! - [`QuaternionicInteger`]: four integer components, closed under ring operations
//! - [`Hypercomplex`]: result of an operation that may or may not stay integral
//! - [`QuaternionBuilder`]: multi-shape construction
//! - text parsing via [`core::str::FromStr`]

mod builder;
mod integer;
mod parse;
mod quaternion;

pub use builder::{Arg, Component, QuaternionBuilder};
pub use integer::QuaternionicInteger;
pub use quaternion::Quaternion;

use core::fmt;

/// A quaternion that is integral when it can be.
#[derive(Clone, Copy, Debug)]
pub enum Hypercomplex {
    Integral(QuaternionicInteger),
    General(Quaternion),
}

impl Hypercomplex {
    pub fn to_quaternion(&self) -> Quaternion {
        match self {
            Hypercomplex::Integral(q) => q.to_quaternion(),
            Hypercomplex::General(q) => *q,
        }
    }

    pub fn is_integral(&self) -> bool {
        matches!(self, Hypercomplex::Integral(_))
    }

    pub fn as_integral(&self) -> Option<QuaternionicInteger> {
        match self {
            Hypercomplex::Integral(q) => Some(*q),
            Hypercomplex::General(_) => None,
        }
    }

    pub fn to_list(&self) -> [f64; 4] {
        self.to_quaternion().to_list()
    }
}

/// Compares by value, so an integral and a general quaternion can be equal.
impl PartialEq for Hypercomplex {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Hypercomplex::Integral(a), Hypercomplex::Integral(b)) => a == b,
            _ => self.to_quaternion() == other.to_quaternion(),
        }
    }
}

impl PartialEq<Quaternion> for Hypercomplex {
    fn eq(&self, other: &Quaternion) -> bool {
        self.to_quaternion() == *other
    }
}

impl PartialEq<QuaternionicInteger> for Hypercomplex {
    fn eq(&self, other: &QuaternionicInteger) -> bool {
        match self {
            Hypercomplex::Integral(q) => q == other,
            Hypercomplex::General(q) => q == other,
        }
    }
}

impl fmt::Display for Hypercomplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hypercomplex::Integral(q) => fmt::Display::fmt(q, f),
            Hypercomplex::General(q) => fmt::Display::fmt(q, f),
        }
    }
}

impl From<Quaternion> for Hypercomplex {
    fn from(q: Quaternion) -> Self {
        Hypercomplex::General(q)
    }
}

impl From<QuaternionicInteger> for Hypercomplex {
    fn from(q: QuaternionicInteger) -> Self {
        Hypercomplex::Integral(q)
    }
}

impl From<Hypercomplex> for Quaternion {
    fn from(h: Hypercomplex) -> Self {
        h.to_quaternion()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_equality_across_variants() {
        let integral = Hypercomplex::Integral(QuaternionicInteger::new(3, -1, 4, -6));
        let general = Hypercomplex::General(Quaternion::new(3.0, -1.0, 4.0, -6.0));
        assert_eq!(integral, general);
        assert!(integral.is_integral());
        assert!(!general.is_integral());
        assert_eq!(general.as_integral(), None);
        assert_eq!(integral.to_string(), "3 - 1i + 4j - 6k");
        assert_eq!(general.to_string(), "3.0000 - 1.0000i + 4.0000j - 6.0000k");
    }
}
