//! Fixed-width component storage.
//!
//! Values are still computed in `f64` / `i64`; narrowing rounds (floats) or
//! wraps (integers) every component to what the storage type can hold.

use half::f16;

use crate::hypercomplex::{Quaternion, QuaternionicInteger};

/// Storage type of each floating component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FloatWidth {
    Half,
    Single,
    Double,
}

impl FloatWidth {
    /// Bits for all four components.
    pub fn total_bits(self) -> u32 {
        4 * match self {
            FloatWidth::Half => 16,
            FloatWidth::Single => 32,
            FloatWidth::Double => 64,
        }
    }

    pub fn narrow(self, value: f64) -> f64 {
        match self {
            FloatWidth::Half => f16::from_f64(value).to_f64(),
            FloatWidth::Single => f64::from(value as f32),
            FloatWidth::Double => value,
        }
    }
}

/// Storage type of each integer component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntegerWidth {
    I8,
    I16,
    I32,
    I64,
}

impl IntegerWidth {
    pub fn total_bits(self) -> u32 {
        4 * match self {
            IntegerWidth::I8 => 8,
            IntegerWidth::I16 => 16,
            IntegerWidth::I32 => 32,
            IntegerWidth::I64 => 64,
        }
    }

    /// Two's-complement wrap to the storage type.
    pub fn narrow(self, value: i64) -> i64 {
        match self {
            IntegerWidth::I8 => i64::from(value as i8),
            IntegerWidth::I16 => i64::from(value as i16),
            IntegerWidth::I32 => i64::from(value as i32),
            IntegerWidth::I64 => value,
        }
    }
}

impl Quaternion {
    /// Rounds every component through `width`.
    pub fn narrow(&self, width: FloatWidth) -> Quaternion {
        Quaternion::from(self.to_list().map(|c| width.narrow(c)))
    }
}

impl QuaternionicInteger {
    /// Wraps every component to `width`.
    pub fn narrow(&self, width: IntegerWidth) -> QuaternionicInteger {
        QuaternionicInteger::from(self.to_list().map(|c| width.narrow(c)))
    }
}
