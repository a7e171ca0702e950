//! Matrix representations of quaternions.
//!
//! Both maps are ring homomorphisms: matrix sums and products correspond to
//! quaternion sums and Hamilton products.
//!
//! ```text
//! complex (2x2)            real (4x4)
//! [ s+ii   j+ki ]          [ s  -i  -j  -k ]
//! [ -j+ki  s-ii ]          [ i   s  -k   j ]
//!                          [ j   k   s  -i ]
//!                          [ k  -j   i   s ]
//! ```

use ndarray::{array, Array2};
use num_complex::Complex64;

use crate::error::{QuatResult, QuaternionError};
use crate::hypercomplex::Quaternion;

pub fn complex_matrix(q: impl Into<Quaternion>) -> Array2<Complex64> {
    let [s, i, j, k] = q.into().to_list();
    array![
        [Complex64::new(s, i), Complex64::new(j, k)],
        [Complex64::new(-j, k), Complex64::new(s, -i)],
    ]
}

pub fn real_matrix(q: impl Into<Quaternion>) -> Array2<f64> {
    let [s, i, j, k] = q.into().to_list();
    array![
        [s, -i, -j, -k],
        [i, s, -k, j],
        [j, k, s, -i],
        [k, -j, i, s],
    ]
}

/// A matrix that can be read back as a quaternion.
pub trait QuaternionMatrix {
    fn to_quaternion(&self) -> QuatResult<Quaternion>;
}

fn check_shape(shape: &[usize], size: usize) -> QuatResult<()> {
    if shape != [size, size] {
        return Err(QuaternionError::Shape {
            expected: format!("{size}x{size}"),
            found: shape
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("x"),
        });
    }
    Ok(())
}

/// Reads the first row.
impl QuaternionMatrix for Array2<Complex64> {
    fn to_quaternion(&self) -> QuatResult<Quaternion> {
        check_shape(self.shape(), 2)?;
        Ok(Quaternion::from_complex_pair(self[[0, 0]], self[[0, 1]]))
    }
}

/// Reads the first column.
impl QuaternionMatrix for Array2<f64> {
    fn to_quaternion(&self) -> QuatResult<Quaternion> {
        check_shape(self.shape(), 4)?;
        Ok(Quaternion::new(
            self[[0, 0]],
            self[[1, 0]],
            self[[2, 0]],
            self[[3, 0]],
        ))
    }
}

/// Inverse of [`complex_matrix`] and [`real_matrix`].
///
/// # Errors
/// [`QuaternionError::Shape`] unless a complex matrix is 2x2 or a real one 4x4.
pub fn matrix_to_quaternion<M: QuaternionMatrix>(matrix: &M) -> QuatResult<Quaternion> {
    matrix.to_quaternion()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hypercomplex::QuaternionicInteger;

    fn q1() -> Quaternion {
        Quaternion::new(3.7, 17.1, -2.4, 4.8)
    }

    fn q2() -> Quaternion {
        Quaternion::new(-5.0, 0.0, 10.0, -5.0)
    }

    #[test]
    fn test_round_trip() {
        assert_eq!(matrix_to_quaternion(&complex_matrix(q1())), Ok(q1()));
        assert_eq!(matrix_to_quaternion(&real_matrix(q1())), Ok(q1()));

        let iq = QuaternionicInteger::new(5, 9, -10, 4);
        assert_eq!(matrix_to_quaternion(&real_matrix(iq)), Ok(iq.to_quaternion()));
    }

    #[test]
    fn test_complex_homomorphism() {
        let sum = complex_matrix(q1()) + complex_matrix(q2());
        assert_eq!(matrix_to_quaternion(&sum), Ok(q1() + q2()));

        let product = complex_matrix(q1()).dot(&complex_matrix(q2()));
        let q = matrix_to_quaternion(&product).unwrap();
        assert!(q.approx_eq(&(q1() * q2())));
    }

    #[test]
    fn test_real_homomorphism() {
        let sum = real_matrix(q1()) + real_matrix(q2());
        assert_eq!(matrix_to_quaternion(&sum), Ok(q1() + q2()));

        let product = real_matrix(q1()).dot(&real_matrix(q2()));
        let q = matrix_to_quaternion(&product).unwrap();
        assert!(q.approx_eq(&(q1() * q2())));

        // the whole product matrix, not only the column read back
        let expected = real_matrix(q1() * q2());
        assert!(product
            .iter()
            .zip(expected.iter())
            .all(|(a, b)| (a - b).abs() < 1e-9));
    }

    #[test]
    fn test_wrong_shape() {
        let err = matrix_to_quaternion(&Array2::<f64>::zeros((3, 3))).unwrap_err();
        assert_eq!(
            err,
            QuaternionError::Shape {
                expected: "4x4".into(),
                found: "3x3".into()
            }
        );
        let err = matrix_to_quaternion(&Array2::<Complex64>::zeros((4, 4))).unwrap_err();
        assert!(matches!(err, QuaternionError::Shape { .. }));
    }
}
