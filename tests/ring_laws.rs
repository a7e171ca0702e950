//! Property-based tests of the quaternion algebra.

use proptest::prelude::*;
use quaternionic::tower::negate;
use quaternionic::{apply, BinaryOp, Number, Quaternion, QuaternionicInteger};

fn component() -> impl Strategy<Value = f64> {
    -100.0f64..100.0
}

fn quaternion_strategy() -> impl Strategy<Value = Quaternion> {
    (component(), component(), component(), component())
        .prop_map(|(s, i, j, k)| Quaternion::new(s, i, j, k))
}

fn integer_strategy() -> impl Strategy<Value = QuaternionicInteger> {
    (-50i64..50, -50i64..50, -50i64..50, -50i64..50)
        .prop_map(|(s, i, j, k)| QuaternionicInteger::new(s, i, j, k))
}

/// Componentwise comparison, relative to the size of the operands.
fn close(a: Quaternion, b: Quaternion) -> bool {
    let tolerance = 1e-9 * (1.0 + a.norm().max(b.norm()));
    a.to_list()
        .iter()
        .zip(b.to_list().iter())
        .all(|(x, y)| (x - y).abs() <= tolerance)
}

proptest! {
    #[test]
    fn test_real_identities(q in quaternion_strategy(), a in component(), b in component()) {
        prop_assert!(close((q + a) + b, q + (a + b)));
        prop_assert_eq!(q * 1i64, q);
        prop_assert_eq!(q + 0i64, q);
        prop_assert_eq!(q * Quaternion::ONE, q);
    }

    #[test]
    fn test_multiplication_associativity(
        p in quaternion_strategy(),
        q in quaternion_strategy(),
        r in quaternion_strategy()
    ) {
        prop_assert!(close((p * q) * r, p * (q * r)));
    }

    #[test]
    fn test_distributivity(
        p in quaternion_strategy(),
        q in quaternion_strategy(),
        r in quaternion_strategy()
    ) {
        // r(p + q) = rp + rq and (p + q)r = pr + qr
        prop_assert!(close(r * (p + q), r * p + r * q));
        prop_assert!(close((p + q) * r, p * r + q * r));
    }

    #[test]
    fn test_reciprocal_is_two_sided_inverse(q in quaternion_strategy()) {
        prop_assume!(q.norm() > 1e-3);
        let r = q.reciprocal().unwrap();
        prop_assert!(close(q * r, Quaternion::ONE));
        prop_assert!(close(r * q, Quaternion::ONE));
    }

    #[test]
    fn test_norm(q in quaternion_strategy()) {
        let [s, i, j, k] = q.to_list();
        let sum = s * s + i * i + j * j + k * k;
        prop_assert!((q.norm().powi(2) - sum).abs() <= 1e-9 * (1.0 + sum));
        prop_assert_eq!(q.norm(), q.abs());
        prop_assert!(q.norm() >= 0.0);
    }

    #[test]
    fn test_text_round_trip(q in quaternion_strategy()) {
        let parsed: Quaternion = q.to_string().parse().unwrap();
        prop_assert!(parsed.approx_eq_with(&q, &quaternionic::FormatConfig::new().with_epsilon(5e-5)));
    }

    #[test]
    fn test_list_round_trip(q in quaternion_strategy()) {
        prop_assert_eq!(Quaternion::from_iterable(q.to_list()).unwrap(), q);
    }

    #[test]
    fn test_integral_ring_laws(
        a in integer_strategy(),
        b in integer_strategy(),
        c in integer_strategy()
    ) {
        prop_assert_eq!((a * b) * c, a * (b * c));
        prop_assert_eq!(a * (b + c), a * b + a * c);
        prop_assert_eq!((a * b).to_quaternion(), a.to_quaternion() * b.to_quaternion());
    }

    #[test]
    fn test_integral_closure_by_operand_kind(a in integer_strategy(), b in integer_strategy()) {
        for op in [BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul] {
            let result = apply(op, Number::from(a), Number::from(b)).unwrap();
            prop_assert!(matches!(result, Number::QuaternionicInteger(_)));

            // same values, general operand: never integral
            let general = apply(op, Number::from(a), Number::from(b.to_quaternion())).unwrap();
            prop_assert!(matches!(general, Number::Quaternion(_)));
            prop_assert_eq!(general, result);
        }
    }

    #[test]
    fn test_exact_integer_division(a in integer_strategy(), d in 1i64..10) {
        let scaled = a * d;
        prop_assert_eq!(
            apply(BinaryOp::Div, Number::from(scaled), Number::Integer(d)),
            Ok(Number::QuaternionicInteger(a))
        );
    }

    #[test]
    fn test_integral_ops_over_full_range(
        a in any::<[i64; 4]>(),
        b in any::<[i64; 4]>(),
        n in any::<i64>()
    ) {
        let (a, b) = (QuaternionicInteger::from(a), QuaternionicInteger::from(b));
        for op in [BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div] {
            let result = apply(op, Number::from(a), Number::from(b));
            prop_assert!(result.is_ok() || b == QuaternionicInteger::ZERO);
            let result = apply(op, Number::from(a), Number::Integer(n));
            prop_assert!(result.is_ok() || n == 0);
        }
        prop_assert_eq!(negate(Number::from(a)).to_quaternion(), -a.to_quaternion());
    }
}
