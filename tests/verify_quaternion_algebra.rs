use num_complex::Complex64;
use quaternionic::tower::dispatch::apply_args;
use quaternionic::{
    apply, complex_matrix, geodesic_distance, matrix_to_quaternion, real_matrix, Arg, BinaryOp,
    Component, DisplayEquation, EquationOperator, Hypercomplex, ListOrdering, Number, Quaternion,
    QuaternionError, QuaternionList, QuaternionicInteger,
};

fn q1() -> Quaternion {
    Quaternion::new(3.7, 17.1, -2.4, 4.8)
}

fn q3() -> Quaternion {
    Quaternion::new(12.4, -10.0, -41.23, -1.213)
}

#[test]
fn test_concrete_sum_and_product() {
    let a = Quaternion::new(7.0, 6.0, -4.0, 2.0);
    let b = Quaternion::new(5.0, -1.0, -2.0, 9.0);
    assert_eq!(a + b, Quaternion::new(12.0, 5.0, -6.0, 11.0));
    assert_eq!(a * b, Quaternion::new(15.0, -9.0, -90.0, 57.0));
    assert_ne!(a * b, b * a);
}

#[test]
fn test_integral_product_keeps_type() {
    let product: QuaternionicInteger =
        QuaternionicInteger::new(5, 9, -10, 4) * QuaternionicInteger::new(-7, 3, -2, -5);
    assert_eq!(product, QuaternionicInteger::new(-62, 10, 117, -41));
    assert_eq!(product.to_string(), "-62 + 10i + 117j - 41k");
}

#[test]
fn test_text_construction() {
    let q: Quaternion = "3.6 - 5i + 100k + 4.6j".parse().unwrap();
    assert_eq!(q, Quaternion::new(3.6, -5.0, 4.6, 100.0));

    let q = Quaternion::builder().arg("3.6 - 5i + 100k + 4.6j").build().unwrap();
    assert_eq!(q, Quaternion::new(3.6, -5.0, 4.6, 100.0));

    let err = "3.6 - 5x".parse::<Quaternion>().unwrap_err();
    assert!(matches!(err, QuaternionError::Format(_)));
}

#[test]
fn test_matrix_round_trip() {
    for q in [q1(), q3(), Quaternion::ZERO, Quaternion::K] {
        assert_eq!(matrix_to_quaternion(&complex_matrix(q)), Ok(q));
        assert_eq!(matrix_to_quaternion(&real_matrix(q)), Ok(q));
    }
}

#[test]
fn test_canonical_text() {
    assert_eq!(q1().to_string(), "3.7000 + 17.1000i - 2.4000j + 4.8000k");
    assert_eq!(q3().to_string(), "12.4000 - 10.0000i - 41.2300j - 1.2130k");
    assert_eq!(QuaternionicInteger::new(5, 9, -10, 4).to_string(), "5 + 9i - 10j + 4k");
}

#[test]
fn test_mixed_kind_promotion() {
    let iq = QuaternionicInteger::new(5, 9, -10, 4);

    let with_float: Quaternion = iq + 1.0;
    assert_eq!(with_float, Quaternion::new(6.0, 9.0, -10.0, 4.0));

    let with_int: QuaternionicInteger = iq + 1;
    assert_eq!(with_int, QuaternionicInteger::new(6, 9, -10, 4));

    let with_complex: Quaternion = Complex64::new(10.0, -5.0) * iq;
    assert_eq!(with_complex, Quaternion::new(95.0, 65.0, -80.0, 90.0));

    // typed operators and the dispatcher agree
    let via_dispatch = apply(BinaryOp::Mul, Number::from(Complex64::new(10.0, -5.0)), Number::from(iq));
    assert_eq!(via_dispatch, Ok(Number::Quaternion(with_complex)));
}

#[test]
fn test_integer_division_by_scalar() {
    let q = QuaternionicInteger::new(18, -6, 24, -36);
    assert_eq!(q / 6, Hypercomplex::Integral(QuaternionicInteger::new(3, -1, 4, -6)));
    assert!(!(q / 7).is_integral());
    assert!((q / 7).to_quaternion().approx_eq(&(q.to_quaternion() / 7.0)));
}

#[test]
fn test_builder_shapes() {
    let q = Quaternion::builder()
        .arg(Complex64::new(3.0, 2.0))
        .arg(Complex64::new(-4.0, -6.0))
        .build()
        .unwrap();
    assert_eq!(q, Quaternion::new(3.0, 2.0, -4.0, -6.0));

    let q = Quaternion::builder()
        .arg(2)
        .named_str("k", 5.5)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(q, Quaternion::new(2.0, 0.0, 0.0, 5.5));

    let err = Quaternion::builder().arg(2).named(Component::Scalar, 1).build().unwrap_err();
    assert!(err.is_argument_type());

    let err = Quaternion::builder().named_str("w", 1).unwrap_err();
    assert_eq!(err, QuaternionError::UnknownComponent("w".into()));
}

#[test]
fn test_power_and_reciprocal() {
    let squared = q1().powf(2.0).unwrap();
    assert!(squared.approx_eq_with(&(q1() * q1()), &quaternionic::FormatConfig::new().with_epsilon(1e-9)));
    assert_eq!(Quaternion::ZERO.reciprocal(), Err(QuaternionError::DivisionByZero));
    assert!((q1() * q1().reciprocal().unwrap()).approx_eq(&Quaternion::ONE));
}

#[test]
fn test_text_operands_are_rejected() {
    let err = apply_args(BinaryOp::Mul, &Arg::from("1 + i"), &Arg::from(q1())).unwrap_err();
    assert!(matches!(err, QuaternionError::ArgumentType(_)));
}

#[test]
fn test_collaborators() {
    let eq = DisplayEquation::new(
        QuaternionicInteger::new(7, 6, -4, 2),
        QuaternionicInteger::new(5, -1, -2, 9),
        EquationOperator::try_from('*').unwrap(),
    )
    .unwrap();
    assert_eq!(eq.result(), QuaternionicInteger::new(15, -9, -90, 57));

    let mut list = QuaternionList::new(ListOrdering::Norm);
    list.add(q3());
    list.add(q1());
    assert_eq!(list.head(), Some(&q1()));

    assert!(geodesic_distance(q1(), q3()).unwrap() > 0.0);
}
