//! Property tests for the calculator operations.

use proptest::prelude::*;

use minicalc::{add, divide, multiply, subtract, CalcError};

fn operand() -> impl Strategy<Value = f64> {
    // Keep magnitudes moderate so products and quotients stay finite.
    -1.0e6f64..1.0e6f64
}

fn non_zero_operand() -> impl Strategy<Value = f64> {
    operand().prop_filter("non-zero divisor", |b| b.abs() > 1.0e-6)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: addition is commutative.
    #[test]
    fn property_add_commutes(a in operand(), b in operand()) {
        prop_assert_eq!(add(a, b), add(b, a));
    }

    /// PROPERTY: multiplication is commutative.
    #[test]
    fn property_multiply_commutes(a in operand(), b in operand()) {
        prop_assert_eq!(multiply(a, b), multiply(b, a));
    }

    /// PROPERTY: subtraction is antisymmetric.
    #[test]
    fn property_subtract_antisymmetric(a in operand(), b in operand()) {
        prop_assert_eq!(subtract(a, b), -subtract(b, a));
    }

    /// PROPERTY: multiplying a quotient by its divisor recovers the dividend.
    #[test]
    fn property_divide_then_multiply_recovers_dividend(
        a in operand(),
        b in non_zero_operand(),
    ) {
        let q = divide(a, b).unwrap();
        let back = q * b;
        let tolerance = 1.0e-9 * a.abs().max(1.0);
        prop_assert!((back - a).abs() <= tolerance, "{} / {} * {} = {}", a, b, b, back);
    }

    /// PROPERTY: division by zero is always an error, never a panic or infinity.
    #[test]
    fn property_divide_by_zero_errors(a in any::<f64>(), negative in any::<bool>()) {
        let zero = if negative { -0.0 } else { 0.0 };
        prop_assert!(matches!(divide(a, zero), Err(CalcError::DivisionByZero)));
    }
}
