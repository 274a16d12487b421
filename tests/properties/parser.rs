//! Property tests for request parsing.

use proptest::prelude::*;

use minicalc::{evaluate, parse_request, Operator};

fn operator() -> impl Strategy<Value = Operator> {
    prop::sample::select(Operator::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `parse_request` never panics on arbitrary small input.
    #[test]
    fn property_parse_request_never_panics(input in "(?s).{0,64}") {
        let _ = parse_request(&input);
    }

    /// PROPERTY: parsing and evaluating arbitrary input never panics.
    #[test]
    fn property_parse_and_evaluate_never_panics(input in "[-+*/x0-9. e]{0,24}") {
        if let Ok(request) = parse_request(&input) {
            let _ = evaluate(&request);
        }
    }

    /// PROPERTY: infix, prefix and compact spellings parse to the same request.
    #[test]
    fn property_spellings_agree(a in -1000i32..1000, b in -1000i32..1000, op in operator()) {
        let infix = parse_request(&format!("{} {} {}", a, op.symbol(), b)).unwrap();
        let prefix = parse_request(&format!("{} {} {}", op.name(), a, b)).unwrap();
        let compact = parse_request(&format!("{}{}{}", a, op.symbol(), b)).unwrap();

        prop_assert_eq!(infix, prefix);
        prop_assert_eq!(infix, compact);
        prop_assert_eq!(infix.lhs, a as f64);
        prop_assert_eq!(infix.operator, op);
        prop_assert_eq!(infix.rhs, b as f64);
    }
}
