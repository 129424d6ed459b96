//! Algebraic properties of the canonical forms
//!
//! Equal quantities must give structurally equal values, whatever the
//! order or grouping of the operations that produced them.

use pretty_assertions::assert_eq;
use unitcanon_core::primes::MAX_DISTINCT_PRIME_FACTORS;
use unitcanon_core::{
    magnitude_from_int, magnitude_from_irrational, magnitude_from_ratio, prime_factorization,
    AlgebraError, Dimension, Irrational, Magnitude,
};

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn factor_pairs(n: u64) -> Vec<(u64, i32)> {
    prime_factorization(n)
        .unwrap()
        .iter()
        .map(|fe| (fe.factor, fe.exponent))
        .collect()
}

#[test]
fn test_factorization_known_values() {
    assert_eq!(factor_pairs(2 * 2 * 7 * 13 * 17 * 17), vec![(2, 2), (7, 1), (13, 1), (17, 2)]);
    assert_eq!(factor_pairs(1 << 63), vec![(2, 63)]);
    assert_eq!(factor_pairs(1), vec![]);
    assert_eq!(factor_pairs(25), vec![(5, 2)]);
    assert_eq!(factor_pairs(49), vec![(7, 2)]);
    assert_eq!(factor_pairs(1_000_000), vec![(2, 6), (5, 6)]);
}

#[test]
fn test_factorization_large_prime() {
    // smallest prime above 2³²
    assert_eq!(factor_pairs(4_294_967_311), vec![(4_294_967_311, 1)]);
    // product of two primes just below 2³²
    assert_eq!(
        factor_pairs(4_294_967_291 * 3),
        vec![(3, 1), (4_294_967_291, 1)]
    );
}

#[test]
#[ignore = "trial division up to 2³² is slow without optimizations"]
fn test_factorization_largest_u64_prime() {
    assert_eq!(
        factor_pairs(18_446_744_073_709_551_557),
        vec![(18_446_744_073_709_551_557, 1)]
    );
}

#[test]
fn test_factorization_primorial() {
    let primes: [u64; 15] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];
    let primorial: u64 = primes.iter().product();
    let pairs = factor_pairs(primorial);
    assert_eq!(pairs.len(), MAX_DISTINCT_PRIME_FACTORS);
    assert_eq!(pairs, primes.iter().map(|&p| (p, 1)).collect::<Vec<_>>());
}

#[test]
fn test_factorization_product_and_order() {
    for n in (1..100_000u64).step_by(97).chain([u64::MAX, u64::MAX - 1, 614_889_782_588_491_410]) {
        let factorization = prime_factorization(n).unwrap();
        assert_eq!(factorization.product(), Some(n), "product of factors of {n}");
        let factors: Vec<u64> = factorization.iter().map(|fe| fe.factor).collect();
        assert!(
            factors.windows(2).all(|w| w[0] < w[1]),
            "factors of {n} not strictly ascending: {factors:?}"
        );
        assert!(factorization.iter().all(|fe| fe.exponent > 0));
    }
}

#[test]
fn test_factorization_rejects_zero() {
    assert_eq!(
        prime_factorization(0).map(|f| f.len()),
        Err(AlgebraError::FactorizationDomain { value: 0 })
    );
}

#[test]
fn test_magnitude_times_inverse_is_one() {
    for n in [1u64, 2, 360, 1000, 1_609_344, 4_294_967_311, u64::MAX] {
        let m = magnitude_from_int(n).unwrap();
        let product = m.multiply(&m.invert()).unwrap();
        assert!(product.is_one());
        assert_eq!(product.evaluate(), 1.0);
    }
}

#[test]
fn test_ratio_reduction() {
    let pairs = [(420u64, 370u64), (1000, 10), (1_609_344, 1000), (36, 48), (7, 7)];
    for (a, b) in pairs {
        let g = gcd(a, b);
        assert_eq!(
            magnitude_from_ratio(a, b).unwrap(),
            magnitude_from_ratio(a / g, b / g).unwrap(),
            "{a}/{b}"
        );
        assert_eq!(magnitude_from_ratio(a, b).unwrap().as_ratio(), Some((a / g, b / g)));
    }
}

#[test]
fn test_magnitude_multiply_commutative_associative() {
    let a = magnitude_from_ratio(3, 8).unwrap();
    let b = magnitude_from_irrational(Irrational::PI);
    let c = magnitude_from_ratio(1000, 9).unwrap();

    assert_eq!(a.multiply(&b).unwrap(), b.multiply(&a).unwrap());
    assert_eq!(
        a.multiply(&b).unwrap().multiply(&c).unwrap(),
        a.multiply(&b.multiply(&c).unwrap()).unwrap()
    );
}

#[test]
fn test_magnitude_double_inverse() {
    let degree = magnitude_from_irrational(Irrational::PI)
        .divide(&magnitude_from_int(180).unwrap())
        .unwrap();
    assert_eq!(degree.invert().invert(), degree);
    assert_eq!(Magnitude::one().invert(), Magnitude::one());
}

#[test]
fn test_dimension_properties() {
    let length = Dimension::base("Length");
    let mass = Dimension::base("Mass");
    let time = Dimension::base("Time");
    let force = Dimension::combine([(&mass, 1), (&length, 1), (&time, -2)]).unwrap();

    assert_eq!(force.multiply(&length).unwrap(), length.multiply(&force).unwrap());
    assert_eq!(
        force.multiply(&length).unwrap().multiply(&time).unwrap(),
        force.multiply(&length.multiply(&time).unwrap()).unwrap()
    );
    assert_eq!(force.invert().invert(), force);
    assert!(force.divide(&force).unwrap().is_scalar());

    let energy = force.multiply(&length).unwrap();
    let power = energy.divide(&time).unwrap();
    assert_eq!(power.exponent_of("Time"), -3);
    assert_eq!(power.exponent_of("Length"), 2);
    assert_eq!(power.exponent_of("Mass"), 1);
}

#[test]
fn test_serde_round_trip_keeps_canonical_form() {
    let magnitude = magnitude_from_ratio(1_609_344, 1000).unwrap();
    let json = serde_json::to_string(&magnitude).unwrap();
    let back: Magnitude = serde_json::from_str(&json).unwrap();
    assert_eq!(back, magnitude);

    let length = Dimension::base("Length");
    let time = Dimension::base("Time");
    let speed = Dimension::combine([(&length, 1), (&time, -1)]).unwrap();
    let json = serde_json::to_string(&speed).unwrap();
    assert_eq!(json, r#"{"terms":[{"base":"Length","exponent":1},{"base":"Time","exponent":-1}]}"#);
    let back: Dimension = serde_json::from_str(&json).unwrap();
    assert_eq!(back, speed);
}

#[test]
fn test_serde_recanonicalizes_input() {
    let unsorted = r#"{"terms":[{"base":"Time","exponent":-1},{"base":"Length","exponent":1}]}"#;
    let parsed: Dimension = serde_json::from_str(unsorted).unwrap();
    let length = Dimension::base("Length");
    let time = Dimension::base("Time");
    assert_eq!(parsed, length.divide(&time).unwrap());

    let zero = r#"{"terms":[{"base":"Length","exponent":0}]}"#;
    assert!(serde_json::from_str::<Dimension>(zero).is_err());
}
