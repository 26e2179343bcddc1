use pricegrid_lib::{call_put_prices, price, OptionKind, PricingParams};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Quote-form defaults used across the pricing tests:
/// spot=100, strike=100, 1y to expiry, 20% vol, 1% rate.
fn base_params(kind: OptionKind) -> PricingParams {
    PricingParams::new(100.0, 100.0, 1.0, 0.2, 0.01, kind).expect("valid params")
}

/// Reference values for the at-the-money 1y contract.
#[test]
fn test_reference_call_and_put_values() {
    let call = price(&base_params(OptionKind::Call));
    let put = price(&base_params(OptionKind::Put));

    assert!((call - 8.43).abs() < 0.02, "call price off: {}", call);
    assert!((put - 7.44).abs() < 0.02, "put price off: {}", put);

    // Side-by-side helper agrees with the single-point evaluations
    let (both_call, both_put) = call_put_prices(&base_params(OptionKind::Call));
    assert_eq!(both_call, call);
    assert_eq!(both_put, put);
}

/// C - P must equal S - K*exp(-rT) at the reference point.
#[test]
fn test_put_call_parity_at_reference_point() {
    let call_params = base_params(OptionKind::Call);
    let put_params = base_params(OptionKind::Put);

    let lhs = price(&call_params) - price(&put_params);
    let rhs = call_params.spot
        - call_params.strike * (-call_params.risk_free_rate * call_params.years_to_exp).exp();

    assert!(
        (lhs - rhs).abs() < 1e-6,
        "parity violated: C-P={} vs S-Ke^-rT={}",
        lhs,
        rhs
    );
}

/// Parity sweep over a seeded sample of well-formed parameter tuples.
#[test]
fn test_put_call_parity_randomized() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..500 {
        let spot = rng.gen_range(10.0..500.0);
        let strike = rng.gen_range(10.0..500.0);
        let years = rng.gen_range(0.05..3.0);
        let vol = rng.gen_range(0.05..1.2);
        let rate = rng.gen_range(0.0..0.1);

        let call = PricingParams::new(spot, strike, years, vol, rate, OptionKind::Call)
            .expect("sampled params are valid");
        let put = PricingParams {
            option_kind: OptionKind::Put,
            ..call
        };

        let lhs = price(&call) - price(&put);
        let rhs = spot - strike * (-rate * years).exp();

        assert!(
            (lhs - rhs).abs() < 1e-6 * spot.max(strike),
            "parity violated at spot={} strike={} t={} vol={} r={}: {} vs {}",
            spot,
            strike,
            years,
            vol,
            rate,
            lhs,
            rhs
        );
    }
}

/// Call value never decreases as spot rises, other inputs fixed.
#[test]
fn test_call_value_non_decreasing_in_spot() {
    let mut last = f64::NEG_INFINITY;
    for step in 0..50 {
        let spot = 50.0 + 2.0 * step as f64;
        let params =
            PricingParams::new(spot, 100.0, 1.0, 0.2, 0.01, OptionKind::Call).unwrap();
        let value = price(&params);
        assert!(
            value >= last,
            "call value dropped at spot={}: {} < {}",
            spot,
            value,
            last
        );
        last = value;
    }
}

/// Put value never increases as spot rises, other inputs fixed.
#[test]
fn test_put_value_non_increasing_in_spot() {
    let mut last = f64::INFINITY;
    for step in 0..50 {
        let spot = 50.0 + 2.0 * step as f64;
        let params = PricingParams::new(spot, 100.0, 1.0, 0.2, 0.01, OptionKind::Put).unwrap();
        let value = price(&params);
        assert!(
            value <= last,
            "put value rose at spot={}: {} > {}",
            spot,
            value,
            last
        );
        last = value;
    }
}

/// As volatility vanishes the call collapses to discounted intrinsic value,
/// both in and out of the money.
#[test]
fn test_call_intrinsic_limit_at_vanishing_vol() {
    for (spot, strike) in [(120.0, 100.0), (80.0, 100.0)] {
        let params = PricingParams::new(spot, strike, 1.0, 1e-9, 0.01, OptionKind::Call).unwrap();
        let intrinsic = (spot - strike * (-0.01_f64).exp()).max(0.0);
        let value = price(&params);
        assert!(
            (value - intrinsic).abs() < 1e-6,
            "intrinsic limit missed at spot={}: {} vs {}",
            spot,
            value,
            intrinsic
        );
    }
}

#[test]
fn test_constructor_rejects_malformed_inputs() {
    assert!(PricingParams::new(-1.0, 100.0, 1.0, 0.2, 0.01, OptionKind::Call).is_err()); // negative spot
    assert!(PricingParams::new(100.0, 0.0, 1.0, 0.2, 0.01, OptionKind::Call).is_err()); // zero strike
    assert!(PricingParams::new(100.0, 100.0, 0.0, 0.2, 0.01, OptionKind::Call).is_err()); // zero expiry
    assert!(PricingParams::new(100.0, 100.0, 1.0, -0.2, 0.01, OptionKind::Call).is_err()); // negative vol
    assert!(PricingParams::new(100.0, 100.0, 1.0, 0.2, -0.01, OptionKind::Call).is_err()); // negative rate
    assert!(PricingParams::new(f64::NAN, 100.0, 1.0, 0.2, 0.01, OptionKind::Call).is_err()); // non-finite spot

    // Zero rate is legal
    assert!(PricingParams::new(100.0, 100.0, 1.0, 0.2, 0.0, OptionKind::Put).is_ok());
}

/// A tuple built by hand can bypass validation; the formula then reports the
/// breakage as a non-finite value instead of an error.
#[test]
fn test_unvalidated_zero_expiry_propagates_non_finite() {
    let params = PricingParams {
        years_to_exp: 0.0,
        ..PricingParams::default()
    };
    assert!(!price(&params).is_finite());
}

#[test]
fn test_option_kind_parsing() {
    assert_eq!("call".parse::<OptionKind>().unwrap(), OptionKind::Call);
    assert_eq!("PUT".parse::<OptionKind>().unwrap(), OptionKind::Put);
    assert!("straddle".parse::<OptionKind>().is_err());

    assert_eq!(OptionKind::Call.as_str(), "call");
    assert_eq!(OptionKind::Put.as_str(), "put");
}
