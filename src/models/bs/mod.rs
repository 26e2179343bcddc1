// A minimal Black-Scholes implementation that provides the call and put
// pricing helpers behind the grid engine.  Implied-volatility and Greeks are
// intentionally omitted to keep the lightweight focus of pricegrid-lib.

use crate::params::{OptionKind, PricingParams};

fn norm_cdf(x: f64) -> f64 {
    // 0.5 * [1 + erf(x / sqrt(2))]
    0.5 * (1.0 + libm::erf(x / (2.0_f64).sqrt()))
}

/// Price of a European call option under Black-Scholes assumptions.
///
/// The formula is evaluated as-is: callers must supply positive `S`, `K`,
/// `T` and `sigma`, and a violation comes back as a non-finite value rather
/// than an error.
#[allow(non_snake_case)]
pub fn bs_call_price(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> f64 {
    let d1 = ((S / K).ln() + (r + 0.5 * sigma.powi(2)) * T) / (sigma * T.sqrt());
    let d2 = d1 - sigma * T.sqrt();
    S * norm_cdf(d1) - K * (-r * T).exp() * norm_cdf(d2)
}

/// Price of a European put option under Black-Scholes assumptions.
#[allow(non_snake_case)]
pub fn bs_put_price(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> f64 {
    let d1 = ((S / K).ln() + (r + 0.5 * sigma.powi(2)) * T) / (sigma * T.sqrt());
    let d2 = d1 - sigma * T.sqrt();
    K * (-r * T).exp() * norm_cdf(-d2) - S * norm_cdf(-d1)
}

/// Evaluate a full parameter tuple, dispatching on the option side.
pub fn bs_price(params: &PricingParams) -> f64 {
    match params.option_kind {
        OptionKind::Call => bs_call_price(
            params.spot,
            params.strike,
            params.risk_free_rate,
            params.years_to_exp,
            params.volatility,
        ),
        OptionKind::Put => bs_put_price(
            params.spot,
            params.strike,
            params.risk_free_rate,
            params.years_to_exp,
            params.volatility,
        ),
    }
}
