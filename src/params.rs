//! Parameter containers shared by the pricer and the grid engine. The
//! validating constructors guarantee that anything built through them is safe
//! to feed straight into the closed-form formula, which itself carries no
//! input guards.

use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Side of a European vanilla option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionKind {
    #[default]
    Call,
    Put,
}

impl OptionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::Call => "call",
            OptionKind::Put => "put",
        }
    }
}

impl FromStr for OptionKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "call" => Ok(OptionKind::Call),
            "put" => Ok(OptionKind::Put),
            other => Err(anyhow!("Invalid option type: {}", other)),
        }
    }
}

/// Full input tuple for a single Black-Scholes evaluation.
///
/// Immutable per evaluation and `Copy`; the grid engine stamps out one of
/// these per cell with `spot` and `volatility` overridden.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingParams {
    /// Current underlying asset price
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Time to expiration in years
    pub years_to_exp: f64,
    /// Annualized volatility (as decimal, e.g., 0.25 for 25%)
    pub volatility: f64,
    /// Continuously compounded risk-free rate
    pub risk_free_rate: f64,
    /// Call or put
    pub option_kind: OptionKind,
}

impl Default for PricingParams {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            years_to_exp: 1.0,
            volatility: 0.2,
            risk_free_rate: 0.01,
            option_kind: OptionKind::Call,
        }
    }
}

impl PricingParams {
    /// Build a parameter tuple, rejecting anything the pricing formula cannot
    /// digest: non-positive spot/strike/expiry/volatility, a negative rate,
    /// or non-finite values.
    ///
    /// A tuple assembled directly as a struct literal skips these checks; the
    /// formula then returns a non-finite value instead of an error.
    pub fn new(
        spot: f64,
        strike: f64,
        years_to_exp: f64,
        volatility: f64,
        risk_free_rate: f64,
        option_kind: OptionKind,
    ) -> Result<Self> {
        let params = Self {
            spot,
            strike,
            years_to_exp,
            volatility,
            risk_free_rate,
            option_kind,
        };
        params.validate()?;
        Ok(params)
    }

    /// Re-check the constructor invariants on an existing tuple.
    pub fn validate(&self) -> Result<()> {
        if !(self.spot > 0.0 && self.spot.is_finite()) {
            return Err(anyhow!(
                "spot must be positive and finite, got {}",
                self.spot
            ));
        }
        if !(self.strike > 0.0 && self.strike.is_finite()) {
            return Err(anyhow!(
                "strike must be positive and finite, got {}",
                self.strike
            ));
        }
        if !(self.years_to_exp > 0.0 && self.years_to_exp.is_finite()) {
            return Err(anyhow!(
                "years_to_exp must be positive and finite, got {}",
                self.years_to_exp
            ));
        }
        if !(self.volatility > 0.0 && self.volatility.is_finite()) {
            return Err(anyhow!(
                "volatility must be positive and finite, got {}",
                self.volatility
            ));
        }
        if !(self.risk_free_rate >= 0.0 && self.risk_free_rate.is_finite()) {
            return Err(anyhow!(
                "risk_free_rate must be non-negative and finite, got {}",
                self.risk_free_rate
            ));
        }
        Ok(())
    }

    /// Copy of this tuple with `spot` and `volatility` overridden; strike,
    /// expiry, rate and option side are kept.
    pub fn with_spot_vol(&self, spot: f64, volatility: f64) -> Self {
        Self {
            spot,
            volatility,
            ..*self
        }
    }
}
