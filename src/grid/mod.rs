//! Grid engine: evaluates the Black-Scholes pricer over a spot × volatility
//! mesh and returns the resulting matrix alongside its axes.

pub mod types;

pub use types::{GridSpec, PriceGrid, DEFAULT_RESOLUTION};

use anyhow::Result;

use crate::models::bs::bs_price;
use crate::params::PricingParams;

/// `n` evenly spaced samples from `min` to `max`, both endpoints included.
///
/// A single sample degenerates to `min`; equal bounds yield a constant
/// sequence.
pub fn linspace(min: f64, max: f64, n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![min];
    }
    let step = (max - min) / (n - 1) as f64;
    let mut samples: Vec<f64> = (0..n).map(|i| min + step * i as f64).collect();
    // Pin the last sample to the exact upper bound.
    samples[n - 1] = max;
    samples
}

/// Evaluate the pricer at every axis combination, applying `transform` to
/// each output before it is stored.
///
/// Cell `[i][j]` holds the transformed price at `spot_axis[j]` /
/// `vol_axis[i]`, with strike, expiry, rate and option side taken from
/// `base`.
///
/// # Errors
///
/// Rejects a degenerate `spec` (inverted range, zero resolution) before any
/// evaluation. `base` is not re-validated here: a malformed tuple produces
/// non-finite cells, which are passed through unchanged for the consumer to
/// deal with (see [`PricingParams::new`]).
pub fn build_grid_with<F>(base: &PricingParams, spec: &GridSpec, transform: F) -> Result<PriceGrid>
where
    F: Fn(f64) -> f64,
{
    spec.validate()?;

    let spot_axis = linspace(spec.spot_min, spec.spot_max, spec.resolution);
    let vol_axis = linspace(spec.vol_min, spec.vol_max, spec.resolution);

    let mut values = Vec::with_capacity(spec.resolution);
    for &vol in &vol_axis {
        let mut row = Vec::with_capacity(spec.resolution);
        for &spot in &spot_axis {
            row.push(transform(bs_price(&base.with_spot_vol(spot, vol))));
        }
        values.push(row);
    }

    Ok(PriceGrid {
        spot_axis,
        vol_axis,
        values,
    })
}

/// Theoretical-value grid: [`build_grid_with`] with the identity transform.
pub fn build_grid(base: &PricingParams, spec: &GridSpec) -> Result<PriceGrid> {
    build_grid_with(base, spec, |price| price)
}

/// Profit/loss grid: every cell is the theoretical value minus the premium
/// actually paid for the option.
pub fn build_pnl_grid(
    base: &PricingParams,
    spec: &GridSpec,
    purchase_price: f64,
) -> Result<PriceGrid> {
    build_grid_with(base, spec, move |price| price - purchase_price)
}
