//! # PriceGrid-Lib: Black-Scholes Pricing and Sensitivity Heatmap Grids
//!
//! `pricegrid-lib` is a small quantitative finance library focused on European
//! option valuation and the dense spot/volatility grids behind interactive
//! heatmap views. It provides the closed-form Black-Scholes-Merton pricer and
//! a grid engine that evaluates it over an evenly spaced parameter mesh.
//!
//! ## Core Features
//!
//! - **European Pricing**: Black-Scholes-Merton call and put valuation via the
//!   high-precision `erf`-based normal CDF
//! - **Sensitivity Grids**: resolution × resolution matrices of price as a
//!   function of spot (columns) and volatility (rows), with the axis arrays
//!   consumers need for tick labels
//! - **P&L View**: the same grids with a purchase premium subtracted per cell
//! - **Scenario Files**: TOML-loadable form defaults for both views
//!
//! ## Quick Start
//!
//! ```rust
//! use pricegrid_lib::{build_grid, price, GridSpec, OptionKind, PricingParams};
//!
//! // Validated contract inputs: spot, strike, expiry, vol, rate
//! let call = PricingParams::new(100.0, 100.0, 1.0, 0.2, 0.01, OptionKind::Call)?;
//! let headline = price(&call);
//! assert!((headline - 8.43).abs() < 0.02);
//!
//! // 10×10 price surface over spot 80..120 and vol 0.10..0.50
//! let surface = build_grid(&call, &GridSpec::default())?;
//! assert_eq!(surface.values.len(), 10);
//! assert_eq!(surface.spot_axis[0], 80.0);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! Rendering concerns (color scales, label formatting, page layout) stay with
//! the caller; the demo binaries under `demos/` show one way to do it.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod grid;
pub mod models;
pub mod params;
#[cfg(feature = "serde")]
pub mod scenario;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Grid engine types and operations
pub use grid::{build_grid, build_grid_with, build_pnl_grid, linspace, GridSpec, PriceGrid,
    DEFAULT_RESOLUTION};

// Contract parameter types
pub use params::{OptionKind, PricingParams};

// Scenario file support
#[cfg(feature = "serde")]
pub use scenario::ScenarioConfig;

// ================================================================================================
// SINGLE-POINT EVALUATION
// ================================================================================================

/// Theoretical value of a European option under the Black-Scholes-Merton
/// closed form.
///
/// This is the single-point evaluation behind a headline call/put price
/// display; [`build_grid`] calls the same formula once per cell.
///
/// # Preconditions
///
/// `params` is expected to satisfy the constraints enforced by
/// [`PricingParams::new`]. The formula itself is branch-free: a tuple built
/// by hand with, say, a zero expiry flows through to a non-finite result
/// instead of an error.
///
/// # Example
///
/// ```rust
/// use pricegrid_lib::{price, OptionKind, PricingParams};
///
/// let put = PricingParams::new(100.0, 100.0, 1.0, 0.2, 0.01, OptionKind::Put)?;
/// assert!((price(&put) - 7.44).abs() < 0.02);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn price(params: &PricingParams) -> f64 {
    models::bs::bs_price(params)
}

/// Call and put values for the same underlying inputs, ignoring
/// `params.option_kind`. Used for side-by-side headline displays.
pub fn call_put_prices(params: &PricingParams) -> (f64, f64) {
    let call = models::bs::bs_call_price(
        params.spot,
        params.strike,
        params.risk_free_rate,
        params.years_to_exp,
        params.volatility,
    );
    let put = models::bs::bs_put_price(
        params.spot,
        params.strike,
        params.risk_free_rate,
        params.years_to_exp,
        params.volatility,
    );
    (call, put)
}
