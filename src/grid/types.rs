//! Specification and result containers for spot/volatility sensitivity
//! grids.

use anyhow::{anyhow, Result};

/// Axis sample count used when no explicit resolution is configured.
pub const DEFAULT_RESOLUTION: usize = 10;

/// Defines the two evenly spaced axes a sensitivity grid is evaluated over.
///
/// Equal lower and upper bounds are legal and collapse that axis to a
/// repeated constant sequence; only an inverted range is rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSpec {
    /// Lower spot bound (inclusive)
    pub spot_min: f64,
    /// Upper spot bound (inclusive)
    pub spot_max: f64,
    /// Lower volatility bound (inclusive)
    pub vol_min: f64,
    /// Upper volatility bound (inclusive)
    pub vol_max: f64,
    /// Samples per axis; the grid is resolution × resolution
    pub resolution: usize,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            spot_min: 80.0,
            spot_max: 120.0,
            vol_min: 0.1,
            vol_max: 0.5,
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

impl GridSpec {
    /// Build a grid specification, rejecting inverted ranges, non-positive
    /// lower bounds, non-finite bounds and a zero resolution.
    pub fn new(
        spot_min: f64,
        spot_max: f64,
        vol_min: f64,
        vol_max: f64,
        resolution: usize,
    ) -> Result<Self> {
        let spec = Self {
            spot_min,
            spot_max,
            vol_min,
            vol_max,
            resolution,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Re-check the constructor invariants on an existing specification.
    pub fn validate(&self) -> Result<()> {
        if !(self.spot_min > 0.0 && self.spot_min.is_finite()) {
            return Err(anyhow!(
                "spot_min must be positive and finite, got {}",
                self.spot_min
            ));
        }
        if !(self.spot_max.is_finite() && self.spot_max >= self.spot_min) {
            return Err(anyhow!(
                "spot range must satisfy spot_max >= spot_min, got [{}, {}]",
                self.spot_min,
                self.spot_max
            ));
        }
        if !(self.vol_min > 0.0 && self.vol_min.is_finite()) {
            return Err(anyhow!(
                "vol_min must be positive and finite, got {}",
                self.vol_min
            ));
        }
        if !(self.vol_max.is_finite() && self.vol_max >= self.vol_min) {
            return Err(anyhow!(
                "volatility range must satisfy vol_max >= vol_min, got [{}, {}]",
                self.vol_min,
                self.vol_max
            ));
        }
        if self.resolution == 0 {
            return Err(anyhow!("resolution must be at least 1"));
        }
        Ok(())
    }
}

/// Dense `resolution × resolution` matrix of pricer outputs together with
/// the axes it was evaluated over.
///
/// Row index `i` follows `vol_axis`, column index `j` follows `spot_axis`.
/// Consumers label heatmap rows with volatility and columns with spot, so
/// this assignment is part of the contract.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceGrid {
    /// Spot samples, ascending, one per column
    pub spot_axis: Vec<f64>,
    /// Volatility samples, ascending, one per row
    pub vol_axis: Vec<f64>,
    /// `values[i][j]` is the output at `(vol_axis[i], spot_axis[j])`
    pub values: Vec<Vec<f64>>,
}

impl PriceGrid {
    /// Samples per axis.
    pub fn resolution(&self) -> usize {
        self.vol_axis.len()
    }

    /// Cell lookup by (volatility row, spot column).
    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.values[row][col]
    }
}
