//! Scenario files: the form inputs that drive a pricing/heatmap session,
//! loadable from TOML. Every field falls back to the stock form defaults, so
//! an empty document is a valid scenario.

use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

use crate::grid::types::{GridSpec, DEFAULT_RESOLUTION};
use crate::params::{OptionKind, PricingParams};

/// Contract inputs for the headline prices and the grid base.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PricingSection {
    #[serde(default = "default_spot")]
    pub spot: f64,

    #[serde(default = "default_strike")]
    pub strike: f64,

    #[serde(default = "default_years_to_exp")]
    pub years_to_exp: f64,

    #[serde(default = "default_volatility")]
    pub volatility: f64,

    #[serde(default = "default_risk_free_rate")]
    pub risk_free_rate: f64,

    /// `"call"` or `"put"`
    #[serde(default)]
    pub option_type: OptionKind,
}

impl Default for PricingSection {
    fn default() -> Self {
        Self {
            spot: default_spot(),
            strike: default_strike(),
            years_to_exp: default_years_to_exp(),
            volatility: default_volatility(),
            risk_free_rate: default_risk_free_rate(),
            option_type: OptionKind::default(),
        }
    }
}

/// Axis ranges and sample count for the heatmap mesh.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct HeatmapSection {
    #[serde(default = "default_spot_min")]
    pub spot_min: f64,

    #[serde(default = "default_spot_max")]
    pub spot_max: f64,

    #[serde(default = "default_vol_min")]
    pub vol_min: f64,

    #[serde(default = "default_vol_max")]
    pub vol_max: f64,

    #[serde(default = "default_resolution")]
    pub resolution: usize,
}

impl Default for HeatmapSection {
    fn default() -> Self {
        Self {
            spot_min: default_spot_min(),
            spot_max: default_spot_max(),
            vol_min: default_vol_min(),
            vol_max: default_vol_max(),
            resolution: default_resolution(),
        }
    }
}

/// Main scenario document: a `[pricing]` section, a `[heatmap]` section and
/// the premium used by the P&L view.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub pricing: PricingSection,

    #[serde(default)]
    pub heatmap: HeatmapSection,

    /// Premium paid for the option, subtracted per cell in the P&L grid
    #[serde(default = "default_purchase_price")]
    pub purchase_price: f64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            pricing: PricingSection::default(),
            heatmap: HeatmapSection::default(),
            purchase_price: default_purchase_price(),
        }
    }
}

impl ScenarioConfig {
    /// Parse a scenario from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load and parse a scenario file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Validated pricing parameters for this scenario.
    pub fn pricing_params(&self) -> Result<PricingParams> {
        PricingParams::new(
            self.pricing.spot,
            self.pricing.strike,
            self.pricing.years_to_exp,
            self.pricing.volatility,
            self.pricing.risk_free_rate,
            self.pricing.option_type,
        )
    }

    /// Validated grid specification for this scenario.
    pub fn grid_spec(&self) -> Result<GridSpec> {
        GridSpec::new(
            self.heatmap.spot_min,
            self.heatmap.spot_max,
            self.heatmap.vol_min,
            self.heatmap.vol_max,
            self.heatmap.resolution,
        )
    }
}

fn default_spot() -> f64 {
    100.0
}

fn default_strike() -> f64 {
    100.0
}

fn default_years_to_exp() -> f64 {
    1.0
}

fn default_volatility() -> f64 {
    0.2
}

fn default_risk_free_rate() -> f64 {
    0.01
}

fn default_spot_min() -> f64 {
    80.0
}

fn default_spot_max() -> f64 {
    120.0
}

fn default_vol_min() -> f64 {
    0.1
}

fn default_vol_max() -> f64 {
    0.5
}

fn default_resolution() -> usize {
    DEFAULT_RESOLUTION
}

fn default_purchase_price() -> f64 {
    10.0
}
