// demos/pnl_heatmap.rs
// Renders the profit/loss grid for a bought option as an SVG heatmap:
// green cells are profit, red cells are loss, each annotated with its value.
//
// Usage:
//     cargo run --example pnl_heatmap -- [scenario.toml]
//
// Without an argument the stock form defaults are used (a long call bought
// at a 10.0 premium). The output image is written to pnl_heatmap.svg.

use std::env;
use std::error::Error;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use pricegrid_lib::{build_pnl_grid, PriceGrid, ScenarioConfig};

const OUTPUT_PATH: &str = "pnl_heatmap.svg";

fn main() -> Result<(), Box<dyn Error>> {
    let scenario = match env::args().nth(1) {
        Some(path) => ScenarioConfig::from_path(path)?,
        None => ScenarioConfig::default(),
    };

    let base = scenario.pricing_params()?;
    let spec = scenario.grid_spec()?;
    let grid = build_pnl_grid(&base, &spec, scenario.purchase_price)?;

    render(&grid, OUTPUT_PATH)?;

    println!(
        "{} @ strike {:.2}, premium {:.2}: P&L heatmap written to {}",
        base.option_kind.as_str(),
        base.strike,
        scenario.purchase_price,
        OUTPUT_PATH
    );
    Ok(())
}

fn render(grid: &PriceGrid, path: &str) -> Result<(), Box<dyn Error>> {
    let n = grid.resolution();

    let root = SVGBackend::new(path, (960, 640)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("P&L by spot price and volatility", ("sans-serif", 28))
        .margin(24)
        .x_label_area_size(48)
        .y_label_area_size(56)
        .build_cartesian_2d(0.0..n as f64, 0.0..n as f64)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(n)
        .y_labels(n)
        .x_label_formatter(&|x| axis_label(&grid.spot_axis, *x))
        .y_label_formatter(&|y| axis_label(&grid.vol_axis, *y))
        .x_desc("Spot Price")
        .y_desc("Volatility")
        .draw()?;

    let max_abs = grid
        .values
        .iter()
        .flatten()
        .fold(0.0_f64, |acc, v| acc.max(v.abs()));

    chart.draw_series(grid.values.iter().enumerate().flat_map(|(i, row)| {
        row.iter().enumerate().map(move |(j, value)| {
            Rectangle::new(
                [(j as f64, i as f64), ((j + 1) as f64, (i + 1) as f64)],
                pnl_color(*value, max_abs).filled(),
            )
        })
    }))?;

    chart.draw_series(grid.values.iter().enumerate().flat_map(|(i, row)| {
        row.iter().enumerate().map(move |(j, value)| {
            let style = ("sans-serif", 13)
                .into_font()
                .color(if value.abs() > 5.0 { &BLACK } else { &WHITE })
                .pos(Pos::new(HPos::Center, VPos::Center));
            Text::new(
                format!("{:.1}", value),
                (j as f64 + 0.5, i as f64 + 0.5),
                style,
            )
        })
    }))?;

    root.present()?;
    Ok(())
}

/// Tick label for a mesh coordinate: the axis sample the tick falls on.
fn axis_label(axis: &[f64], coord: f64) -> String {
    let idx = coord.floor().max(0.0) as usize;
    if idx < axis.len() {
        format!("{:.2}", axis[idx])
    } else {
        String::new()
    }
}

/// Diverging scale: red for losses, green for profits, scaled by the largest
/// absolute cell value.
fn pnl_color(value: f64, max_abs: f64) -> RGBColor {
    if !value.is_finite() || max_abs <= 0.0 {
        return RGBColor(224, 224, 224);
    }
    let t = (value / max_abs).clamp(-1.0, 1.0);
    if t >= 0.0 {
        blend(RGBColor(252, 252, 252), RGBColor(0, 140, 60), t)
    } else {
        blend(RGBColor(252, 252, 252), RGBColor(200, 30, 40), -t)
    }
}

fn blend(from: RGBColor, to: RGBColor, t: f64) -> RGBColor {
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    RGBColor(lerp(from.0, to.0), lerp(from.1, to.1), lerp(from.2, to.2))
}
