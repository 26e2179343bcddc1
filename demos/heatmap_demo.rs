// demos/heatmap_demo.rs

//! Console rendition of the interactive pricing heatmap
//!
//! This demo shows how to:
//! 1. Build contract inputs from the stock form defaults
//! 2. Display the headline call and put prices
//! 3. Evaluate call and put value grids over the spot/volatility mesh
//! 4. Export both matrices as CSV for spreadsheet inspection

use anyhow::Result;
use pricegrid_lib::{build_grid, call_put_prices, GridSpec, OptionKind, PriceGrid, PricingParams};

fn main() -> Result<()> {
    println!("Black-Scholes Pricing Heatmap Demo");
    println!("==================================");

    let call_params = PricingParams::default();
    let put_params = PricingParams {
        option_kind: OptionKind::Put,
        ..call_params
    };

    println!(
        "\nContract: spot {:.2}, strike {:.2}, {:.2}y to expiry, vol {:.0}%, rate {:.0}%",
        call_params.spot,
        call_params.strike,
        call_params.years_to_exp,
        call_params.volatility * 100.0,
        call_params.risk_free_rate * 100.0
    );

    let (call_price, put_price) = call_put_prices(&call_params);
    println!("  CALL: ${:.2}", call_price);
    println!("  PUT:  ${:.2}", put_price);

    let spec = GridSpec::default();
    println!(
        "\nMesh: spot {:.0}..{:.0}, vol {:.0}%..{:.0}%, {} samples per axis",
        spec.spot_min,
        spec.spot_max,
        spec.vol_min * 100.0,
        spec.vol_max * 100.0,
        spec.resolution
    );

    let call_grid = build_grid(&call_params, &spec)?;
    let put_grid = build_grid(&put_params, &spec)?;

    print_grid("CALL value by spot (columns) and volatility (rows)", &call_grid);
    print_grid("PUT value by spot (columns) and volatility (rows)", &put_grid);

    write_csv("call_grid.csv", &call_grid)?;
    write_csv("put_grid.csv", &put_grid)?;
    println!("\nMatrices written to call_grid.csv / put_grid.csv");

    Ok(())
}

fn print_grid(title: &str, grid: &PriceGrid) {
    println!("\n{}", title);

    print!("{:>8}", "vol\\spot");
    for spot in &grid.spot_axis {
        print!(" {:>7.2}", spot);
    }
    println!();

    for (i, vol) in grid.vol_axis.iter().enumerate() {
        print!("{:>8.2}", vol);
        for value in &grid.values[i] {
            print!(" {:>7.2}", value);
        }
        println!();
    }
}

fn write_csv(path: &str, grid: &PriceGrid) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec!["vol/spot".to_string()];
    header.extend(grid.spot_axis.iter().map(|s| format!("{:.2}", s)));
    writer.write_record(&header)?;

    for (i, vol) in grid.vol_axis.iter().enumerate() {
        let mut record = vec![format!("{:.2}", vol)];
        record.extend(grid.values[i].iter().map(|v| format!("{:.4}", v)));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
