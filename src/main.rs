use futures_analysis::indicators::momentum::{calculate_macd_default, calculate_rsi_default};
use futures_analysis::indicators::trend::calculate_ma_default;
use futures_analysis::models::Series;
use futures_analysis::signals::TrendClassifier;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let close = Series::from(vec![
        9570.0, 9495.0, 9446.0, 9400.0, 9485.0, 9450.0, 9480.0, 9520.0, 9550.0, 9570.0,
    ]);

    println!("Technical indicator walkthrough");
    println!("{}", "=".repeat(80));

    println!("\n1. Moving average (MA5):");
    print_series(&calculate_ma_default(&close)?);

    println!("\n2. RSI(14):");
    match calculate_rsi_default(&close) {
        Ok(rsi) => print_series(&rsi),
        Err(e) => println!("  unavailable: {}", e),
    }

    println!("\n3. MACD(12, 26, 9):");
    let macd = calculate_macd_default(&close)?;
    println!("  MACD:   {}", format_value(macd.macd.latest()));
    println!("  Signal: {}", format_value(macd.signal.latest()));

    println!("\n4. Trend verdict:");
    let verdict = TrendClassifier::default().classify(&close);
    println!("{}", serde_json::to_string_pretty(&verdict)?);

    println!("\n{}", "=".repeat(80));
    Ok(())
}

fn print_series(series: &Series) {
    for (i, value) in series.iter().enumerate() {
        println!("  {:>2}  {}", i, format_value(value));
    }
}

fn format_value(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.2}", v))
        .unwrap_or_else(|| "undefined".to_string())
}
