//! Ranged-integer command implementation.

use picker_core::numeral::{format_decimal, format_int};
use picker_engine::ops;
use picker_engine::request::RangedRequest;
use picker_engine::rng::PickRng;
use tracing::info;

use crate::Result;

/// Run the number command.
pub fn run(min: &str, max: &str, count: &str, format: &str) -> Result<()> {
    super::check_format(format)?;

    let request = RangedRequest {
        min: min.to_string(),
        max: max.to_string(),
        count: count.to_string(),
    };

    let mut rng = PickRng::new();
    let outcome = ops::pick_numbers(&mut rng, &request)?;
    info!("Drew {} integers", outcome.values.len());

    match format {
        "json" => {
            let report = serde_json::json!({
                "values": outcome.values,
                "sum": outcome.stats.sum,
                "mean": outcome.stats.mean,
                "discipline": request.discipline(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            let rendered: Vec<String> = outcome.values.iter().map(|&v| format_int(v)).collect();
            println!("{}", rendered.join("، "));
            println!();
            println!("مجموع اعداد: {}", format_int(outcome.stats.sum));
            println!("میانگین اعداد: {}", format_decimal(outcome.stats.mean));
        }
    }

    Ok(())
}
