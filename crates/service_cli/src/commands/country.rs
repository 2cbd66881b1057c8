//! Country command implementation.

use picker_engine::ops;
use picker_engine::request::CountryRequest;
use picker_engine::rng::PickRng;
use tracing::info;

use crate::Result;

/// Run the country command.
pub fn run(count: &str, format: &str) -> Result<()> {
    super::check_format(format)?;

    let request = CountryRequest {
        count: count.to_string(),
    };

    let mut rng = PickRng::new();
    let drawn = ops::draw_countries(&mut rng, &request)?;
    info!("Drew {} countries", drawn.len());

    match format {
        "json" => {
            let report = serde_json::json!({
                "countries": drawn,
                "discipline": request.discipline(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            for country in &drawn {
                println!("{} (پایتخت: {})", country.name, country.capital);
            }
        }
    }

    Ok(())
}
