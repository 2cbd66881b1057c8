//! Region command implementation.

use picker_engine::ops;
use picker_engine::request::RegionRequest;
use picker_engine::rng::PickRng;
use picker_pools::Jurisdiction;
use tracing::info;

use crate::Result;

/// Run the region command.
pub fn run(jurisdiction: &str, count: &str, format: &str) -> Result<()> {
    super::check_format(format)?;

    let jurisdiction: Jurisdiction = jurisdiction.parse()?;
    let request = RegionRequest {
        jurisdiction,
        count: count.to_string(),
    };

    let mut rng = PickRng::new();
    let drawn = ops::draw_regions(&mut rng, &request)?;
    info!("Drew {} regions from {}", drawn.len(), jurisdiction);

    match format {
        "json" => {
            let report = serde_json::json!({
                "jurisdiction": jurisdiction,
                "regions": drawn,
                "discipline": request.discipline(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            for region in &drawn {
                println!("{}", region);
            }
        }
    }

    Ok(())
}
