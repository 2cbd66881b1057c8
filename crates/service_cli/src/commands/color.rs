//! Color command implementation.

use picker_engine::ops;
use picker_engine::request::ColorRequest;
use picker_engine::rng::PickRng;
use tracing::info;

use crate::Result;

/// Run the color command.
pub fn run(pool_size: Option<&str>, count: &str, format: &str) -> Result<()> {
    super::check_format(format)?;

    let request = ColorRequest {
        pool_size: pool_size.map(String::from),
        count: count.to_string(),
    };

    let mut rng = PickRng::new();
    let drawn = ops::draw_colors(&mut rng, &request)?;
    info!("Drew {} colors", drawn.len());

    match format {
        "json" => {
            let report = serde_json::json!({
                "colors": drawn,
                "discipline": request.discipline(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            for color in &drawn {
                println!("{} ({}) {}", color.name, color.name_en, color.hex);
            }
        }
    }

    Ok(())
}
