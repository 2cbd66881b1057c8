//! Name command implementation.

use picker_engine::ops;
use picker_engine::request::NameRequest;
use picker_engine::rng::PickRng;
use tracing::info;

use crate::Result;

/// Run the name command.
pub fn run(names: &[String], count: &str, format: &str) -> Result<()> {
    super::check_format(format)?;

    let request = NameRequest {
        entries: names.to_vec(),
        count: count.to_string(),
    };

    let mut rng = PickRng::new();
    let drawn = ops::draw_names(&mut rng, &request)?;
    info!("Drew {} of {} supplied names", drawn.len(), names.len());

    match format {
        "json" => {
            let report = serde_json::json!({
                "names": drawn,
                "discipline": request.discipline(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            for name in &drawn {
                println!("{}", name);
            }
        }
    }

    Ok(())
}
