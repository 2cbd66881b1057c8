//! Letter command implementation.

use picker_engine::ops;
use picker_engine::request::LetterRequest;
use picker_engine::rng::PickRng;
use picker_pools::Alphabet;
use tracing::info;

use crate::Result;

/// Run the letter command.
pub fn run(alphabet: &str, count: &str, format: &str) -> Result<()> {
    super::check_format(format)?;

    let alphabet: Alphabet = alphabet.parse()?;
    let request = LetterRequest {
        alphabet,
        count: count.to_string(),
    };

    let mut rng = PickRng::new();
    let letters = ops::pick_letters(&mut rng, &request)?;
    info!("Drew {} letters from the {} alphabet", letters.len(), alphabet);

    match format {
        "json" => {
            let report = serde_json::json!({
                "alphabet": alphabet,
                "letters": letters,
                "discipline": request.discipline(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            println!("{}", letters.join("، "));
        }
    }

    Ok(())
}
