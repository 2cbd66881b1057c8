//! Dice command implementation.
//!
//! The one paced panel: validation runs at trigger time, then a fixed
//! pause elapses before the draw happens and the faces appear. The pause
//! is pure presentation pacing; the engine itself stays synchronous and
//! the [`Panel`] guard ignores re-triggers while the roll is pending.

use std::thread;
use std::time::Duration;

use picker_core::numeral::{format_decimal, format_int};
use picker_engine::ops;
use picker_engine::request::DiceRequest;
use picker_engine::rng::PickRng;
use picker_engine::session::{Pacing, Panel, PanelEvent};
use picker_pools::dice::dot_pattern;
use tracing::info;

use crate::Result;

/// Fixed pause between a validated trigger and the draw.
const ROLL_DELAY: Duration = Duration::from_millis(1_000);

/// Renders one die face as a 3x3 dot grid framed in box-drawing characters.
fn render_die(face: i64) -> [String; 5] {
    let mut grid = [['·'; 3]; 3];
    for &area in dot_pattern(face) {
        let (row, col) = match area {
            'a' => (0, 0),
            'b' => (2, 2),
            'c' => (0, 2),
            'd' => (2, 0),
            'e' => (1, 0),
            'f' => (1, 2),
            'g' => (1, 1),
            _ => continue,
        };
        grid[row][col] = '●';
    }
    [
        "┌───────┐".to_string(),
        format!("│ {} {} {} │", grid[0][0], grid[0][1], grid[0][2]),
        format!("│ {} {} {} │", grid[1][0], grid[1][1], grid[1][2]),
        format!("│ {} {} {} │", grid[2][0], grid[2][1], grid[2][2]),
        "└───────┘".to_string(),
    ]
}

/// Renders a row of dice side by side.
fn render_dice_row(faces: &[i64]) -> String {
    let mut lines = vec![String::new(); 5];
    for &face in faces {
        for (line, rendered) in lines.iter_mut().zip(render_die(face)) {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(&rendered);
        }
    }
    lines.join("\n")
}

/// Run the dice command.
pub fn run(count: &str, format: &str) -> Result<()> {
    super::check_format(format)?;

    let mut panel = Panel::new(Pacing::Paced);
    panel.apply(PanelEvent::Trigger);

    let request = DiceRequest {
        count: count.to_string(),
    };

    // Validate up front so the pause only runs for a roll that will land.
    if let Err(err) = request.validate() {
        panel.apply(PanelEvent::Rejected);
        return Err(err.into());
    }
    panel.apply(PanelEvent::Validated);
    debug_assert!(panel.is_pending());

    info!("Rolling...");
    thread::sleep(ROLL_DELAY);
    panel.apply(PanelEvent::DelayElapsed);

    let mut rng = PickRng::new();
    let outcome = ops::roll_dice(&mut rng, &request)?;
    panel.apply(PanelEvent::Sampled);

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
            println!("{}", render_dice_row(&outcome.values));
            println!();
            println!("مجموع اعداد: {}", format_int(outcome.stats.sum));
            println!("میانگین اعداد: {}", format_decimal(outcome.stats.mean));
        }
    }

    panel.apply(PanelEvent::Presented);
    Ok(())
}
