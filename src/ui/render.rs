//! Terminal rendering of workout list entries.

use crate::models::Workout;
use crate::utils::formatting::{bold, fmt_metric, fmt_value, pad_right};

const DETAIL_WIDTH: usize = 16;

/// One list entry: a title line and a details line.
///
/// ```text
/// 🏃‍♂️ Running on April 14                      #1713088800
///    🏃‍♂️ 5 km        ⏱ 30 min       ⚡️ 6.0 min/km   🦶🏼 170 spm
/// ```
pub fn workout_card(w: &Workout) -> String {
    let title = format!("{} {}", w.icon(), bold(w.describe()));

    let mut details = vec![
        detail(w.icon(), &fmt_value(w.distance()), "km"),
        detail("⏱", &fmt_value(w.duration()), "min"),
        detail("⚡️", &fmt_metric(w.metric()), w.kind().metric_unit()),
    ];
    match (w.cadence(), w.elevation_gain()) {
        (Some(cadence), _) => details.push(detail("🦶🏼", &fmt_value(cadence), "spm")),
        (_, Some(elevation)) => details.push(detail("⛰", &fmt_value(elevation), "m")),
        _ => {}
    }

    let clicks = match w.clicks() {
        0 => String::new(),
        1 => "  (selected once)".to_string(),
        n => format!("  (selected {n} times)"),
    };

    format!("{title}  #{}{clicks}\n   {}", w.id(), details.join(" ").trim_end())
}

fn detail(icon: &str, value: &str, unit: &str) -> String {
    pad_right(&format!("{icon} {value} {unit}"), DETAIL_WIDTH)
}
