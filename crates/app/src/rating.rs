//! Star rating shown after a won round.

use std::time::Duration;

/// A round this long against a single creature rates as 1.0.
const PAR_SECONDS: f64 = 60.0 * 15.0;

/// Slower rounds and fewer creatures push the rating up; lower is better.
pub fn rating(creatures: u32, elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * (1.0 - f64::from(creatures) / 20.0) / PAR_SECONDS
}

pub fn stars(creatures: u32, elapsed: Duration) -> usize {
    match rating(creatures, elapsed) {
        r if r > 0.75 => 1,
        r if r > 0.5 => 2,
        r if r > 0.3 => 3,
        r if r > 0.15 => 4,
        _ => 5,
    }
}

pub fn star_line(count: usize) -> String {
    "\u{2605}".repeat(count)
}
