//! Tension bands: reel speed and charge gain for each stretch of the gauge.

use tightline_core::constants::*;
use tightline_core::enums::TensionBand;

/// Which band a tension value falls in. Bands are disjoint and cover `[0, 100]`.
pub fn classify(tension: f64) -> TensionBand {
    if (TENSION_SAFE_LOW..=TENSION_SAFE_HIGH).contains(&tension) {
        TensionBand::Safe
    } else if tension > TENSION_DANGER_HIGH {
        TensionBand::TooHigh
    } else if tension < TENSION_SLACK_LOW {
        TensionBand::Slack
    } else if tension < TENSION_SAFE_LOW {
        TensionBand::SlackToSafe
    } else {
        TensionBand::SafeToDanger
    }
}

/// Distance change per second. Negative reels the fish in.
pub fn distance_rate(band: TensionBand, rod_power: f64, fight_strength: f64) -> f64 {
    match band {
        TensionBand::Safe => -REEL_RATE_SAFE * rod_power,
        TensionBand::TooHigh => 0.0,
        TensionBand::Slack => SLACK_DRIFT_PER_STRENGTH * fight_strength,
        TensionBand::SlackToSafe => -REEL_RATE_LOWER_EDGE * rod_power,
        TensionBand::SafeToDanger => -REEL_RATE_UPPER_EDGE * rod_power,
    }
}

/// Hit charge gained per second.
pub fn charge_rate(band: TensionBand) -> f64 {
    match band {
        TensionBand::Safe => HIT_CHARGE_SAFE,
        TensionBand::TooHigh => HIT_CHARGE_STALLED,
        TensionBand::Slack => 0.0,
        TensionBand::SlackToSafe | TensionBand::SafeToDanger => HIT_CHARGE_EDGE,
    }
}
