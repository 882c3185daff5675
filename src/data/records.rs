//! Records published by the grid testing service under `stats/`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Currency amount in euros, printed the way the dashboard shows it.
///
/// Integral values print without a fractional part (`0`, `-10`), others in
/// shortest round-trip form (`12.5`). Negative zero prints as `0`. Magnitudes
/// of at least 1e21 or below 1e-6 switch to exponent form with a signed
/// exponent (`1e+21`, `2.5e-7`), as browsers print numbers.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Amount(pub f64);

impl Amount {
    /// Zero counts as non-negative.
    pub fn is_negative(self) -> bool {
        self.0 < 0.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        let magnitude = value.abs();
        if value == 0.0 {
            f.write_str("0")
        } else if magnitude.is_finite() && (magnitude >= 1e21 || magnitude < 1e-6) {
            let exp = format!("{value:e}");
            match exp.split_once('e') {
                Some((mantissa, power)) if !power.starts_with('-') => {
                    write!(f, "{mantissa}e+{power}")
                }
                _ => f.write_str(&exp),
            }
        } else {
            write!(f, "{value}")
        }
    }
}

/// One recent draw (`stats/tirages_recents.json` entry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawRecord {
    #[serde(rename = "jeu", alias = "game")]
    pub game: String,
    /// Display-formatted, never parsed.
    pub date: String,
    /// Pre-formatted winning numbers.
    #[serde(rename = "numeros", alias = "numbers")]
    pub numbers: String,
    /// `null` or absent when the service has no payout for the draw yet.
    #[serde(rename = "gain", alias = "payout", default)]
    pub payout: Option<Amount>,
}

/// Aggregate results of the grids tested for one game (`stats/ratio_jeux.json` entry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRatioStat {
    #[serde(rename = "jeu", alias = "game")]
    pub game: String,
    #[serde(rename = "tests", alias = "testedGrids")]
    pub tested_grids: u64,
    #[serde(rename = "gains", alias = "totalGains")]
    pub total_gains: Amount,
    #[serde(rename = "couts", alias = "totalCosts")]
    pub total_costs: Amount,
    /// Gains minus costs, computed upstream.
    pub net: Amount,
}

/// Free-text performance summary (`stats/performance.json`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PerformanceSummary {
    #[serde(rename = "resume", alias = "summary", default)]
    pub summary: Option<String>,
}
