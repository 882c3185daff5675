//! Per-game ratio stats table.

use std::fmt;

use askama::Template;

use crate::data::records::{Amount, GameRatioStat};

/// Colour of the Net cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetTone {
    NonNegative,
    Negative,
}

impl NetTone {
    pub fn of(net: Amount) -> Self {
        if net.is_negative() {
            Self::Negative
        } else {
            Self::NonNegative
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::NonNegative => "green",
            Self::Negative => "red",
        }
    }
}

impl fmt::Display for NetTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.color())
    }
}

struct RatioRow<'a> {
    stat: &'a GameRatioStat,
    tone: NetTone,
}

#[derive(Template)]
#[template(
    source = "<table><tr><th>Game</th><th>Grids Tested</th><th>Gains</th><th>Costs</th><th>Net</th></tr>\
{% for row in rows %}<tr><td>{{ row.stat.game }}</td><td>{{ row.stat.tested_grids }}</td>\
<td>{{ row.stat.total_gains }}</td><td>{{ row.stat.total_costs }}</td>\
<td style=\"color:{{ row.tone }}\">{{ row.stat.net }} €</td></tr>{% endfor %}</table>",
    ext = "html"
)]
struct RatioTable<'a> {
    rows: Vec<RatioRow<'a>>,
}

/// Header row followed by one row per game, in input order. The Net cell is
/// green when `net >= 0` and red otherwise.
pub fn ratio_table(stats: &[GameRatioStat]) -> String {
    let rows = stats
        .iter()
        .map(|stat| RatioRow {
            stat,
            tone: NetTone::of(stat.net),
        })
        .collect();
    RatioTable { rows }.to_string()
}
