//! Recent draws table.

use askama::Template;

use crate::data::records::DrawRecord;

#[derive(Template)]
#[template(
    source = "<table><tr><th>Game</th><th>Date</th><th>Numbers</th><th>Payout</th></tr>\
{% for draw in draws %}<tr><td>{{ draw.game }}</td><td>{{ draw.date }}</td>\
<td>{{ draw.numbers }}</td><td>{% match draw.payout %}{% when Some with (payout) %}{{ payout }} €\
{% when None %}{% endmatch %}</td></tr>{% endfor %}</table>",
    ext = "html"
)]
struct DrawsTable<'a> {
    draws: &'a [DrawRecord],
}

/// Header row followed by one row per draw, in input order.
pub fn draws_table(draws: &[DrawRecord]) -> String {
    DrawsTable { draws }.to_string()
}
