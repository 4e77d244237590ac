use crate::normalize::{HtmlRow, RefPrices};
use common::models::CoinRecord;
use std::fmt::Write;
use tracing::warn;

const STYLESHEET: &str = "coinwatch.css";
const CURRENCY_URL: &str = "https://coinmarketcap.com/currencies";

// Column order here must match `HtmlRow::cells`.
const FIELDS: [&str; 12] = [
    "rank",
    "name",
    "symbol",
    "market_cap_usd",
    "relative_btc",
    "price_usd",
    "price_btc",
    "price_eth",
    "24h_volume_usd",
    "percent_change_1h",
    "percent_change_24h",
    "percent_change_7d",
];

const HEADERS: [&str; 12] = [
    "#",
    "Name",
    "Symbol",
    "MarkCap[1e6]",
    "%%btc",
    "Price",
    "Price BTC",
    "Price ETH",
    "Volume (24h)",
    "% 1h",
    "% 24h",
    "% 7d",
];

/// Render a complete HTML document with one table row per record.
/// Percent cells get an extra `pos`/`neg` class from the sign of the
/// rendered value; the name cell links to the coin's currency page.
pub fn render(records: &[CoinRecord], refs: &RefPrices) -> String {
    let updated = records
        .first()
        .and_then(|r| r.last_updated)
        .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default();
    // Base of the permille column: the top-ranked record's market cap.
    let btc_market_cap = records
        .first()
        .and_then(|r| r.quote.usd.as_ref())
        .and_then(|usd| usd.market_cap);

    let mut out = String::new();
    writeln!(
        out,
        "<html><head><link href=\"{}\" rel=\"stylesheet\" type=\"text/css\">",
        STYLESHEET
    )
    .unwrap();
    writeln!(
        out,
        "</head><body><p class=\"right\">Updated (BTC): {}<table><thead><tr>",
        updated
    )
    .unwrap();

    for (field, header) in FIELDS.iter().zip(HEADERS) {
        writeln!(out, "<th class=\"{}\">{}</th>", field, header).unwrap();
    }
    writeln!(out, "</tr></thead><tbody>").unwrap();

    for record in records {
        let Some(row) = HtmlRow::from_record(record, refs, btc_market_cap) else {
            warn!("Skipping {}: record has no USD quote", record.slug);
            continue;
        };
        writeln!(out, "<tr>").unwrap();
        for (field, value) in row.cells() {
            let mut class = field.to_string();
            if field.starts_with("percent") {
                class.push_str(if value.starts_with('-') { " neg" } else { " pos" });
            }
            if field == "name" {
                writeln!(
                    out,
                    "<td class=\"{}\"><a href=\"{}/{}/\">{}</a></td>",
                    class, CURRENCY_URL, row.name_full, value
                )
                .unwrap();
            } else {
                writeln!(out, "<td class=\"{}\">{}</td>", class, value).unwrap();
            }
        }
        writeln!(out, "</tr>").unwrap();
    }
    writeln!(out, "</tbody></table></body></html>").unwrap();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::record;
    use chrono::{TimeZone, Utc};

    fn listings() -> (Vec<CoinRecord>, RefPrices) {
        let mut btc = record(1, "BTC", "bitcoin", Some(1), Some(46594.1381));
        btc.last_updated = Some(Utc.with_ymd_and_hms(2021, 9, 5, 12, 0, 0).unwrap());
        let records = vec![
            btc,
            record(1027, "ETH", "ethereum", Some(2), Some(3374.89529)),
        ];
        let refs = RefPrices::from_records(&records);
        (records, refs)
    }

    #[test]
    fn document_has_stylesheet_and_updated_line() {
        let (records, refs) = listings();
        let out = render(&records, &refs);
        assert!(out.contains("<link href=\"coinwatch.css\" rel=\"stylesheet\""));
        assert!(out.contains("Updated (BTC): 2021-09-05 12:00:00"));
    }

    #[test]
    fn header_cells_carry_field_classes() {
        let (records, refs) = listings();
        let out = render(&records, &refs);
        assert!(out.contains("<th class=\"market_cap_usd\">MarkCap[1e6]</th>"));
        assert!(out.contains("<th class=\"24h_volume_usd\">Volume (24h)</th>"));
    }

    #[test]
    fn name_cell_links_to_currency_page() {
        let (records, refs) = listings();
        let out = render(&records, &refs);
        assert!(out.contains(
            "<td class=\"name\"><a href=\"https://coinmarketcap.com/currencies/bitcoin/\">bitcoin</a></td>"
        ));
    }

    #[test]
    fn percent_cells_are_classed_by_sign() {
        let (records, refs) = listings();
        let out = render(&records, &refs);
        assert!(out.contains("<td class=\"percent_change_24h pos\">4.93%</td>"));
        assert!(out.contains("<td class=\"percent_change_7d neg\">-1.92%</td>"));
    }

    #[test]
    fn null_market_cap_leaves_empty_cells_with_classes() {
        let (mut records, refs) = listings();
        records[1].quote.usd.as_mut().unwrap().market_cap = None;
        let out = render(&records, &refs);
        assert!(out.contains("<td class=\"market_cap_usd\"></td>"));
        assert!(out.contains("<td class=\"relative_btc\"></td>"));
    }

    #[test]
    fn blank_percent_cell_still_gets_pos_class() {
        let (mut records, refs) = listings();
        records[1].quote.usd.as_mut().unwrap().percent_change_1h = None;
        let out = render(&records, &refs);
        assert!(out.contains("<td class=\"percent_change_1h pos\"></td>"));
    }

    #[test]
    fn empty_record_list_renders_a_bare_document() {
        let out = render(&[], &RefPrices::default());
        assert!(out.contains("Updated (BTC): <table>"));
        assert!(out.contains("</tbody></table></body></html>"));
    }
}
