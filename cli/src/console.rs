use crate::normalize::{ConsoleRow, RefPrices};
use common::models::CoinRecord;
use std::fmt::Write;
use tracing::warn;

const HEADER: &str = "                         usd        btc         eth             24h     7d";

/// Render the fixed-width console table. `search` filters rows by a
/// case-sensitive substring match against slug or symbol.
pub fn render(records: &[CoinRecord], refs: &RefPrices, search: Option<&str>) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');

    for record in records {
        if let Some(needle) = search {
            if !record.slug.contains(needle) && !record.symbol.contains(needle) {
                continue;
            }
        }
        let Some(row) = ConsoleRow::from_record(record, refs) else {
            warn!("Skipping {}: record has no USD quote", record.slug);
            continue;
        };
        writeln!(
            out,
            "{:>17} {:>5}  {:<10} {:<11} {:<13} {:>7} {:>7}",
            row.slug,
            row.symbol,
            row.price_usd,
            row.price_btc,
            row.price_eth,
            row.change_24h,
            row.change_7d
        )
        .unwrap();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::record;

    fn selected_scenario() -> (Vec<CoinRecord>, RefPrices) {
        let records = vec![
            record(1, "BTC", "bitcoin", Some(1), Some(46594.1381)),
            record(1027, "ETH", "ethereum", Some(2), Some(3374.89529)),
        ];
        let refs = RefPrices::from_records(&records);
        (records, refs)
    }

    #[test]
    fn selected_coins_render_two_rows_btc_first() {
        let (records, refs) = selected_scenario();
        let out = render(&records, &refs, None);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER);
        assert!(lines[1].contains("bitcoin"));
        assert!(lines[1].contains("1.00000000"));
        assert!(lines[2].contains("ethereum"));
        assert!(lines[2].contains("0.07243176"));
    }

    #[test]
    fn search_matches_slug_substring() {
        let (records, refs) = selected_scenario();
        let out = render(&records, &refs, Some("ether"));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("ethereum"));
    }

    #[test]
    fn search_matches_symbol_and_is_case_sensitive() {
        let (records, refs) = selected_scenario();
        assert!(render(&records, &refs, Some("BTC")).lines().count() == 2);
        // lowercase does not match the symbol, only slugs
        assert!(render(&records, &refs, Some("btc")).lines().count() == 1);
    }

    #[test]
    fn record_without_quote_is_skipped_not_fatal() {
        let (mut records, refs) = selected_scenario();
        records[1].quote.usd = None;
        let out = render(&records, &refs, None);
        assert_eq!(out.lines().count(), 2);
        assert!(!out.contains("ethereum"));
    }

    #[test]
    fn long_slug_is_cut_to_column_width() {
        let records = vec![record(
            42,
            "LONG",
            "a-very-long-coin-slug-indeed",
            Some(3),
            Some(1.0),
        )];
        let refs = RefPrices::default();
        let out = render(&records, &refs, None);
        assert!(out.contains("a-very-long-coin-"));
        assert!(!out.contains("a-very-long-coin-s"));
    }
}
