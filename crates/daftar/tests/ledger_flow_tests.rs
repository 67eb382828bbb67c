//! End-to-end lifecycle against the real JSON store: start a period,
//! accumulate entries, close, and roll into the next period.

use chrono::NaiveDate;
use tempfile::tempdir;

use daftar::render::render_report;
use daftar_core::{
    api_close_and_roll, api_current_period, api_record_expense, api_record_purchase,
    api_record_sale, api_report, api_start_ledger, CoreError,
};
use daftar_domain::{OwnerId, Valuation};
use daftar_storage_json::JsonLedgerStore;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn full_period_lifecycle_with_loss() {
    let dir = tempdir().expect("tempdir");
    let data_dir = dir.path().join("ledger");
    let owner = OwnerId::new("corner-shop");

    let store = JsonLedgerStore::open(&data_dir).expect("open store");
    let period =
        api_start_ledger(&store, &owner, 1_000_000, date(2024, 1, 1)).expect("start ledger");
    assert_eq!(period.end_date, date(2024, 1, 15));

    // a fortnight of activity, including a same-day correction
    api_record_sale(&store, &owner, date(2024, 1, 2), 999, 1).expect("mistyped sale");
    api_record_sale(&store, &owner, date(2024, 1, 2), 1_200_000, 800_000).expect("corrected sale");
    api_record_purchase(&store, &owner, date(2024, 1, 3), 2_000_000, "wholesale run")
        .expect("first purchase");
    api_record_purchase(&store, &owner, date(2024, 1, 3), 1_500_000, "restock")
        .expect("second purchase");
    api_record_expense(&store, &owner, date(2024, 1, 4), 200_000, "rent").expect("expense");

    let partial = api_report(&store, &owner).expect("partial report");
    assert!(partial.valuation.is_pending());
    assert_eq!(partial.sales, 2_000_000);
    assert_eq!(partial.purchases, 3_500_000);
    assert!(render_report(&partial).contains("closing: not entered yet"));

    let (report, next) = api_close_and_roll(&store, &owner, 2_000_000).expect("close and roll");
    match report.valuation {
        Valuation::Closed {
            cost_of_goods_sold,
            gross_profit,
            net_profit,
            ..
        } => {
            assert_eq!(cost_of_goods_sold, 2_500_000);
            assert_eq!(gross_profit, -500_000);
            assert_eq!(net_profit, -700_000);
        }
        Valuation::Pending => panic!("expected final valuation"),
    }
    let text = render_report(&report);
    assert!(text.contains("Net profit/loss: -700,000"));

    // the next period carries the closing valuation forward
    assert_eq!(next.start_date, date(2024, 1, 16));
    assert_eq!(next.end_date, date(2024, 1, 30));
    assert_eq!(next.opening_stock_cost, 2_000_000);

    // everything above survives a process restart
    drop(store);
    let store = JsonLedgerStore::open(&data_dir).expect("reopen store");
    let current = api_current_period(&store, &owner)
        .expect("query")
        .expect("open period persisted");
    assert_eq!(current.id, next.id);
    let fresh = api_report(&store, &owner).expect("fresh report");
    assert_eq!(fresh.sales, 0);
}

#[test]
fn second_start_is_rejected_while_a_period_is_open() {
    let dir = tempdir().expect("tempdir");
    let owner = OwnerId::new("corner-shop");
    let store = JsonLedgerStore::open(dir.path().join("ledger")).expect("open store");

    api_start_ledger(&store, &owner, 0, date(2024, 1, 1)).expect("first start");
    let err = api_start_ledger(&store, &owner, 0, date(2024, 1, 5))
        .expect_err("second start must conflict");
    assert!(matches!(err, CoreError::Conflict(_)));
}
