//! CLI 명령 통합 테스트.
//!
//! 임시 저장소에 대해 기록 → 조회 → 삭제 흐름을 검증합니다.

use chrono::{TimeZone, Utc};
use journal_cli::{add_trade, delete_trade, run_export, AddTradeInput};
use journal_storage::JournalStore;
use rust_decimal_macros::dec;

fn input(pair: &str) -> AddTradeInput {
    AddTradeInput {
        pair: pair.to_string(),
        direction: "buy".to_string(),
        entry_price: "1.1000".to_string(),
        exit_price: "1.1050".to_string(),
        lot_size: Some("0.1".to_string()),
        profit_loss: None,
        date: None,
        notes: None,
    }
}

#[test]
fn add_persists_and_derives_pnl() {
    let dir = tempfile::tempdir().unwrap();
    let store = JournalStore::open(dir.path()).unwrap();
    let now = Utc.with_ymd_and_hms(2026, 3, 4, 12, 0, 0).unwrap();

    let record = add_trade(&store, input("EUR/USD"), now).unwrap();

    assert_eq!(record.profit_loss, dec!(50));
    assert_eq!(record.date, now);
    assert_eq!(store.load_trades().unwrap().len(), 1);
}

#[test]
fn add_uses_default_lot_from_settings() {
    let dir = tempfile::tempdir().unwrap();
    let store = JournalStore::open(dir.path()).unwrap();
    let now = Utc.with_ymd_and_hms(2026, 3, 4, 12, 0, 0).unwrap();

    let mut no_lot = input("EUR/USD");
    no_lot.lot_size = None;

    let record = add_trade(&store, no_lot, now).unwrap();

    // 저장된 설정이 없으면 기본 랏 0.1
    assert_eq!(record.lot_size, dec!(0.1));
}

#[test]
fn invalid_input_is_rejected_without_persisting() {
    let dir = tempfile::tempdir().unwrap();
    let store = JournalStore::open(dir.path()).unwrap();
    let now = Utc::now();

    let mut bad = input("EUR/USD");
    bad.entry_price = "zero".to_string();
    bad.direction = "hold".to_string();

    assert!(add_trade(&store, bad, now).is_err());
    assert!(store.load_trades().unwrap().is_empty());
}

#[test]
fn delete_by_id_then_missing_id_fails() {
    let dir = tempfile::tempdir().unwrap();
    let store = JournalStore::open(dir.path()).unwrap();
    let now = Utc::now();

    let record = add_trade(&store, input("GBP/USD"), now).unwrap();
    let id = record.id.to_string();

    delete_trade(&store, &id).unwrap();
    assert!(store.load_trades().unwrap().is_empty());

    // 같은 ID 재삭제는 실패
    assert!(delete_trade(&store, &id).is_err());
    // 형식이 틀린 ID도 실패
    assert!(delete_trade(&store, "not-a-uuid").is_err());
}

#[test]
fn export_writes_requested_path() {
    let dir = tempfile::tempdir().unwrap();
    let store = JournalStore::open(dir.path()).unwrap();
    let now = Utc.with_ymd_and_hms(2026, 3, 5, 0, 0, 0).unwrap();

    add_trade(&store, input("USD/JPY"), now).unwrap();

    let out = dir.path().join("backup.json");
    let written = run_export(&store, Some(out.clone()), now).unwrap();

    assert_eq!(written, out);
    assert!(out.exists());
}
