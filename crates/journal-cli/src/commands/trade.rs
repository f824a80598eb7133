//! 거래 기록/삭제/목록 명령.

use anyhow::Context;
use chrono::{DateTime, Utc};
use journal_analytics::filter_by_period;
use journal_core::{JournalError, Period, TradeDraft, TradeRecord};
use journal_storage::JournalStore;
use std::str::FromStr;
use tracing::info;
use uuid::Uuid;

/// `add` 명령의 원시 입력.
#[derive(Debug, Clone)]
pub struct AddTradeInput {
    /// 통화쌍 심볼
    pub pair: String,
    /// 거래 방향 ("buy" / "sell")
    pub direction: String,
    /// 진입 가격
    pub entry_price: String,
    /// 청산 가격
    pub exit_price: String,
    /// 랏 크기 (비우면 설정의 기본 랏)
    pub lot_size: Option<String>,
    /// 사용자 제공 손익 (비우면 표준랏 공식으로 파생)
    pub profit_loss: Option<String>,
    /// 거래 시각 (비우면 현재 시각)
    pub date: Option<String>,
    /// 메모
    pub notes: Option<String>,
}

/// 거래를 검증하고 저장합니다.
///
/// 랏 크기가 비어 있으면 저장된 설정의 기본 랏 크기를 사용하고,
/// 거래 시각이 비어 있으면 `now`를 사용합니다 (엔진이 아니라
/// 이 경계에서만 현재 시각이 주입됩니다).
pub fn add_trade(
    store: &JournalStore,
    input: AddTradeInput,
    now: DateTime<Utc>,
) -> anyhow::Result<TradeRecord> {
    let settings = store.load_settings()?;

    let draft = TradeDraft {
        pair: input.pair,
        direction: input.direction,
        entry_price: input.entry_price,
        exit_price: input.exit_price,
        lot_size: input
            .lot_size
            .unwrap_or_else(|| settings.default_lot_size.to_string()),
        profit_loss: input.profit_loss,
        date: Some(input.date.unwrap_or_else(|| now.to_rfc3339())),
        notes: input.notes,
    };

    let record = match draft.validate() {
        Ok(record) => record,
        Err(errors) => {
            eprintln!("입력 검증 실패 ({}개 필드):", errors.len());
            for (field, message) in errors.iter() {
                eprintln!("  {}: {}", field, message);
            }
            return Err(JournalError::Validation(errors).into());
        }
    };

    store.append_trade(record.clone())?;
    info!(id = %record.id, pair = %record.pair, "거래 기록 저장");

    println!(
        "기록됨: {} {} {}랏 (손익 {:.2} {})",
        record.pair,
        record.direction.display_name(),
        record.lot_size,
        record.profit_loss,
        settings.currency
    );

    Ok(record)
}

/// ID로 거래를 삭제합니다.
pub fn delete_trade(store: &JournalStore, id: &str) -> anyhow::Result<()> {
    let id = Uuid::from_str(id).context("거래 ID 형식이 올바르지 않습니다")?;

    if store.delete_trade(id)? {
        info!(%id, "거래 삭제");
        println!("삭제됨: {}", id);
        Ok(())
    } else {
        Err(JournalError::NotFound(format!("해당 ID의 거래가 없습니다: {}", id)).into())
    }
}

/// 거래 목록을 출력합니다.
pub fn list_trades(
    store: &JournalStore,
    period: Option<Period>,
    reference: DateTime<Utc>,
) -> anyhow::Result<()> {
    let trades = store.load_trades_or_default();
    let filtered = filter_by_period(&trades, period, reference);

    if filtered.is_empty() {
        println!("표시할 거래가 없습니다");
        return Ok(());
    }

    println!(
        "{:<36}  {:<19}  {:<9}  {:>4}  {:>10}  {:>8}  {:>12}",
        "ID", "일시", "통화쌍", "방향", "진입", "랏", "손익"
    );

    for trade in &filtered {
        println!(
            "{:<36}  {:<19}  {:<9}  {:>4}  {:>10}  {:>8}  {:>12.2}",
            trade.id,
            trade.date.format("%Y-%m-%d %H:%M:%S"),
            trade.pair,
            trade.direction,
            trade.entry_price,
            trade.lot_size,
            trade.profit_loss,
        );
    }

    println!("총 {}건", filtered.len());
    Ok(())
}
