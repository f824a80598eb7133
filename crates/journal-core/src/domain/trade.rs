//! 거래 기록.
//!
//! 이 모듈은 수기 입력 기반 매매일지의 거래 기록 타입을 정의합니다:
//! - `Direction` - 매수/매도 방향
//! - `TradeRecord` - 개별 거래 기록

use crate::domain::calculations::standard_lot_pnl;
use crate::types::{LotSize, Price};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 거래 방향.
///
/// 손익 부호 규약을 결정합니다:
/// - `Buy`: 청산가 > 진입가 → 수익
/// - `Sell`: 청산가 < 진입가 → 수익
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// 매수 (롱)
    Buy,
    /// 매도 (숏)
    Sell,
}

impl Direction {
    /// 방향의 표시 이름.
    pub fn display_name(&self) -> &'static str {
        match self {
            Direction::Buy => "매수",
            Direction::Sell => "매도",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Buy => write!(f, "buy"),
            Direction::Sell => write!(f, "sell"),
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "buy" => Ok(Direction::Buy),
            "sell" => Ok(Direction::Sell),
            _ => Err(format!("알 수 없는 거래 방향: {} (buy 또는 sell)", s)),
        }
    }
}

/// 수기 입력된 단일 거래 기록.
///
/// 컬렉션 내에서 `id`가 유일하며, 삭제와 목록 식별의 유일한 키입니다.
/// 기록은 생성과 삭제만 지원하고 수정은 지원하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    /// 고유 식별자 (생성 시 부여, 불변)
    pub id: Uuid,
    /// 통화쌍 심볼 (예: "EUR/USD")
    pub pair: String,
    /// 거래 방향
    pub direction: Direction,
    /// 진입 가격 (양수)
    pub entry_price: Price,
    /// 청산 가격 (양수)
    pub exit_price: Price,
    /// 랏 크기 (양수, 손익 규모 스케일링)
    pub lot_size: LotSize,
    /// 실현 손익 (부호 있음, 0 = 본전)
    pub profit_loss: Decimal,
    /// 거래 시각 (정렬 및 기간 버킷팅 기준)
    pub date: DateTime<Utc>,
    /// 메모
    #[serde(default)]
    pub notes: String,
}

impl TradeRecord {
    /// 새 거래 기록을 생성합니다.
    ///
    /// 손익은 표준랏 규약으로 파생됩니다:
    /// `(청산가 - 진입가) × 랏 × 100,000` (매수 기준, 매도는 부호 반전).
    /// 사용자 제공 손익이 있으면 [`TradeRecord::with_profit_loss`]로 덮어씁니다.
    pub fn new(
        pair: impl Into<String>,
        direction: Direction,
        entry_price: Price,
        exit_price: Price,
        lot_size: LotSize,
        date: DateTime<Utc>,
    ) -> Self {
        let profit_loss = standard_lot_pnl(entry_price, exit_price, lot_size, direction);

        Self {
            id: Uuid::new_v4(),
            pair: pair.into(),
            direction,
            entry_price,
            exit_price,
            lot_size,
            profit_loss,
            date,
            notes: String::new(),
        }
    }

    /// 사용자 제공 손익으로 덮어씁니다.
    pub fn with_profit_loss(mut self, profit_loss: Decimal) -> Self {
        self.profit_loss = profit_loss;
        self
    }

    /// 메모를 설정합니다.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// 거래 시각을 설정합니다.
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// 수익 거래인지 확인합니다 (손익 > 0).
    pub fn is_winner(&self) -> bool {
        self.profit_loss > Decimal::ZERO
    }

    /// 손실 거래인지 확인합니다 (손익 < 0).
    pub fn is_loser(&self) -> bool {
        self.profit_loss < Decimal::ZERO
    }

    /// 본전 거래인지 확인합니다 (손익 == 0).
    pub fn is_breakeven(&self) -> bool {
        self.profit_loss.is_zero()
    }
}
