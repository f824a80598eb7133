//! 차트용 시계열 생성.
//!
//! 외부 렌더러가 그대로 그릴 수 있는 데이터를 생성합니다:
//! - 자산 곡선 (Equity Curve): 시간순 누적 손익
//! - 승/패/본전 분포: 카테고리별 건수와 고정 표시 색상

use chrono::{DateTime, Utc};
use journal_core::TradeRecord;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 수익 카테고리 색상.
pub const WIN_COLOR: &str = "#22c55e";
/// 손실 카테고리 색상.
pub const LOSS_COLOR: &str = "#ef4444";
/// 본전 카테고리 색상.
pub const BREAKEVEN_COLOR: &str = "#6b7280";

/// 자산 곡선의 단일 포인트.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquityPoint {
    /// X축 값 (타임스탬프, 밀리초)
    pub x: i64,
    /// 표시용 날짜 레이블 (예: "Mar 04")
    pub label: String,
    /// 해당 거래까지의 누적 손익
    pub equity: Decimal,
}

impl EquityPoint {
    /// 새 포인트를 생성합니다.
    pub fn new(timestamp: DateTime<Utc>, equity: Decimal) -> Self {
        Self {
            x: timestamp.timestamp_millis(),
            label: timestamp.format("%b %d").to_string(),
            equity,
        }
    }
}

/// 자산 곡선을 생성합니다.
///
/// 입력의 복사본을 `date` 오름차순으로 정렬한 뒤 (호출자의 컬렉션은
/// 재정렬되지 않음) 거래마다 누적 손익 포인트를 하나씩 냅니다.
/// 출력 길이는 입력 길이와 같고, 빈 입력이면 빈 수열입니다.
pub fn equity_curve(trades: &[TradeRecord]) -> Vec<EquityPoint> {
    let mut sorted: Vec<&TradeRecord> = trades.iter().collect();
    sorted.sort_by_key(|t| t.date);

    let mut running_total = Decimal::ZERO;
    let mut curve = Vec::with_capacity(sorted.len());

    for trade in sorted {
        running_total += trade.profit_loss;
        curve.push(EquityPoint::new(trade.date, running_total));
    }

    curve
}

/// 승/패/본전 분포의 단일 항목.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownSlice {
    /// 카테고리 레이블
    pub label: String,
    /// 카테고리 건수 (항상 > 0, 0건 카테고리는 생략됨)
    pub value: usize,
    /// 고정 표시 색상
    pub color: String,
}

impl BreakdownSlice {
    fn new(label: &str, value: usize, color: &str) -> Self {
        Self {
            label: label.to_string(),
            value,
            color: color.to_string(),
        }
    }
}

/// 승/패/본전 분포를 생성합니다.
///
/// 손익 > 0 / < 0 / == 0 의 서로소 세 카테고리로 나누고,
/// 건수가 0인 카테고리는 출력에서 완전히 생략합니다
/// (0 값 항목으로 내지 않음).
pub fn win_loss_breakdown(trades: &[TradeRecord]) -> Vec<BreakdownSlice> {
    let wins = trades.iter().filter(|t| t.is_winner()).count();
    let losses = trades.iter().filter(|t| t.is_loser()).count();
    let breakeven = trades.iter().filter(|t| t.is_breakeven()).count();

    [
        BreakdownSlice::new("Wins", wins, WIN_COLOR),
        BreakdownSlice::new("Losses", losses, LOSS_COLOR),
        BreakdownSlice::new("Breakeven", breakeven, BREAKEVEN_COLOR),
    ]
    .into_iter()
    .filter(|slice| slice.value > 0)
    .collect()
}
