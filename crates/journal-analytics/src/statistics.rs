//! 거래 통계 계산.
//!
//! 거래 기록 목록의 성과를 측정하는 지표를 제공합니다:
//! - 승률 (Win Rate): 수익 거래 비율
//! - 프로핏 팩터 (Profit Factor): 총 수익 / 총 손실 비율
//! - 최대 낙폭 (Maximum Drawdown): 누적 손익의 고점 대비 최대 하락폭
//! - 평균/최대 수익·손실
//!
//! 모든 함수는 순수하며 빈 입력과 0 분모를 에러 없이 정의된
//! 기본값(0)으로 해소합니다. [`max_drawdown`]만 입력 순서에 의존합니다.

use journal_core::TradeRecord;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// 수익 거래 비율을 백분율로 계산합니다.
///
/// 본전 거래(손익 0)는 분모에 포함되고 분자에서 제외됩니다.
/// 빈 입력이면 0을 반환합니다.
pub fn win_rate(trades: &[TradeRecord]) -> Decimal {
    if trades.is_empty() {
        return Decimal::ZERO;
    }

    let winners = trades.iter().filter(|t| t.is_winner()).count();
    Decimal::from(winners) / Decimal::from(trades.len()) * dec!(100)
}

/// 손익 합계를 계산합니다. 빈 입력이면 0입니다.
pub fn total_pnl(trades: &[TradeRecord]) -> Decimal {
    trades.iter().map(|t| t.profit_loss).sum()
}

/// 수익 거래의 평균 손익을 계산합니다.
///
/// 손익 > 0 부분집합의 평균이며, 부분집합이 비면 0입니다.
/// 본전 거래는 제외됩니다.
pub fn average_win(trades: &[TradeRecord]) -> Decimal {
    let wins: Vec<Decimal> = trades
        .iter()
        .filter(|t| t.is_winner())
        .map(|t| t.profit_loss)
        .collect();

    if wins.is_empty() {
        return Decimal::ZERO;
    }

    wins.iter().copied().sum::<Decimal>() / Decimal::from(wins.len())
}

/// 손실 거래의 평균 손익을 계산합니다.
///
/// 손익 < 0 부분집합의 평균이므로 결과는 음수(또는 0)입니다.
/// 본전 거래는 제외됩니다.
pub fn average_loss(trades: &[TradeRecord]) -> Decimal {
    let losses: Vec<Decimal> = trades
        .iter()
        .filter(|t| t.is_loser())
        .map(|t| t.profit_loss)
        .collect();

    if losses.is_empty() {
        return Decimal::ZERO;
    }

    losses.iter().copied().sum::<Decimal>() / Decimal::from(losses.len())
}

/// 프로핏 팩터를 계산합니다 (총 수익 / |총 손실|).
///
/// 손실 합이 정확히 0이면 0으로 나누는 대신 총 수익을 그대로
/// 반환합니다. 이 폴백은 비율이 아니므로 호출자는 이 값이
/// 유계라고 가정하면 안 됩니다.
pub fn profit_factor(trades: &[TradeRecord]) -> Decimal {
    let gross_profit: Decimal = trades
        .iter()
        .filter(|t| t.is_winner())
        .map(|t| t.profit_loss)
        .sum();

    let gross_loss: Decimal = trades
        .iter()
        .filter(|t| t.is_loser())
        .map(|t| t.profit_loss)
        .sum::<Decimal>()
        .abs();

    if gross_loss.is_zero() {
        gross_profit
    } else {
        gross_profit / gross_loss
    }
}

/// 최대 낙폭을 계산합니다 (음수가 아닌 크기).
///
/// 거래를 **주어진 순서 그대로** 시간순으로 간주하고 처리합니다
/// (정렬은 호출자 책임, 내부에서 재정렬하지 않음).
/// 누적 합계와 누적 고점을 유지하며, 각 시점의 낙폭은
/// `고점 - 누적 합계`, 결과는 관측된 최대값입니다.
///
/// # Examples
///
/// ```
/// // 손익 [100, -50, 30, -80, 60]
/// // 누적  [100,  50, 80,   0, 60], 고점 100 유지
/// // 낙폭  [  0,  50, 20, 100, 40] → 최대 낙폭 100
/// ```
pub fn max_drawdown(trades: &[TradeRecord]) -> Decimal {
    let mut running_total = Decimal::ZERO;
    let mut peak = Decimal::ZERO;
    let mut max_drawdown = Decimal::ZERO;

    for trade in trades {
        running_total += trade.profit_loss;

        if running_total > peak {
            peak = running_total;
        }

        let drawdown = peak - running_total;
        if drawdown > max_drawdown {
            max_drawdown = drawdown;
        }
    }

    max_drawdown
}

/// 단일 거래 최대 수익을 반환합니다. 수익 거래가 없으면 0입니다.
pub fn largest_win(trades: &[TradeRecord]) -> Decimal {
    trades
        .iter()
        .filter(|t| t.is_winner())
        .map(|t| t.profit_loss)
        .max()
        .unwrap_or(Decimal::ZERO)
}

/// 단일 거래 최대 손실을 반환합니다 (음수). 손실 거래가 없으면 0입니다.
pub fn largest_loss(trades: &[TradeRecord]) -> Decimal {
    trades
        .iter()
        .filter(|t| t.is_loser())
        .map(|t| t.profit_loss)
        .min()
        .unwrap_or(Decimal::ZERO)
}

/// 거래 통계 집계.
///
/// 대시보드 표시용으로 위의 개별 지표를 하나로 모은 스냅샷입니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TradeStatistics {
    /// 총 거래 횟수
    pub total_trades: usize,
    /// 수익 거래 횟수
    pub winning_trades: usize,
    /// 손실 거래 횟수
    pub losing_trades: usize,
    /// 본전 거래 횟수
    pub breakeven_trades: usize,
    /// 승률 (백분율)
    pub win_rate_pct: Decimal,
    /// 손익 합계
    pub total_pnl: Decimal,
    /// 평균 수익 (수익 거래만)
    pub average_win: Decimal,
    /// 평균 손실 (손실 거래만, 음수)
    pub average_loss: Decimal,
    /// 프로핏 팩터 (손실이 없으면 총 수익 폴백)
    pub profit_factor: Decimal,
    /// 최대 낙폭 (음수가 아닌 크기)
    pub max_drawdown: Decimal,
    /// 최대 수익 거래
    pub largest_win: Decimal,
    /// 최대 손실 거래 (음수)
    pub largest_loss: Decimal,
}

impl TradeStatistics {
    /// 거래 목록으로부터 통계를 계산합니다.
    ///
    /// 낙폭은 주어진 순서를 시간순으로 간주합니다.
    pub fn from_trades(trades: &[TradeRecord]) -> Self {
        let winning_trades = trades.iter().filter(|t| t.is_winner()).count();
        let losing_trades = trades.iter().filter(|t| t.is_loser()).count();

        Self {
            total_trades: trades.len(),
            winning_trades,
            losing_trades,
            breakeven_trades: trades.len() - winning_trades - losing_trades,
            win_rate_pct: win_rate(trades),
            total_pnl: total_pnl(trades),
            average_win: average_win(trades),
            average_loss: average_loss(trades),
            profit_factor: profit_factor(trades),
            max_drawdown: max_drawdown(trades),
            largest_win: largest_win(trades),
            largest_loss: largest_loss(trades),
        }
    }

    /// 성과 요약을 문자열로 반환합니다.
    ///
    /// 로그 출력용 한 줄 요약입니다.
    pub fn summary(&self) -> String {
        format!(
            "거래: {} | 승률: {:.1}% | PF: {:.2} | MDD: {:.2} | 손익: {:.2}",
            self.total_trades,
            self.win_rate_pct,
            self.profit_factor,
            self.max_drawdown,
            self.total_pnl
        )
    }
}
