//! 목표 진척도 계산.
//!
//! 기간 윈도우의 손익 합계를 사용자 목표 금액과 비교해
//! 달성률을 계산합니다. 표시용 백분율은 [0, 100]으로 클램프되며,
//! 보조값으로 0 미만만 잘라낸 원시 백분율을 함께 유지합니다.

use chrono::{DateTime, Utc};
use journal_core::{Goals, Period, TradeRecord};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::period::filter_by_period;
use crate::statistics::total_pnl;

/// 단일 기간의 목표 진척도.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalProgress {
    /// 기간 단위
    pub period: Period,
    /// 목표 금액 (0 = 목표 미설정)
    pub goal_amount: Decimal,
    /// 윈도우 내 손익 합계
    pub period_pnl: Decimal,
    /// 표시용 달성률, [0, 100] 클램프
    pub progress_pct: Decimal,
    /// 0 미만만 잘라낸 달성률 (위로는 무제한)
    pub raw_progress_pct: Decimal,
}

impl GoalProgress {
    /// 목표 진척도를 계산합니다.
    ///
    /// 목표 금액이 0이면 진척도는 0으로 정의됩니다 (목표 미설정).
    /// 양수 목표에 음수 손익이면 0%로 표시됩니다 (음수 표시 없음).
    pub fn calculate(
        period: Period,
        goal_amount: Decimal,
        trades: &[TradeRecord],
        reference: DateTime<Utc>,
    ) -> Self {
        let window_trades = filter_by_period(trades, Some(period), reference);
        let period_pnl = total_pnl(&window_trades);

        if goal_amount.is_zero() {
            return Self {
                period,
                goal_amount,
                period_pnl,
                progress_pct: Decimal::ZERO,
                raw_progress_pct: Decimal::ZERO,
            };
        }

        let raw = (period_pnl / goal_amount * dec!(100)).max(Decimal::ZERO);

        Self {
            period,
            goal_amount,
            period_pnl,
            progress_pct: raw.min(dec!(100)),
            raw_progress_pct: raw,
        }
    }

    /// 네 기간 전부의 진척도를 계산합니다 (표시 순서).
    pub fn for_all_periods(
        goals: &Goals,
        trades: &[TradeRecord],
        reference: DateTime<Utc>,
    ) -> Vec<Self> {
        Period::ALL
            .iter()
            .map(|period| Self::calculate(*period, goals.amount_for(*period), trades, reference))
            .collect()
    }

    /// 목표를 달성했는지 확인합니다.
    pub fn achieved(&self) -> bool {
        self.goal_amount > Decimal::ZERO && self.raw_progress_pct >= dec!(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use journal_core::Direction;

    fn trade_with_pnl(pnl: Decimal, date: DateTime<Utc>) -> TradeRecord {
        TradeRecord::new(
            "EUR/USD",
            Direction::Buy,
            dec!(1.1),
            dec!(1.2),
            dec!(0.1),
            date,
        )
        .with_profit_loss(pnl)
    }

    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 4, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_zero_goal_is_always_zero_progress() {
        let trades = vec![trade_with_pnl(dec!(500), reference())];

        let progress = GoalProgress::calculate(Period::Daily, Decimal::ZERO, &trades, reference());

        assert_eq!(progress.progress_pct, Decimal::ZERO);
        assert_eq!(progress.raw_progress_pct, Decimal::ZERO);
        assert!(!progress.achieved());
    }

    #[test]
    fn test_partial_progress() {
        let trades = vec![trade_with_pnl(dec!(60), reference())];

        let progress = GoalProgress::calculate(Period::Daily, dec!(200), &trades, reference());

        assert_eq!(progress.period_pnl, dec!(60));
        assert_eq!(progress.progress_pct, dec!(30));
        assert!(!progress.achieved());
    }

    #[test]
    fn test_overshoot_clamped_but_raw_kept() {
        let trades = vec![trade_with_pnl(dec!(300), reference())];

        let progress = GoalProgress::calculate(Period::Daily, dec!(200), &trades, reference());

        assert_eq!(progress.progress_pct, dec!(100));
        assert_eq!(progress.raw_progress_pct, dec!(150));
        assert!(progress.achieved());
    }

    #[test]
    fn test_negative_pnl_displays_zero() {
        let trades = vec![trade_with_pnl(dec!(-80), reference())];

        let progress = GoalProgress::calculate(Period::Daily, dec!(200), &trades, reference());

        assert_eq!(progress.period_pnl, dec!(-80));
        assert_eq!(progress.progress_pct, Decimal::ZERO);
        assert_eq!(progress.raw_progress_pct, Decimal::ZERO);
    }

    #[test]
    fn test_only_window_trades_counted() {
        // 전날 거래는 일별 목표에 기여하지 않음
        let yesterday = Utc.with_ymd_and_hms(2026, 3, 3, 12, 0, 0).unwrap();
        let trades = vec![
            trade_with_pnl(dec!(100), yesterday),
            trade_with_pnl(dec!(50), reference()),
        ];

        let progress = GoalProgress::calculate(Period::Daily, dec!(100), &trades, reference());

        assert_eq!(progress.period_pnl, dec!(50));
        assert_eq!(progress.progress_pct, dec!(50));
    }

    #[test]
    fn test_for_all_periods_order() {
        let goals = Goals {
            daily: dec!(100),
            weekly: dec!(500),
            monthly: dec!(2000),
            yearly: dec!(20000),
        };
        let trades = vec![trade_with_pnl(dec!(100), reference())];

        let all = GoalProgress::for_all_periods(&goals, &trades, reference());

        assert_eq!(all.len(), 4);
        assert_eq!(all[0].period, Period::Daily);
        assert_eq!(all[0].progress_pct, dec!(100));
        assert_eq!(all[3].period, Period::Yearly);
        assert_eq!(all[3].progress_pct, dec!(0.5));
    }
}
