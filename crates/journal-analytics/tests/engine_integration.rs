//! 분석 엔진 통합 테스트.
//!
//! 필터링 → 통계 → 시계열 → 목표 진척도의 전체 흐름을
//! 하나의 거래 목록으로 검증합니다.

use chrono::{DateTime, Duration, TimeZone, Utc};
use journal_analytics::{
    equity_curve, filter_by_period, max_drawdown, total_pnl, win_loss_breakdown, GoalProgress,
    TradeStatistics,
};
use journal_core::{Direction, Goals, Period, TradeRecord};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn trade(pnl: Decimal, date: DateTime<Utc>) -> TradeRecord {
    TradeRecord::new(
        "EUR/USD",
        Direction::Buy,
        dec!(1.1000),
        dec!(1.2000),
        dec!(0.1),
        date,
    )
    .with_profit_loss(pnl)
}

/// 기준: 2026-03-04 수요일 정오 UTC.
fn reference() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 4, 12, 0, 0).unwrap()
}

#[test]
fn weekly_stats_flow_excludes_prior_sunday() {
    let monday = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
    let tuesday = Utc.with_ymd_and_hms(2026, 3, 3, 9, 0, 0).unwrap();
    let prior_sunday = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();

    let trades = vec![
        trade(dec!(120), monday),
        trade(dec!(-40), tuesday),
        trade(dec!(999), prior_sunday),
    ];

    let window = filter_by_period(&trades, Some(Period::Weekly), reference());
    assert_eq!(window.len(), 2);

    let stats = TradeStatistics::from_trades(&window);
    assert_eq!(stats.total_pnl, dec!(80));
    assert_eq!(stats.winning_trades, 1);
    assert_eq!(stats.losing_trades, 1);
    assert_eq!(stats.win_rate_pct, dec!(50));
}

#[test]
fn goal_progress_uses_window_pnl() {
    let monday = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
    let last_month = Utc.with_ymd_and_hms(2026, 2, 10, 9, 0, 0).unwrap();

    let trades = vec![trade(dec!(250), monday), trade(dec!(1000), last_month)];

    let goals = Goals {
        weekly: dec!(500),
        ..Goals::default()
    };

    let all = GoalProgress::for_all_periods(&goals, &trades, reference());
    let weekly = &all[1];

    assert_eq!(weekly.period, Period::Weekly);
    assert_eq!(weekly.period_pnl, dec!(250));
    assert_eq!(weekly.progress_pct, dec!(50));

    // 목표가 0인 기간은 손익과 무관하게 0%
    assert_eq!(all[0].progress_pct, Decimal::ZERO);
    assert_eq!(all[2].progress_pct, Decimal::ZERO);
}

#[test]
fn equity_curve_final_point_matches_total_pnl() {
    let base = Utc.with_ymd_and_hms(2026, 1, 5, 0, 0, 0).unwrap();
    let trades: Vec<TradeRecord> = [100, -50, 30, -80, 60]
        .iter()
        .enumerate()
        .map(|(i, pnl)| trade(Decimal::from(*pnl), base + Duration::days(i as i64)))
        .collect();

    let curve = equity_curve(&trades);

    assert_eq!(curve.len(), trades.len());
    assert_eq!(curve.last().unwrap().equity, total_pnl(&trades));
    assert_eq!(max_drawdown(&trades), dec!(100));
}

proptest! {
    /// 자산 곡선은 입력 순서와 무관하다 (내부 정렬).
    #[test]
    fn prop_equity_curve_reorder_invariant(pnls in prop::collection::vec(-1000i64..1000, 0..40)) {
        let base = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let trades: Vec<TradeRecord> = pnls
            .iter()
            .enumerate()
            .map(|(i, pnl)| trade(Decimal::from(*pnl), base + Duration::hours(i as i64)))
            .collect();

        let mut reversed = trades.clone();
        reversed.reverse();

        prop_assert_eq!(equity_curve(&trades), equity_curve(&reversed));
    }

    /// 곡선 길이는 입력 길이, 마지막 누적값은 손익 합계와 같다.
    #[test]
    fn prop_equity_curve_shape(pnls in prop::collection::vec(-1000i64..1000, 1..40)) {
        let base = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let trades: Vec<TradeRecord> = pnls
            .iter()
            .enumerate()
            .map(|(i, pnl)| trade(Decimal::from(*pnl), base + Duration::hours(i as i64)))
            .collect();

        let curve = equity_curve(&trades);

        prop_assert_eq!(curve.len(), trades.len());
        prop_assert_eq!(curve.last().unwrap().equity, total_pnl(&trades));
    }

    /// 낙폭은 항상 0 이상이고, 분포 건수 합은 전체 건수다.
    #[test]
    fn prop_drawdown_nonnegative_and_breakdown_complete(
        pnls in prop::collection::vec(-1000i64..1000, 0..40),
    ) {
        let base = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let trades: Vec<TradeRecord> = pnls
            .iter()
            .enumerate()
            .map(|(i, pnl)| trade(Decimal::from(*pnl), base + Duration::hours(i as i64)))
            .collect();

        prop_assert!(max_drawdown(&trades) >= Decimal::ZERO);

        let counted: usize = win_loss_breakdown(&trades).iter().map(|s| s.value).sum();
        prop_assert_eq!(counted, trades.len());
    }
}
