//! 통계 및 차트 데이터 명령.

use anyhow::Context;
use chrono::{DateTime, Utc};
use journal_analytics::{
    equity_curve, filter_by_period, win_loss_breakdown, GoalProgress, TradeStatistics,
};
use journal_core::{DecimalExt, Money, Period};
use journal_storage::JournalStore;
use serde_json::json;
use tracing::debug;

/// 기간 통계와 목표 진척도를 출력합니다.
pub fn show_stats(
    store: &JournalStore,
    period: Option<Period>,
    reference: DateTime<Utc>,
) -> anyhow::Result<()> {
    let trades = store.load_trades_or_default();
    let settings = store.load_settings_or_default();
    let goals = store.load_goals_or_default();

    let window = filter_by_period(&trades, period, reference);
    let stats = TradeStatistics::from_trades(&window);
    debug!(summary = %stats.summary(), "통계 계산 완료");

    let scope = period.map_or("전체 기간", |p| p.display_name());
    println!("=== {} 통계 ({}건) ===", scope, stats.total_trades);
    println!("승률        : {}", stats.win_rate_pct.to_percentage_string());
    println!(
        "손익 합계   : {}",
        Money::new(stats.total_pnl, &settings.currency)
    );
    println!(
        "평균 수익   : {}",
        Money::new(stats.average_win, &settings.currency)
    );
    println!(
        "평균 손실   : {}",
        Money::new(stats.average_loss, &settings.currency)
    );
    println!("프로핏 팩터: {:.2}", stats.profit_factor);
    println!(
        "최대 낙폭   : {}",
        Money::new(stats.max_drawdown, &settings.currency)
    );
    println!(
        "최대 수익   : {}",
        Money::new(stats.largest_win, &settings.currency)
    );
    println!(
        "최대 손실   : {}",
        Money::new(stats.largest_loss, &settings.currency)
    );

    if goals.any_set() {
        println!();
        println!("=== 목표 진척도 ===");
        for progress in GoalProgress::for_all_periods(&goals, &trades, reference) {
            if progress.goal_amount.is_zero() {
                continue;
            }
            let check = if progress.achieved() { " ✔" } else { "" };
            println!(
                "{:<4}: {:>6.1}% ({} / {}){}",
                progress.period.display_name(),
                progress.progress_pct,
                Money::new(progress.period_pnl, &settings.currency),
                Money::new(progress.goal_amount, &settings.currency),
                check,
            );
        }
    }

    Ok(())
}

/// 차트용 시계열을 JSON으로 출력합니다 (외부 렌더러 입력).
pub fn print_chart_data(
    store: &JournalStore,
    period: Option<Period>,
    reference: DateTime<Utc>,
) -> anyhow::Result<()> {
    let trades = store.load_trades_or_default();
    let window = filter_by_period(&trades, period, reference);

    let payload = json!({
        "equityCurve": equity_curve(&window),
        "winLossBreakdown": win_loss_breakdown(&window),
    });

    let rendered =
        serde_json::to_string_pretty(&payload).context("차트 데이터 직렬화 실패")?;
    println!("{}", rendered);

    Ok(())
}
