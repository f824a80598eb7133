//! 기간 윈도우 해석 및 필터링.
//!
//! 기준 시각이 속한 달력 단위의 시작부터 **기준 시각까지**의
//! 비대칭 윈도우를 계산합니다. 단위의 끝이 아니라 기준 시각이
//! 끝이므로 "이번 기간의 현재까지 진척" 의미를 갖습니다
//! (회고용 전체 기간 보고가 아님).

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use journal_core::{Period, TradeRecord};
use serde::{Deserialize, Serialize};

/// 양 끝을 포함하는 기간 윈도우.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodWindow {
    /// 달력 단위 시작 (자정 UTC)
    pub start: DateTime<Utc>,
    /// 기준 시각 (단위의 끝이 아님)
    pub end: DateTime<Utc>,
}

impl PeriodWindow {
    /// 시각이 윈도우에 포함되는지 확인합니다 (양 끝 포함).
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        self.start <= timestamp && timestamp <= self.end
    }
}

/// 기준 시각이 속한 달력 단위의 윈도우를 계산합니다.
///
/// `start`는 해당 단위의 시작(일: 자정, 주: 월요일 자정, 월: 1일,
/// 연: 1월 1일, 모두 UTC), `end`는 기준 시각 자신입니다.
pub fn resolve_window(period: Period, reference: DateTime<Utc>) -> PeriodWindow {
    let date = reference.date_naive();

    let start_date = match period {
        Period::Daily => date,
        Period::Weekly => {
            // 주는 월요일 시작
            date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
        }
        Period::Monthly => date.with_day(1).unwrap_or(date),
        Period::Yearly => NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date),
    };

    PeriodWindow {
        start: start_date.and_time(NaiveTime::MIN).and_utc(),
        end: reference,
    }
}

/// 거래 목록을 기간 윈도우로 필터링합니다.
///
/// `period`가 `None`이면 "전체 기간"으로 간주하고 입력을 그대로
/// 반환합니다. 입력 순서는 보존되며, 호출자의 컬렉션은 변경되지
/// 않습니다 (스냅샷 복사 반환).
pub fn filter_by_period(
    trades: &[TradeRecord],
    period: Option<Period>,
    reference: DateTime<Utc>,
) -> Vec<TradeRecord> {
    let Some(period) = period else {
        return trades.to_vec();
    };

    let window = resolve_window(period, reference);

    trades
        .iter()
        .filter(|t| window.contains(t.date))
        .cloned()
        .collect()
}
