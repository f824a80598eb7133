//! 기간 키워드.
//!
//! 통계 필터링과 목표 추적에 사용되는 달력 단위를 정의합니다.

use serde::{Deserialize, Serialize};

/// 기간 단위 (주는 월요일 시작).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// 일별
    Daily,
    /// 주별 (월요일 시작)
    Weekly,
    /// 월별
    Monthly,
    /// 연간
    Yearly,
}

impl Period {
    /// 모든 기간 단위 (목표 표시 순서).
    pub const ALL: [Period; 4] = [
        Period::Daily,
        Period::Weekly,
        Period::Monthly,
        Period::Yearly,
    ];

    /// 기간의 표시 이름.
    pub fn display_name(&self) -> &'static str {
        match self {
            Period::Daily => "일별",
            Period::Weekly => "주별",
            Period::Monthly => "월별",
            Period::Yearly => "연간",
        }
    }

    /// 저장 키에 쓰이는 소문자 이름.
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
            Period::Yearly => "yearly",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Period::Daily),
            "weekly" => Ok(Period::Weekly),
            "monthly" => Ok(Period::Monthly),
            "yearly" => Ok(Period::Yearly),
            _ => Err(format!(
                "알 수 없는 기간: {} (daily/weekly/monthly/yearly)",
                s
            )),
        }
    }
}
