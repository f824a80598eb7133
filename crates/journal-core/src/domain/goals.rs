//! 기간별 수익 목표.
//!
//! 네 개의 독립적인 목표 금액을 기간 이름으로 관리합니다.
//! 저장 시 통째로 교체되며, 0은 "목표 미설정"을 의미합니다.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::period::Period;
use crate::types::Amount;

/// 기간별 목표 금액 (음수 불가, 기본값 0).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goals {
    /// 일별 목표
    pub daily: Amount,
    /// 주별 목표
    pub weekly: Amount,
    /// 월별 목표
    pub monthly: Amount,
    /// 연간 목표
    pub yearly: Amount,
}

impl Goals {
    /// 해당 기간의 목표 금액을 반환합니다.
    pub fn amount_for(&self, period: Period) -> Amount {
        match period {
            Period::Daily => self.daily,
            Period::Weekly => self.weekly,
            Period::Monthly => self.monthly,
            Period::Yearly => self.yearly,
        }
    }

    /// 해당 기간의 목표 금액을 설정합니다.
    pub fn set_amount(&mut self, period: Period, amount: Decimal) {
        match period {
            Period::Daily => self.daily = amount,
            Period::Weekly => self.weekly = amount,
            Period::Monthly => self.monthly = amount,
            Period::Yearly => self.yearly = amount,
        }
    }

    /// 목표가 하나라도 설정되어 있는지 확인합니다.
    pub fn any_set(&self) -> bool {
        Period::ALL
            .iter()
            .any(|p| self.amount_for(*p) > Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_goals_all_zero() {
        let goals = Goals::default();

        for period in Period::ALL {
            assert_eq!(goals.amount_for(period), Decimal::ZERO);
        }
        assert!(!goals.any_set());
    }

    #[test]
    fn test_set_amount() {
        let mut goals = Goals::default();
        goals.set_amount(Period::Weekly, dec!(500));

        assert_eq!(goals.amount_for(Period::Weekly), dec!(500));
        assert_eq!(goals.amount_for(Period::Daily), Decimal::ZERO);
        assert!(goals.any_set());
    }
}
