//! 정밀한 금융 계산을 위한 Decimal 유틸리티.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 금융 정밀도를 위한 가격 타입.
pub type Price = Decimal;

/// 랏 크기를 위한 타입.
pub type LotSize = Decimal;

/// 금액(손익, 목표)을 위한 타입.
pub type Amount = Decimal;

/// Decimal 연산을 위한 확장 트레이트.
pub trait DecimalExt {
    /// 퍼센트 문자열로 변환합니다 (예: "66.67%").
    fn to_percentage_string(&self) -> String;

    /// 지정된 소수점 자릿수로 반올림합니다 (중간값 올림).
    fn rounded(&self, dp: u32) -> Decimal;
}

impl DecimalExt for Decimal {
    fn to_percentage_string(&self) -> String {
        format!("{:.2}%", self)
    }

    fn rounded(&self, dp: u32) -> Decimal {
        self.round_dp_with_strategy(dp, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
    }
}

/// 통화가 포함된 금액.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// 금액
    pub amount: Decimal,
    /// 통화
    pub currency: String,
}

impl Money {
    /// 새 금액을 생성합니다.
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into().to_uppercase(),
        }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} {}", self.amount, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_percentage_string() {
        let d = dec!(66.6666);
        assert_eq!(d.to_percentage_string(), "66.67%");
    }

    #[test]
    fn test_money_display() {
        let m = Money::new(dec!(1250.5), "usd");
        assert_eq!(m.to_string(), "1250.50 USD");
    }
}
