//! 거래 입력 검증.
//!
//! 폼에서 들어온 원시 문자열 입력을 검증하고 `TradeRecord`로 정규화합니다.
//! 검증은 부수효과 없는 순수 함수이며, 실패한 모든 필드의 메시지를
//! 한 번에 수집합니다 (첫 실패에서 중단하지 않음).

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use std::str::FromStr;

use super::trade::{Direction, TradeRecord};

/// 필드 이름 → 사람이 읽을 수 있는 메시지 매핑.
///
/// 모든 항목이 해소될 때까지 거래 생성은 진행되지 않습니다.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    /// 빈 오류 집합을 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 필드 오류를 추가합니다.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    /// 해당 필드의 메시지를 반환합니다.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(|s| s.as_str())
    }

    /// 오류가 없는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// 오류 개수를 반환합니다.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// (필드, 메시지) 반복자를 반환합니다.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

impl std::error::Error for ValidationErrors {}

/// 폼에서 들어온 원시 거래 입력.
///
/// 숫자 필드는 아직 문자열이며, [`TradeDraft::validate`]가 정규화합니다.
#[derive(Debug, Clone, Default)]
pub struct TradeDraft {
    /// 통화쌍 심볼
    pub pair: String,
    /// 거래 방향 ("buy" / "sell")
    pub direction: String,
    /// 진입 가격
    pub entry_price: String,
    /// 청산 가격
    pub exit_price: String,
    /// 랏 크기
    pub lot_size: String,
    /// 사용자 제공 손익 (비우면 표준랏 공식으로 파생)
    pub profit_loss: Option<String>,
    /// 거래 시각 (RFC3339 또는 YYYY-MM-DD)
    pub date: Option<String>,
    /// 메모
    pub notes: Option<String>,
}

impl TradeDraft {
    /// 입력을 검증하고 거래 기록으로 정규화합니다.
    ///
    /// # Returns
    ///
    /// - `Ok(record)`: 모든 필드가 유효할 때
    /// - `Err(errors)`: 실패한 모든 필드의 메시지 매핑
    pub fn validate(&self) -> Result<TradeRecord, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.pair.trim().is_empty() {
            errors.insert("pair", "통화쌍을 입력하세요");
        }

        let direction = match Direction::from_str(&self.direction) {
            Ok(direction) => Some(direction),
            Err(message) => {
                errors.insert("direction", message);
                None
            }
        };

        let entry_price = parse_positive("entryPrice", &self.entry_price, &mut errors);
        let exit_price = parse_positive("exitPrice", &self.exit_price, &mut errors);
        let lot_size = parse_positive("lotSize", &self.lot_size, &mut errors);

        let profit_loss = match &self.profit_loss {
            Some(raw) if !raw.trim().is_empty() => match Decimal::from_str(raw.trim()) {
                Ok(value) => Some(value),
                Err(_) => {
                    errors.insert("profitLoss", "손익은 숫자여야 합니다");
                    None
                }
            },
            _ => None,
        };

        let date = match self.date.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => match parse_timestamp(raw) {
                Some(date) => Some(date),
                None => {
                    errors.insert("date", "날짜 형식이 올바르지 않습니다 (RFC3339 또는 YYYY-MM-DD)");
                    None
                }
            },
            _ => {
                errors.insert("date", "거래 시각을 입력하세요");
                None
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        // 위에서 전부 검증되었으므로 여기서는 항상 Some
        let (Some(direction), Some(entry), Some(exit), Some(lot), Some(date)) =
            (direction, entry_price, exit_price, lot_size, date)
        else {
            return Err(errors);
        };

        let mut record = TradeRecord::new(self.pair.trim(), direction, entry, exit, lot, date);

        if let Some(profit_loss) = profit_loss {
            record = record.with_profit_loss(profit_loss);
        }
        if let Some(notes) = &self.notes {
            record = record.with_notes(notes.trim());
        }

        Ok(record)
    }
}

/// 양수 소수 필드를 파싱합니다. 실패 시 오류를 수집하고 `None`을 반환합니다.
fn parse_positive(field: &str, raw: &str, errors: &mut ValidationErrors) -> Option<Decimal> {
    if raw.trim().is_empty() {
        errors.insert(field, "값을 입력하세요");
        return None;
    }

    match Decimal::from_str(raw.trim()) {
        Ok(value) if value > Decimal::ZERO => Some(value),
        Ok(_) => {
            errors.insert(field, "양수여야 합니다");
            None
        }
        Err(_) => {
            errors.insert(field, "숫자여야 합니다");
            None
        }
    }
}

/// RFC3339 또는 YYYY-MM-DD(자정 UTC) 타임스탬프를 파싱합니다.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc));
    }

    NaiveDate::from_str(raw)
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn valid_draft() -> TradeDraft {
        TradeDraft {
            pair: "EUR/USD".to_string(),
            direction: "buy".to_string(),
            entry_price: "1.1000".to_string(),
            exit_price: "1.1050".to_string(),
            lot_size: "0.1".to_string(),
            profit_loss: None,
            date: Some("2026-03-04T10:30:00Z".to_string()),
            notes: Some("런던 세션 브레이크아웃".to_string()),
        }
    }

    #[test]
    fn test_valid_draft_derives_pnl() {
        let record = valid_draft().validate().unwrap();

        assert_eq!(record.profit_loss, dec!(50));
        assert_eq!(record.notes, "런던 세션 브레이크아웃");
    }

    #[test]
    fn test_user_pnl_wins_over_derivation() {
        let mut draft = valid_draft();
        draft.profit_loss = Some("-12.5".to_string());

        let record = draft.validate().unwrap();
        assert_eq!(record.profit_loss, dec!(-12.5));
    }

    #[test]
    fn test_all_failing_fields_collected() {
        let draft = TradeDraft {
            pair: "  ".to_string(),
            direction: "hold".to_string(),
            entry_price: "abc".to_string(),
            exit_price: "-1".to_string(),
            lot_size: String::new(),
            profit_loss: Some("xyz".to_string()),
            date: None,
            notes: None,
        };

        let errors = draft.validate().unwrap_err();

        // 실패 필드가 전부 모여야 함
        assert_eq!(errors.len(), 7);
        assert!(errors.get("pair").is_some());
        assert!(errors.get("direction").is_some());
        assert!(errors.get("entryPrice").is_some());
        assert!(errors.get("exitPrice").is_some());
        assert!(errors.get("lotSize").is_some());
        assert!(errors.get("profitLoss").is_some());
        assert!(errors.get("date").is_some());
    }

    #[test]
    fn test_zero_price_rejected() {
        let mut draft = valid_draft();
        draft.entry_price = "0".to_string();

        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get("entryPrice"), Some("양수여야 합니다"));
    }

    #[test]
    fn test_date_only_input_is_midnight_utc() {
        let mut draft = valid_draft();
        draft.date = Some("2026-03-04".to_string());

        let record = draft.validate().unwrap();
        assert_eq!(record.date.to_rfc3339(), "2026-03-04T00:00:00+00:00");
    }

    proptest! {
        /// 임의의 양수 가격/랏 조합은 항상 검증을 통과한다.
        #[test]
        fn prop_positive_inputs_validate(
            entry in 1u32..1_000_000u32,
            exit in 1u32..1_000_000u32,
            lot in 1u32..10_000u32,
        ) {
            let draft = TradeDraft {
                pair: "EUR/USD".to_string(),
                direction: "sell".to_string(),
                entry_price: format!("{}.{:02}", entry / 100, entry % 100),
                exit_price: format!("{}.{:02}", exit / 100, exit % 100),
                lot_size: format!("0.{:04}", lot),
                profit_loss: None,
                date: Some("2026-01-15".to_string()),
                notes: None,
            };

            prop_assert!(draft.validate().is_ok());
        }
    }
}
