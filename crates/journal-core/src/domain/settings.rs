//! 사용자 설정.
//!
//! 프로세스 전역 설정 집계입니다. 시작 시 한 번 로드되고
//! 저장 시 통째로 교체됩니다.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// 사용자 설정.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// 표시 통화 코드 (ISO 4217 형식)
    pub currency: String,
    /// 새 거래 입력 시 기본 랏 크기 (양수)
    pub default_lot_size: Decimal,
    /// 알림 표시 여부
    pub show_notifications: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            default_lot_size: dec!(0.1),
            show_notifications: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();

        assert_eq!(settings.currency, "USD");
        assert_eq!(settings.default_lot_size, dec!(0.1));
        assert!(settings.show_notifications);
    }

    #[test]
    fn test_serde_layout() {
        let json = serde_json::to_value(Settings::default()).unwrap();

        assert!(json.get("defaultLotSize").is_some());
        assert!(json.get("showNotifications").is_some());
    }
}
