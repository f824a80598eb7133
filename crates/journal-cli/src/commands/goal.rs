//! 목표 및 설정 관리 명령.

use journal_core::{JournalError, Money, Period, Settings};
use journal_storage::JournalStore;
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::info;

/// 기간 목표 금액을 설정합니다 (통째로 교체 저장).
pub fn set_goal(store: &JournalStore, period: Period, amount: &str) -> anyhow::Result<()> {
    let amount = Decimal::from_str(amount)
        .map_err(|_| JournalError::InvalidInput("목표 금액은 숫자여야 합니다".to_string()))?;

    if amount < Decimal::ZERO {
        return Err(JournalError::InvalidInput(
            "목표 금액은 음수일 수 없습니다 (0 = 목표 해제)".to_string(),
        )
        .into());
    }

    let mut goals = store.load_goals()?;
    goals.set_amount(period, amount);
    store.save_goals(&goals)?;

    info!(period = %period, %amount, "목표 저장");
    println!("{} 목표: {}", period.display_name(), amount);
    Ok(())
}

/// 저장된 목표를 출력합니다.
pub fn show_goals(store: &JournalStore) -> anyhow::Result<()> {
    let goals = store.load_goals()?;
    let settings = store.load_settings()?;

    for period in Period::ALL {
        let amount = goals.amount_for(period);
        if amount.is_zero() {
            println!("{:<4}: (미설정)", period.display_name());
        } else {
            println!(
                "{:<4}: {}",
                period.display_name(),
                Money::new(amount, &settings.currency)
            );
        }
    }

    Ok(())
}

/// 설정을 갱신합니다. 지정된 필드만 바꾸고 통째로 교체 저장합니다.
pub fn set_settings(
    store: &JournalStore,
    currency: Option<String>,
    default_lot_size: Option<String>,
    show_notifications: Option<bool>,
) -> anyhow::Result<()> {
    let mut settings = store.load_settings()?;

    if let Some(currency) = currency {
        if currency.trim().is_empty() {
            return Err(
                JournalError::InvalidInput("통화 코드는 비울 수 없습니다".to_string()).into(),
            );
        }
        settings.currency = currency.trim().to_uppercase();
    }

    if let Some(raw) = default_lot_size {
        let lot = Decimal::from_str(&raw)
            .map_err(|_| JournalError::InvalidInput("기본 랏 크기는 숫자여야 합니다".to_string()))?;
        if lot <= Decimal::ZERO {
            return Err(
                JournalError::InvalidInput("기본 랏 크기는 양수여야 합니다".to_string()).into(),
            );
        }
        settings.default_lot_size = lot;
    }

    if let Some(show) = show_notifications {
        settings.show_notifications = show;
    }

    store.save_settings(&settings)?;
    info!(currency = %settings.currency, "설정 저장");
    show_settings_inner(&settings);
    Ok(())
}

/// 저장된 설정을 출력합니다.
pub fn show_settings(store: &JournalStore) -> anyhow::Result<()> {
    let settings = store.load_settings()?;
    show_settings_inner(&settings);
    Ok(())
}

fn show_settings_inner(settings: &Settings) {
    println!("통화        : {}", settings.currency);
    println!("기본 랏 크기: {}", settings.default_lot_size);
    println!(
        "알림        : {}",
        if settings.show_notifications {
            "켜짐"
        } else {
            "꺼짐"
        }
    );
}
