//! 손익 파생 계산 공통 로직.
//!
//! 거래 기록 생성과 입력 검증에서 공유하는 표준랏 손익 공식을 제공합니다.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::trade::Direction;

/// 표준랏 단위 (1 랏 = 100,000 통화 단위).
///
/// 가격 차이 × 랏 크기를 금액 손익으로 환산하는 고정 배수입니다.
pub const STANDARD_LOT_UNITS: Decimal = dec!(100_000);

/// 표준랏 규약으로 실현 손익을 계산합니다.
///
/// # 계산 공식
///
/// - **매수**: (청산가 - 진입가) × 랏 × 100,000
/// - **매도**: (진입가 - 청산가) × 랏 × 100,000
///
/// # Examples
///
/// ```
/// use journal_core::domain::{standard_lot_pnl, Direction};
/// use rust_decimal_macros::dec;
///
/// // 롱: 1.1000 진입 → 1.1050 청산, 0.1랏
/// let pnl = standard_lot_pnl(dec!(1.1000), dec!(1.1050), dec!(0.1), Direction::Buy);
/// assert_eq!(pnl, dec!(50));
///
/// // 숏: 같은 가격 움직임이면 손실
/// let pnl = standard_lot_pnl(dec!(1.1000), dec!(1.1050), dec!(0.1), Direction::Sell);
/// assert_eq!(pnl, dec!(-50));
/// ```
pub fn standard_lot_pnl(
    entry_price: Decimal,
    exit_price: Decimal,
    lot_size: Decimal,
    direction: Direction,
) -> Decimal {
    let difference = match direction {
        Direction::Buy => exit_price - entry_price,
        Direction::Sell => entry_price - exit_price,
    };

    difference * lot_size * STANDARD_LOT_UNITS
}
