use thiserror::Error;

use super::BookingNumber;

/// 予約操作のドメインエラー
///
/// 呼び出し側が回復可能な、ユーザー向けの結果のみを表す。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    /// 本人確認の三つ組に一致する予約がない
    #[error("Booking {0} not found")]
    NotFound(BookingNumber),

    /// 予約は存在するがキャンセルできない
    #[error("Booking {0} cannot be cancelled")]
    CannotBeCancelled(BookingNumber),
}

impl BookingError {
    /// エラーの対象となった予約番号
    pub fn booking_number(&self) -> &BookingNumber {
        match self {
            BookingError::NotFound(number) | BookingError::CannotBeCancelled(number) => number,
        }
    }
}
