use crate::domain::{BookingError, BookingNumber};
use thiserror::Error;

/// 予約管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum BookingApplicationError {
    /// 本人確認の三つ組に一致する予約がない
    #[error("Booking {0} not found")]
    BookingNotFound(BookingNumber),

    /// 予約をキャンセルできない
    #[error("Booking {0} cannot be cancelled")]
    BookingCannotBeCancelled(BookingNumber),

    /// BookingRepositoryのエラー
    #[error("Booking repository error")]
    RepositoryError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl BookingApplicationError {
    /// ユーザー向けの結果に対応する予約番号
    ///
    /// インフラ障害の場合は`None`。
    pub fn booking_number(&self) -> Option<&BookingNumber> {
        match self {
            BookingApplicationError::BookingNotFound(number)
            | BookingApplicationError::BookingCannotBeCancelled(number) => Some(number),
            BookingApplicationError::RepositoryError(_) => None,
        }
    }
}

impl From<BookingError> for BookingApplicationError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::NotFound(number) => BookingApplicationError::BookingNotFound(number),
            BookingError::CannotBeCancelled(number) => {
                BookingApplicationError::BookingCannotBeCancelled(number)
            }
        }
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, BookingApplicationError>;
