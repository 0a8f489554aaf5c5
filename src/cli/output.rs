use crate::application::booking::BookingApplicationError;
use serde::Serialize;

/// 予約操作の失敗を表す終了コード
pub const EXIT_BOOKING_FAILURE: u8 = 1;

/// 設定・インフラ障害を表す終了コード
pub const EXIT_SYSTEM_FAILURE: u8 = 2;

/// エラーレスポンス
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_number: Option<String>,
}

impl ErrorResponse {
    pub fn new(
        error: impl Into<String>,
        message: impl Into<String>,
        booking_number: Option<String>,
    ) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            booking_number,
        }
    }
}

/// CLI層のエラー型
///
/// アプリケーション層のエラーをラップし、出力と終了コードへのマッピングを提供する。
#[derive(Debug)]
pub struct CliError(BookingApplicationError);

impl From<BookingApplicationError> for CliError {
    fn from(err: BookingApplicationError) -> Self {
        CliError(err)
    }
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self.0 {
            BookingApplicationError::BookingNotFound(_)
            | BookingApplicationError::BookingCannotBeCancelled(_) => EXIT_BOOKING_FAILURE,
            BookingApplicationError::RepositoryError(_) => EXIT_SYSTEM_FAILURE,
        }
    }

    pub fn into_response(self) -> ErrorResponse {
        let booking_number = self.0.booking_number().map(ToString::to_string);

        match self.0 {
            // ユーザー向けの結果 - 呼び出し側が回復可能
            BookingApplicationError::BookingNotFound(_) => {
                ErrorResponse::new("BOOKING_NOT_FOUND", self.0.to_string(), booking_number)
            }
            BookingApplicationError::BookingCannotBeCancelled(_) => ErrorResponse::new(
                "BOOKING_CANNOT_BE_CANCELLED",
                self.0.to_string(),
                booking_number,
            ),

            // システム障害
            // 詳細はログに記録し、呼び出し側には一般的なメッセージのみを返す
            BookingApplicationError::RepositoryError(ref e) => {
                tracing::error!("Booking repository error: {}", e);
                ErrorResponse::new("REPOSITORY_ERROR", "Booking lookup failed", None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BookingNumber;

    #[test]
    fn test_not_found_response() {
        let err = CliError::from(BookingApplicationError::BookingNotFound(
            BookingNumber::new("999-999"),
        ));
        assert_eq!(err.exit_code(), EXIT_BOOKING_FAILURE);

        let json = serde_json::to_value(err.into_response()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "error": "BOOKING_NOT_FOUND",
                "message": "Booking 999-999 not found",
                "bookingNumber": "999-999"
            })
        );
    }

    #[test]
    fn test_cannot_be_cancelled_response() {
        let err = CliError::from(BookingApplicationError::BookingCannotBeCancelled(
            BookingNumber::new("123-456"),
        ));
        assert_eq!(err.exit_code(), EXIT_BOOKING_FAILURE);

        let response = err.into_response();
        assert_eq!(response.error, "BOOKING_CANNOT_BE_CANCELLED");
        assert_eq!(response.message, "Booking 123-456 cannot be cancelled");
        assert_eq!(response.booking_number.as_deref(), Some("123-456"));
    }

    #[test]
    fn test_repository_error_hides_details() {
        let err = CliError::from(BookingApplicationError::RepositoryError(
            "connection refused".into(),
        ));
        assert_eq!(err.exit_code(), EXIT_SYSTEM_FAILURE);

        let json = serde_json::to_value(err.into_response()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "error": "REPOSITORY_ERROR",
                "message": "Booking lookup failed"
            })
        );
    }
}
