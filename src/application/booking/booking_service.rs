use crate::domain::{self, Booking, BookingNumber, Customer, commands::*};
use crate::ports::*;
use std::sync::Arc;

use super::errors::{BookingApplicationError, Result};

/// サービスの依存関係
///
/// 振る舞いは持たず、純粋な関数に依存関係を渡す。
/// リポジトリと時計を差し替えれば、本人確認とスナップショット構築の
/// ロジックに触れずに実際のデータストアへ移行できる。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub booking_repository: Arc<dyn BookingRepository>,
    pub clock: Arc<dyn Clock>,
}

/// 本人確認を行うヘルパー関数
///
/// get_booking_details, cancel_bookingで共通利用される。
///
/// # エラー
/// - RepositoryError: 参照レコードの読み込み失敗
/// - BookingNotFound: 三つ組のいずれかが一致しない
async fn ensure_exists(
    booking_repository: &Arc<dyn BookingRepository>,
    booking_number: &BookingNumber,
    customer: &Customer,
) -> Result<()> {
    let record = booking_repository
        .find_by_number(booking_number)
        .await
        .map_err(BookingApplicationError::RepositoryError)?;

    domain::booking::verify_identity(record.as_ref(), booking_number, customer).map_err(|e| {
        tracing::warn!(booking_number = %e.booking_number(), "Identity verification failed");
        BookingApplicationError::from(e)
    })
}

/// 予約詳細を取得する（純粋な関数）
///
/// ビジネスルール：
/// - 予約番号・顧客名・顧客姓がすべて参照レコードと完全一致すること
/// - 宿泊期間は今日+1日から今日+3日まで
///
/// 「今日」は呼び出しごとに時計から一度だけ読まれる。
pub async fn get_booking_details(
    deps: &ServiceDependencies,
    cmd: GetBookingDetails,
) -> Result<Booking> {
    tracing::debug!(booking_number = %cmd.booking_number, "Looking up booking details");

    let customer = cmd.customer();

    // 1. 本人確認
    ensure_exists(&deps.booking_repository, &cmd.booking_number, &customer).await?;

    // 2. スナップショットを構築
    let today = deps.clock.today();
    let booking = domain::booking::booking_snapshot(cmd.booking_number, customer, today);

    tracing::info!(
        booking_number = %booking.booking_number,
        date_from = %booking.date_from,
        date_to = %booking.date_to,
        "Booking details retrieved"
    );

    Ok(booking)
}

/// 予約をキャンセルする（純粋な関数）
///
/// ビジネスルール：
/// - 本人確認はget_booking_detailsと同じ
/// - 本人確認に成功しても、現在のポリシーではキャンセルは常に拒否される
pub async fn cancel_booking(deps: &ServiceDependencies, cmd: CancelBooking) -> Result<()> {
    tracing::debug!(booking_number = %cmd.booking_number, "Cancelling booking");

    let customer = cmd.customer();

    // 1. 本人確認
    ensure_exists(&deps.booking_repository, &cmd.booking_number, &customer).await?;

    // 2. キャンセル可否の判定
    domain::booking::cancel(&cmd.booking_number).map_err(|e| {
        tracing::info!(booking_number = %e.booking_number(), "Booking cancellation rejected");
        BookingApplicationError::from(e)
    })
}
