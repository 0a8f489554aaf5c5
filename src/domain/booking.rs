use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{BookingError, BookingNumber, BookingRecord, Customer};

/// 宿泊開始日（今日からの日数）
pub const STAY_START_OFFSET_DAYS: u64 = 1;

/// 宿泊終了日（今日からの日数）
pub const STAY_END_OFFSET_DAYS: u64 = 3;

/// 予約スナップショット
///
/// 不変条件：date_from < date_to
/// 取得のたびに新しく構築され、変更されない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub booking_number: BookingNumber,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub customer: Customer,
}

impl Booking {
    /// 宿泊数
    pub fn stay_length(&self) -> i64 {
        (self.date_to - self.date_from).num_days()
    }
}

// ============================================================================
// 純粋関数
// ============================================================================

/// 本人確認（純粋な関数）
///
/// 保存されたレコードが存在し、三つ組がすべて完全一致した場合のみ成功する。
/// 不一致のフィールドがどれであっても同じ`NotFound`を返す。
pub fn verify_identity(
    record: Option<&BookingRecord>,
    booking_number: &BookingNumber,
    customer: &Customer,
) -> Result<(), BookingError> {
    match record {
        Some(record) if record.matches(booking_number, customer) => Ok(()),
        _ => Err(BookingError::NotFound(booking_number.clone())),
    }
}

/// 予約スナップショットを構築する（純粋な関数）
///
/// 宿泊期間は今日を基準に固定：開始 = 今日+1日、終了 = 今日+3日
pub fn booking_snapshot(
    booking_number: BookingNumber,
    customer: Customer,
    today: NaiveDate,
) -> Booking {
    Booking {
        booking_number,
        date_from: today + Days::new(STAY_START_OFFSET_DAYS),
        date_to: today + Days::new(STAY_END_OFFSET_DAYS),
        customer,
    }
}

/// 今日を基準に宿泊期間の日付を表現できるか
///
/// 暦の上限付近では今日+3日が存在しない。
pub fn has_room_for_stay(today: NaiveDate) -> bool {
    today
        .checked_add_days(Days::new(STAY_END_OFFSET_DAYS))
        .is_some()
}

/// キャンセル可否を判定する（純粋な関数）
///
/// 現在のポリシーではどの予約もキャンセルできない。
pub fn cancel(booking_number: &BookingNumber) -> Result<(), BookingError> {
    Err(BookingError::CannotBeCancelled(booking_number.clone()))
}
