#![allow(dead_code)]

use booking_service::adapters::mock::{BookingRepository as MockBookingRepository, FixedClock};
use booking_service::application::booking::ServiceDependencies;
use booking_service::domain::value_objects::{BookingNumber, BookingRecord};
use booking_service::ports::booking_repository::{self, BookingRepository};
use chrono::NaiveDate;
use std::sync::Arc;

/// テストで固定する「今日」
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
}

/// 参照レコードと固定日付の時計を持つ依存関係を作成
pub fn reference_deps() -> ServiceDependencies {
    ServiceDependencies {
        booking_repository: Arc::new(MockBookingRepository::new()),
        clock: Arc::new(FixedClock::new(fixed_today())),
    }
}

/// 常に失敗するBookingRepository実装
pub struct FailingBookingRepository;

#[async_trait::async_trait]
impl BookingRepository for FailingBookingRepository {
    async fn find_by_number(
        &self,
        _booking_number: &BookingNumber,
    ) -> booking_repository::Result<Option<BookingRecord>> {
        Err("datastore unavailable".into())
    }
}
