use crate::domain::value_objects::{BookingNumber, BookingRecord};
use crate::ports::booking_repository::{BookingRepository as BookingRepositoryTrait, Result};
use async_trait::async_trait;
use std::collections::HashMap;

/// BookingRepositoryのモック実装
///
/// 固定の参照レコード（123-456 / Klaus Heisler）で初期化される。
/// データベースの代わりとして使う。
#[derive(Debug, Clone)]
pub struct BookingRepository {
    records: HashMap<BookingNumber, BookingRecord>,
}

impl BookingRepository {
    /// 参照レコードのみを持つリポジトリを作成
    pub fn new() -> Self {
        Self::empty().with_record(BookingRecord::reference())
    }

    /// レコードを持たないリポジトリを作成
    pub fn empty() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// テスト用にレコードを追加（同じ予約番号は上書き）
    pub fn with_record(mut self, record: BookingRecord) -> Self {
        self.records.insert(record.booking_number.clone(), record);
        self
    }
}

impl Default for BookingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingRepositoryTrait for BookingRepository {
    async fn find_by_number(
        &self,
        booking_number: &BookingNumber,
    ) -> Result<Option<BookingRecord>> {
        Ok(self.records.get(booking_number).cloned())
    }
}
