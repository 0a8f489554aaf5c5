use crate::domain::value_objects::{BookingNumber, BookingRecord};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 予約リポジトリポート
///
/// 本人確認に使う参照レコードの取得を抽象化する。
/// 本人確認とスナップショット構築のロジックはこのポートの実装に依存しない。
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// 予約番号で参照レコードを取得する
    ///
    /// 該当するレコードがない場合は`None`を返す。
    /// 予約番号は完全一致で比較される。
    async fn find_by_number(
        &self,
        booking_number: &BookingNumber,
    ) -> Result<Option<BookingRecord>>;
}
