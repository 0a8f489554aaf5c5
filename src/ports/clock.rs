use chrono::NaiveDate;

/// 時計ポート
///
/// 宿泊期間の基準となる「今日」を提供する。
/// 呼び出しごとに一度だけ読まれる。
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
