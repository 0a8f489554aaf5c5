use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::booking::has_room_for_stay;

/// ログフィルタのデフォルト値
pub const DEFAULT_LOG_FILTER: &str = "booking_service=info";

/// 設定のエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 日付が YYYY-MM-DD として解釈できない
    #[error("Invalid date for {key}: {value}")]
    InvalidDate {
        key: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// 日付は解釈できるが、宿泊期間を表現できない
    #[error("Date out of range for {key}: {value}")]
    DateOutOfRange {
        key: &'static str,
        /// 今日+3日が暦の上限を超える日付
        value: NaiveDate,
    },
}

/// 実行時設定
///
/// 環境変数から読み込む：
/// - BOOKING_LOG_FILTER: ログフィルタ（RUST_LOGが設定されていればそちらが優先）
/// - BOOKING_TODAY: 「今日」を固定する日付（YYYY-MM-DD）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_filter: String,
    pub today: Option<NaiveDate>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意のキー参照関数から設定を構築する
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let log_filter = lookup("BOOKING_LOG_FILTER")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let today = match lookup("BOOKING_TODAY").filter(|v| !v.trim().is_empty()) {
            Some(value) => Some(parse_date("BOOKING_TODAY", &value)?),
            None => None,
        };

        Ok(Self { log_filter, today })
    }

    /// CLIで指定された日付で上書きする
    pub fn with_today(mut self, today: Option<NaiveDate>) -> Result<Self, ConfigError> {
        if let Some(today) = today {
            self.today = Some(check_range("--today", today)?);
        }
        Ok(self)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            today: None,
        }
    }
}

fn parse_date(key: &'static str, value: &str) -> Result<NaiveDate, ConfigError> {
    match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
        Ok(date) => check_range(key, date),
        Err(source) => Err(ConfigError::InvalidDate {
            key,
            value: value.to_string(),
            source,
        }),
    }
}

fn check_range(key: &'static str, date: NaiveDate) -> Result<NaiveDate, ConfigError> {
    if has_room_for_stay(date) {
        Ok(date)
    } else {
        Err(ConfigError::DateOutOfRange { key, value: date })
    }
}
