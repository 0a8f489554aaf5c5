pub mod args;
pub mod output;

pub use args::{Cli, Command, IdentityArgs};
pub use output::{CliError, ErrorResponse};

use crate::adapters::mock::{BookingRepository as MockBookingRepository, FixedClock, SystemClock};
use crate::application::booking::{ServiceDependencies, cancel_booking, get_booking_details};
use crate::config::AppConfig;
use crate::domain::Booking;
use crate::ports::Clock;
use serde::Serialize;
use std::sync::Arc;

/// 設定からサービスの依存関係を組み立てる
///
/// 「今日」が固定されていればFixedClock、そうでなければSystemClockを使う。
pub fn build_dependencies(config: &AppConfig) -> ServiceDependencies {
    let clock: Arc<dyn Clock> = match config.today {
        Some(today) => Arc::new(FixedClock::new(today)),
        None => Arc::new(SystemClock::new()),
    };

    ServiceDependencies {
        booking_repository: Arc::new(MockBookingRepository::new()),
        clock,
    }
}

/// コマンドの成功結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Booking(Booking),
    Cancelled { cancelled: bool },
}

/// サブコマンドを実行する
pub async fn execute(deps: &ServiceDependencies, command: Command) -> Result<Outcome, CliError> {
    match command {
        Command::Details(args) => {
            let booking = get_booking_details(deps, args.into()).await?;
            Ok(Outcome::Booking(booking))
        }
        Command::Cancel(args) => {
            cancel_booking(deps, args.into()).await?;
            Ok(Outcome::Cancelled { cancelled: true })
        }
    }
}

/// 実行結果をJSON文字列と終了コードに変換する
pub fn render(result: Result<Outcome, CliError>) -> (String, u8) {
    let (json, exit_code) = match result {
        Ok(outcome) => (serde_json::to_string_pretty(&outcome), 0),
        Err(err) => {
            let exit_code = err.exit_code();
            (
                serde_json::to_string_pretty(&err.into_response()),
                exit_code,
            )
        }
    };

    match json {
        Ok(json) => (json, exit_code),
        Err(e) => {
            tracing::error!("Failed to serialize output: {}", e);
            (
                r#"{"error":"OUTPUT_ERROR","message":"Failed to serialize output"}"#.to_string(),
                output::EXIT_SYSTEM_FAILURE,
            )
        }
    }
}
