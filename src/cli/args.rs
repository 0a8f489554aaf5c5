use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::domain::commands::{CancelBooking, GetBookingDetails};

/// Booking lookup and cancellation demo
#[derive(Debug, Parser)]
#[command(name = "booking-service", version, about)]
pub struct Cli {
    /// Pin "today" to a fixed date (YYYY-MM-DD); overrides BOOKING_TODAY
    #[arg(long, global = true)]
    pub today: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Retrieve the details of a booking
    Details(IdentityArgs),
    /// Cancel a booking
    Cancel(IdentityArgs),
}

/// 本人確認の三つ組
#[derive(Debug, Clone, Args)]
pub struct IdentityArgs {
    pub booking_number: String,
    pub customer_name: String,
    pub customer_surname: String,
}

impl From<IdentityArgs> for GetBookingDetails {
    fn from(args: IdentityArgs) -> Self {
        GetBookingDetails::new(
            args.booking_number,
            args.customer_name,
            args.customer_surname,
        )
    }
}

impl From<IdentityArgs> for CancelBooking {
    fn from(args: IdentityArgs) -> Self {
        CancelBooking::new(
            args.booking_number,
            args.customer_name,
            args.customer_surname,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_details_command() {
        let cli = Cli::try_parse_from([
            "booking-service",
            "details",
            "123-456",
            "Klaus",
            "Heisler",
        ])
        .unwrap();

        assert!(cli.today.is_none());
        match cli.command {
            Command::Details(args) => {
                let cmd = GetBookingDetails::from(args);
                assert_eq!(cmd, GetBookingDetails::new("123-456", "Klaus", "Heisler"));
            }
            Command::Cancel(_) => panic!("expected details command"),
        }
    }

    #[test]
    fn test_parse_cancel_with_today() {
        let cli = Cli::try_parse_from([
            "booking-service",
            "cancel",
            "999-999",
            "Klaus",
            "Heisler",
            "--today",
            "2024-03-10",
        ])
        .unwrap();

        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2024, 3, 10));
        assert!(matches!(cli.command, Command::Cancel(_)));
    }

    #[test]
    fn test_missing_surname_is_rejected() {
        let result = Cli::try_parse_from(["booking-service", "details", "123-456", "Klaus"]);
        assert!(result.is_err());
    }
}
